//! Build a vector from the command line and run it through the maps.
//!
//! Purpose
//! - Show the whole surface in one place: validated construction, rotation,
//!   shear, inversion, and projection.
//! - Give a copy-paste starting point for scripting against the library.
//!
//! Usage: `cargo run --example transforms -- 2 1`

use std::env;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};
use std::process::ExitCode;

use planar::{LinearMap, Vec2};

fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let (x, y) = match (args.next(), args.next()) {
        (Some(x), Some(y)) => match (x.parse::<f64>(), y.parse::<f64>()) {
            (Ok(x), Ok(y)) => (x, y),
            _ => {
                eprintln!("Error: both arguments must be numbers.");
                return ExitCode::FAILURE;
            }
        },
        _ => {
            eprintln!("Error: two arguments required to create a vector.");
            return ExitCode::FAILURE;
        }
    };

    let vector = match Vec2::new(x, y) {
        Ok(v) => v,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };
    println!("The vector {vector} was created!");

    let quarter_turn = LinearMap::rotation(FRAC_PI_2);
    let rotated = quarter_turn.apply(vector).expect("rotation preserves the norm");
    println!("rotated by pi/2: {rotated}");
    let back = quarter_turn.invert(rotated).expect("inverse preserves the norm");
    println!("rotated back:    {back}");

    // cot(pi/4) = 1, so the image norm grows by at most |y|.
    match LinearMap::shear(FRAC_PI_4).expect("pi/4 is non-degenerate").apply(vector) {
        Ok(sheared) => println!("sheared (pi/4):  {sheared}"),
        Err(err) => println!("shear pushed the vector out of bounds: {err}"),
    }

    let axis = Vec2::new(0.0, 1.0).expect("unit vector is in bounds");
    let projected = vector
        .projection(Some(axis))
        .expect("projection never grows the norm");
    println!("onto the y axis: {projected}");

    ExitCode::SUCCESS
}
