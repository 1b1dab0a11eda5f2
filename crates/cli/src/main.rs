use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use planar::{LinearMap, Vec2};
use tracing_subscriber::fmt::SubscriberBuilder;

mod store;

#[derive(Parser)]
#[command(name = "vector")]
#[command(about = "Create and transform norm-bounded 2D vectors")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Construct a vector and optionally save it to a JSON file
    Create {
        x: f64,
        y: f64,
        /// Write the vector to this file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },
    /// Rotate a vector counterclockwise by an angle in radians
    Rotate {
        #[arg(long)]
        angle: f64,
        x: f64,
        y: f64,
        /// Apply the inverse transform instead
        #[arg(long)]
        inverse: bool,
    },
    /// Shear a vector parallel to the x axis with factor cot(angle)
    Shear {
        #[arg(long)]
        angle: f64,
        x: f64,
        y: f64,
        /// Apply the inverse transform instead
        #[arg(long)]
        inverse: bool,
    },
    /// Project a vector onto the line spanned by another
    Project {
        x: f64,
        y: f64,
        /// Subspace components; without this the projection falls back to
        /// the x axis and logs a warning
        #[arg(long, num_args = 2, value_names = ["SX", "SY"])]
        onto: Option<Vec<f64>>,
    },
    /// Read a saved vector back from a JSON file
    Load { file: PathBuf },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Create { x, y, save } => create(x, y, save),
        Action::Rotate {
            angle,
            x,
            y,
            inverse,
        } => transform(LinearMap::rotation(angle), x, y, inverse),
        Action::Shear {
            angle,
            x,
            y,
            inverse,
        } => transform(LinearMap::shear(angle)?, x, y, inverse),
        Action::Project { x, y, onto } => project(x, y, onto),
        Action::Load { file } => load(file),
    }
}

fn create(x: f64, y: f64, save: Option<PathBuf>) -> Result<()> {
    let vector = Vec2::new(x, y)?;
    println!("Vector {vector} created!");
    if let Some(path) = save {
        let written = store::save(&path, vector)?;
        println!("Vector saved in {}!", written.display());
    }
    Ok(())
}

fn transform(map: LinearMap, x: f64, y: f64, inverse: bool) -> Result<()> {
    let input = Vec2::new(x, y)?;
    tracing::info!(kind = ?map.kind(), inverse, "transform");
    let image = if inverse {
        map.invert(input)?
    } else {
        map.apply(input)?
    };
    println!("{image}");
    Ok(())
}

fn project(x: f64, y: f64, onto: Option<Vec<f64>>) -> Result<()> {
    let input = Vec2::new(x, y)?;
    let subspace = match onto.as_deref() {
        Some([sx, sy]) => Some(Vec2::new(*sx, *sy)?),
        _ => None,
    };
    let image = input.projection(subspace)?;
    println!("{image}");
    Ok(())
}

fn load(file: PathBuf) -> Result<()> {
    let vector = store::load(&file)?;
    tracing::info!(file = %file.display(), "load");
    println!("{vector}");
    Ok(())
}
