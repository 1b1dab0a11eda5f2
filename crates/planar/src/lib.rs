//! Norm-bounded 2D vectors and invertible linear maps.
//!
//! Two building blocks, leaves first:
//! - [`Vec2`]: an immutable 2-component value with validated construction
//!   (Euclidean norm capped at [`vec2::MAX_NORM`]), arithmetic that
//!   re-validates every result, and tolerance-based equality.
//! - [`LinearMap`]: a 2×2 matrix paired with its closed-form inverse,
//!   built from a [`MapKind`] variant (rotation or x-axis shear) and
//!   applied to vectors.
//!
//! All values are `Copy` and immutable after construction; every operation
//! is a pure function, so instances are safe to share across threads.

pub mod linmap;
pub mod rand;
pub mod vec2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use linmap::{DegenerateShearError, LinearMap, MapKind};
pub use vec2::{NormError, ProjectError, Vec2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::linmap::{DegenerateShearError, LinearMap, MapKind};
    pub use crate::rand::{draw_in_disc, ReplayToken};
    pub use crate::vec2::{NormError, ProjectError, Vec2, EQ_ABS_TOL, MAX_NORM};
}
