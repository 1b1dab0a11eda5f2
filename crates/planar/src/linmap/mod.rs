//! Invertible 2×2 linear maps over [`Vec2`]: rotation and x-axis shear.
//!
//! Each variant resolves its matrix and the matching closed-form inverse at
//! construction time. `invert` multiplies by that precomputed matrix; it is
//! the algebraic undo of `apply`, not a general matrix inversion.

use nalgebra::Matrix2;

use crate::vec2::{NormError, Vec2};

/// Shear angles whose tangent is closer to zero than this are rejected;
/// the cotangent shear factor would be undefined or absurdly large.
const DEGENERATE_TAN_EPS: f64 = 1e-12;

/// Defining parameter of a linear map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MapKind {
    /// Counterclockwise rotation by `angle` radians.
    Rotation { angle: f64 },
    /// Shear parallel to the x axis; the shear factor is `cot(angle)`.
    Shear { angle: f64 },
}

/// Shear construction failed: `tan(angle)` vanishes, so the cotangent
/// shear factor is undefined.
#[derive(Clone, Copy, Debug, thiserror::Error)]
#[error("shear angle = {angle}: tangent vanishes, so the cotangent shear factor is undefined")]
pub struct DegenerateShearError {
    pub angle: f64,
}

/// 2×2 linear map with its precomputed closed-form inverse.
///
/// Immutable after construction; holds no vectors, only the matrix pair
/// and the [`MapKind`] it was built from.
#[derive(Clone, Copy, Debug)]
pub struct LinearMap {
    kind: MapKind,
    m: Matrix2<f64>,
    m_inv: Matrix2<f64>,
}

impl LinearMap {
    /// Rotation by `angle` radians (counterclockwise).
    ///
    /// The inverse is the rotation by `-angle`, written out directly rather
    /// than inverted numerically.
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            kind: MapKind::Rotation { angle },
            m: Matrix2::new(cos, -sin, sin, cos),
            m_inv: Matrix2::new(cos, sin, -sin, cos),
        }
    }

    /// Shear parallel to the x axis with factor `cot(angle)`.
    ///
    /// Fails when `tan(angle)` vanishes (angle a multiple of π): the factor
    /// would be infinite, and we surface that instead of propagating it.
    pub fn shear(angle: f64) -> Result<Self, DegenerateShearError> {
        let tan = angle.tan();
        if !tan.is_finite() || tan.abs() < DEGENERATE_TAN_EPS {
            return Err(DegenerateShearError { angle });
        }
        let factor = 1.0 / tan;
        Ok(Self {
            kind: MapKind::Shear { angle },
            m: Matrix2::new(1.0, factor, 0.0, 1.0),
            m_inv: Matrix2::new(1.0, -factor, 0.0, 1.0),
        })
    }

    /// Defining variant.
    #[inline]
    pub fn kind(&self) -> MapKind {
        self.kind
    }

    /// Matrix of the map.
    #[inline]
    pub fn matrix(&self) -> Matrix2<f64> {
        self.m
    }

    /// Matrix of the inverse map.
    #[inline]
    pub fn inv_matrix(&self) -> Matrix2<f64> {
        self.m_inv
    }

    /// Matrix-vector product `M v`.
    ///
    /// The image is validated like any other construction; a shear with a
    /// large factor can push an in-bound vector past the norm cap.
    pub fn apply(&self, v: Vec2) -> Result<Vec2, NormError> {
        Vec2::from_inner(self.m * v.inner())
    }

    /// Product with the precomputed inverse; undoes `apply` for this map
    /// up to the equality tolerance.
    pub fn invert(&self, v: Vec2) -> Result<Vec2, NormError> {
        Vec2::from_inner(self.m_inv * v.inner())
    }
}
