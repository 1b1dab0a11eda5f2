//! Norm-bounded 2D vector value type.
//!
//! - `Vec2`: immutable 2-component value; every operation that produces a
//!   new vector goes through the validating constructor.
//! - `NormError`: norm bound violated at construction.
//! - `ProjectError`: degenerate subspace (or bound violation) in `projection`.
//!
//! Code cross-refs: `linmap::LinearMap` consumes and produces `Vec2`.

use std::fmt;

use nalgebra::Vector2;

/// Maximum Euclidean norm allowed for a [`Vec2`] instance.
pub const MAX_NORM: f64 = 100.0;

/// Absolute per-component tolerance for vector equality.
pub const EQ_ABS_TOL: f64 = 1e-10;

/// Construction rejected: the norm exceeds [`MAX_NORM`], or is not finite.
///
/// Carries both the offending norm and the bound so callers can report the
/// violation without recomputing anything.
#[derive(Clone, Copy, Debug, thiserror::Error)]
#[error("norm = {norm}, but it cannot be greater than {max}")]
pub struct NormError {
    pub norm: f64,
    pub max: f64,
}

/// Failure modes of [`Vec2::projection`].
#[derive(Clone, Copy, Debug, thiserror::Error)]
pub enum ProjectError {
    /// The subspace vector has zero norm; the projection direction is undefined.
    #[error("subspace vector has zero norm")]
    ZeroSubspace,
    #[error(transparent)]
    Norm(#[from] NormError),
}

/// Two-dimensional vector with a validated norm bound.
///
/// Invariants:
/// - Both components finite.
/// - Euclidean norm <= [`MAX_NORM`]; enforced on every construction path,
///   including results of [`add`](Vec2::add) and [`scale`](Vec2::scale).
///
/// Equality is componentwise within [`EQ_ABS_TOL`], not exact float
/// identity.
#[derive(Clone, Copy)]
pub struct Vec2 {
    v: Vector2<f64>,
}

impl Vec2 {
    /// Construct a vector, validating the norm bound.
    ///
    /// A non-finite component makes the norm non-finite, which is rejected
    /// by the same check (NaN would otherwise slip past the comparison).
    pub fn new(x: f64, y: f64) -> Result<Self, NormError> {
        let v = Vector2::new(x, y);
        let norm = v.norm();
        if !norm.is_finite() || norm > MAX_NORM {
            return Err(NormError {
                norm,
                max: MAX_NORM,
            });
        }
        Ok(Self { v })
    }

    /// First component.
    #[inline]
    pub fn x(&self) -> f64 {
        self.v.x
    }

    /// Second component.
    #[inline]
    pub fn y(&self) -> f64 {
        self.v.y
    }

    /// Euclidean norm, computed on demand (not cached).
    #[inline]
    pub fn norm(&self) -> f64 {
        self.v.norm()
    }

    /// Componentwise sum. The result is validated like any other
    /// construction, so two in-bound vectors can still fail to add.
    pub fn add(self, rhs: Vec2) -> Result<Vec2, NormError> {
        Vec2::new(self.v.x + rhs.v.x, self.v.y + rhs.v.y)
    }

    /// Scale both components by `k`.
    ///
    /// A non-finite `k` is rejected by the construction check rather than
    /// coerced or propagated.
    pub fn scale(self, k: f64) -> Result<Vec2, NormError> {
        Vec2::new(self.v.x * k, self.v.y * k)
    }

    /// Inner product.
    #[inline]
    pub fn dot(self, rhs: Vec2) -> f64 {
        self.v.dot(&rhs.v)
    }

    /// Project onto the line spanned by `subspace`.
    ///
    /// With `None`, projects onto the first component `(x, 0)` and emits an
    /// advisory warning; this mirrors treating the x axis as the default
    /// subspace. A zero-norm subspace is an explicit error.
    pub fn projection(self, subspace: Option<Vec2>) -> Result<Vec2, ProjectError> {
        match subspace {
            None => {
                tracing::warn!("no subspace given, projecting onto first component");
                Ok(Vec2::new(self.v.x, 0.0)?)
            }
            Some(s) => {
                let sqnorm = s.v.norm_squared();
                if sqnorm <= 0.0 {
                    return Err(ProjectError::ZeroSubspace);
                }
                let coef = s.dot(self) / sqnorm;
                Ok(s.scale(coef)?)
            }
        }
    }

    #[inline]
    pub(crate) fn inner(&self) -> Vector2<f64> {
        self.v
    }

    /// Rebuild from an nalgebra vector, with the same validation as `new`.
    #[inline]
    pub(crate) fn from_inner(v: Vector2<f64>) -> Result<Self, NormError> {
        Vec2::new(v.x, v.y)
    }
}

impl PartialEq for Vec2 {
    /// Componentwise comparison within [`EQ_ABS_TOL`].
    fn eq(&self, other: &Self) -> bool {
        (self.v.x - other.v.x).abs() <= EQ_ABS_TOL && (self.v.y - other.v.y).abs() <= EQ_ABS_TOL
    }
}

impl fmt::Display for Vec2 {
    /// Human-readable form `(x, y)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.v.x, self.v.y)
    }
}

impl fmt::Debug for Vec2 {
    /// Constructor-call form; re-running it rebuilds an equal vector.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec2::new({:?}, {:?})", self.v.x, self.v.y)
    }
}
