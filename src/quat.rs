use crate::{Scalar, Vec3, VersorError};
use core::fmt;
use core::ops::{Add, Sub, Mul, Neg};

/// Quaternion: w + xi + yj + zk
///
/// Scalar-first storage `(w, x, y, z)`. Represents a rotation when unit
/// length; unit length is a caller convention and is never checked or
/// enforced by the type. Values are immutable: every operation returns a
/// new quaternion.
///
/// # Example
/// ```
/// use versor::Quat;
///
/// let i = Quat::new(0.0, 1.0, 0.0, 0.0);
/// let j = Quat::new(0.0, 0.0, 1.0, 0.0);
/// let k = Quat::new(0.0, 0.0, 0.0, 1.0);
/// assert_eq!(i * j, k);
/// assert_eq!(j * i, -k);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat<S> {
    pub w: S,
    pub x: S,
    pub y: S,
    pub z: S,
}

impl<S: Scalar> Quat<S> {
    /// Build a quaternion from its four components. No validation.
    #[inline]
    pub fn new(w: S, x: S, y: S, z: S) -> Self {
        Self { w, x, y, z }
    }

    /// Multiplicative identity `(1, 0, 0, 0)`, the zero rotation.
    #[inline]
    pub fn identity() -> Self {
        Self::new(S::ONE, S::ZERO, S::ZERO, S::ZERO)
    }

    /// The zero quaternion `(0, 0, 0, 0)`.
    #[inline]
    pub fn zero() -> Self {
        Self::new(S::ZERO, S::ZERO, S::ZERO, S::ZERO)
    }

    /// Quaternion from a rotation axis and an angle in radians.
    ///
    /// `w = cos(angle)`, vector part `= v * sin(angle)`. The angle is
    /// applied as given; callers wanting the textbook half-angle
    /// axis-angle map must pass `angle / 2` themselves. `v` must be unit
    /// length, and this is not checked.
    pub fn from_vector_angle(v: Vec3<S>, angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(c, v.x * s, v.y * s, v.z * s)
    }

    /// Conjugate: negates the imaginary components.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// 4-vector inner product.
    #[inline]
    pub fn dot(self, rhs: Self) -> S {
        self.w * rhs.w + self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[inline]
    pub fn norm_sq(self) -> S {
        self.dot(self)
    }

    /// Euclidean norm of the quaternion treated as a 4-vector.
    #[inline]
    pub fn norm(self) -> S {
        self.norm_sq().sqrt()
    }

    /// Scale to unit norm.
    ///
    /// Fails only when the norm is exactly zero; any other value divides
    /// through, with no near-zero tolerance applied.
    pub fn normalize(self) -> Result<Self, VersorError> {
        let n = self.norm();
        if n == S::ZERO {
            return Err(VersorError::ZeroNorm);
        }
        Ok(Self::new(self.w / n, self.x / n, self.y / n, self.z / n))
    }

    /// Components as a flat array, scalar first: `[w, x, y, z]`.
    #[inline]
    pub fn as_array(&self) -> [S; 4] {
        [self.w, self.x, self.y, self.z]
    }
}

impl<S: Scalar> Default for Quat<S> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<S: Scalar> From<[S; 4]> for Quat<S> {
    #[inline]
    fn from(a: [S; 4]) -> Self {
        Self::new(a[0], a[1], a[2], a[3])
    }
}

impl<S: Scalar> From<Quat<S>> for [S; 4] {
    #[inline]
    fn from(q: Quat<S>) -> Self {
        q.as_array()
    }
}

impl<S: Scalar> Add for Quat<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.w + rhs.w,
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
        )
    }
}

impl<S: Scalar> Sub for Quat<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.w - rhs.w,
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
        )
    }
}

impl<S: Scalar> Neg for Quat<S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

impl<S: Scalar> Mul for Quat<S> {
    type Output = Self;

    /// Hamilton product. Non-commutative: `a * b != b * a` in general.
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        )
    }
}

impl<S: Scalar> Mul<S> for Quat<S> {
    type Output = Self;

    /// Component-wise scaling by a scalar.
    #[inline]
    fn mul(self, rhs: S) -> Self {
        Self::new(self.w * rhs, self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl<S: Scalar> fmt::Display for Quat<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.w, self.x, self.y, self.z)
    }
}
