// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! 16-byte float32 vector with the full algebra surface.
//!
//! Operator impls cover component-wise and scalar-broadcast arithmetic with
//! value semantics; the in-place mutators (`normalize`, `rotate_*`) take
//! `&mut self`, so exclusive access is enforced by the borrow checker
//! instead of documentation.

use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::scalar;

/// Deterministic 3D float32 vector.
///
/// * `#[repr(C)]` with a fourth private padding lane so the struct is 16
///   bytes for vertex-buffer and FFI interop. The padding is zero at
///   construction and never read or written by any operation; equality
///   ignores it.
/// * Components may represent points or directions depending on context.
/// * Length-related operations route through the dual-lane square roots in
///   [`scalar`]; on the default fast lane, magnitudes carry a relative error
///   of up to ≈ 0.2%, and repeated [`Vec3::normalize`] passes accumulate
///   drift. Acceptable for rendering; use the `exact_math` feature where it
///   is not.
#[repr(C)]
#[derive(Debug, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec3 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
    _pad: f32,
}

impl PartialEq for Vec3 {
    // Exact bitwise-value equality over x/y/z is the contract; tolerance
    // comparisons go through `approx_eq`.
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components; the padding lane is zeroed.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            x,
            y,
            z,
            _pad: 0.0,
        }
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product with another vector. Exactly commutative.
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Standard right-handed 3D cross product.
    pub fn cross(self, other: Self) -> Self {
        let (ax, ay, az) = (self.x, self.y, self.z);
        let (bx, by, bz) = (other.x, other.y, other.z);
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Component sum `x + y + z`.
    pub fn sum(self) -> f32 {
        self.x + self.y + self.z
    }

    /// Squared length — no square root.
    ///
    /// Use this for comparisons; use [`Vec3::length`] only where the true
    /// metric value is needed.
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Euclidean length via the dual-lane [`scalar::sqrt`].
    pub fn length(self) -> f32 {
        scalar::sqrt(self.length_squared())
    }

    /// Normalises in place by the reciprocal square root of the squared
    /// length.
    ///
    /// No degeneracy guard: the zero vector produces non-finite components
    /// per IEEE-754. On the fast lane the result's magnitude is within
    /// ≈ 0.2% of 1, not exactly 1.
    pub fn normalize(&mut self) {
        let k = scalar::inv_sqrt(self.length_squared());
        self.x *= k;
        self.y *= k;
        self.z *= k;
    }

    /// Euclidean distance to `other` (dual-lane square root).
    pub fn distance(self, other: Self) -> f32 {
        scalar::sqrt(self.distance_squared(other))
    }

    /// Squared Euclidean distance — no square root.
    pub fn distance_squared(self, other: Self) -> f32 {
        let xm = self.x - other.x;
        let ym = self.y - other.y;
        let zm = self.z - other.z;
        xm * xm + ym * ym + zm * zm
    }

    /// Manhattan (L1) distance: sum of absolute per-axis differences.
    ///
    /// Always non-negative and symmetric.
    pub fn distance_manhattan(self, other: Self) -> f32 {
        (self.x - other.x).abs() + (self.y - other.y).abs() + (self.z - other.z).abs()
    }

    /// Chebyshev distance: the largest absolute per-axis difference.
    pub fn distance_chebyshev(self, other: Self) -> f32 {
        let xm = (self.x - other.x).abs();
        let ym = (self.y - other.y).abs();
        let zm = (self.z - other.z).abs();
        xm.max(ym).max(zm)
    }

    /// True iff every axis of `self` lies within `±tol` of the corresponding
    /// axis of `other` (closed interval). Reflexive at `tol = 0` and
    /// symmetric in its operands.
    pub fn approx_eq(self, other: Self, tol: f32) -> bool {
        (self.x - other.x).abs() <= tol
            && (self.y - other.y).abs() <= tol
            && (self.z - other.z).abs() <= tol
    }

    /// Compares both vectors after [`scalar::quantize`] of each axis.
    pub fn quantized_eq(self, other: Self) -> bool {
        scalar::quantize(self.x) == scalar::quantize(other.x)
            && scalar::quantize(self.y) == scalar::quantize(other.y)
            && scalar::quantize(self.z) == scalar::quantize(other.z)
    }

    /// Component-wise (per-axis) minimum.
    pub fn min(self, other: Self) -> Self {
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    /// Component-wise (per-axis) maximum.
    pub fn max(self, other: Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }

    /// Rotates in place about the X axis (right-handed, radians).
    ///
    /// Operand axes are snapshotted before writing so each output reads the
    /// pre-rotation values.
    pub fn rotate_x(&mut self, radians: f32) {
        let (s, c) = libm::sincosf(radians);
        let y = self.y;
        let z = self.z;
        self.y = y * c - z * s;
        self.z = y * s + z * c;
    }

    /// Rotates in place about the Y axis (right-handed, radians).
    pub fn rotate_y(&mut self, radians: f32) {
        let (s, c) = libm::sincosf(radians);
        let x = self.x;
        let z = self.z;
        self.x = x * c + z * s;
        self.z = z * c - x * s;
    }

    /// Rotates in place about the Z axis (right-handed, radians).
    pub fn rotate_z(&mut self, radians: f32) {
        let (s, c) = libm::sincosf(radians);
        let x = self.x;
        let y = self.y;
        self.x = x * c - y * s;
        self.y = x * s + y * c;
    }

    /// Specular reflection `v - 2(v·n)n` of `self` about surface normal
    /// `normal`.
    ///
    /// `normal` must be unit length; this is not checked. A grazing hit
    /// (`dot == 0`) returns `self` unchanged.
    pub fn reflect(self, normal: Self) -> Self {
        let angle = self.dot(normal);
        Self::new(
            self.x - (2.0 * normal.x) * angle,
            self.y - (2.0 * normal.y) * angle,
            self.z - (2.0 * normal.z) * angle,
        )
    }

    /// Normalised direction from `self` toward `other`.
    ///
    /// Unit length within the active lane's epsilon; coincident inputs yield
    /// non-finite components per IEEE-754.
    pub fn direction_to(self, other: Self) -> Self {
        let mut dir = other - self;
        dir.normalize();
        dir
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul for Vec3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }
}

/// Component-wise division; a zero divisor follows IEEE-754 (infinity/NaN).
impl Div for Vec3 {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }
}

impl Add<f32> for Vec3 {
    type Output = Self;
    fn add(self, rhs: f32) -> Self {
        Self::new(self.x + rhs, self.y + rhs, self.z + rhs)
    }
}

impl Sub<f32> for Vec3 {
    type Output = Self;
    fn sub(self, rhs: f32) -> Self {
        Self::new(self.x - rhs, self.y - rhs, self.z - rhs)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// Serialized as a bare `[x, y, z]` triple; the padding lane never crosses
/// the wire.
#[cfg(feature = "serde")]
impl serde::Serialize for Vec3 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_array().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Vec3 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <[f32; 3]>::deserialize(deserializer).map(Self::from)
    }
}
