// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar primitives: dual-lane square roots, quantisation, angle conversion.
//!
//! The reciprocal square root and square root come in two lanes. The fast
//! lane is a bit-level seed (`0x5f37_59df`) with one Newton–Raphson
//! refinement, expressed through `to_bits`/`from_bits` so the crate stays
//! `forbid(unsafe_code)` and the result is identical on every platform.
//! The exact lane is the IEEE square root. [`inv_sqrt`] and [`sqrt`] select
//! the fast lane unless the `exact_math` cargo feature is enabled; the
//! `*_fast`/`*_exact` entry points are callable in every build so call sites
//! can pick a lane explicitly instead of relying on build configuration.

use std::f32::consts::TAU;

/// Bit seed for the fast reciprocal square root's initial guess.
const RSQRT_SEED: u32 = 0x5f37_59df;

/// Fast approximation of `1/sqrt(f)`.
///
/// One Newton–Raphson step over the bit-seeded guess; worst-case relative
/// error ≈ 1.8e-3 over positive normal inputs. Domain is `f > 0`: zero,
/// negatives, and non-finite inputs propagate IEEE garbage rather than
/// signalling an error.
#[inline]
pub fn inv_sqrt_fast(f: f32) -> f32 {
    let half = 0.5 * f;
    // wrapping_sub keeps the function total when the sign bit leaks into the
    // shifted exponent (negative/NaN inputs).
    let y = f32::from_bits(RSQRT_SEED.wrapping_sub(f.to_bits() >> 1));
    y * (1.5 - half * y * y)
}

/// Exact `1/sqrt(f)` via the IEEE square root.
#[inline]
pub fn inv_sqrt_exact(f: f32) -> f32 {
    1.0 / f.sqrt()
}

/// Reciprocal square root on the default lane.
///
/// Fast lane unless the `exact_math` feature is enabled. Callers that need
/// exactness regardless of build configuration use [`inv_sqrt_exact`].
#[inline]
pub fn inv_sqrt(f: f32) -> f32 {
    #[cfg(feature = "exact_math")]
    {
        inv_sqrt_exact(f)
    }
    #[cfg(not(feature = "exact_math"))]
    {
        inv_sqrt_fast(f)
    }
}

/// Fast approximation of `sqrt(f)`, computed as `f * inv_sqrt_fast(f)`.
///
/// Zero is special-cased to an exact `0.0` (the reciprocal form would produce
/// `0 * inf`). Same error class and domain caveats as [`inv_sqrt_fast`].
#[inline]
#[allow(clippy::float_cmp)] // exact zero test, not a tolerance comparison
pub fn sqrt_fast(f: f32) -> f32 {
    if f == 0.0 {
        return 0.0;
    }
    f * inv_sqrt_fast(f)
}

/// Exact IEEE `sqrt(f)`.
#[inline]
pub fn sqrt_exact(f: f32) -> f32 {
    f.sqrt()
}

/// Square root on the default lane (see [`inv_sqrt`] for lane selection).
#[inline]
pub fn sqrt(f: f32) -> f32 {
    #[cfg(feature = "exact_math")]
    {
        sqrt_exact(f)
    }
    #[cfg(not(feature = "exact_math"))]
    {
        sqrt_fast(f)
    }
}

/// Quantises to the nearest integer, ties away from zero.
///
/// Adds or subtracts `0.5` by sign and truncates. Saturates at the `i32`
/// range; NaN maps to `0` (Rust `as` cast semantics).
#[allow(clippy::cast_possible_truncation)] // saturating truncation is the contract
pub fn quantize(f: f32) -> i32 {
    let biased = if f < 0.0 { f - 0.5 } else { f + 0.5 };
    biased as i32
}

/// Converts degrees to radians with float32 precision.
pub fn deg_to_rad(value: f32) -> f32 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees with float32 precision.
pub fn rad_to_deg(value: f32) -> f32 {
    value * (360.0 / TAU)
}
