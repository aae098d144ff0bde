// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Five sphere-associated sampling strategies over a caller-owned [`Prng`].
//!
//! Each strategy trades statistics against cost differently; none of them
//! normalises its output unless the contract says so. The draw order inside
//! each function is part of the deterministic contract and is documented per
//! function.

use core::f32::consts::{FRAC_PI_2, PI, TAU};

use thiserror::Error;

use crate::prng::Prng;
use crate::vec3::Vec3;

/// Failure of the capped rejection sampler.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SampleError {
    /// No candidate landed inside the unit ball within the attempt budget.
    #[error("rejection sampling exhausted after {attempts} attempts")]
    RejectionExhausted {
        /// The attempt budget that was consumed.
        attempts: u32,
    },
}

/// Uniform sample inside the cube `[-1, 1]³` — one bipolar draw per axis
/// (x, then y, then z).
///
/// Normalising this does **not** give a uniform direction distribution: the
/// result is biased toward the cube's corners. Use [`gaussian`] or
/// [`on_sphere`] where uniform directions matter.
pub fn in_cube(rng: &mut Prng) -> Vec3 {
    Vec3::new(rng.bipolar(), rng.bipolar(), rng.bipolar())
}

/// One standard-normal draw per axis (x, then y, then z).
///
/// After normalisation the direction is uniformly distributed on the unit
/// sphere (the Gaussian-per-axis construction). The raw output is not unit
/// length.
pub fn gaussian(rng: &mut Prng) -> Vec3 {
    Vec3::new(rng.normal(), rng.normal(), rng.normal())
}

/// Uniform point on the unit sphere's surface via spherical coordinates.
///
/// Draws latitude as `acos(bipolar) - π/2` — the inverse-cosine counteracts
/// the area distortion of naive latitude sampling — then longitude as a
/// uniform angle in `[0, 2π)`, and converts to Cartesian.
pub fn on_sphere(rng: &mut Prng) -> Vec3 {
    let lat = libm::acosf(rng.bipolar()) - FRAC_PI_2;
    let lon = TAU * rng.uniform();
    let cos_lat = libm::cosf(lat);
    Vec3::new(
        cos_lat * libm::cosf(lon),
        cos_lat * libm::sinf(lon),
        libm::sinf(lat),
    )
}

/// Uniform point inside the solid unit ball via rejection sampling.
///
/// Redraws bipolar triples until one lands inside the ball. Each iteration
/// accepts with probability π/6 ≈ 0.524 (the ball's share of the bounding
/// cube), so the expected iteration count is small but there is no hard
/// upper bound; latency-sensitive callers can use [`try_in_ball`] instead.
pub fn in_ball(rng: &mut Prng) -> Vec3 {
    loop {
        let candidate = in_cube(rng);
        if candidate.length_squared() <= 1.0 {
            return candidate;
        }
    }
}

/// [`in_ball`] with a maximum-attempts safety valve.
///
/// Draws identically to [`in_ball`] but gives up after `max_attempts`
/// rejected candidates, bounding worst-case latency.
///
/// # Errors
///
/// Returns [`SampleError::RejectionExhausted`] when no candidate was
/// accepted within the budget.
pub fn try_in_ball(rng: &mut Prng, max_attempts: u32) -> Result<Vec3, SampleError> {
    for _ in 0..max_attempts {
        let candidate = in_cube(rng);
        if candidate.length_squared() <= 1.0 {
            return Ok(candidate);
        }
    }
    Err(SampleError::RejectionExhausted {
        attempts: max_attempts,
    })
}

/// Point on the lateral shell of the unit cylinder — **not** a sphere
/// distribution.
///
/// One uniform angle `θ ∈ [-π, π)` places `(x, y) = (sin θ, cos θ)` on the
/// unit circle; `z` is an independent bipolar draw. The magnitude therefore
/// varies in `[1, √2]` with the `z` draw. Kept as a distinct, deliberately
/// non-spherical distribution; do not substitute it for [`on_sphere`].
pub fn on_cylinder(rng: &mut Prng) -> Vec3 {
    let theta = rng.uniform() * TAU - PI;
    Vec3::new(libm::sinf(theta), libm::cosf(theta), rng.bipolar())
}
