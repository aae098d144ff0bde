// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Caller-owned multiplicative congruential generator.
//!
//! Every draw advances `state = state * 16807` (wrapping) and reads the new
//! state. The generator is plain `Copy` data with no interior mutability:
//! each thread or subsystem owns its own [`Prng`] and the `&mut` receivers
//! make sharing without synchronization a compile error. Identical seeds
//! yield identical sequences on every supported platform, and the exact
//! uniform/bipolar streams are part of this crate's compatibility contract
//! (pinned by the golden regression tests).

use crate::scalar;

/// Multiplier of the congruential step.
const MULTIPLIER: i32 = 16807;

/// Exactly `2^-31` (the textbook constant `4.6566129e-10` rounds to the
/// same float32): scales the 31-bit state span onto `[0, 1)`.
const SCALE: f32 = 1.0 / 2_147_483_648.0;

/// Stateful multiplicative congruential pseudo-random number generator.
///
/// * Not cryptographically secure; use only for rendering/simulation
///   sampling.
/// * Seed `0` is a fixed point of the multiplicative step (every draw would
///   stay `0`), so [`Prng::from_seed`] rejects it loudly.
#[derive(Debug, Clone, Copy)]
pub struct Prng {
    state: i32,
}

impl Prng {
    /// Constructs a generator from a nonzero seed.
    ///
    /// Identical seeds produce identical sequences; distinct seeds are fully
    /// independent streams.
    ///
    /// # Panics
    ///
    /// Panics if `seed == 0` (the degenerate fixed point of the
    /// multiplicative step).
    pub fn from_seed(seed: i32) -> Self {
        assert!(
            seed != 0,
            "seed 0 is a fixed point of the multiplicative generator; seed must be nonzero"
        );
        Self { state: seed }
    }

    /// Returns the current raw state.
    ///
    /// Exposed so callers can checkpoint a stream and the regression suite
    /// can pin the state walk.
    pub const fn state(self) -> i32 {
        self.state
    }

    fn next_state(&mut self) -> i32 {
        self.state = self.state.wrapping_mul(MULTIPLIER);
        self.state
    }

    /// Returns the next float in `[0, 1)`.
    ///
    /// Masks the updated state to its low 31 bits and scales by `2^-31`.
    /// States within rounding distance of the 31-bit ceiling round to exactly
    /// `1.0` in float32, so numerically-critical callers must treat the upper
    /// bound as closed.
    #[allow(clippy::cast_precision_loss)] // float32 rounding of the state is the contract
    pub fn uniform(&mut self) -> f32 {
        (self.next_state() & 0x7fff_ffff) as f32 * SCALE
    }

    /// Returns the next float spanning approximately `[-1, 1]`.
    ///
    /// The full signed state is scaled without masking, so extreme states
    /// round to exactly `±1.0`; this is a sampling value, not a
    /// bounds-checked one.
    #[allow(clippy::cast_precision_loss)]
    pub fn bipolar(&mut self) -> f32 {
        self.next_state() as f32 * SCALE
    }

    /// Returns one standard-normal sample via the polar Box–Muller method.
    ///
    /// Draws a bipolar pair `(u, v)`, rejecting and redrawing both while
    /// `r = u² + v²` is zero or outside the unit disk, then returns
    /// `u * sqrt(-2 ln r / r)`. One variate per accepted pair; the companion
    /// `v`-variate is discarded, trading throughput for simplicity. The
    /// scale goes through the crate's dual-lane [`scalar::sqrt`].
    #[allow(clippy::float_cmp)] // r == 0.0 is the documented degenerate-pair test
    pub fn normal(&mut self) -> f32 {
        let mut u = self.bipolar();
        let mut v = self.bipolar();
        let mut r = u * u + v * v;
        while r == 0.0 || r > 1.0 {
            u = self.bipolar();
            v = self.bipolar();
            r = u * u + v * v;
        }
        u * scalar::sqrt(-2.0 * libm::logf(r) / r)
    }
}
