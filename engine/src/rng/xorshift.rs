//! xorshift64* random number generator
//!
//! Fast, high-quality PRNG that is deterministic and suitable for
//! simulation purposes. Every peg decision and every skill draw in the
//! simulator comes out of this generator.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. This is what makes a run
//! reproducible: reseed the beans, replay the experiment, get the same
//! slot histogram.

use serde::{Deserialize, Serialize};

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use quincunx_core::PegRng;
///
/// let mut rng = PegRng::new(12345);
/// let deflect = rng.next_bit(); // fair peg decision
/// let skill = rng.gaussian(5.0, 1.5); // skill-level draw
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PegRng {
    /// Internal state (64-bit)
    state: u64,
}

impl PegRng {
    /// Create a new RNG with the given seed
    ///
    /// A zero seed is mapped to 1 (xorshift requires nonzero state).
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate the next random u64 value
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64* algorithm
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate a fair random bit
    ///
    /// This is the peg decision: `true` with probability 1/2. Uses the
    /// top bit of the multiplied output, which is the best-mixed bit of
    /// xorshift64*.
    pub fn next_bit(&mut self) -> bool {
        self.next_u64() >> 63 == 1
    }

    /// Generate a random f64 in range [0.0, 1.0)
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next_u64();
        // Convert to [0.0, 1.0) using the top 53 bits
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Draw from a Gaussian distribution with the given mean and
    /// standard deviation (Box-Muller transform).
    ///
    /// Consumes exactly two uniform draws per call.
    pub fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64 {
        // Box-Muller; u1 must be nonzero for the logarithm
        let mut u1 = self.next_f64();
        if u1 <= f64::EPSILON {
            u1 = f64::EPSILON;
        }
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    /// Get current RNG state (for reseeding a second generator)
    pub fn state(&self) -> u64 {
        self.state
    }
}
