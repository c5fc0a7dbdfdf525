//! Rotation noise model
//!
//! Headings commanded by the caller are perturbed by a random rotation
//! error before any movement is attempted. The error is drawn from a
//! distribution over [-1, 1] and scaled by the model's maximum rotation
//! error, so the envelope queries give hard bounds on the sampled angle.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};

/// Noise model applied to commanded heading angles
#[derive(Debug, Clone)]
pub struct RotationModel<D: Distribution<f64> = Uniform<f64>> {
    max_rotation_error: f64,
    rng: StdRng,
    dist: D,
}

impl RotationModel<Uniform<f64>> {
    /// Uniform rotation noise with an entropy-seeded generator
    pub fn new(max_rotation_error: f64) -> Self {
        Self {
            max_rotation_error,
            rng: StdRng::from_entropy(),
            dist: Uniform::new_inclusive(-1.0, 1.0),
        }
    }

    /// Uniform rotation noise with a fixed seed, for reproducible runs
    pub fn with_seed(max_rotation_error: f64, seed: u64) -> Self {
        Self {
            max_rotation_error,
            rng: StdRng::seed_from_u64(seed),
            dist: Uniform::new_inclusive(-1.0, 1.0),
        }
    }
}

impl<D: Distribution<f64>> RotationModel<D> {
    /// Rotation noise driven by a caller-supplied distribution over [-1, 1]
    pub fn with_distribution(max_rotation_error: f64, dist: D, seed: u64) -> Self {
        Self {
            max_rotation_error,
            rng: StdRng::seed_from_u64(seed),
            dist,
        }
    }

    /// Apply noise to a commanded angle
    pub fn sample(&mut self, angle: f64) -> f64 {
        angle + self.dist.sample(&mut self.rng) * self.max_rotation_error
    }

    /// Upper bound of the noisy angle envelope
    pub fn max_rotation(&self, angle: f64) -> f64 {
        angle + self.max_rotation_error
    }

    /// Lower bound of the noisy angle envelope
    pub fn min_rotation(&self, angle: f64) -> f64 {
        angle - self.max_rotation_error
    }

    pub fn max_rotation_error(&self) -> f64 {
        self.max_rotation_error
    }
}

/// Distribution that always yields 1.0 regardless of the generator
///
/// Substituted for the uniform distribution in tests to make the model
/// deterministic: every sample lands on the envelope's upper bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatDistribution;

impl Distribution<f64> for FlatDistribution {
    fn sample<R: Rng + ?Sized>(&self, _rng: &mut R) -> f64 {
        1.0
    }
}

/// Deterministic rotation model that always applies the maximum error
pub type MaximumRotationModel = RotationModel<FlatDistribution>;

impl RotationModel<FlatDistribution> {
    pub fn at_maximum(max_rotation_error: f64) -> Self {
        RotationModel::with_distribution(max_rotation_error, FlatDistribution, 0)
    }
}
