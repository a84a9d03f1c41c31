use rand::Rng;

use crate::cluster::error::ClusterError;
use crate::math::vector::{mean, squared_distance};

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Lloyd-style k-means over fixed-dimension `f64` samples.
///
/// The fit is a pure function of `(samples, k, max_iterations)` and the
/// random draws made at initialization: centroids start as `k` distinct
/// samples chosen uniformly without replacement, then alternate assignment
/// and mean-update steps until assignments stop changing or the iteration
/// cap is reached. Both outcomes produce a usable result.
#[derive(Debug, Clone, Copy)]
pub struct KMeans {
    pub k: usize,
    pub max_iterations: usize,
}

/// Result of a [`KMeans::fit`] run.
#[derive(Debug, Clone)]
pub struct KMeansFit {
    /// Final centroid positions, `k` vectors in sample space.
    pub centroids: Vec<Vec<f64>>,
    /// Index of the nearest centroid for every input sample; always in `[0, k)`.
    pub assignments: Vec<usize>,
    /// Number of iterations actually run.
    pub iterations: usize,
    /// `true` if assignments stabilized before the iteration cap.
    pub converged: bool,
}

impl KMeans {
    pub fn new(k: usize, max_iterations: usize) -> KMeans {
        KMeans { k, max_iterations }
    }

    /// Partitions `samples` into `k` clusters.
    ///
    /// # Arguments
    /// - `samples` — non-empty slice of equal-length sample vectors
    /// - `rng`     — random source for centroid initialization; pass a seeded
    ///               generator for reproducible runs
    ///
    /// # Errors
    /// Fails before iterating if `samples` is empty, `k` is outside
    /// `1..=samples.len()`, `max_iterations` is zero, or the samples do not
    /// share one dimension.
    pub fn fit<R: Rng + ?Sized>(
        &self,
        samples: &[Vec<f64>],
        rng: &mut R,
    ) -> Result<KMeansFit, ClusterError> {
        self.validate(samples)?;

        let mut centroids = init_centroids(samples, self.k, rng);

        // Out-of-range sentinel so the first pass registers every sample as
        // newly assigned; real assignments are always < k.
        let mut assignments = vec![self.k; samples.len()];

        let mut iterations = 0;
        let mut converged = false;

        for _ in 0..self.max_iterations {
            iterations += 1;

            let changed = assign_samples(samples, &centroids, &mut assignments);
            update_centroids(samples, &assignments, &mut centroids);

            if changed == 0 {
                converged = true;
                break;
            }
        }

        Ok(KMeansFit {
            centroids,
            assignments,
            iterations,
            converged,
        })
    }

    fn validate(&self, samples: &[Vec<f64>]) -> Result<(), ClusterError> {
        if samples.is_empty() {
            return Err(ClusterError::EmptyInput);
        }
        if self.k < 1 || self.k > samples.len() {
            return Err(ClusterError::InvalidClusterCount {
                requested: self.k,
                available: samples.len(),
            });
        }
        if self.max_iterations < 1 {
            return Err(ClusterError::InvalidIterationCap);
        }
        let dim = samples[0].len();
        for (index, sample) in samples.iter().enumerate() {
            if sample.len() != dim {
                return Err(ClusterError::DimensionMismatch {
                    index,
                    expected: dim,
                    found: sample.len(),
                });
            }
        }
        Ok(())
    }
}

/// Sum of squared distances from each sample to its assigned centroid.
///
/// Non-increasing across successive iterations of a fit; useful for
/// comparing runs and for reporting.
pub fn sum_squared_error(
    samples: &[Vec<f64>],
    centroids: &[Vec<f64>],
    assignments: &[usize],
) -> f64 {
    samples.iter().zip(assignments.iter())
        .map(|(sample, &cluster)| squared_distance(sample, &centroids[cluster]))
        .sum()
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Picks `k` distinct samples uniformly at random as the starting centroids.
///
/// Sampling indices without replacement keeps the initial centroids inside
/// the data and distinct as positions (unless the input itself contains
/// duplicate samples).
fn init_centroids<R: Rng + ?Sized>(
    samples: &[Vec<f64>],
    k: usize,
    rng: &mut R,
) -> Vec<Vec<f64>> {
    rand::seq::index::sample(rng, samples.len(), k)
        .into_iter()
        .map(|i| samples[i].clone())
        .collect()
}

/// Assignment step: points every sample at its nearest centroid.
///
/// Ties break toward the lowest centroid index. Returns how many samples
/// changed cluster relative to `assignments`' previous contents.
fn assign_samples(
    samples: &[Vec<f64>],
    centroids: &[Vec<f64>],
    assignments: &mut [usize],
) -> usize {
    let mut changed = 0;

    for (sample, assignment) in samples.iter().zip(assignments.iter_mut()) {
        let mut best = 0;
        let mut best_dist = f64::MAX;
        for (index, centroid) in centroids.iter().enumerate() {
            let dist = squared_distance(sample, centroid);
            if dist < best_dist {
                best_dist = dist;
                best = index;
            }
        }

        if *assignment != best {
            changed += 1;
            *assignment = best;
        }
    }

    changed
}

/// Update step: moves each centroid to the mean of its assigned samples.
///
/// A centroid with no assigned samples keeps its previous position, so a
/// degenerate cluster never turns into a NaN centroid.
fn update_centroids(
    samples: &[Vec<f64>],
    assignments: &[usize],
    centroids: &mut [Vec<f64>],
) {
    let mut members: Vec<Vec<&[f64]>> = vec![Vec::new(); centroids.len()];
    for (sample, &cluster) in samples.iter().zip(assignments.iter()) {
        members[cluster].push(sample.as_slice());
    }

    for (centroid, cluster_members) in centroids.iter_mut().zip(members.iter()) {
        if !cluster_members.is_empty() {
            *centroid = mean(cluster_members);
        }
    }
}
