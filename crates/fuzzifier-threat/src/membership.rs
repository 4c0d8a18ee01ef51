//! Sampled universes and triangular membership functions.

use fuzzifier_core::config::Triangle;

/// A sampled range `start..stop` (stop exclusive) at a fixed step.
#[derive(Debug, Clone, PartialEq)]
pub struct Universe {
    points: Vec<f64>,
}

impl Universe {
    pub fn new((start, stop, step): (f64, f64, f64)) -> Self {
        let count = ((stop - start) / step).ceil().max(0.0) as usize;
        // Points are generated from the index, not by accumulation, so the
        // samples are identical on every run.
        let points = (0..count).map(|i| start + step * i as f64).collect();
        Self { points }
    }

    pub fn points(&self) -> &[f64] {
        &self.points
    }

    pub fn min(&self) -> f64 {
        self.points.first().copied().unwrap_or(0.0)
    }

    pub fn max(&self) -> f64 {
        self.points.last().copied().unwrap_or(0.0)
    }

    /// Clip a crisp input into the sampled range.
    pub fn clip(&self, x: f64) -> f64 {
        x.clamp(self.min(), self.max())
    }

    /// Membership of every sample in a triangular function.
    pub fn sample(&self, tri: &Triangle) -> Vec<f64> {
        self.points.iter().map(|&x| triangular(x, tri)).collect()
    }
}

/// Triangular membership of `x` in `[a, b, c]`.
///
/// Coinciding breakpoints form a shoulder: `[a, a, c]` is 1 at `a` and falls to
/// 0 at `c`; `[a, c, c]` rises from `a` to 1 at `c`.
pub fn triangular(x: f64, &[a, b, c]: &Triangle) -> f64 {
    if x == b {
        return 1.0;
    }
    if a < x && x < b {
        return (x - a) / (b - a);
    }
    if b < x && x < c {
        return (c - x) / (c - b);
    }
    0.0
}
