// Sampling a formula over an interval

use crate::formula::Formula;
use crate::interpreter::engine::Evaluator;

/// One evaluated point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Evenly spaced samples of a formula
#[derive(Debug, Clone, Default)]
pub struct SampleSet {
    samples: Vec<Sample>,
    from: f64,
    to: f64,
}

impl SampleSet {
    /// Evaluate `formula` at `count` evenly spaced points from `from` to `to`
    /// inclusive. The ends are swapped if given in descending order.
    pub fn sample(formula: &Formula, from: f64, to: f64, count: usize) -> Self {
        let (from, to) = if from <= to { (from, to) } else { (to, from) };
        let mut evaluator = Evaluator::new();

        let samples = match count {
            0 => Vec::new(),
            1 => vec![Sample {
                x: from,
                y: formula.evaluate_with(&mut evaluator, from),
            }],
            _ => {
                let step = (to - from) / (count - 1) as f64;
                (0..count)
                    .map(|i| {
                        // Pin the last point so rounding never misses `to`
                        let x = if i == count - 1 { to } else { from + step * i as f64 };
                        Sample {
                            x,
                            y: formula.evaluate_with(&mut evaluator, x),
                        }
                    })
                    .collect()
            }
        };

        SampleSet { samples, from, to }
    }

    pub fn points(&self) -> &[Sample] {
        &self.samples
    }

    /// Points suitable for plotting: NaN and infinities removed.
    pub fn finite_points(&self) -> Vec<(f64, f64)> {
        self.samples
            .iter()
            .filter(|s| s.is_finite())
            .map(|s| (s.x, s.y))
            .collect()
    }

    /// Smallest and largest finite y value.
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        self.samples
            .iter()
            .filter(|s| s.is_finite())
            .fold(None, |bounds, s| match bounds {
                None => Some((s.y, s.y)),
                Some((lo, hi)) => Some((lo.min(s.y), hi.max(s.y))),
            })
    }

    pub fn x_range(&self) -> (f64, f64) {
        (self.from, self.to)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
