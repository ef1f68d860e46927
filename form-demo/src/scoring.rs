//! Four-subject score averaging and pass/fail classification.

use std::fmt;

use serde::Deserialize;

/// A score strictly above this passes.
pub const PASS_THRESHOLD: f64 = 50.0;

/// Marks submitted through the final-result form.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Scorecard {
    pub science: f64,
    pub maths: f64,
    pub c: f64,
    pub datascience: f64,
}

impl Scorecard {
    pub fn average(&self) -> f64 {
        (self.science + self.maths + self.c + self.datascience) / 4.0
    }

    /// The average truncated toward zero, as used in result URLs.
    ///
    /// `None` when the average is NaN, infinite or outside the `i64` range.
    pub fn whole_score(&self) -> Option<i64> {
        let average = self.average();
        (average.is_finite() && average.abs() < i64::MAX as f64).then(|| average.trunc() as i64)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Passes,
    Failed,
}

impl Outcome {
    pub fn classify(score: f64) -> Self {
        if score > PASS_THRESHOLD {
            Outcome::Passes
        } else {
            Outcome::Failed
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Passes => f.write_str("Passes"),
            Outcome::Failed => f.write_str("Failed"),
        }
    }
}
