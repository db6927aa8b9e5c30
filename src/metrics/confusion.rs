//! Pixel-level classification metrics derived from a 2x2 confusion matrix.
//!
//! Every ratio returns `Option<f64>`: a zero denominator is an undefined
//! metric, never a crash and never a silent zero.

use anyhow::Result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfusionCounts {
    pub true_pos: u64,
    pub true_neg: u64,
    pub false_pos: u64,
    pub false_neg: u64,
}

impl ConfusionCounts {
    /// Cross-tabulate a reference and a predicted binary pixel vector.
    pub fn from_vectors(reference: &[u8], predicted: &[u8]) -> Result<Self> {
        if reference.len() != predicted.len() {
            anyhow::bail!(
                "binary vectors differ in length: reference {} vs predicted {}",
                reference.len(),
                predicted.len()
            );
        }
        let mut counts = Self::default();
        for (&r, &p) in reference.iter().zip(predicted) {
            match (r != 0, p != 0) {
                (true, true) => counts.true_pos += 1,
                (false, false) => counts.true_neg += 1,
                (false, true) => counts.false_pos += 1,
                (true, false) => counts.false_neg += 1,
            }
        }
        Ok(counts)
    }

    pub fn total(&self) -> u64 {
        self.true_pos + self.true_neg + self.false_pos + self.false_neg
    }

    pub fn accuracy(&self) -> Option<f64> {
        ratio(self.true_pos + self.true_neg, self.total())
    }

    pub fn sensitivity(&self) -> Option<f64> {
        ratio(self.true_pos, self.true_pos + self.false_neg)
    }

    pub fn specificity(&self) -> Option<f64> {
        ratio(self.true_neg, self.true_neg + self.false_pos)
    }

    pub fn ppv(&self) -> Option<f64> {
        ratio(self.true_pos, self.true_pos + self.false_pos)
    }

    pub fn npv(&self) -> Option<f64> {
        ratio(self.true_neg, self.true_neg + self.false_neg)
    }

    pub fn f1(&self) -> Option<f64> {
        let p = self.ppv()?;
        let s = self.sensitivity()?;
        if p + s == 0.0 {
            return None;
        }
        Some(2.0 * p * s / (p + s))
    }

    /// Binary Jaccard/IoU: tp / (tp + fp + fn).
    pub fn jaccard(&self) -> Option<f64> {
        ratio(
            self.true_pos,
            self.true_pos + self.false_pos + self.false_neg,
        )
    }
}

fn ratio(numerator: u64, denominator: u64) -> Option<f64> {
    if denominator == 0 {
        return None;
    }
    Some(numerator as f64 / denominator as f64)
}
