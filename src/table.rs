use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::EvalError;
use crate::metrics::confusion::ConfusionCounts;
use crate::metrics::{MetricKind, PartitionScores, round5};

/// One row of the report: the fixed nine-metric set for one method.
///
/// The field set is fixed at the type level so a missing or extra metric is a
/// compile error, not a silent `None`. Values are rounded to 5 decimals at
/// construction; `None` marks an undefined metric (zero denominator, or a
/// non-finite engine result).
#[derive(Debug, Clone, Serialize)]
pub struct MetricRecord {
    #[serde(rename = "F1-score")]
    pub f1: Option<f64>,
    #[serde(rename = "VRand")]
    pub vrand: Option<f64>,
    #[serde(rename = "VInfo")]
    pub vinfo: Option<f64>,
    pub accuracy: Option<f64>,
    pub sensitivity: Option<f64>,
    pub specificity: Option<f64>,
    #[serde(rename = "PPV")]
    pub ppv: Option<f64>,
    #[serde(rename = "NPV")]
    pub npv: Option<f64>,
    #[serde(rename = "Jaccard")]
    pub jaccard: Option<f64>,
}

impl MetricRecord {
    pub fn new(counts: &ConfusionCounts, partition: &PartitionScores) -> Self {
        Self {
            f1: counts.f1().map(round5),
            vrand: finite(partition.vrand).map(round5),
            vinfo: finite(partition.vinfo).map(round5),
            accuracy: counts.accuracy().map(round5),
            sensitivity: counts.sensitivity().map(round5),
            specificity: counts.specificity().map(round5),
            ppv: counts.ppv().map(round5),
            npv: counts.npv().map(round5),
            jaccard: counts.jaccard().map(round5),
        }
    }

    pub fn get(&self, kind: MetricKind) -> Option<f64> {
        match kind {
            MetricKind::F1 => self.f1,
            MetricKind::VRand => self.vrand,
            MetricKind::VInfo => self.vinfo,
            MetricKind::Accuracy => self.accuracy,
            MetricKind::Sensitivity => self.sensitivity,
            MetricKind::Specificity => self.specificity,
            MetricKind::Ppv => self.ppv,
            MetricKind::Npv => self.npv,
            MetricKind::Jaccard => self.jaccard,
        }
    }
}

fn finite(v: f64) -> Option<f64> {
    v.is_finite().then_some(v)
}

/// The full method-name -> metric-record mapping, rows in lexicographic
/// method order by construction.
#[derive(Debug, Clone, Default)]
pub struct ReportTable {
    rows: BTreeMap<String, MetricRecord>,
}

impl ReportTable {
    /// Join per-method confusion counts with per-method partition scores.
    ///
    /// A method present in only one source would misrepresent the comparison,
    /// so the join fails rather than emit a partial row.
    pub fn join(
        confusion: &BTreeMap<String, ConfusionCounts>,
        partition: &BTreeMap<String, PartitionScores>,
    ) -> Result<Self, EvalError> {
        for method in confusion.keys() {
            if !partition.contains_key(method) {
                return Err(EvalError::Join {
                    method: method.clone(),
                    source_table: "partition",
                });
            }
        }
        let mut rows = BTreeMap::new();
        for (method, scores) in partition {
            let counts = confusion.get(method).ok_or_else(|| EvalError::Join {
                method: method.clone(),
                source_table: "confusion",
            })?;
            rows.insert(method.clone(), MetricRecord::new(counts, scores));
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> impl Iterator<Item = (&String, &MetricRecord)> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, method: &str) -> Option<&MetricRecord> {
        self.rows.get(method)
    }

    /// Min/max over every defined cell, for global color scaling.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut range: Option<(f64, f64)> = None;
        for record in self.rows.values() {
            for kind in crate::metrics::COLUMNS {
                if let Some(v) = record.get(kind) {
                    range = Some(match range {
                        Some((lo, hi)) => (lo.min(v), hi.max(v)),
                        None => (v, v),
                    });
                }
            }
        }
        range
    }
}
