pub mod confusion;

/// The nine report columns, in fixed rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    F1,
    VRand,
    VInfo,
    Accuracy,
    Sensitivity,
    Specificity,
    Ppv,
    Npv,
    Jaccard,
}

pub const COLUMNS: [MetricKind; 9] = [
    MetricKind::F1,
    MetricKind::VRand,
    MetricKind::VInfo,
    MetricKind::Accuracy,
    MetricKind::Sensitivity,
    MetricKind::Specificity,
    MetricKind::Ppv,
    MetricKind::Npv,
    MetricKind::Jaccard,
];

impl MetricKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::F1 => "F1-score",
            Self::VRand => "VRand",
            Self::VInfo => "VInfo",
            Self::Accuracy => "accuracy",
            Self::Sensitivity => "sensitivity",
            Self::Specificity => "specificity",
            Self::Ppv => "PPV",
            Self::Npv => "NPV",
            Self::Jaccard => "Jaccard",
        }
    }
}

/// Partition-comparison scores obtained from the external engine.
#[derive(Debug, Clone, Copy)]
pub struct PartitionScores {
    pub vrand: f64,
    pub vinfo: f64,
}

pub fn round5(v: f64) -> f64 {
    (v * 1e5).round() / 1e5
}
