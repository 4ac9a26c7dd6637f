//! Protocol-wide aggregates shown on the marketing pages

use serde::{Deserialize, Serialize};

/// Labels for the five quality-score buckets
pub const BUCKET_LABELS: [&str; 5] = ["0-20", "20-40", "40-60", "60-80", "80-100"];

/// Five-bucket quality-score distribution
///
/// Payloads with fewer buckets are zero-padded, extra buckets are dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<f64>", into = "Vec<f64>")]
pub struct QualityDistribution(pub [f64; 5]);

impl From<Vec<f64>> for QualityDistribution {
    fn from(values: Vec<f64>) -> Self {
        let mut buckets = [0.0; 5];
        for (slot, value) in buckets.iter_mut().zip(values) {
            *slot = value;
        }
        Self(buckets)
    }
}

impl From<QualityDistribution> for Vec<f64> {
    fn from(dist: QualityDistribution) -> Self {
        dist.0.to_vec()
    }
}

impl QualityDistribution {
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Bucket values as percentages of the total (all zero when empty)
    pub fn percentages(&self) -> [f64; 5] {
        let total = self.total();
        if total <= 0.0 {
            return [0.0; 5];
        }
        self.0.map(|v| v / total * 100.0)
    }

    pub fn is_empty(&self) -> bool {
        self.total() <= 0.0
    }

    /// Bucket index for a 0-100 quality score
    pub fn bucket_for(score: u8) -> usize {
        (score.min(100) as usize / 20).min(4)
    }
}

/// `/api/protocol-stats` payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolStats {
    #[serde(default)]
    pub total_assessments: u64,
    #[serde(default)]
    pub completed: u64,
    #[serde(default)]
    pub avg_quality: f64,
    #[serde(default)]
    pub total_refunded: f64,
    #[serde(default)]
    pub distribution: QualityDistribution,
}

impl ProtocolStats {
    /// Share of assessments that reached a verdict, in percent
    pub fn completion_rate(&self) -> f64 {
        if self.total_assessments == 0 {
            return 0.0;
        }
        self.completed as f64 / self.total_assessments as f64 * 100.0
    }
}

/// `/api/health` payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthSummary {
    #[serde(default)]
    pub database_exploits: u64,
    #[serde(default)]
    pub tracked_chains: u64,
    #[serde(default)]
    pub active_sources: u64,
    #[serde(default)]
    pub total_sources: u64,
}

/// `/api/stats?days=N` payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LossStats {
    #[serde(default)]
    pub total_loss_usd: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribution_pads_and_truncates() {
        let short: QualityDistribution = serde_json::from_str("[1, 2]").unwrap();
        assert_eq!(short.0, [1.0, 2.0, 0.0, 0.0, 0.0]);

        let long: QualityDistribution = serde_json::from_str("[1, 2, 3, 4, 5, 6]").unwrap();
        assert_eq!(long.0, [1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_percentages() {
        let dist = QualityDistribution([1.0, 1.0, 2.0, 0.0, 0.0]);
        assert_eq!(dist.percentages(), [25.0, 25.0, 50.0, 0.0, 0.0]);
        assert_eq!(QualityDistribution::default().percentages(), [0.0; 5]);
    }

    #[test]
    fn test_bucket_for() {
        assert_eq!(QualityDistribution::bucket_for(0), 0);
        assert_eq!(QualityDistribution::bucket_for(19), 0);
        assert_eq!(QualityDistribution::bucket_for(20), 1);
        assert_eq!(QualityDistribution::bucket_for(79), 3);
        assert_eq!(QualityDistribution::bucket_for(100), 4);
    }

    #[test]
    fn test_protocol_stats_wire_names() {
        let json = r#"{"totalAssessments":10,"completed":8,"avgQuality":71.5,
            "totalRefunded":3.2,"distribution":[0,1,2,3,4]}"#;
        let stats: ProtocolStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_assessments, 10);
        assert_eq!(stats.completion_rate(), 80.0);
        assert_eq!(stats.distribution.0[4], 4.0);
    }
}
