use anyhow::Result;
use chrono::Duration;
use serde::Deserialize;

/// Parameters of the segmentation. Always valid once constructed: `gap` is
/// non-negative and `min_segment_size` is at least 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SegmenterConfig {
    gap: Duration,
    min_segment_size: usize,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSegmenterConfig {
    gap_sec: i64,
    min_segment_size: i64,
}

impl SegmenterConfig {
    pub fn new(gap: Duration, min_segment_size: i64) -> Result<Self> {
        if gap < Duration::zero() {
            bail!("Invalid gap {}: must not be negative", gap);
        }
        if min_segment_size < 1 {
            bail!(
                "Invalid min_segment_size {}: must be at least 1",
                min_segment_size
            );
        }
        let min_segment_size = usize::try_from(min_segment_size)
            .map_err(|_| anyhow!("min_segment_size {} is too large", min_segment_size))?;
        Ok(SegmenterConfig {
            gap,
            min_segment_size,
        })
    }

    /// Parses `{"gap_sec": 600, "min_segment_size": 2}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawSegmenterConfig = serde_json::from_str(json)?;
        let gap = Duration::try_seconds(raw.gap_sec)
            .ok_or_else(|| anyhow!("gap_sec {} is out of range", raw.gap_sec))?;
        SegmenterConfig::new(gap, raw.min_segment_size)
    }

    pub fn gap(&self) -> Duration {
        self.gap
    }

    pub fn min_segment_size(&self) -> usize {
        self.min_segment_size
    }
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        SegmenterConfig {
            gap: Duration::minutes(10),
            min_segment_size: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::SegmenterConfig;

    #[test]
    fn rejects_invalid_values() {
        assert!(SegmenterConfig::new(Duration::seconds(-1), 2).is_err());
        assert!(SegmenterConfig::new(Duration::seconds(10), 0).is_err());
        assert!(SegmenterConfig::new(Duration::seconds(10), -3).is_err());
    }

    #[test]
    fn zero_gap_is_allowed() {
        let config = SegmenterConfig::new(Duration::zero(), 1).unwrap();
        assert_eq!(config.gap(), Duration::zero());
        assert_eq!(config.min_segment_size(), 1);
    }

    #[test]
    fn default() {
        let config = SegmenterConfig::default();
        assert_eq!(config.gap(), Duration::minutes(10));
        assert_eq!(config.min_segment_size(), 2);
    }
}
