//! Fixed dashboard figures: summary counters and the sample CRI score.

/// One summary counter card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    pub label: &'static str,
    pub value: u32,
}

/// Counters shown above the claims table
pub const SUMMARY_COUNTERS: [Counter; 4] = [
    Counter {
        label: "Accepted IFR Claims",
        value: 120,
    },
    Counter {
        label: "Accepted CR Claims",
        value: 45,
    },
    Counter {
        label: "Accepted CFR Claims",
        value: 18,
    },
    Counter {
        label: "Total Schemes Available",
        value: 23,
    },
];

/// Community Resilience Index sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResilienceIndex {
    pub score: u8,
    pub max: u8,
    pub level: &'static str,
}

impl ResilienceIndex {
    pub const DESCRIPTION: &'static str = "CRI helps assess village-level resilience using \
        infrastructure, livelihood, education, health, geo-data, and FRA rights distribution.";

    pub const fn sample() -> Self {
        Self {
            score: 68,
            max: 100,
            level: "Moderate",
        }
    }

    /// Score as a gauge ratio in 0.0..=1.0
    pub fn ratio(&self) -> f64 {
        if self.max == 0 {
            return 0.0;
        }
        (self.score as f64 / self.max as f64).clamp(0.0, 1.0)
    }

    pub fn score_label(&self) -> String {
        format!("{} / {}", self.score, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_cri() {
        let cri = ResilienceIndex::sample();
        assert_eq!(cri.score_label(), "68 / 100");
        assert_eq!(cri.level, "Moderate");
        assert!((cri.ratio() - 0.68).abs() < 1e-9);
    }

    #[test]
    fn test_ratio_zero_max() {
        let cri = ResilienceIndex {
            score: 5,
            max: 0,
            level: "",
        };
        assert_eq!(cri.ratio(), 0.0);
    }

    #[test]
    fn test_summary_counter_values() {
        let values: Vec<u32> = SUMMARY_COUNTERS.iter().map(|c| c.value).collect();
        assert_eq!(values, vec![120, 45, 18, 23]);
    }
}
