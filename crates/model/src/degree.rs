use alloc::string::String;
use serde::{Deserialize, Serialize};

/// Score band used to pick a degree out of [`DegreeTiers`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    High,
    Medium,
    Low,
}

impl Tier {
    pub const HIGH_THRESHOLD: f64 = 80.0;
    pub const MEDIUM_THRESHOLD: f64 = 60.0;

    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= Self::HIGH_THRESHOLD {
            Self::High
        } else if percentage >= Self::MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Degree names recommended for each tier of a single subject.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct DegreeTiers {
    pub high: String,
    pub medium: String,
    pub low: String,
}

impl DegreeTiers {
    pub fn get(&self, tier: Tier) -> &str {
        match tier {
            Tier::High => &self.high,
            Tier::Medium => &self.medium,
            Tier::Low => &self.low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Tier;

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(Tier::from_percentage(100.0), Tier::High);
        assert_eq!(Tier::from_percentage(80.0), Tier::High);
        assert_eq!(Tier::from_percentage(79.99), Tier::Medium);
        assert_eq!(Tier::from_percentage(60.0), Tier::Medium);
        assert_eq!(Tier::from_percentage(59.99), Tier::Low);
        assert_eq!(Tier::from_percentage(0.0), Tier::Low);
    }
}
