use alloc::{collections::BTreeMap, string::String};
use model::{DegreeTiers, Tier};

/// Minimum score percentage for which a degree is recommended at all.
pub const RECOMMENDATION_FLOOR: f64 = Tier::MEDIUM_THRESHOLD;

/// Degree tiers keyed by subject name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationTable(BTreeMap<String, DegreeTiers>);

impl From<BTreeMap<String, DegreeTiers>> for RecommendationTable {
    fn from(tiers: BTreeMap<String, DegreeTiers>) -> Self {
        Self(tiers)
    }
}

impl<S: Into<String>> FromIterator<(S, DegreeTiers)> for RecommendationTable {
    fn from_iter<I: IntoIterator<Item = (S, DegreeTiers)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(subject, tiers)| (subject.into(), tiers)).collect())
    }
}

impl RecommendationTable {
    pub fn tiers(&self, subject: &str) -> Option<&DegreeTiers> {
        self.0.get(subject)
    }

    /// Picks the degree of the tier matching `percentage`. Subjects without
    /// a table simply have no recommendation.
    pub fn recommend(&self, subject: &str, percentage: f64) -> Option<&str> {
        let tiers = self.tiers(subject)?;
        Some(tiers.get(Tier::from_percentage(percentage)))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::RecommendationTable;
    use model::DegreeTiers;

    fn table() -> RecommendationTable {
        RecommendationTable::from_iter([
            (
                "Physics",
                DegreeTiers {
                    high: "Aerospace Engineering".into(),
                    medium: "Mechanical Engineering".into(),
                    low: "Applied Physics".into(),
                },
            ),
            (
                "Chemistry",
                DegreeTiers {
                    high: "Chemical Engineering".into(),
                    medium: "Chemistry".into(),
                    low: "Applied Chemistry".into(),
                },
            ),
        ])
    }

    #[test]
    fn physics_tiers() {
        let table = table();
        assert_eq!(table.recommend("Physics", 85.0), Some("Aerospace Engineering"));
        assert_eq!(table.recommend("Physics", 65.0), Some("Mechanical Engineering"));
        assert_eq!(table.recommend("Physics", 45.0), Some("Applied Physics"));
    }

    #[test]
    fn boundaries_select_upper_tier() {
        let table = table();
        assert_eq!(table.recommend("Chemistry", 80.0), Some("Chemical Engineering"));
        assert_eq!(table.recommend("Chemistry", 60.0), Some("Chemistry"));
    }

    #[test]
    fn unknown_subject_is_not_an_error() {
        let table = table();
        assert_eq!(table.recommend("General", 100.0), None);
        assert_eq!(table.recommend("physics", 100.0), None);
        assert_eq!(table.len(), 2);
        assert!(RecommendationTable::default().is_empty());
    }
}
