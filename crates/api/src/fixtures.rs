//! Sample dashboard data and the degree recommendation table.

use alloc::{collections::BTreeMap, string::String, vec::Vec};
use grader::RecommendationTable;
use model::{
    dashboard::{GraduateProfile, JobRecommendation, Mentee, PlatformStats},
    DegreeTiers,
};

pub struct Fixtures {
    pub degrees: RecommendationTable,
    pub stats: PlatformStats,
    pub profile: GraduateProfile,
    pub jobs: Vec<JobRecommendation>,
    pub mentees: Vec<Mentee>,
}

impl Fixtures {
    pub fn load() -> serde_json::Result<Self> {
        let degrees: BTreeMap<String, DegreeTiers> = serde_json::from_str(include_str!("../data/degrees.json"))?;
        Ok(Self {
            degrees: degrees.into(),
            stats: serde_json::from_str(include_str!("../data/stats.json"))?,
            profile: serde_json::from_str(include_str!("../data/profile.json"))?,
            jobs: serde_json::from_str(include_str!("../data/jobs.json"))?,
            mentees: serde_json::from_str(include_str!("../data/mentees.json"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Fixtures;

    #[test]
    fn loads_bundled_fixtures() {
        let fixtures = Fixtures::load().unwrap();
        assert_eq!(fixtures.degrees.len(), 6);
        assert_eq!(fixtures.degrees.recommend("Physics", 85.0), Some("Aerospace Engineering"));
        assert_eq!(fixtures.degrees.recommend("Computer Science", 70.0), Some("Computer Science Engineering"));
        assert_eq!(fixtures.stats.total_users, 85);
        assert_eq!(fixtures.profile.id, "grad-1");
        assert!(fixtures.profile.resume_url.is_none());
        assert_eq!(fixtures.jobs.len(), 6);
        assert_eq!(fixtures.jobs[0].job_title, "Full Stack Developer");
        assert_eq!(fixtures.mentees.len(), 5);
        assert!(fixtures.mentees.iter().filter(|mentee| mentee.evaluated).all(|mentee| mentee.project_score > 0));
    }
}
