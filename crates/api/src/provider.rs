use super::{catalog::Catalog, error};
use alloc::{collections::BTreeMap, string::String, vec::Vec};
use db::Database;
use grader::Grade;
use model::{Choice, Question, Subject};

/// Where reference data, answer keys and attempt records live. Selected once
/// at startup.
pub enum Provider {
    /// Bundled reference data. Nothing is persisted.
    Static(Catalog),
    /// PostgreSQL-backed reference data and attempt records.
    Postgres(Database),
}

impl Provider {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Static(_) => "static catalog",
            Self::Postgres(_) => "postgres",
        }
    }

    pub async fn subjects(&self) -> error::Result<Vec<Subject>> {
        match self {
            Self::Static(catalog) => Ok(catalog.subjects().to_vec()),
            Self::Postgres(db) => {
                use db::TryStreamExt;
                Ok(db.get_subjects().await?.try_collect().await?)
            }
        }
    }

    pub async fn questions(&self, subject: &str) -> error::Result<Vec<Question>> {
        match self {
            Self::Static(catalog) => Ok(catalog.questions(subject)),
            Self::Postgres(db) => Ok(db.get_questions(subject).await?),
        }
    }

    /// Name under which the subject's degree tiers are registered.
    pub async fn subject_name(&self, subject: &str) -> error::Result<String> {
        match self {
            Self::Static(catalog) => Ok(String::from(catalog.subject_name(subject))),
            Self::Postgres(db) => match db.get_subject_name(subject).await {
                Ok(name) => Ok(name),
                Err(db::error::Error::NotFound) => Ok(String::from(super::catalog::GENERAL)),
                Err(err) => Err(err.into()),
            },
        }
    }

    /// Correct options of the listed questions. Questions unknown to the
    /// provider are left out so that the grader skips them.
    pub async fn answer_key(&self, questions: &[&str]) -> error::Result<BTreeMap<String, Choice>> {
        match self {
            Self::Static(catalog) => Ok(questions
                .iter()
                .filter_map(|&id| Some((String::from(id), catalog.correct_option(id)?)))
                .collect()),
            Self::Postgres(db) => Ok(db.get_answer_key(questions).await?),
        }
    }

    /// Persists the graded attempt and returns its public identifier.
    pub async fn record_attempt(
        &self,
        subject: &str,
        grade: &Grade,
        time_taken: Option<f64>,
        degree: Option<&str>,
    ) -> error::Result<String> {
        match self {
            Self::Static(_) => {
                let millis = chrono::Utc::now().timestamp_millis();
                Ok(alloc::format!("attempt-{millis}"))
            }
            Self::Postgres(db) => {
                let id = db.record_attempt(subject, grade, time_taken, degree).await?;
                Ok(alloc::format!("attempt-{id}"))
            }
        }
    }

    pub async fn record_evaluation(
        &self,
        mentee: &str,
        project_score: Option<u8>,
        internship_score: Option<u8>,
        feedback: Option<&str>,
    ) -> error::Result<()> {
        let Self::Postgres(db) = self else {
            log::debug!("evaluation for {mentee} accepted without persistence");
            return Ok(());
        };

        db.record_evaluation(mentee, project_score, internship_score, feedback).await?;
        Ok(())
    }
}
