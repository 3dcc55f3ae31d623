#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod error;

use alloc::{collections::BTreeMap, string::String, vec::Vec};
use grader::Grade;
use model::{Choice, Difficulty, Question, Subject};
use tokio_postgres::error::SqlState;

pub use futures_util::{TryStream, TryStreamExt};
pub use tokio_postgres::{tls::NoTls, Client, Config};

pub struct Database(Client);

impl From<Client> for Database {
    fn from(client: Client) -> Self {
        Self(client)
    }
}

fn deserialize_subject_from_row(row: tokio_postgres::Row) -> error::Result<Subject> {
    let id = row.try_get("id").map_err(|_| error::Error::Fatal)?;
    let subject_name = row.try_get("name").map_err(|_| error::Error::Fatal)?;
    let description = row.try_get("description").map_err(|_| error::Error::Fatal)?;
    let total_questions: i16 = row.try_get("total_questions").map_err(|_| error::Error::Fatal)?;
    let duration_minutes: i16 = row.try_get("duration_minutes").map_err(|_| error::Error::Fatal)?;
    Ok(Subject {
        id,
        subject_name,
        description,
        total_questions: u16::try_from(total_questions).map_err(|_| error::Error::Fatal)?,
        duration_minutes: u16::try_from(duration_minutes).map_err(|_| error::Error::Fatal)?,
    })
}

fn deserialize_question_from_row(row: tokio_postgres::Row) -> error::Result<Question> {
    let correct: &str = row.try_get("correct_answer").map_err(|_| error::Error::Fatal)?;
    let difficulty: &str = row.try_get("difficulty").map_err(|_| error::Error::Fatal)?;
    let correct_answer = Choice::from_label(correct).ok_or(error::Error::Fatal)?;
    let difficulty = Difficulty::from_label(difficulty).ok_or(error::Error::Fatal)?;
    let text = |column: &str| -> error::Result<String> { row.try_get(column).map_err(|_| error::Error::Fatal) };
    Ok(Question {
        id: text("id")?,
        question_text: text("question_text")?,
        option_a: text("option_a")?,
        option_b: text("option_b")?,
        option_c: text("option_c")?,
        option_d: text("option_d")?,
        correct_answer,
        difficulty,
    })
}

impl Database {
    pub async fn get_subjects(&self) -> error::Result<impl TryStream<Ok = Subject, Error = error::Error> + '_> {
        let params: [&str; 0] = [];
        Ok(self
            .0
            .query_raw(
                "SELECT id, name, description, total_questions, duration_minutes FROM subject ORDER BY id",
                params,
            )
            .await
            .map_err(|_| error::Error::Fatal)?
            .map_err(|_| error::Error::Fatal)
            .and_then(|row| core::future::ready(deserialize_subject_from_row(row))))
    }

    pub async fn get_subject_name(&self, subject: &str) -> error::Result<String> {
        let row = self
            .0
            .query_opt("SELECT name FROM subject WHERE id = $1", &[&subject])
            .await
            .map_err(|_| error::Error::Fatal)?
            .ok_or(error::Error::NotFound)?;
        row.try_get("name").map_err(|_| error::Error::Fatal)
    }

    pub async fn get_questions(&self, subject: &str) -> error::Result<Vec<Question>> {
        self.0
            .query(
                "SELECT id, question_text, option_a, option_b, option_c, option_d, correct_answer, difficulty \
                 FROM question WHERE subject = $1 ORDER BY length(id), id",
                &[&subject],
            )
            .await
            .map_err(|_| error::Error::Fatal)?
            .into_iter()
            .map(deserialize_question_from_row)
            .collect()
    }

    /// Fetches the correct option of every listed question. Unknown IDs are
    /// simply absent from the result.
    pub async fn get_answer_key(&self, questions: &[&str]) -> error::Result<BTreeMap<String, Choice>> {
        let rows = self
            .0
            .query("SELECT id, correct_answer FROM question WHERE id = ANY($1)", &[&questions])
            .await
            .map_err(|_| error::Error::Fatal)?;

        let mut key = BTreeMap::new();
        for row in rows {
            let id: String = row.try_get("id").map_err(|_| error::Error::Fatal)?;
            let label: &str = row.try_get("correct_answer").map_err(|_| error::Error::Fatal)?;
            let choice = Choice::from_label(label).ok_or(error::Error::Fatal)?;
            key.insert(id, choice);
        }
        Ok(key)
    }

    /// Inserts the attempt and, if present, its recommended degree in a single
    /// statement. Returns the ID of the new attempt.
    pub async fn record_attempt(
        &self,
        subject: &str,
        grade: &Grade,
        time_taken: Option<f64>,
        degree: Option<&str>,
    ) -> error::Result<i64> {
        let correct = i32::try_from(grade.correct).map_err(|_| error::Error::BadInput)?;
        let total = i32::try_from(grade.total).map_err(|_| error::Error::BadInput)?;
        let err = match self
            .0
            .query_opt(
                "WITH attempt AS ( \
                     INSERT INTO quiz_attempt (subject, correct_count, total_questions, score_percentage, time_taken) \
                     VALUES ($1, $2, $3, $4, $5) RETURNING id \
                 ), recommendation AS ( \
                     INSERT INTO degree_recommendation (attempt, degree) \
                     SELECT id, $6 FROM attempt WHERE $6::TEXT IS NOT NULL \
                 ) \
                 SELECT id FROM attempt",
                &[&subject, &correct, &total, &grade.percentage, &time_taken, &degree],
            )
            .await
        {
            Ok(row) => {
                let row = row.ok_or(error::Error::Fatal)?;
                return row.try_get("id").map_err(|_| error::Error::Fatal);
            }
            Err(err) => err,
        };

        let err = err.as_db_error().ok_or(error::Error::Fatal)?;
        if *err.code() != SqlState::CHECK_VIOLATION {
            return Err(error::Error::Fatal);
        }

        let constraint = err.constraint().ok_or(error::Error::Fatal)?;
        if constraint == "quiz_attempt_check" {
            return Err(error::Error::BadInput);
        }

        Err(error::Error::Fatal)
    }

    pub async fn record_evaluation(
        &self,
        mentee: &str,
        project_score: Option<u8>,
        internship_score: Option<u8>,
        feedback: Option<&str>,
    ) -> error::Result<()> {
        let project = project_score.map(i16::from);
        let internship = internship_score.map(i16::from);
        let err = match self
            .0
            .execute(
                "INSERT INTO evaluation (mentee, project_score, internship_score, feedback) VALUES ($1, $2, $3, $4)",
                &[&mentee, &project, &internship, &feedback],
            )
            .await
        {
            Ok(1) => return Ok(()),
            Err(err) => err,
            _ => return Err(error::Error::Fatal),
        };

        let err = err.as_db_error().ok_or(error::Error::Fatal)?;
        let constraint = err.constraint().ok_or(error::Error::Fatal)?;
        Err(match (err.code(), constraint) {
            (&SqlState::CHECK_VIOLATION, "evaluation_check") => error::Error::BadInput,
            _ => error::Error::Fatal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{Choice, Config, Database, Grade, NoTls, TryStreamExt};

    #[tokio::test(flavor = "current_thread")]
    async fn database_test() {
        use std::env::var;
        let (Ok(user), Ok(pass), Ok(host), Ok(data)) =
            (var("PG_USERNAME"), var("PG_PASSWORD"), var("PG_HOSTNAME"), var("PG_DATABASE"))
        else {
            return;
        };

        let (client, conn) = Config::new()
            .user(&user)
            .password(&pass)
            .host(&host)
            .dbname(&data)
            .port(5432)
            .connect(NoTls)
            .await
            .expect("cannot connect to database");
        let handle = tokio::spawn(conn);

        client.batch_execute(include_str!("../schema.sql")).await.unwrap();
        client
            .batch_execute(
                "INSERT INTO subject (id, name, description) VALUES ('t1', 'Test Physics', 'Fixture') ON CONFLICT DO NOTHING; \
                 INSERT INTO question VALUES \
                     ('t1-1', 't1', 'What is the SI unit of force?', 'Newton', 'Joule', 'Watt', 'Pascal', 'A', 'easy'), \
                     ('t1-2', 't1', 'Equal and opposite reaction?', 'First', 'Second', 'Third', 'Gravitation', 'C', 'easy') \
                 ON CONFLICT DO NOTHING;",
            )
            .await
            .unwrap();
        let db = Database::from(client);

        // Reference data
        let subjects: Vec<_> = db.get_subjects().await.unwrap().try_collect().await.unwrap();
        assert!(subjects.iter().any(|subject| subject.id == "t1" && subject.subject_name == "Test Physics"));
        assert_eq!(db.get_subject_name("t1").await.unwrap(), "Test Physics");
        assert!(matches!(db.get_subject_name("missing").await, Err(super::error::Error::NotFound)));

        let questions = db.get_questions("t1").await.unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].id, "t1-1");
        assert_eq!(questions[1].correct_answer, Choice::C);

        // Unknown IDs are left out of the key
        let key = db.get_answer_key(&["t1-1", "t1-2", "t9-9"]).await.unwrap();
        assert_eq!(key.len(), 2);
        assert_eq!(key.get("t1-1"), Some(&Choice::A));
        assert_eq!(key.get("t1-2"), Some(&Choice::C));

        // Attempts with and without a recommendation
        let grade = Grade { correct: 2, total: 2, percentage: 100.0 };
        let first = db.record_attempt("t1", &grade, Some(3.0), Some("Aerospace Engineering")).await.unwrap();
        let grade = Grade { correct: 0, total: 2, percentage: 0.0 };
        let second = db.record_attempt("t1", &grade, None, None).await.unwrap();
        assert!(second > first);

        let grade = Grade { correct: 3, total: 2, percentage: 150.0 };
        assert!(matches!(db.record_attempt("t1", &grade, None, None).await, Err(super::error::Error::BadInput)));

        // Evaluations
        db.record_evaluation("mentee-1", Some(85), Some(78), Some("Keep it up.")).await.unwrap();
        db.record_evaluation("mentee-2", None, None, None).await.unwrap();
        assert!(matches!(
            db.record_evaluation("mentee-3", Some(101), None, None).await,
            Err(super::error::Error::BadInput)
        ));

        drop(db);
        handle.await.unwrap().unwrap();
    }
}
