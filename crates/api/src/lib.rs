extern crate alloc;

pub mod catalog;
pub mod error;
pub mod fixtures;
pub mod provider;

mod dashboard;
mod quiz;
mod util {
    pub mod body;
    pub mod json;
}

pub use catalog::Catalog;
pub use fixtures::Fixtures;
pub use provider::Provider;
pub use util::json::JsonResponse;

use hyper::{body::Body, Request};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route<'p> {
    Subjects,
    Questions(&'p str),
    Submit,
    Stats,
    Profile,
    Jobs,
    Mentees,
    SubmitScore,
}

impl<'p> Route<'p> {
    fn parse(path: &'p str) -> Option<Self> {
        let path = path.strip_suffix('/').unwrap_or(path);
        if let Some(subject) = path.strip_prefix("/api/quiz/questions/") {
            return (!subject.contains('/')).then_some(Self::Questions(subject));
        }

        Some(match path {
            "/api/quiz/subjects" => Self::Subjects,
            "/api/quiz/submit" => Self::Submit,
            "/api/admin/stats" => Self::Stats,
            "/api/graduate/profile" => Self::Profile,
            "/api/graduate/recommendations" => Self::Jobs,
            "/api/mentor/mentees" => Self::Mentees,
            "/api/mentor/submit-score" => Self::SubmitScore,
            _ => return None,
        })
    }

    const fn allow(self) -> &'static str {
        match self {
            Self::Submit | Self::SubmitScore => "POST",
            _ => "GET",
        }
    }
}

pub struct App {
    provider: Provider,
    fixtures: Fixtures,
}

impl App {
    pub fn new(provider: Provider) -> serde_json::Result<Self> {
        Ok(Self { provider, fixtures: Fixtures::load()? })
    }

    /// Routes the request and renders any failure as a JSON error.
    pub async fn respond<B>(&self, req: Request<B>) -> JsonResponse
    where
        B: Body,
        B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        let (parts, body) = req.into_parts();
        let Some(route) = Route::parse(parts.uri.path()) else {
            log::debug!("{} {} -> no such route", parts.method, parts.uri);
            return util::json::error(error::Error::NotFound, None);
        };

        let allow = route.allow();
        if parts.method.as_str() != allow {
            log::debug!("{} {} -> method not allowed", parts.method, parts.uri);
            return util::json::error(error::Error::MethodNotAllowed, Some(allow));
        }

        match self.dispatch(route, parts.uri.query(), body).await {
            Ok(res) => {
                log::debug!("{} {} -> {}", parts.method, parts.uri, res.status());
                res
            }
            Err(err) => {
                log::debug!("{} {} -> {err}", parts.method, parts.uri);
                util::json::error(err, None)
            }
        }
    }

    async fn dispatch<B>(&self, route: Route<'_>, query: Option<&str>, body: B) -> error::Result<JsonResponse>
    where
        B: Body,
        B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        match route {
            Route::Subjects => quiz::list_subjects(&self.provider).await,
            Route::Questions(subject) => quiz::list_questions(&self.provider, subject).await,
            Route::Submit => quiz::submit(&self.provider, &self.fixtures.degrees, body).await,
            Route::Stats => dashboard::stats(&self.fixtures, query),
            Route::Profile => dashboard::profile(&self.fixtures),
            Route::Jobs => dashboard::job_recommendations(&self.fixtures),
            Route::Mentees => dashboard::mentees(&self.fixtures),
            Route::SubmitScore => dashboard::submit_score(&self.provider, body).await,
        }
    }
}
