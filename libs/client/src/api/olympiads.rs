//! Olympiads endpoint operations

use common::ApiResult;
use serde::Deserialize;
use tracing::info;

use super::{Created, Message};
use crate::dispatch::{Dispatcher, OlympiadAction};
use crate::models::{
    NewOlympiad, NewResult, Olympiad, OlympiadFilter, OlympiadResult, StudentStats, User,
};

#[derive(Deserialize)]
struct OlympiadsEnvelope {
    olympiads: Vec<Olympiad>,
}

#[derive(Deserialize)]
struct ResultsEnvelope {
    results: Vec<OlympiadResult>,
}

#[derive(Deserialize)]
struct StatsEnvelope {
    stats: StudentStats,
}

#[derive(Deserialize)]
struct StudentsEnvelope {
    students: Vec<User>,
}

/// Olympiads and students fetched together for a dashboard render
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub olympiads: Vec<Olympiad>,
    pub students: Vec<User>,
}

/// Typed wrappers for the olympiads endpoint
#[derive(Clone)]
pub struct OlympiadsApi {
    dispatch: Dispatcher,
}

impl OlympiadsApi {
    /// Create the olympiads API over a shared dispatcher
    pub fn new(dispatch: Dispatcher) -> Self {
        Self { dispatch }
    }

    /// List olympiads matching the filter, newest event first.
    pub async fn list(&self, filter: &OlympiadFilter) -> ApiResult<Vec<Olympiad>> {
        let envelope: OlympiadsEnvelope = self
            .dispatch
            .call(OlympiadAction::List.into(), None, &filter.to_params())
            .await?;
        Ok(envelope.olympiads)
    }

    /// Create an olympiad. Teachers create unapproved olympiads; the server
    /// re-checks the caller's role.
    pub async fn create(&self, data: &NewOlympiad) -> ApiResult<Created> {
        info!("Creating olympiad {}", data.title);
        self.dispatch
            .call(
                OlympiadAction::Create.into(),
                Some(serde_json::to_value(data)?),
                &[],
            )
            .await
    }

    /// Record a student's result for an olympiad.
    pub async fn add_result(&self, data: &NewResult) -> ApiResult<Created> {
        info!(
            "Recording result for student {} in olympiad {}",
            data.student_id, data.olympiad_id
        );
        self.dispatch
            .call(
                OlympiadAction::Result.into(),
                Some(serde_json::to_value(data)?),
                &[],
            )
            .await
    }

    /// List results for a student. An absent id means the caller, as
    /// resolved server-side from the bearer token.
    pub async fn my_results(&self, student_id: Option<i64>) -> ApiResult<Vec<OlympiadResult>> {
        let envelope: ResultsEnvelope = self
            .dispatch
            .call(
                OlympiadAction::MyResults.into(),
                None,
                &student_params(student_id),
            )
            .await?;
        Ok(envelope.results)
    }

    /// Aggregate statistics for a student. An absent id means the caller.
    pub async fn stats(&self, student_id: Option<i64>) -> ApiResult<StudentStats> {
        let envelope: StatsEnvelope = self
            .dispatch
            .call(
                OlympiadAction::Stats.into(),
                None,
                &student_params(student_id),
            )
            .await?;
        Ok(envelope.stats)
    }

    /// List all registered students. Teachers and admins only.
    pub async fn students(&self) -> ApiResult<Vec<User>> {
        let envelope: StudentsEnvelope = self
            .dispatch
            .call(OlympiadAction::Students.into(), None, &[])
            .await?;
        Ok(envelope.students)
    }

    /// Approve an olympiad. Approving an already-approved olympiad still
    /// succeeds.
    pub async fn approve(&self, olympiad_id: i64) -> ApiResult<Message> {
        info!("Approving olympiad {}", olympiad_id);
        let body = serde_json::json!({ "olympiad_id": olympiad_id });
        self.dispatch
            .call(OlympiadAction::Approve.into(), Some(body), &[])
            .await
    }

    /// Fetch olympiads and students concurrently for a dashboard render.
    /// Fails as a whole if either read fails.
    pub async fn dashboard(&self, filter: &OlympiadFilter) -> ApiResult<DashboardData> {
        let (olympiads, students) = tokio::try_join!(self.list(filter), self.students())?;
        Ok(DashboardData {
            olympiads,
            students,
        })
    }
}

fn student_params(student_id: Option<i64>) -> Vec<(&'static str, String)> {
    match student_id {
        Some(id) => vec![("student_id", id.to_string())],
        None => Vec::new(),
    }
}
