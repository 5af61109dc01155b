//! Olympiad result model and derived statistics

use super::Level;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Recorded participation of a student in an olympiad
///
/// Immutable once created; the listing carries denormalized olympiad
/// columns for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OlympiadResult {
    pub id: i64,
    pub olympiad_id: i64,
    pub student_id: i64,
    pub place: u32,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub olympiad_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_date: Option<NaiveDate>,
}

/// New result creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewResult {
    pub student_id: i64,
    pub olympiad_id: i64,
    pub place: u32,
    pub year: i32,
}

/// Aggregate statistics for a student, recomputed server-side per query
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StudentStats {
    /// Total recorded participations
    pub total: i64,
    /// First places
    pub wins: i64,
    /// Top-three places
    pub prizes: i64,
}
