//! Olympiad model and related functionality

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Competitive tier of an olympiad, ordered by increasing prestige
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    School,
    Municipal,
    Regional,
    National,
}

impl Level {
    /// Get the level name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::School => "school",
            Level::Municipal => "municipal",
            Level::Regional => "regional",
            Level::National => "national",
        }
    }

    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            Level::School => "School",
            Level::Municipal => "Municipal",
            Level::Regional => "Regional",
            Level::National => "National",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Olympiad entity
///
/// Created by a teacher, unapproved by default; an admin flips
/// `is_approved` exactly once, there is no un-approve.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Olympiad {
    pub id: i64,
    pub title: String,
    pub subject: String,
    pub level: Level,
    pub event_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub is_approved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// New olympiad creation payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOlympiad {
    pub title: String,
    pub subject: String,
    pub level: Level,
    pub event_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Query filter for the olympiad listing
#[derive(Debug, Clone, Default)]
pub struct OlympiadFilter {
    /// Substring match on the subject
    pub subject: Option<String>,
    /// Exact level match
    pub level: Option<Level>,
    /// Only olympiads an admin has approved
    pub approved_only: bool,
}

impl OlympiadFilter {
    /// Render the filter as query parameters.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(subject) = &self.subject {
            params.push(("subject", subject.clone()));
        }
        if let Some(level) = self.level {
            params.push(("level", level.as_str().to_string()));
        }
        if self.approved_only {
            params.push(("approved_only", "true".to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering_by_prestige() {
        assert!(Level::School < Level::Municipal);
        assert!(Level::Municipal < Level::Regional);
        assert!(Level::Regional < Level::National);
    }

    #[test]
    fn test_level_serde_round_trip() {
        for level in [
            Level::School,
            Level::Municipal,
            Level::Regional,
            Level::National,
        ] {
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(json, format!("\"{}\"", level.as_str()));
            let back: Level = serde_json::from_str(&json).unwrap();
            assert_eq!(back, level);
        }
    }

    #[test]
    fn test_olympiad_defaults_to_unapproved() {
        let olympiad: Olympiad = serde_json::from_str(
            r#"{"id":5,"title":"City Math Cup","subject":"Math","level":"municipal","event_date":"2025-05-01"}"#,
        )
        .unwrap();
        assert!(!olympiad.is_approved);
        assert_eq!(olympiad.event_date, NaiveDate::from_ymd_opt(2025, 5, 1).unwrap());
    }

    #[test]
    fn test_filter_params() {
        let filter = OlympiadFilter {
            subject: Some("Math".to_string()),
            level: Some(Level::Regional),
            approved_only: true,
        };
        assert_eq!(
            filter.to_params(),
            vec![
                ("subject", "Math".to_string()),
                ("level", "regional".to_string()),
                ("approved_only", "true".to_string()),
            ]
        );

        assert!(OlympiadFilter::default().to_params().is_empty());
    }
}
