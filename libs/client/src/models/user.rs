//! User model and related functionality

use serde::{Deserialize, Serialize};

/// Platform role of a principal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

impl Role {
    /// Get the role name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User entity
///
/// `grade` is present iff the role is student, `subject` iff it is teacher.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl User {
    /// Display name, the way the platform renders it.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Registration payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

/// Response of the login and register actions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthPayload {
    pub token: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serde_round_trip() {
        for role in [Role::Student, Role::Teacher, Role::Admin] {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
            let back: Role = serde_json::from_str(&json).unwrap();
            assert_eq!(back, role);
        }
    }

    #[test]
    fn test_user_optional_fields_omitted() {
        let user = User {
            id: 7,
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            email: "ann@x.com".to_string(),
            role: Role::Admin,
            grade: None,
            subject: None,
            created_at: None,
        };

        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("grade").is_none());
        assert!(value.get("subject").is_none());
        assert_eq!(user.full_name(), "Ann Lee");
    }

    #[test]
    fn test_student_payload_deserializes() {
        let user: User = serde_json::from_str(
            r#"{"id":1,"first_name":"Ann","last_name":"Lee","email":"ann@x.com","role":"student","grade":9}"#,
        )
        .unwrap();
        assert_eq!(user.role, Role::Student);
        assert_eq!(user.grade, Some(9));
        assert_eq!(user.subject, None);
    }
}
