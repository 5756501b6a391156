use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Trainee,
    Completed,
    Official,
}

impl Role {
    /// Accepts the singular or plural team name in any case. A blank role
    /// means a new recruit, so it maps to `Trainee`.
    pub fn parse(raw: &str) -> Option<Role> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "trainee" | "trainees" => Some(Role::Trainee),
            "completed" => Some(Role::Completed),
            "official" | "officials" => Some(Role::Official),
            _ => None,
        }
    }

    pub fn default_status(self) -> &'static str {
        match self {
            Role::Trainee => "in training",
            Role::Completed => "completed",
            Role::Official => "official",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub role: Role,
    pub recruited: NaiveDate,
    #[serde(default)]
    pub instagram: String,
    #[serde(default)]
    pub prints: u32,
    pub status: String,
    #[serde(default)]
    pub phone: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddMemberRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AddMemberResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AddMemberResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
}
