use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::shared::errors::{AppError, Result};

pub const MISSING_FIELDS_MESSAGE: &str = "Veuillez remplir tous les champs";

/// User record as stored by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub created_at: Option<NaiveDateTime>,
}

impl User {
    /// Short date label (`12/1/24, 10:15 AM`), empty when the backend sent none
    pub fn created_label(&self) -> String {
        self.created_at
            .map(|ts| ts.format("%-m/%-d/%y, %-I:%M %p").to_string())
            .unwrap_or_default()
    }

    /// Draft pre-filled with the current values, used for inline editing
    pub fn to_draft(&self) -> UserDraft {
        UserDraft::new(self.name.clone(), self.email.clone())
    }
}

/// The backend writes zone-less local timestamps; RFC 3339 values are accepted too
fn deserialize_timestamp<'de, D>(deserializer: D) -> std::result::Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}

pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse::<NaiveDateTime>()
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_local()))
}

/// Body of `POST /api/users` and `PUT /api/users/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
}

impl UserDraft {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Both fields filled (ignoring surrounding whitespace)
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }

    /// Trimmed copy of the draft, or a validation error when a field is blank
    pub fn validate(&self) -> Result<UserDraft> {
        if !self.is_complete() {
            return Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
        }
        Ok(UserDraft::new(self.name.trim(), self.email.trim()))
    }
}

/// Response of `GET /api/users/count`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct UserCount {
    pub count: u64,
}

/// Response of `POST /api/users/init`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InitUsersResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub count: u64,
}

/// Generic `{"message": "..."}` acknowledgement (delete)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusMessage {
    #[serde(default)]
    pub message: String,
}
