//! Domain DTOs for the teams API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.
//!
//! Decoding is lenient: every field defaults when absent and `id` accepts a
//! JSON number as well as a string, since the collection is served by
//! third-party backends that are not consistent about either.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;

/// A single team record. Updates always resend the whole record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    #[serde(default, deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub goals: i64,
    #[serde(default)]
    pub logo: String,
}

impl Team {
    /// Copy of this team with a new description, ready for a full replace.
    pub fn with_description(&self, description: &str) -> Team {
        Team {
            description: description.to_string(),
            ..self.clone()
        }
    }
}

/// The user-entered fields of a team that does not exist yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamDraft {
    pub name: String,
    pub description: String,
    pub logo: String,
}

impl TeamDraft {
    pub fn new(name: &str, description: &str, logo: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            logo: logo.to_string(),
        }
    }

    /// Every field must hold something other than whitespace.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("name", &self.name),
            ("description", &self.description),
            ("logo", &self.logo),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField(field));
            }
        }
        Ok(())
    }

    /// Validate and turn the draft into a new team with zeroed stats.
    pub fn into_team(self, id: String) -> Result<Team, ValidationError> {
        self.validate()?;
        Ok(Team {
            id,
            name: self.name,
            description: self.description,
            points: 0,
            goals: 0,
            logo: self.logo,
        })
    }
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<RawId>::deserialize(deserializer)? {
        Some(RawId::Text(s)) => s,
        Some(RawId::Number(n)) => n.to_string(),
        None => String::new(),
    })
}
