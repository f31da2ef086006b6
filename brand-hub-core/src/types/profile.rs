//! Operator profile and display preference types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{CoreError, CoreResult};

/// Operator role, persisted as its display string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OperatorRole {
    #[default]
    Administrator,
    Editor,
    Viewer,
    /// Any other role text, kept verbatim
    Other(String),
}

impl OperatorRole {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Administrator => "Administrator",
            Self::Editor => "Editor",
            Self::Viewer => "Viewer",
            Self::Other(role) => role,
        }
    }
}

impl From<&str> for OperatorRole {
    fn from(role: &str) -> Self {
        match role {
            "Administrator" => Self::Administrator,
            "Editor" => Self::Editor,
            "Viewer" => Self::Viewer,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for OperatorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for OperatorRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OperatorRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from(raw.as_str()))
    }
}

/// Profile of the single operator using the console
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OperatorProfile {
    pub name: String,
    pub email: String,
    pub role: OperatorRole,
    /// Avatar image URL, empty when unset
    #[serde(default)]
    pub avatar: String,
}

impl Default for OperatorProfile {
    fn default() -> Self {
        Self {
            name: "Admin User".to_string(),
            email: "admin@brandhub.com".to_string(),
            role: OperatorRole::Administrator,
            avatar: String::new(),
        }
    }
}

/// Edit-profile form payload; the avatar is changed separately
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    pub role: OperatorRole,
}

impl ProfileUpdate {
    pub fn validate(&self) -> CoreResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Profile name cannot be empty".to_string(),
            ));
        }
        if !self.email.contains('@') {
            return Err(CoreError::ValidationError(format!(
                "Invalid email address: '{}'",
                self.email
            )));
        }
        Ok(())
    }

    pub fn apply_to(&self, profile: &mut OperatorProfile) {
        profile.name.clone_from(&self.name);
        profile.email.clone_from(&self.email);
        profile.role.clone_from(&self.role);
    }
}

/// Color theme preference
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl FromStr for Theme {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(CoreError::ValidationError(format!("Unknown theme: '{other}'"))),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
