//! Users, roles and the trainer roster

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Trainer,
    Client,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Trainer => "trainer",
            Role::Client => "client",
        }
    }

    /// Admins and trainers may change the schedule
    pub fn can_manage_schedule(&self) -> bool {
        matches!(self, Role::Admin | Role::Trainer)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "trainer" => Ok(Role::Trainer),
            "client" => Ok(Role::Client),
            _ => Err(format!(
                "Invalid role: '{}'. Valid roles are: admin, trainer, client",
                s
            )),
        }
    }
}

/// The signed-in user issuing requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: String,
    pub role: Role,
    pub first_name: Option<String>,
}

impl Actor {
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Actor {
            id: id.into(),
            role,
            first_name: None,
        }
    }

    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }
}

/// A roster entry as returned by the trainers endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trainer {
    #[serde(deserialize_with = "super::session::id_from_string_or_number")]
    pub id: String,
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl Trainer {
    pub fn new(id: &str, first_name: &str, last_name: &str) -> Self {
        Trainer {
            id: id.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// First name of a trainer on the roster
pub fn trainer_first_name<'a>(roster: &'a [Trainer], id: &str) -> Option<&'a str> {
    roster
        .iter()
        .find(|trainer| trainer.id == id)
        .map(|trainer| trainer.first_name.as_str())
}
