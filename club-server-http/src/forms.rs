//! Typed request bodies, one per form-handling route.

use club_server_domain::{
    contact::NewContact, non_blank, player::NewPlayer, registration::RegistrationSubmission,
};
use serde::{Deserialize, Deserializer};

#[derive(Debug, Default, Deserialize)]
pub struct RegistrationForm {
    pub fullname: Option<String>,
    pub name: Option<String>,
    pub gender: Option<String>,
    pub sport: Option<String>,
    pub department: Option<String>,
    pub contact: Option<String>,
    pub email: Option<String>,
}

impl From<RegistrationForm> for RegistrationSubmission {
    /// `fullname` wins over `name` unless it is blank.
    fn from(form: RegistrationForm) -> Self {
        RegistrationSubmission {
            name: non_blank(form.fullname).or_else(|| non_blank(form.name)),
            gender: form.gender,
            sport: form.sport,
            department: form.department,
            contact: form.contact,
            email: form.email,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PlayerForm {
    pub name: Option<String>,
    pub team: Option<String>,
    pub position: Option<String>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub matches: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub goals: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub assists: Option<i64>,
}

impl From<PlayerForm> for NewPlayer {
    fn from(form: PlayerForm) -> Self {
        NewPlayer {
            name: form.name,
            team: form.team,
            position: form.position,
            matches: form.matches,
            goals: form.goals,
            assists: form.assists,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl From<ContactForm> for NewContact {
    fn from(form: ContactForm) -> Self {
        NewContact {
            name: form.name,
            email: form.email,
            message: form.message,
        }
    }
}

/// Integer fields that are missing or do not parse become `None`.
fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|v| v.trim().parse().ok()))
}
