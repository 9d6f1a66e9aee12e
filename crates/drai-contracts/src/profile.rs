//! User profile and home-screen types.

use serde::{Deserialize, Serialize};

/// One entry of the user's medical history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalHistoryEntry {
    pub id: String,
    /// ISO date (`YYYY-MM-DD`).
    pub date: String,
    /// Visit type, e.g. "Blood Test".
    #[serde(rename = "type")]
    pub kind: String,
    pub notes: String,
}

/// The user profile shown on the profile screen.
///
/// Dates are kept as ISO strings; formatting happens at display time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub age: Option<u32>,
    pub date_of_birth: Option<String>,
    pub last_checkup_date: Option<String>,
    /// One of `Normal`, `Attention`, `Critical`, `Review`; other values are
    /// displayed verbatim.
    pub health_status: String,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    pub medical_history: Vec<MedicalHistoryEntry>,
}

/// A partial profile update. `Some` fields overwrite the stored profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub date_of_birth: Option<String>,
    pub last_checkup_date: Option<String>,
    pub health_status: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}

/// Summary of the signed-in user for the home screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub name: String,
    pub profile_picture: Option<String>,
    /// ISO date of the last consultation.
    pub last_consultation: String,
    pub has_active_subscription: bool,
}

/// A doctor recommended on the home screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub rating: f32,
    pub available: bool,
}
