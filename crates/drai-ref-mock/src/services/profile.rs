//! In-memory profile store.
//!
//! Holds a single user profile behind a `Mutex`. Updates are merged into the
//! stored profile and live until the store is dropped.

use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;
use tracing::info;

use drai_contracts::{
    error::{DrAiError, DrAiResult},
    profile::{MedicalHistoryEntry, Profile, ProfilePatch},
};

use drai_core::format::{self, StatusBadge};

use crate::mock_data::{initial_profile, UPLOADED_AVATAR_URL};

/// The profile as the profile screen renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileView {
    pub name: String,
    /// Shown in place of a missing avatar.
    pub initials: String,
    /// Derived from the date of birth; falls back to the stored age.
    pub age: Option<u32>,
    pub date_of_birth: String,
    pub last_checkup: String,
    pub status: StatusBadge,
    pub avatar_url: Option<String>,
}

impl ProfileView {
    pub fn from_profile(profile: &Profile) -> Self {
        let date_of_birth = profile.date_of_birth.as_deref().unwrap_or_default();
        let last_checkup = profile.last_checkup_date.as_deref().unwrap_or_default();

        Self {
            name: profile.name.clone(),
            initials: format::initials(&profile.name),
            age: format::age(date_of_birth).or(profile.age),
            date_of_birth: format::format_date(date_of_birth, false),
            last_checkup: format::format_date(last_checkup, false),
            status: format::health_status(&profile.health_status),
            avatar_url: profile.avatar_url.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProfileStore {
    profile: Arc<Mutex<Profile>>,
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new(initial_profile())
    }
}

impl ProfileStore {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile: Arc::new(Mutex::new(profile)),
        }
    }

    fn lock(&self) -> DrAiResult<MutexGuard<'_, Profile>> {
        self.profile.lock().map_err(|e| DrAiError::StateError {
            reason: format!("profile lock poisoned: {}", e),
        })
    }

    /// A snapshot of the current profile.
    pub fn profile(&self) -> DrAiResult<Profile> {
        Ok(self.lock()?.clone())
    }

    /// Merge `patch` into the stored profile and return the result.
    pub fn update(&self, patch: ProfilePatch) -> DrAiResult<Profile> {
        let mut profile = self.lock()?;

        let ProfilePatch {
            name,
            age,
            date_of_birth,
            last_checkup_date,
            health_status,
            email,
            avatar_url,
        } = patch;

        if let Some(name) = name {
            profile.name = name;
        }
        if let Some(status) = health_status {
            profile.health_status = status;
        }
        if age.is_some() {
            profile.age = age;
        }
        if date_of_birth.is_some() {
            profile.date_of_birth = date_of_birth;
        }
        if last_checkup_date.is_some() {
            profile.last_checkup_date = last_checkup_date;
        }
        if email.is_some() {
            profile.email = email;
        }
        if avatar_url.is_some() {
            profile.avatar_url = avatar_url;
        }

        info!(profile_id = %profile.id, "profile updated");
        Ok(profile.clone())
    }

    /// Store a new profile picture and return its URL.
    ///
    /// The image bytes are accepted but not kept; the mocked upload always
    /// yields the same URL.
    pub fn upload_picture(&self, image: &[u8]) -> DrAiResult<String> {
        let mut profile = self.lock()?;
        profile.avatar_url = Some(UPLOADED_AVATAR_URL.to_string());
        info!(bytes = image.len(), "profile picture uploaded");
        Ok(UPLOADED_AVATAR_URL.to_string())
    }

    /// The current profile, formatted for display.
    pub fn view(&self) -> DrAiResult<ProfileView> {
        Ok(ProfileView::from_profile(&*self.lock()?))
    }

    pub fn medical_history(&self) -> DrAiResult<Vec<MedicalHistoryEntry>> {
        Ok(self.lock()?.medical_history.clone())
    }
}
