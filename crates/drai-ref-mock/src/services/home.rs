//! Mocked home-screen service.

use tracing::info;

use drai_contracts::profile::{Doctor, UserInfo};

use crate::mock_data;

/// The signed-in user.
pub fn user_info() -> UserInfo {
    mock_data::user_info()
}

/// Recommended doctors, in display order.
pub fn recommended_doctors() -> Vec<Doctor> {
    let doctors = mock_data::recommended_doctors();
    info!(count = doctors.len(), "recommended doctors served");
    doctors
}

/// Recommended doctors who can take a booking right now.
pub fn available_doctors() -> Vec<Doctor> {
    recommended_doctors().into_iter().filter(|d| d.available).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_screen_data() {
        assert!(user_info().has_active_subscription);
        assert_eq!(recommended_doctors().len(), 3);

        let ids: Vec<String> = available_doctors().into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec!["doc1", "doc3"]);
    }
}
