//! Authenticated user profile.

use serde::{Deserialize, Serialize};

use bookstall_core::UserId;

/// Account details returned by login and token verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub is_staff: bool,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl UserProfile {
    /// Display name: "First Last", falling back to the email address.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.email.clone()
        } else {
            full.to_string()
        }
    }

    /// Staff accounts may manage orders (status updates, deletion).
    pub fn can_manage_orders(&self) -> bool {
        self.is_staff
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(first: &str, last: &str) -> UserProfile {
        UserProfile {
            id: UserId::new(1),
            email: "reader@example.com".to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            phone: String::new(),
            is_staff: false,
            is_active: true,
        }
    }

    #[test]
    fn display_name_prefers_full_name() {
        assert_eq!(profile("Ada", "Lovelace").display_name(), "Ada Lovelace");
    }

    #[test]
    fn display_name_falls_back_to_email() {
        assert_eq!(profile("", "").display_name(), "reader@example.com");
    }
}
