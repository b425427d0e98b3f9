//! Seed-data configuration.
//!
//! The administrator account is guaranteed to exist after initialization,
//! and its password is reset to `admin_password` on every initialization
//! pass. The reset is intentional; see DESIGN.md before changing it.

use serde::{Deserialize, Serialize};

/// Built-in administrator account settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Admin login email; also the key the initialization pass matches on.
    #[serde(default = "default_admin_email")]
    pub admin_email: String,
    /// Fixed admin password re-applied on every initialization.
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
    /// Admin display name.
    #[serde(default = "default_admin_name")]
    pub admin_name: String,
    /// Admin identification document number.
    #[serde(default = "default_admin_identification")]
    pub admin_identification: String,
    /// Admin nationality.
    #[serde(default = "default_admin_nationality")]
    pub admin_nationality: String,
    /// Admin contact phone.
    #[serde(default = "default_admin_phone")]
    pub admin_phone: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            admin_email: default_admin_email(),
            admin_password: default_admin_password(),
            admin_name: default_admin_name(),
            admin_identification: default_admin_identification(),
            admin_nationality: default_admin_nationality(),
            admin_phone: default_admin_phone(),
        }
    }
}

fn default_admin_email() -> String {
    "admin@hotel.com".to_string()
}

fn default_admin_password() -> String {
    "admin2708".to_string()
}

fn default_admin_name() -> String {
    "Administrador del Hotel".to_string()
}

fn default_admin_identification() -> String {
    "12345678".to_string()
}

fn default_admin_nationality() -> String {
    "Colombiana".to_string()
}

fn default_admin_phone() -> String {
    "+57 300 123 4567".to_string()
}
