use crate::error::ConfigError;
use chrono::FixedOffset;
use kanjy_domain::{AttendanceMatcher, Multiplier, RoleTable, StandardRole};
use std::env;

pub const UTC_OFFSET_VAR: &str = "KANJY_UTC_OFFSET";
pub const ROLE_MULTIPLIERS_VAR: &str = "KANJY_ROLE_MULTIPLIERS";

/// Organizer settings shared by every session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KanjyConfig {
    /// Time zone used for same-day comparisons.
    pub organizer_offset: FixedOffset,
    pub role_table: RoleTable,
}

impl KanjyConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(UTC_OFFSET_VAR) {
            config.organizer_offset = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidOffset(raw.clone()))?;
        }

        if let Some(raw) = lookup(ROLE_MULTIPLIERS_VAR) {
            for (role, multiplier) in parse_role_multipliers(&raw)? {
                config.role_table.set(role, multiplier);
            }
        }

        tracing::debug!(
            organizer_offset = %config.organizer_offset,
            roles = ?config.role_table.iter().collect::<Vec<_>>(),
            "Configuration loaded"
        );
        Ok(config)
    }

    pub fn matcher(&self) -> AttendanceMatcher {
        AttendanceMatcher::new(self.organizer_offset)
    }
}

impl Default for KanjyConfig {
    fn default() -> Self {
        Self {
            organizer_offset: AttendanceMatcher::jst().offset(),
            role_table: RoleTable::default(),
        }
    }
}

/// Parses `director=1.5,manager=1.2`. Blank entries are skipped.
fn parse_role_multipliers(raw: &str) -> Result<Vec<(StandardRole, Multiplier)>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (role, multiplier) = entry
                .split_once('=')
                .ok_or_else(|| ConfigError::MalformedRoleEntry(entry.to_string()))?;
            let invalid = |source| ConfigError::InvalidRoleEntry {
                entry: entry.to_string(),
                source,
            };
            let role: StandardRole = role.parse().map_err(invalid)?;
            let multiplier: Multiplier = multiplier.parse().map_err(invalid)?;
            Ok((role, multiplier))
        })
        .collect()
}
