// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme mode management.

use serde::{Deserialize, Serialize};

/// User-selectable theme mode, persisted in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Resolves the effective dark/light choice, consulting the OS when in
    /// `System` mode. Detection failures fall back to light.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_ignore_the_system() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
    }

    #[test]
    fn serializes_lowercase() {
        let value = toml::Value::try_from(ThemeMode::System).expect("serialize");
        assert_eq!(value.as_str(), Some("system"));
    }

    #[test]
    fn deserializes_lowercase() {
        let mode: ThemeMode = toml::Value::String("dark".into())
            .try_into()
            .expect("deserialize");
        assert_eq!(mode, ThemeMode::Dark);
    }
}
