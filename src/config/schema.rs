use serde::{Deserialize, Serialize};

use crate::output::ColorMode;
use crate::scoring::DegeneratePolicy;

pub const DEFAULT_POINTS_AVAILABLE: u32 = 100;

/// Optional settings file.
///
/// Example YAML:
/// ```yaml
/// points_available: 10
/// case_sensitive: false
/// degenerate: reject
/// color: never
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Points awarded for a perfect ordering (default: 100)
    #[serde(default)]
    pub points_available: Option<i64>,

    /// Compare answers with exact case (default: false)
    #[serde(default)]
    pub case_sensitive: Option<bool>,

    /// Policy for fewer than two provided answers: "zero" or "reject"
    #[serde(default)]
    pub degenerate: Option<String>,

    /// Colored output: "auto", "always" or "never"
    #[serde(default)]
    pub color: Option<String>,
}

impl Settings {
    /// Values below are only meaningful after `validate_settings` passed;
    /// anything unparseable falls back to the default.
    pub fn points_available(&self) -> u32 {
        self.points_available
            .and_then(|p| u32::try_from(p).ok())
            .unwrap_or(DEFAULT_POINTS_AVAILABLE)
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive.unwrap_or(false)
    }

    pub fn degenerate_policy(&self) -> DegeneratePolicy {
        self.degenerate
            .as_deref()
            .and_then(|s| DegeneratePolicy::parse(s).ok())
            .unwrap_or_default()
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color
            .as_deref()
            .and_then(|s| ColorMode::parse(s).ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.points_available(), 100);
        assert!(!settings.case_sensitive());
        assert_eq!(settings.degenerate_policy(), DegeneratePolicy::Zero);
        assert_eq!(settings.color_mode(), ColorMode::Auto);
    }

    #[test]
    fn test_full_settings_parse() {
        let yaml = r#"
points_available: 10
case_sensitive: true
degenerate: reject
color: never
"#;
        let settings: Settings = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(settings.points_available(), 10);
        assert!(settings.case_sensitive());
        assert_eq!(settings.degenerate_policy(), DegeneratePolicy::Reject);
        assert_eq!(settings.color_mode(), ColorMode::Never);
    }

    #[test]
    fn test_empty_settings_parse() {
        let settings: Settings = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<Settings, _> = serde_saphyr::from_str("pointz: 5\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_settings_serde_roundtrip() {
        let settings = Settings {
            points_available: Some(42),
            case_sensitive: Some(true),
            degenerate: Some("zero".to_string()),
            color: None,
        };
        let yaml = serde_saphyr::to_string(&settings).unwrap();
        let parsed: Settings = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(settings, parsed);
    }
}
