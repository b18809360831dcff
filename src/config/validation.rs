use super::schema::Settings;
use crate::output::ColorMode;
use crate::scoring::DegeneratePolicy;

/// Validate settings at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_settings(settings: &Settings) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(points) = settings.points_available {
        if points < 0 {
            errors.push("points_available: must be non-negative".to_string());
        } else if u32::try_from(points).is_err() {
            errors.push(format!("points_available: must be at most {}", u32::MAX));
        }
    }

    if let Some(ref degenerate) = settings.degenerate {
        if let Err(e) = DegeneratePolicy::parse(degenerate) {
            errors.push(format!("degenerate: invalid '{}' - {}", degenerate, e));
        }
    }

    if let Some(ref color) = settings.color {
        if let Err(e) = ColorMode::parse(color) {
            errors.push(format!("color: invalid '{}' - {}", color, e));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
