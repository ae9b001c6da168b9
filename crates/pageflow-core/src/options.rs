//! Extraction options threaded through every reconstruction step.

use crate::boilerplate::BoilerplateRules;
use crate::error::ExtractError;
use crate::paragraph::JoinRules;

/// Options controlling page reconstruction.
///
/// Every component takes the values it needs from here rather than reading
/// free constants, so components stay pure and testable in isolation.
/// Provides sensible defaults for all settings; call [`validate`](Self::validate)
/// before a run to reject invalid values up front.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Maximum number of pages to process (default: None = all pages).
    pub max_pages: Option<usize>,
    /// Vertical tolerance for grouping tokens into the same row, in page
    /// units (default: 3.0).
    pub y_tolerance: f64,
    /// Minimum horizontal gap treated as a column gutter rather than
    /// inter-word spacing, in page units (default: 25.0).
    pub min_gap: f64,
    /// Horizontal midpoint of the column split as a fraction of page width
    /// (default: 0.5).
    pub gutter_ratio: f64,
    /// Whether to drop page-number and running-header lines (default: true).
    pub drop_boilerplate: bool,
    /// Band excluded from the top of the page before row grouping, in page
    /// units (default: 0.0).
    pub crop_top: f64,
    /// Band excluded from the bottom of the page before row grouping, in
    /// page units (default: 0.0).
    pub crop_bottom: f64,
    /// Patterns identifying boilerplate lines; only consulted when
    /// `drop_boilerplate` is true.
    pub boilerplate: BoilerplateRules,
    /// Patterns deciding when consecutive lines must not be joined into
    /// one paragraph.
    pub join: JoinRules,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            max_pages: None,
            y_tolerance: 3.0,
            min_gap: 25.0,
            gutter_ratio: 0.5,
            drop_boilerplate: true,
            crop_top: 0.0,
            crop_bottom: 0.0,
            boilerplate: BoilerplateRules::default(),
            join: JoinRules::default(),
        }
    }
}

impl ExtractOptions {
    /// Check all numeric settings, rejecting the run before any page is
    /// processed.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::ConfigError`] when a tolerance or crop is
    /// negative or non-finite, or when `gutter_ratio` falls outside the
    /// open interval (0, 1).
    pub fn validate(&self) -> Result<(), ExtractError> {
        check_non_negative("y_tolerance", self.y_tolerance)?;
        check_non_negative("min_gap", self.min_gap)?;
        check_non_negative("crop_top", self.crop_top)?;
        check_non_negative("crop_bottom", self.crop_bottom)?;

        if !self.gutter_ratio.is_finite() || self.gutter_ratio <= 0.0 || self.gutter_ratio >= 1.0 {
            return Err(ExtractError::ConfigError(format!(
                "gutter_ratio must lie strictly between 0 and 1, got {}",
                self.gutter_ratio
            )));
        }

        Ok(())
    }
}

fn check_non_negative(name: &str, value: f64) -> Result<(), ExtractError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ExtractError::ConfigError(format!(
            "{name} must be a non-negative finite number, got {value}"
        )));
    }
    Ok(())
}
