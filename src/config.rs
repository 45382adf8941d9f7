//! Evaluation settings.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Settings for [`crate::chinese::Almanac`].
///
/// Missing fields take their default values.
///
/// # Example
///
/// ```
/// use huangli::Config;
///
/// let config = Config::from_toml_str("year_rules = false").unwrap();
/// assert_eq!(480, config.tz_offset_minutes);
/// assert!(!config.year_rules);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Offset (east of UTC) of the civil timezone deciding which date an
    /// instant falls on. Beijing time (+480) by default.
    pub tz_offset_minutes: i32,
    /// Whether rules depending on the year branch (劫煞) are evaluated.
    pub year_rules: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tz_offset_minutes: 480,
            year_rules: true,
        }
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}
