//! Control identifiers and control values
//!
//! The browser owns the current value of every control and sends the full
//! [`ControlState`] with each update. Handlers only read it.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

use crate::dataset::Dataset;
use crate::errors::{DashboardError, Result};

/// Sentinel dropdown value meaning "do not filter by site"
pub const ALL_SITES: &str = "ALL";

/// Input controls on the page
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumIter, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ControlId {
    SiteDropdown,
    PayloadSlider,
}

/// Chart regions on the page
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, EnumIter, EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum OutputId {
    SuccessPieChart,
    SuccessPayloadScatterChart,
}

/// Dropdown selection
///
/// Any string other than [`ALL_SITES`] is used verbatim as a site filter key,
/// even if no record carries that site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    pub fn parse(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    /// Exact, case-sensitive match
    pub fn matches(&self, launch_site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(site) => site == launch_site,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(site) => site,
        }
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value)
        }
    }
}

impl From<SiteSelection> for String {
    fn from(value: SiteSelection) -> Self {
        match value {
            SiteSelection::All => ALL_SITES.to_string(),
            SiteSelection::Site(site) => site,
        }
    }
}

impl std::fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed payload interval `[low, high]`, serialized as a two-element array
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Result<Self> {
        if !low.is_finite() || !high.is_finite() {
            return Err(DashboardError::validation(format!(
                "Payload range bounds must be finite numbers, got [{}, {}]",
                low, high
            )));
        }
        if low > high {
            return Err(DashboardError::validation(format!(
                "Payload range low ({}) must not exceed high ({})",
                low, high
            )));
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low <= payload_mass_kg && payload_mass_kg <= self.high
    }
}

impl TryFrom<[f64; 2]> for PayloadRange {
    type Error = DashboardError;

    fn try_from(value: [f64; 2]) -> Result<Self> {
        PayloadRange::new(value[0], value[1])
    }
}

impl From<PayloadRange> for [f64; 2] {
    fn from(value: PayloadRange) -> Self {
        [value.low, value.high]
    }
}

/// Current value of every input control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlState {
    #[serde(rename = "site-dropdown", default)]
    pub site: SiteSelection,
    #[serde(rename = "payload-slider")]
    pub payload: PayloadRange,
}

impl ControlState {
    pub fn new(site: SiteSelection, payload: PayloadRange) -> Self {
        Self { site, payload }
    }

    /// "All sites" over the observed payload bounds, or over the slider
    /// bounds when the dataset is empty
    pub fn initial(dataset: &Dataset, slider_min: f64, slider_max: f64) -> Self {
        let payload = dataset
            .payload_bounds()
            .and_then(|b| PayloadRange::new(b.min, b.max).ok())
            .unwrap_or(PayloadRange {
                low: slider_min.min(slider_max),
                high: slider_max.max(slider_min),
            });
        Self {
            site: SiteSelection::All,
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{LaunchRecord, Outcome};
    use std::str::FromStr;

    #[test]
    fn test_site_selection_parse() {
        assert_eq!(SiteSelection::parse("ALL"), SiteSelection::All);
        assert_eq!(
            SiteSelection::parse("KSC LC-39A"),
            SiteSelection::Site("KSC LC-39A".to_string())
        );
        // 哨兵值大小写敏感
        assert_eq!(
            SiteSelection::parse("all"),
            SiteSelection::Site("all".to_string())
        );
    }

    #[test]
    fn test_site_selection_matches_exactly() {
        let site = SiteSelection::parse("KSC LC-39A");
        assert!(site.matches("KSC LC-39A"));
        assert!(!site.matches("ksc lc-39a"));
        assert!(!site.matches("KSC LC-39A "));
        assert!(SiteSelection::All.matches("anything"));
    }

    #[test]
    fn test_payload_range_rejects_inverted() {
        assert!(PayloadRange::new(6000.0, 2000.0).is_err());
        assert!(PayloadRange::new(f64::NAN, 2000.0).is_err());
        assert!(PayloadRange::new(2000.0, 2000.0).is_ok());
    }

    #[test]
    fn test_payload_range_is_closed() {
        let range = PayloadRange::new(2000.0, 6000.0).unwrap();
        assert!(range.contains(2000.0));
        assert!(range.contains(6000.0));
        assert!(!range.contains(1999.9));
        assert!(!range.contains(6000.1));
    }

    #[test]
    fn test_control_state_json_shape() {
        let state: ControlState = serde_json::from_str(
            r#"{"site-dropdown": "VAFB SLC-4E", "payload-slider": [0, 5000]}"#,
        )
        .unwrap();
        assert_eq!(state.site, SiteSelection::Site("VAFB SLC-4E".to_string()));
        assert_eq!(state.payload.high(), 5000.0);

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["payload-slider"], serde_json::json!([0.0, 5000.0]));
    }

    #[test]
    fn test_control_state_rejects_inverted_range() {
        let result: std::result::Result<ControlState, _> = serde_json::from_str(
            r#"{"site-dropdown": "ALL", "payload-slider": [5000, 0]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_initial_state_uses_dataset_bounds() {
        let dataset = Dataset::from_records(vec![
            LaunchRecord::new("A", 500.0, Outcome::Success, "FT"),
            LaunchRecord::new("B", 9600.0, Outcome::Failure, "B4"),
        ]);
        let state = ControlState::initial(&dataset, 0.0, 10000.0);
        assert_eq!(state.site, SiteSelection::All);
        assert_eq!(state.payload.low(), 500.0);
        assert_eq!(state.payload.high(), 9600.0);

        let empty = ControlState::initial(&Dataset::default(), 0.0, 10000.0);
        assert_eq!(empty.payload.high(), 10000.0);
    }

    #[test]
    fn test_ids_round_trip_through_strum() {
        assert_eq!(ControlId::SiteDropdown.as_ref(), "site-dropdown");
        assert_eq!(
            OutputId::from_str("success-payload-scatter-chart").unwrap(),
            OutputId::SuccessPayloadScatterChart
        );
        assert!(OutputId::from_str("unknown-chart").is_err());
    }
}
