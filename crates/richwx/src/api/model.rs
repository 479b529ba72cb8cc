//! NWS alert payloads.
//!
//! Only the fields richwx displays are decoded; the API sends many more.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// CAP severity of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Extreme,
    Severe,
    Moderate,
    Minor,
    #[serde(other)]
    Unknown,
}

impl Severity {
    /// Extreme alerts get extra emphasis on screen.
    pub fn is_extreme(&self) -> bool {
        matches!(self, Severity::Extreme)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Extreme => "Extreme",
            Severity::Severe => "Severe",
            Severity::Moderate => "Moderate",
            Severity::Minor => "Minor",
            Severity::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// The `properties` of one alert feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    pub area_desc: String,
    pub sent: DateTime<FixedOffset>,
    #[serde(default)]
    pub expires: Option<DateTime<FixedOffset>>,
    pub severity: Severity,
    pub event: String,
    pub sender_name: String,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub instruction: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    pub properties: Alert,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Unwraps each feature's properties.
    pub fn into_alerts(self) -> Vec<Alert> {
        self.features.into_iter().map(|f| f.properties).collect()
    }
}

/// An `application/problem+json` error body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Problem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}
