//! Settings model with its camelCase JSON wire format.
//!
//! Every field has a serde default so partially edited blobs still load;
//! nothing beyond JSON syntax is ever validated. Duplicate names or a zero
//! salt-equivalent are accepted as-is and produce confusing rows or
//! Infinity cells downstream rather than an error.

use serde::{Deserialize, Serialize};

/// Root settings structure, persisted as a single JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Desired ratio of salt mass to net ingredient mass.
    #[serde(default = "default_target_concentration")]
    pub target_concentration: f64,

    /// Configured seasonings, in display order.
    #[serde(default)]
    pub seasonings: Vec<Seasoning>,

    /// Configured containers, in display order.
    #[serde(default)]
    pub containers: Vec<Container>,
}

fn default_target_concentration() -> f64 {
    0.6
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_concentration: default_target_concentration(),
            seasonings: Vec::new(),
            containers: Vec::new(),
        }
    }
}

/// A seasoning and its salt equivalence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seasoning {
    /// Display name, also used as the column key.
    #[serde(default)]
    pub name: String,

    /// Pronunciation aid shown nowhere in the logic.
    #[serde(default)]
    pub reading: String,

    /// Grams of pure salt one gram of this seasoning is equivalent to.
    #[serde(default)]
    pub salt_equivalent_per_gram: f64,
}

/// A container and its tare weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    /// Display name, also used as the row key.
    #[serde(default)]
    pub name: String,

    /// Pronunciation aid shown nowhere in the logic.
    #[serde(default)]
    pub reading: String,

    /// Weight of the empty container in grams.
    #[serde(default)]
    pub tare_weight_grams: f64,
}

/// A complete example configuration, shown as the editor placeholder.
pub const SAMPLE_SETTINGS_JSON: &str = r#"{
    "targetConcentration": 0.6,
    "seasonings": [
        {
            "name": "Salt",
            "reading": "salt",
            "saltEquivalentPerGram": 100
        },
        {
            "name": "Mentsuyu",
            "reading": "mentsuyu",
            "saltEquivalentPerGram": 16.0
        },
        {
            "name": "Consomme",
            "reading": "consomme",
            "saltEquivalentPerGram": 2.5
        }
    ],
    "containers": [
        {
            "name": "Inner pot",
            "reading": "inner pot",
            "tareWeightGrams": 562
        },
        {
            "name": "Bowl 1",
            "reading": "bowl one",
            "tareWeightGrams": 180
        },
        {
            "name": "Bowl 2",
            "reading": "bowl two",
            "tareWeightGrams": 280
        },
        {
            "name": "Bowl 3",
            "reading": "bowl three",
            "tareWeightGrams": 500
        }
    ]
}"#;

impl Settings {
    /// Build the typed view of an arbitrary committed JSON value.
    ///
    /// The editor accepts any syntactically valid JSON, so the stored value
    /// may not be settings-shaped at all. Missing fields fall back to their
    /// defaults via serde; a value that cannot deserialize (wrong types)
    /// degrades to the full defaults with a warning instead of failing.
    pub fn from_value(value: serde_json::Value) -> Self {
        match serde_json::from_value(value) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("stored settings are not settings-shaped: {}", e);
                Settings::default()
            }
        }
    }
}
