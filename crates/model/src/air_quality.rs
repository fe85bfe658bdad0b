use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn unknown_category() -> String {
    "Unknown".to_owned()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AirQualityIndex {
    pub code: String,
    #[serde(rename = "displayName", alias = "display_name")]
    pub display_name: String,
    #[serde(default)]
    pub aqi: i32,
    #[serde(default = "unknown_category")]
    pub category: String,
}

/// Measured air quality around an address, passed through to the views as
/// received.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AirQualitySample {
    #[serde(default)]
    pub indexes: Vec<AirQualityIndex>,
    pub health_recommendation: Option<String>,
}

impl AirQualitySample {
    pub fn index(&self, code: &str) -> Option<&AirQualityIndex> {
        self.indexes.iter().find(|index| index.code == code)
    }

    /// AQI of the first (main) index.
    pub fn main_aqi(&self) -> Option<i32> {
        self.indexes.first().map(|index| index.aqi)
    }

    pub fn main_category(&self) -> Option<&str> {
        self.indexes.first().map(|index| index.category.as_str())
    }
}

/// Average AQI of index `code` at both ends of a route. A missing sample or
/// index counts as zero.
pub fn mean_index_aqi(
    origin: Option<&AirQualitySample>,
    destination: Option<&AirQualitySample>,
    code: &str,
) -> i32 {
    let aqi_of = |sample: Option<&AirQualitySample>| {
        sample
            .and_then(|sample| sample.index(code))
            .map(|index| index.aqi)
            .unwrap_or(0)
    };
    let sum = f64::from(aqi_of(origin)) + f64::from(aqi_of(destination));
    (sum / 2.0).round() as i32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
pub enum AirQualityCategory {
    #[serde(rename = "Bom")]
    Good,
    #[serde(rename = "Moderado")]
    Moderate,
    #[serde(rename = "Ruim")]
    Poor,
    #[serde(rename = "Péssimo")]
    VeryPoor,
}

impl AirQualityCategory {
    pub const MAX_SCORE: u16 = 300;

    /// Classifies a score on the 0..=300 scale. Scores above the scale are
    /// treated as its upper end.
    pub fn from_score(score: u16) -> Self {
        match score {
            0..=50 => Self::Good,
            51..=100 => Self::Moderate,
            101..=200 => Self::Poor,
            _ => Self::VeryPoor,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Bom",
            Self::Moderate => "Moderado",
            Self::Poor => "Ruim",
            Self::VeryPoor => "Péssimo",
        }
    }
}

impl fmt::Display for AirQualityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Estimated severity derived from an emission rate. Not a regulatory index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AirQualityEstimate {
    pub score: u16,
    pub category: AirQualityCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(indexes: &[(&str, i32)]) -> AirQualitySample {
        AirQualitySample {
            indexes: indexes
                .iter()
                .map(|(code, aqi)| AirQualityIndex {
                    code: code.to_string(),
                    display_name: code.to_uppercase(),
                    aqi: *aqi,
                    category: "Boa".to_owned(),
                })
                .collect(),
            health_recommendation: None,
        }
    }

    #[test]
    fn parses_backend_sample() {
        let sample: AirQualitySample = serde_json::from_str(
            r#"{"indexes":[{"code":"uaqi","displayName":"Universal AQI","aqi":71,"category":"Good air quality"},
                           {"code":"bra_saopaulo","displayName":"IQAR"}],
                "health_recommendation":"Enjoy your usual outdoor activities."}"#,
        )
        .unwrap();
        assert_eq!(sample.main_aqi(), Some(71));
        assert_eq!(sample.main_category(), Some("Good air quality"));
        let sao_paulo = sample.index("bra_saopaulo").unwrap();
        assert_eq!(sao_paulo.aqi, 0);
        assert_eq!(sao_paulo.category, "Unknown");
    }

    #[test]
    fn empty_sample_has_no_main_index() {
        let sample = AirQualitySample::default();
        assert_eq!(sample.main_aqi(), None);
        assert_eq!(sample.main_category(), None);
    }

    #[test]
    fn mean_aqi_counts_missing_as_zero() {
        let origin = sample(&[("bra_saopaulo", 41)]);
        let destination = sample(&[("uaqi", 80), ("bra_saopaulo", 60)]);
        assert_eq!(
            mean_index_aqi(Some(&origin), Some(&destination), "bra_saopaulo"),
            51
        );
        assert_eq!(mean_index_aqi(Some(&origin), None, "bra_saopaulo"), 21);
        assert_eq!(mean_index_aqi(None, None, "bra_saopaulo"), 0);
    }

    #[test]
    fn categories_partition_the_scale() {
        assert_eq!(AirQualityCategory::from_score(0), AirQualityCategory::Good);
        assert_eq!(AirQualityCategory::from_score(50), AirQualityCategory::Good);
        assert_eq!(AirQualityCategory::from_score(51), AirQualityCategory::Moderate);
        assert_eq!(AirQualityCategory::from_score(100), AirQualityCategory::Moderate);
        assert_eq!(AirQualityCategory::from_score(101), AirQualityCategory::Poor);
        assert_eq!(AirQualityCategory::from_score(200), AirQualityCategory::Poor);
        assert_eq!(AirQualityCategory::from_score(201), AirQualityCategory::VeryPoor);
        assert_eq!(AirQualityCategory::from_score(300), AirQualityCategory::VeryPoor);
    }

    #[test]
    fn category_serializes_as_label() {
        assert_eq!(
            serde_json::to_string(&AirQualityCategory::VeryPoor).unwrap(),
            "\"Péssimo\""
        );
        assert_eq!(AirQualityCategory::Moderate.to_string(), "Moderado");
    }
}
