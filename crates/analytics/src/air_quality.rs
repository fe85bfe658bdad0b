use std::{error, fmt};

use model::{AirQualityCategory, AirQualityEstimate};

// Emission rates (kg CO2 per km) where the score formula changes slope.
const MODERATE_RATE: f64 = 2.0;
const POOR_RATE: f64 = 2.5;
const VERY_POOR_RATE: f64 = 3.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AirQualityError {
    /// The rate is undefined without a positive distance.
    NonPositiveDistance(f64),
    InvalidEmission(f64),
}

impl error::Error for AirQualityError {}

impl fmt::Display for AirQualityError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AirQualityError::NonPositiveDistance(distance) => {
                write!(f, "distance must be positive, got {} km", distance)
            }
            AirQualityError::InvalidEmission(emission) => {
                write!(f, "emission must be a number, got {} kg", emission)
            }
        }
    }
}

/// Score on the 0..=300 scale for an emission rate in kg CO2 per km.
pub fn score_for_rate(rate: f64) -> u16 {
    let raw = if rate < MODERATE_RATE {
        rate * 25.0
    } else if rate < POOR_RATE {
        50.0 + (rate - MODERATE_RATE) * 100.0
    } else if rate < VERY_POOR_RATE {
        100.0 + (rate - POOR_RATE) * 100.0
    } else {
        200.0 + (rate - VERY_POOR_RATE) * 50.0
    };
    raw.round()
        .clamp(0.0, f64::from(AirQualityCategory::MAX_SCORE)) as u16
}

/// Estimate for an emission rate. The category follows the clamped score, not
/// the formula branch, so both always agree at the boundaries.
pub fn estimate_rate(rate: f64) -> AirQualityEstimate {
    let score = score_for_rate(rate);
    AirQualityEstimate {
        score,
        category: AirQualityCategory::from_score(score),
    }
}

/// Estimates air quality from the emission of a trip and its distance.
///
/// A non-positive distance is an error rather than a default score, callers
/// have to show "no data" for it.
pub fn estimate(
    emission_kg: f64,
    distance_km: f64,
) -> Result<AirQualityEstimate, AirQualityError> {
    if !(distance_km > 0.0) {
        return Err(AirQualityError::NonPositiveDistance(distance_km));
    }
    let rate = emission_kg / distance_km;
    // NaN emission, or an infinite emission over an infinite distance
    if rate.is_nan() {
        return Err(AirQualityError::InvalidEmission(emission_kg));
    }
    Ok(estimate_rate(rate))
}
