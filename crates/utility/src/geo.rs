use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Axis aligned latitude/longitude box, used to fit a map view around a
/// decoded route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub min_latitude: f64,
    pub min_longitude: f64,
    pub max_latitude: f64,
    pub max_longitude: f64,
}

impl BoundingBox {
    /// Returns the smallest box containing all `(latitude, longitude)` pairs,
    /// or `None` if there are none.
    pub fn from_coordinates<I>(coordinates: I) -> Option<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut iter = coordinates.into_iter();
        let (latitude, longitude) = iter.next()?;
        let initial = Self {
            min_latitude: latitude,
            min_longitude: longitude,
            max_latitude: latitude,
            max_longitude: longitude,
        };
        Some(iter.fold(initial, |bounds, (latitude, longitude)| Self {
            min_latitude: bounds.min_latitude.min(latitude),
            min_longitude: bounds.min_longitude.min(longitude),
            max_latitude: bounds.max_latitude.max(latitude),
            max_longitude: bounds.max_longitude.max(longitude),
        }))
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_latitude + self.max_latitude) / 2.0,
            (self.min_longitude + self.max_longitude) / 2.0,
        )
    }

    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        latitude >= self.min_latitude
            && latitude <= self.max_latitude
            && longitude >= self.min_longitude
            && longitude <= self.max_longitude
    }

    /// Grows the box by `margin_deg` degrees on every side.
    pub fn padded(&self, margin_deg: f64) -> Self {
        Self {
            min_latitude: self.min_latitude - margin_deg,
            min_longitude: self.min_longitude - margin_deg,
            max_latitude: self.max_latitude + margin_deg,
            max_longitude: self.max_longitude + margin_deg,
        }
    }
}
