use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::geo::BoundingBox;

/// A decoded route vertex in degrees. Values are not range checked, the
/// decoder produces whatever the encoded deltas add up to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn as_tuple(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

/// Bounds used by map views to fit a whole route into the viewport.
pub fn bounding_box(points: &[GeoPoint]) -> Option<BoundingBox> {
    BoundingBox::from_coordinates(points.iter().map(GeoPoint::as_tuple))
}
