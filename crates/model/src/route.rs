use indexmap::IndexSet;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::polyline::EncodedPolyline;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum SegmentKind {
    Walk,
    Bus,
    /// Any other transit leg, e.g. metro or train.
    Other,
}

/// One leg of a [`RouteOption`].
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Segment {
    #[serde(rename = "type")]
    pub kind: SegmentKind,
    #[serde(default)]
    pub instruction: String,
    pub distance_km: f64,
    pub duration_text: Option<String>,
    pub line_name: Option<String>,
    pub line_color: Option<String>,
    pub vehicle_type: Option<String>,
    #[serde(default)]
    pub polyline: EncodedPolyline,
}

impl Segment {
    pub fn is_bus(&self) -> bool {
        self.kind == SegmentKind::Bus
    }
}

/// A candidate route between two addresses. Distance and emission are computed
/// by the backend and only read here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RouteOption {
    pub description: String,
    pub distance_km: f64,
    pub emission_kg_co2: f64,
    #[serde(default)]
    pub polyline: EncodedPolyline,
    #[serde(default)]
    pub segments: Vec<Segment>,
}

impl RouteOption {
    /// Distinct bus line names in the order they are boarded.
    pub fn line_names(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter(|segment| segment.is_bus())
            .filter_map(|segment| segment.line_name.as_deref())
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn bus_segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter().filter(|segment| segment.is_bus())
    }
}
