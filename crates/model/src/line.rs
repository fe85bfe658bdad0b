use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::{HasId, Id};

use crate::ranking::RankingEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum LineDirection {
    Main,
    Secondary,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Line {
    pub id: Id<Line>,
    pub name: String,
    pub direction: Option<LineDirection>,
    pub description: Option<String>,
}

impl HasId for Line {
    type IdType = i64;
}

/// Emission figures of a line as reported by the backend, in kg CO2 and km.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LineEmission {
    pub line: Line,
    pub emission: f64,
    pub distance: f64,
}

impl LineEmission {
    pub fn ranking_entry(&self) -> RankingEntry<Id<Line>> {
        RankingEntry::new(self.line.id.clone(), self.emission, self.distance)
    }
}
