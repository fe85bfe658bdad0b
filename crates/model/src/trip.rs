use chrono::{NaiveDate, NaiveDateTime};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::{HasId, Id};

/// A route the user saved from a comparison, flattened for analytics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripRecord {
    pub id: Id<TripRecord>,
    pub line_identifier: String,
    pub origin_name: String,
    pub destination_name: String,
    #[serde(with = "utility::serde::date_time")]
    #[schemars(schema_with = "utility::serde::date_time::schema")]
    pub created_at: NaiveDateTime,
    pub emission_kg: f64,
    pub distance_km: f64,
    pub emission_saving_kg: f64,
}

impl HasId for TripRecord {
    type IdType = String;
}

impl TripRecord {
    /// Calendar day of the record, time of day discarded.
    pub fn date(&self) -> NaiveDate {
        self.created_at.date()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SavedRouteLine {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SavedRouteStop {
    pub id: i64,
    #[serde(default)]
    pub code: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
}

/// A saved route as returned by the backend's route history endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SavedRoute {
    pub id: String,
    pub line: SavedRouteLine,
    pub departure_stop: SavedRouteStop,
    pub arrival_stop: SavedRouteStop,
    pub distance: f64,
    pub emission: f64,
    pub emission_saving: f64,
    #[serde(with = "utility::serde::date_time")]
    #[schemars(schema_with = "utility::serde::date_time::schema")]
    pub created_at: NaiveDateTime,
}

impl From<SavedRoute> for TripRecord {
    fn from(value: SavedRoute) -> Self {
        Self {
            id: Id::new(value.id),
            line_identifier: value.line.name,
            origin_name: value.departure_stop.name,
            destination_name: value.arrival_stop.name,
            created_at: value.created_at,
            emission_kg: value.emission,
            distance_km: value.distance,
            emission_saving_kg: value.emission_saving,
        }
    }
}
