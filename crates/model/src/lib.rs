pub use serde_with;

pub mod air_quality;
pub mod geo_point;
pub mod line;
pub mod polyline;
pub mod ranking;
pub mod route;
pub mod statistics;
pub mod trip;

pub use air_quality::{AirQualityCategory, AirQualityEstimate, AirQualitySample};
pub use geo_point::GeoPoint;
pub use polyline::EncodedPolyline;
pub use ranking::{RankedEntry, RankedTrip, RankingEntry};
pub use route::{RouteOption, Segment, SegmentKind};
pub use statistics::{DateWindow, StatisticsPoint, TripTotals};
pub use trip::TripRecord;
