//! Pure transformations from backend records into display data: route
//! geometry decoding, emission based air quality estimates, per-day
//! statistics and efficiency rankings. Nothing in here performs I/O or keeps
//! state between calls.

pub mod aggregation;
pub mod air_quality;
pub mod history;
pub mod polyline;
pub mod ranking;
