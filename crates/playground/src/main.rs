use std::{collections::HashMap, env, error::Error, fs};

use analytics::{aggregation, air_quality, polyline, ranking};
use async_trait::async_trait;
use chrono::NaiveDate;
use comparison::{
    config::ComparisonConfig,
    lookup::{AirQualityLookup, RouteOptionsLookup},
    orchestrator::RouteComparisonOrchestrator,
    LookupError, LookupResult,
};
use model::{
    line::LineEmission, trip::SavedRoute, AirQualitySample, DateWindow, RouteOption, TripRecord,
};
use serde::Deserialize;

/// A recorded backend state to run the analytics against offline.
#[derive(Debug, Deserialize)]
struct Snapshot {
    #[serde(default)]
    saved_routes: Vec<SavedRoute>,
    #[serde(default)]
    line_emissions: Vec<LineEmission>,
    statistics: Option<StatisticsRequest>,
    comparison: Option<ComparisonRequest>,
}

#[derive(Debug, Deserialize)]
struct StatisticsRequest {
    start_date: NaiveDate,
    days_range: u32,
}

#[derive(Debug, Deserialize)]
struct ComparisonRequest {
    origin: String,
    destination: String,
    #[serde(default)]
    air_quality: HashMap<String, AirQualitySample>,
    #[serde(default)]
    routes: Vec<RouteOption>,
}

struct SnapshotAirQuality(HashMap<String, AirQualitySample>);

#[async_trait]
impl AirQualityLookup for SnapshotAirQuality {
    async fn air_quality_by_address(&self, address: &str) -> LookupResult<AirQualitySample> {
        self.0.get(address).cloned().ok_or(LookupError::NotFound)
    }
}

struct SnapshotRoutes(Vec<RouteOption>);

#[async_trait]
impl RouteOptionsLookup for SnapshotRoutes {
    async fn route_options(&self, _: &str, _: &str) -> LookupResult<Vec<RouteOption>> {
        Ok(self.0.clone())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let path = env::args()
        .nth(1)
        .ok_or("usage: playground <snapshot.json>")?;
    let snapshot: Snapshot = serde_json::from_str(&fs::read_to_string(&path)?)?;
    log::info!(
        "loaded {} saved routes and {} line emissions from {}",
        snapshot.saved_routes.len(),
        snapshot.line_emissions.len(),
        path
    );

    let trips: Vec<TripRecord> = snapshot
        .saved_routes
        .into_iter()
        .map(TripRecord::from)
        .collect();

    if let Some(request) = snapshot.statistics {
        let window = DateWindow::from_days(request.start_date, request.days_range);
        let points = aggregation::aggregate(&trips, window);
        println!("statistics: {}", serde_json::to_string_pretty(&points)?);
        let totals = aggregation::totals(&trips, window);
        println!("totals: {}", serde_json::to_string_pretty(&totals)?);
    }

    let savings = ranking::rank_by_saving(trips.iter().cloned());
    println!("savings ranking: {}", serde_json::to_string_pretty(&savings)?);

    let efficiency = ranking::rank_by_efficiency(
        snapshot
            .line_emissions
            .iter()
            .map(LineEmission::ranking_entry),
    );
    println!(
        "efficiency ranking: {}",
        serde_json::to_string_pretty(&efficiency)?
    );

    for trip in &trips {
        match air_quality::estimate(trip.emission_kg, trip.distance_km) {
            Ok(estimate) => println!(
                "{} ({}): {} {}",
                trip.id, trip.line_identifier, estimate.score, estimate.category
            ),
            Err(why) => println!("{} ({}): no data, {}", trip.id, trip.line_identifier, why),
        }
    }

    if let Some(request) = snapshot.comparison {
        let orchestrator = RouteComparisonOrchestrator::new(
            SnapshotAirQuality(request.air_quality),
            SnapshotRoutes(request.routes),
        )
        .with_config(ComparisonConfig::from_env());
        let comparison = orchestrator
            .compare(&request.origin, &request.destination)
            .await?;
        println!(
            "mean aqi: {}",
            comparison.mean_aqi("bra_saopaulo")
        );
        match comparison.default_route() {
            Some(route) => {
                let points = polyline::decode(&route.polyline);
                println!(
                    "default route {:?} with lines {:?}: {}",
                    route.description,
                    route.line_names(),
                    serde_json::to_string_pretty(&points)?
                );
            }
            None => println!("no route found"),
        }
    }

    Ok(())
}
