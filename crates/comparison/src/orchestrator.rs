use std::future::Future;

use model::{air_quality::mean_index_aqi, AirQualitySample, RouteOption};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    config::ComparisonConfig,
    lookup::{AirQualityLookup, RouteOptionsLookup},
    ComparisonError, LookupError, LookupResult,
};

/// Everything a route comparison view shows. Air quality is absent for an
/// endpoint whose lookup failed.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RouteComparison {
    pub origin_air_quality: Option<AirQualitySample>,
    pub destination_air_quality: Option<AirQualitySample>,
    pub routes: Vec<RouteOption>,
}

impl RouteComparison {
    /// `false` means "no route found", which is a valid outcome, not a failure.
    pub fn has_routes(&self) -> bool {
        !self.routes.is_empty()
    }

    /// The route preselected in the view, the first candidate in backend order.
    pub fn default_route(&self) -> Option<&RouteOption> {
        self.routes.first()
    }

    /// Mean AQI of the index `code` at both endpoints.
    pub fn mean_aqi(&self, code: &str) -> i32 {
        mean_index_aqi(
            self.origin_air_quality.as_ref(),
            self.destination_air_quality.as_ref(),
            code,
        )
    }
}

/// Compares the routes between two addresses.
///
/// The air quality at both endpoints and the route options are looked up
/// concurrently and the comparison completes once all three settled. A failed
/// air quality lookup only leaves its field empty, a failed route options
/// lookup fails the whole comparison. Each lookup is attempted exactly once.
pub struct RouteComparisonOrchestrator<A, R> {
    air_quality: A,
    routes: R,
    config: ComparisonConfig,
}

impl<A, R> RouteComparisonOrchestrator<A, R>
where
    A: AirQualityLookup,
    R: RouteOptionsLookup,
{
    pub fn new(air_quality: A, routes: R) -> Self {
        Self {
            air_quality,
            routes,
            config: ComparisonConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ComparisonConfig) -> Self {
        self.config = config;
        self
    }

    pub async fn compare(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<RouteComparison, ComparisonError> {
        let origin = origin.trim();
        let destination = destination.trim();
        if origin.is_empty() || destination.is_empty() {
            return Err(ComparisonError::MissingEndpoint);
        }

        let (origin_air_quality, destination_air_quality, routes) = futures::join!(
            self.bounded(self.air_quality.air_quality_by_address(origin)),
            self.bounded(self.air_quality.air_quality_by_address(destination)),
            self.bounded(self.routes.route_options(origin, destination)),
        );

        // settled first so their failures are logged even if routes failed
        let origin_air_quality = settle_air_quality(origin, origin_air_quality);
        let destination_air_quality = settle_air_quality(destination, destination_air_quality);
        let routes = routes.map_err(|why| {
            log::error!(
                "route options lookup from {:?} to {:?} failed: {}",
                origin,
                destination,
                why
            );
            ComparisonError::Routes(why)
        })?;
        let comparison = RouteComparison {
            origin_air_quality,
            destination_air_quality,
            routes,
        };
        log::debug!(
            "compared {:?} to {:?}: {} routes, air quality at origin: {}, at destination: {}",
            origin,
            destination,
            comparison.routes.len(),
            comparison.origin_air_quality.is_some(),
            comparison.destination_air_quality.is_some(),
        );
        Ok(comparison)
    }

    async fn bounded<T, F>(&self, lookup: F) -> LookupResult<T>
    where
        F: Future<Output = LookupResult<T>>,
    {
        match self.config.lookup_timeout {
            Some(limit) => tokio::time::timeout(limit, lookup)
                .await
                .unwrap_or_else(|_| {
                    log::warn!("lookup timed out after {:?}", limit);
                    Err(LookupError::Timeout(limit))
                }),
            None => lookup.await,
        }
    }
}

fn settle_air_quality(
    address: &str,
    result: LookupResult<AirQualitySample>,
) -> Option<AirQualitySample> {
    match result {
        Ok(sample) => Some(sample),
        Err(why) => {
            log::warn!("air quality lookup for {:?} failed: {}", address, why);
            None
        }
    }
}
