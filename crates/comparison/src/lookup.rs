use std::sync::Arc;

use async_trait::async_trait;
use model::{AirQualitySample, RouteOption};

use crate::LookupResult;

/// Air quality measured around an address.
#[async_trait]
pub trait AirQualityLookup: Send + Sync {
    async fn air_quality_by_address(&self, address: &str) -> LookupResult<AirQualitySample>;
}

/// Candidate bus routes between two addresses, with emissions already
/// computed by the backend.
#[async_trait]
pub trait RouteOptionsLookup: Send + Sync {
    async fn route_options(
        &self,
        origin: &str,
        destination: &str,
    ) -> LookupResult<Vec<RouteOption>>;
}

#[async_trait]
impl<T> AirQualityLookup for Arc<T>
where
    T: AirQualityLookup + ?Sized,
{
    async fn air_quality_by_address(&self, address: &str) -> LookupResult<AirQualitySample> {
        self.as_ref().air_quality_by_address(address).await
    }
}

#[async_trait]
impl<T> RouteOptionsLookup for Arc<T>
where
    T: RouteOptionsLookup + ?Sized,
{
    async fn route_options(
        &self,
        origin: &str,
        destination: &str,
    ) -> LookupResult<Vec<RouteOption>> {
        self.as_ref().route_options(origin, destination).await
    }
}
