//! Remote propagation service contract and its HTTP implementation.

use std::future::Future;
use std::time::Duration;

use orbit_core::TrajectoryResult;
use orbit_params::OrbitalParameters;
use reqwest::{Client, Response};
use tracing::debug;

use crate::error::ServiceError;
use crate::wire::{HealthResponse, decode_response};

/// Anything that can turn orbital elements into a propagated trajectory.
///
/// The controller is generic over this seam so it can be driven without a network.
pub trait ComputeService: Send + Sync + 'static {
    fn compute(
        &self,
        params: OrbitalParameters,
    ) -> impl Future<Output = Result<TrajectoryResult, ServiceError>> + Send;
}

/// Endpoint locations and the client-side deadline for every call.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceSettings {
    pub base_url: String,
    pub compute_path: String,
    pub health_path: String,
    /// `None` lets a hung service hold the request forever.
    pub timeout: Option<Duration>,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            compute_path: "/api/calculate-orbit".to_string(),
            health_path: "/api/hello".to_string(),
            timeout: Some(Duration::from_secs(30)),
        }
    }
}

impl ServiceSettings {
    pub fn compute_url(&self) -> String {
        join_url(&self.base_url, &self.compute_path)
    }

    pub fn health_url(&self) -> String {
        join_url(&self.base_url, &self.health_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// JSON-over-HTTP propagation client.
#[derive(Debug, Clone)]
pub struct HttpComputeService {
    client: Client,
    settings: ServiceSettings,
}

impl HttpComputeService {
    pub fn new(settings: ServiceSettings) -> Result<Self, ServiceError> {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { client, settings })
    }

    pub fn settings(&self) -> &ServiceSettings {
        &self.settings
    }

    /// Query the health endpoint and return its greeting.
    pub async fn ping(&self) -> Result<String, ServiceError> {
        let url = self.settings.health_url();
        debug!(%url, "health check");
        let response = self.client.get(&url).send().await?;
        let body = success_body(response).await?;
        let health: HealthResponse =
            serde_json::from_slice(&body).map_err(|err| ServiceError::Decode(err.to_string()))?;
        Ok(health.message)
    }
}

impl ComputeService for HttpComputeService {
    async fn compute(&self, params: OrbitalParameters) -> Result<TrajectoryResult, ServiceError> {
        let url = self.settings.compute_url();
        debug!(%url, ?params, "posting orbital parameters");
        let response = self.client.post(&url).json(&params).send().await?;
        let body = success_body(response).await?;
        decode_response(&body)
    }
}

/// Body bytes of a 2xx response; any other status becomes an application error
/// carrying the body text untouched.
async fn success_body(response: Response) -> Result<Vec<u8>, ServiceError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await?;
        return Err(ServiceError::Application {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response.bytes().await?.to_vec())
}
