use serde::Serialize;
use snip_core::BackendHealth;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub storage: BackendHealth,
}
