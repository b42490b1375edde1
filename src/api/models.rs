use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub array: Vec<i64>,
    pub target: i64,
}

/// Missing or zero `batches`/`runsPerBatch` fall back to the harness defaults.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceRequest {
    pub sizes: Vec<usize>,
    #[serde(default)]
    pub batches: Option<usize>,
    #[serde(default)]
    pub runs_per_batch: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateArrayRequest {
    pub size: usize,
}

#[derive(Debug, Serialize)]
pub struct GenerateArrayResponse {
    pub array: Vec<i64>,
    pub size: usize,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
