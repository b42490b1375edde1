use axum::Json;
use axum::body::Bytes;
use serde::de::DeserializeOwned;

use crate::array_gen::{MAX_ARRAY_SIZE, generate_sorted_array};
use crate::data_models::{PerformanceData, SearchResult};
use crate::harness::{
    DEFAULT_BATCHES, DEFAULT_RUNS_PER_BATCH, HarnessError, PerformanceHarness,
};
use crate::search::SearchVariant;

use super::error::ApiResult;
use super::models::{
    GenerateArrayRequest, GenerateArrayResponse, HealthResponse, PerformanceRequest,
    SearchRequest,
};

/// Decodes a JSON body regardless of the request's content type. Any decode
/// failure becomes a 400 carrying serde's message.
fn decode<T: DeserializeOwned>(body: &[u8]) -> ApiResult<T> {
    Ok(serde_json::from_slice(body)?)
}

fn run_search(variant: SearchVariant, body: &[u8]) -> ApiResult<Json<SearchResult>> {
    let request: SearchRequest = decode(body)?;
    let result = variant.trace(&request.array, request.target);
    tracing::debug!(
        variant = variant.name(),
        len = request.array.len(),
        found = result.found,
        comparisons = result.comparisons,
        "search completed"
    );
    Ok(Json(result))
}

pub async fn search_iterative_handler(body: Bytes) -> ApiResult<Json<SearchResult>> {
    run_search(SearchVariant::Iterative, &body)
}

pub async fn search_recursive_handler(body: Bytes) -> ApiResult<Json<SearchResult>> {
    run_search(SearchVariant::Recursive, &body)
}

pub async fn performance_handler(body: Bytes) -> ApiResult<Json<Vec<PerformanceData>>> {
    let request: PerformanceRequest = decode(&body)?;

    let batches = request
        .batches
        .filter(|&b| b > 0)
        .unwrap_or(DEFAULT_BATCHES);
    let runs_per_batch = request
        .runs_per_batch
        .filter(|&r| r > 0)
        .unwrap_or(DEFAULT_RUNS_PER_BATCH);
    let harness = PerformanceHarness::new(batches, runs_per_batch)?;

    tracing::info!(
        sizes = ?request.sizes,
        batches,
        runs_per_batch,
        "starting performance test"
    );

    // CPU-bound; keep it off the async workers.
    let results = tokio::task::spawn_blocking(move || harness.run(&request.sizes)).await??;
    Ok(Json(results))
}

pub async fn generate_array_handler(body: Bytes) -> ApiResult<Json<GenerateArrayResponse>> {
    let request: GenerateArrayRequest = decode(&body)?;
    if request.size > MAX_ARRAY_SIZE {
        return Err(HarnessError::ArrayTooLarge(request.size).into());
    }
    Ok(Json(GenerateArrayResponse {
        array: generate_sorted_array(request.size),
        size: request.size,
    }))
}

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
