//! HTTP handlers for the inventory resource.
//!
//! # Responsibility
//! - Validate path and body input through the DTOs.
//! - Run the matching use-case off the async runtime.
//! - Map results to status codes and JSON bodies.
//!
//! # Invariants
//! - Invalid input is answered with 400 before any use-case runs.
//! - Handlers log metadata only: event, status, id, counts, durations.

use crate::error::ApiErrorResponse;
use crate::extract::RequestBody;
use crate::state::{AppState, SharedRepository};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use inventory_core::{
    core_version, parse_fruit_id, ping, CreateFruit, CreateFruitDto, DeleteFruit, Fruit,
    GetFruit, GetFruits, InventoryError, InventoryResult, UpdateFruit, UpdateFruitDto,
};
use log::{error, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Instant;

type HandlerResult<T> = Result<T, ApiErrorResponse>;

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub core: String,
    pub version: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        core: ping().to_string(),
        version: core_version().to_string(),
    })
}

/// `GET /`: lists every fruit.
pub async fn get_fruits(State(state): State<AppState>) -> HandlerResult<Json<Vec<Fruit>>> {
    let started_at = Instant::now();
    let fruits = run_use_case(&state, "fruit_list", |repository| {
        GetFruits::new(repository).execute()
    })
    .await?;

    info!(
        "event=fruit_list module=controller status=ok count={} duration_ms={}",
        fruits.len(),
        started_at.elapsed().as_millis()
    );
    Ok(Json(fruits))
}

/// `GET /{id}`: fetches one fruit.
pub async fn get_fruit_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> HandlerResult<Json<Fruit>> {
    let started_at = Instant::now();
    let id = parse_fruit_id(&raw_id).map_err(|err| rejected("fruit_get", err))?;

    let fruit = run_use_case(&state, "fruit_get", move |repository| {
        GetFruit::new(repository).execute(id)
    })
    .await?;

    info!(
        "event=fruit_get module=controller status=ok id={id} duration_ms={}",
        started_at.elapsed().as_millis()
    );
    Ok(Json(fruit))
}

/// `POST /`: creates a fruit from `{name, quantity}` (JSON or form).
pub async fn create_fruit(
    State(state): State<AppState>,
    body: Result<RequestBody, ApiErrorResponse>,
) -> HandlerResult<(StatusCode, Json<Fruit>)> {
    let started_at = Instant::now();
    let RequestBody(props) = body.map_err(|err| rejected("fruit_create", err))?;
    let dto = CreateFruitDto::create(&props).map_err(|err| rejected("fruit_create", err))?;

    let fruit = run_use_case(&state, "fruit_create", move |repository| {
        CreateFruit::new(repository).execute(&dto)
    })
    .await?;

    info!(
        "event=fruit_create module=controller status=ok id={} duration_ms={}",
        fruit.id,
        started_at.elapsed().as_millis()
    );
    Ok((StatusCode::CREATED, Json(fruit)))
}

/// `PUT /{id}`: applies `{name?, quantity?}` (JSON or form) to one fruit.
pub async fn update_fruit(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<RequestBody, ApiErrorResponse>,
) -> HandlerResult<Json<Fruit>> {
    let started_at = Instant::now();
    let RequestBody(body) = body.map_err(|err| rejected("fruit_update", err))?;

    let mut props = match body {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    props.insert("id".to_string(), Value::String(raw_id));
    let dto = UpdateFruitDto::create(&Value::Object(props))
        .map_err(|err| rejected("fruit_update", err))?;
    let id = dto.id();

    let fruit = run_use_case(&state, "fruit_update", move |repository| {
        UpdateFruit::new(repository).execute(id, &dto)
    })
    .await?;

    info!(
        "event=fruit_update module=controller status=ok id={id} duration_ms={}",
        started_at.elapsed().as_millis()
    );
    Ok(Json(fruit))
}

/// `DELETE /{id}`: removes one fruit and returns it.
pub async fn delete_fruit(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> HandlerResult<Json<Fruit>> {
    let started_at = Instant::now();
    let id = parse_fruit_id(&raw_id).map_err(|err| rejected("fruit_delete", err))?;

    let fruit = run_use_case(&state, "fruit_delete", move |repository| {
        DeleteFruit::new(repository).execute(id)
    })
    .await?;

    info!(
        "event=fruit_delete module=controller status=ok id={id} duration_ms={}",
        started_at.elapsed().as_millis()
    );
    Ok(Json(fruit))
}

/// Runs a blocking use-case on the blocking pool and maps its failure.
async fn run_use_case<T, F>(state: &AppState, event: &'static str, use_case: F) -> HandlerResult<T>
where
    T: Send + 'static,
    F: FnOnce(SharedRepository) -> InventoryResult<T> + Send + 'static,
{
    let repository = state.repository.clone();
    match tokio::task::spawn_blocking(move || use_case(repository)).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(failed(event, err)),
        Err(join_error) => {
            error!(
                "event={event} module=controller status=error error_code=worker_failed error={join_error}"
            );
            Err(ApiErrorResponse::internal_error())
        }
    }
}

/// Answers requests that match no route.
pub async fn route_not_found() -> ApiErrorResponse {
    ApiErrorResponse::route_not_found()
}

fn failed(event: &'static str, err: InventoryError) -> ApiErrorResponse {
    match &err {
        InventoryError::NotFound(id) => {
            info!("event={event} module=controller status=not_found id={id}");
        }
        other => {
            error!("event={event} module=controller status=error error_code=store_failed error={other}");
        }
    }
    ApiErrorResponse::from(err)
}

fn rejected(event: &'static str, err: impl Into<ApiErrorResponse>) -> ApiErrorResponse {
    let response = err.into();
    warn!(
        "event={event} module=controller status=rejected http_status={}",
        response.status.as_u16()
    );
    response
}
