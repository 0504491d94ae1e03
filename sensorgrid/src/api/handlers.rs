//! Request handlers, one per registry operation.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::{debug, warn};

use super::error::ApiError;
use super::types::{NearestQuery, StatusMessage, UpdateSensorRequest};
use super::AppState;
use crate::registry::Sensor;

/// `GET /sensors`
pub(super) async fn list_sensors(State(state): State<AppState>) -> Json<Vec<Sensor>> {
    Json(state.registry().list())
}

/// `POST /sensors`
pub(super) async fn create_sensor(
    State(state): State<AppState>,
    body: Result<Json<Sensor>, JsonRejection>,
) -> Result<(StatusCode, Json<Sensor>), ApiError> {
    let Json(sensor) = body.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Rejected sensor body");
        ApiError::InvalidBody(rejection.body_text())
    })?;

    let created = state.registry().create(sensor);
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /sensors/:name`
pub(super) async fn get_sensor(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Sensor>, ApiError> {
    state
        .registry()
        .get_by_name(&name)
        .map(Json)
        .ok_or(ApiError::SensorNotFound(name))
}

/// `PATCH /sensors/:name`
pub(super) async fn update_sensor(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Result<Json<UpdateSensorRequest>, JsonRejection>,
) -> Result<Json<StatusMessage>, ApiError> {
    let Json(request) = body.map_err(|rejection| {
        warn!(name = %name, error = %rejection.body_text(), "Rejected update body");
        ApiError::InvalidBody(rejection.body_text())
    })?;

    if state
        .registry()
        .update(&name, request.tags, request.location)
    {
        Ok(Json(StatusMessage::success("sensor updated")))
    } else {
        debug!(name = %name, "Update for unknown sensor");
        Err(ApiError::SensorNotFound(name))
    }
}

/// `DELETE /sensors/:name`
///
/// A miss is still answered with 200, carrying an error message.
pub(super) async fn delete_sensor(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> (StatusCode, Json<StatusMessage>) {
    if state.registry().delete(&name) {
        (StatusCode::OK, Json(StatusMessage::success("sensor deleted")))
    } else {
        debug!(name = %name, "Delete for unknown sensor");
        let message = ApiError::SensorNotFound(name).to_string();
        (StatusCode::OK, Json(StatusMessage::error(message)))
    }
}

/// `GET /nearest?x=..&y=..`
pub(super) async fn find_nearest(
    State(state): State<AppState>,
    query: Result<Query<NearestQuery>, QueryRejection>,
) -> Result<Json<Sensor>, ApiError> {
    let Query(query) =
        query.map_err(|rejection| ApiError::InvalidCoordinate(rejection.body_text()))?;

    let target = query.coordinate();
    if !target.is_finite() {
        return Err(ApiError::InvalidCoordinate(format!(
            "{} is not a finite point",
            target
        )));
    }

    state
        .registry()
        .find_nearest(target)
        .map(Json)
        .ok_or(ApiError::EmptyRegistry)
}
