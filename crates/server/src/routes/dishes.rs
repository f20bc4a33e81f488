use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use service::dish::{Dish, DishPatch, NewDish};
use tracing::info;

use crate::{errors::JsonApiError, metrics::observe, routes::AppState};

pub const DELETED_MESSAGE: &str = "Dish deleted successfully";

#[derive(Debug, Serialize)]
pub struct DeleteDishOutput {
    pub message: &'static str,
    pub dish: Dish,
}

#[utoipa::path(
    get, path = "/api/dishes", tag = "dishes",
    responses(
        (status = 200, description = "All dishes", body = [crate::openapi::DishDoc]),
        (status = 500, description = "Error fetching dishes", body = crate::openapi::MessageResponse)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Dish>>, JsonApiError> {
    let res = state
        .dishes
        .list()
        .await
        .map(Json)
        .map_err(|e| JsonApiError::from_service(e, "Error fetching dishes"));
    observe("list", StatusCode::OK, &res);
    res
}

#[utoipa::path(
    get, path = "/api/dishes/{name}", tag = "dishes",
    params(("name" = String, Path, description = "Exact dish name")),
    responses(
        (status = 200, description = "Dish", body = crate::openapi::DishDoc),
        (status = 404, description = "Dish not found", body = crate::openapi::MessageResponse),
        (status = 500, description = "Error fetching dish", body = crate::openapi::MessageResponse)
    )
)]
pub async fn get_by_name(State(state): State<AppState>, Path(name): Path<String>) -> Result<Json<Dish>, JsonApiError> {
    let res = state
        .dishes
        .get_by_name(&name)
        .await
        .map(Json)
        .map_err(|e| JsonApiError::from_service(e, "Error fetching dish"));
    observe("get", StatusCode::OK, &res);
    res
}

#[utoipa::path(
    post, path = "/api/dishes", tag = "dishes",
    request_body = crate::openapi::NewDishDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::DishDoc),
        (status = 400, description = "Invalid dish data", body = crate::openapi::MessageResponse),
        (status = 409, description = "Dish already exists", body = crate::openapi::MessageResponse),
        (status = 500, description = "Error adding dish", body = crate::openapi::MessageResponse)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewDish>, JsonRejection>,
) -> Result<(StatusCode, Json<Dish>), JsonApiError> {
    let res = match payload {
        Ok(Json(input)) => state
            .dishes
            .create(input)
            .await
            .map(|d| (StatusCode::CREATED, Json(d)))
            .map_err(|e| JsonApiError::from_service(e, "Error adding dish")),
        Err(rejection) => Err(JsonApiError::invalid_payload(rejection.body_text())),
    };
    observe("create", StatusCode::CREATED, &res);
    res
}

#[utoipa::path(
    put, path = "/api/dishes/{id}", tag = "dishes",
    params(("id" = String, Path, description = "Dish id")),
    request_body = crate::openapi::DishPatchDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::DishDoc),
        (status = 400, description = "Invalid dish data", body = crate::openapi::MessageResponse),
        (status = 404, description = "Dish not found", body = crate::openapi::MessageResponse),
        (status = 409, description = "Dish already exists", body = crate::openapi::MessageResponse),
        (status = 500, description = "Error updating dish", body = crate::openapi::MessageResponse)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<DishPatch>, JsonRejection>,
) -> Result<Json<Dish>, JsonApiError> {
    // a request without a JSON body is an empty patch
    let patch = match payload {
        Ok(Json(patch)) => Ok(patch),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(DishPatch::default()),
        Err(rejection) => Err(JsonApiError::invalid_payload(rejection.body_text())),
    };
    let res = match patch {
        Ok(patch) => state
            .dishes
            .update(&id, patch)
            .await
            .map(Json)
            .map_err(|e| JsonApiError::from_service(e, "Error updating dish")),
        Err(e) => Err(e),
    };
    observe("update", StatusCode::OK, &res);
    res
}

#[utoipa::path(
    delete, path = "/api/dishes/{id}", tag = "dishes",
    params(("id" = String, Path, description = "Dish id")),
    responses(
        (status = 200, description = "Dish deleted successfully", body = crate::openapi::DeleteDishDoc),
        (status = 400, description = "Invalid ID format", body = crate::openapi::MessageResponse),
        (status = 404, description = "Dish not found", body = crate::openapi::MessageResponse),
        (status = 500, description = "Error deleting dish", body = crate::openapi::MessageResponse)
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<DeleteDishOutput>, JsonApiError> {
    let res = state
        .dishes
        .delete(&id)
        .await
        .map(|dish| {
            info!(id = %dish.id, "deleted dish");
            Json(DeleteDishOutput { message: DELETED_MESSAGE, dish })
        })
        .map_err(|e| JsonApiError::from_service(e, "Error deleting dish"));
    observe("delete", StatusCode::OK, &res);
    res
}
