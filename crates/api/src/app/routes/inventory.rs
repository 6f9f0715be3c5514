use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Extension, Path, Query,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};

use stockroom_infra::InventoryService;
use stockroom_inventory::{InventoryItem, ItemFields, ItemId};

use crate::app::{dto, errors, export};

pub fn router() -> Router {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items.csv", get(export_items))
        .route(
            "/items/:id",
            get(get_item).put(update_item).delete(delete_item),
        )
        .route("/items/:id/stock", post(apply_stock_transaction))
        .route("/summary", get(get_summary))
}

fn parse_id(raw: String) -> Result<ItemId, axum::response::Response> {
    ItemId::parse(raw).map_err(errors::domain_error_to_response)
}

fn item_json(service: &InventoryService, item: InventoryItem) -> Json<dto::ItemResponse> {
    Json(dto::ItemResponse::new(item, service.config().low_stock_threshold))
}

pub async fn list_items(
    Extension(service): Extension<Arc<InventoryService>>,
    query: Result<Query<dto::ListItemsQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => return errors::query_rejection_to_response(rejection),
    };

    let items = service.browse_items(query.search(), query.order()).await;

    let threshold = service.config().low_stock_threshold;
    let body: Vec<dto::ItemResponse> = items
        .into_iter()
        .map(|item| dto::ItemResponse::new(item, threshold))
        .collect();

    (StatusCode::OK, Json(body)).into_response()
}

/// Same filter and ordering as `list_items`, rendered as a CSV attachment.
pub async fn export_items(
    Extension(service): Extension<Arc<InventoryService>>,
    query: Result<Query<dto::ListItemsQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(rejection) => return errors::query_rejection_to_response(rejection),
    };

    let items = service.browse_items(query.search(), query.order()).await;
    match export::items_to_csv(&items, service.config().low_stock_threshold) {
        Ok(body) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", export::CSV_FILENAME),
                ),
            ],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "csv export failed");
            errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "failed to render csv",
            )
        }
    }
}

pub async fn create_item(
    Extension(service): Extension<Arc<InventoryService>>,
    body: Result<Json<ItemFields>, JsonRejection>,
) -> axum::response::Response {
    let Json(fields) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    match service.add_item(fields).await {
        Ok(item) => (StatusCode::CREATED, item_json(&service, item)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_item(
    Extension(service): Extension<Arc<InventoryService>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match service.get_item(&id).await {
        Some(item) => (StatusCode::OK, item_json(&service, item)).into_response(),
        None => errors::not_found("item"),
    }
}

/// Replace an item's fields. The id in the path wins over any id in the body.
pub async fn update_item(
    Extension(service): Extension<Arc<InventoryService>>,
    Path(id): Path<String>,
    body: Result<Json<ItemFields>, JsonRejection>,
) -> axum::response::Response {
    let id = match parse_id(id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let Json(fields) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    match service.edit_item(InventoryItem::new(id, fields)).await {
        Ok(item) => (StatusCode::OK, item_json(&service, item)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_item(
    Extension(service): Extension<Arc<InventoryService>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    let deleted = service.delete_item(&id).await;
    (StatusCode::OK, Json(dto::DeleteResponse { deleted })).into_response()
}

pub async fn apply_stock_transaction(
    Extension(service): Extension<Arc<InventoryService>>,
    Path(id): Path<String>,
    body: Result<Json<dto::StockTransactionRequest>, JsonRejection>,
) -> axum::response::Response {
    let id = match parse_id(id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let Json(req) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    match service.apply_stock_transaction(id, req.kind, req.amount).await {
        Ok(item) => (StatusCode::OK, item_json(&service, item)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_summary(
    Extension(service): Extension<Arc<InventoryService>>,
) -> axum::response::Response {
    let summary = dto::SummaryResponse::from(service.summary().await);
    (StatusCode::OK, Json(summary)).into_response()
}
