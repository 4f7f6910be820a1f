use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::json;
use uuid::Uuid;

use crate::controllers::conta_pagar_controller::ContaPagarController;
use crate::dto::api::ApiResponse;
use crate::dto::conta_pagar_dto::{
    ContaPagarResponse, CreateContaPagarRequest, PagarContaRequest,
};
use crate::routes::empresa_id_da_sessao;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_conta_pagar_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_conta))
        .route("/", get(list_contas))
        .route("/:id", get(get_conta))
        .route("/:id", delete(delete_conta))
        .route("/:id/pagar", post(pagar_conta))
}

async fn create_conta(
    State(state): State<AppState>,
    Json(request): Json<CreateContaPagarRequest>,
) -> Result<Json<ApiResponse<ContaPagarResponse>>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = ContaPagarController::new(state.pool.clone());
    let response = controller.create(empresa_id, request).await?;
    Ok(Json(response))
}

async fn get_conta(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ContaPagarResponse>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = ContaPagarController::new(state.pool.clone());
    let response = controller.get_by_id(id, empresa_id).await?;
    Ok(Json(response))
}

async fn list_contas(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContaPagarResponse>>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = ContaPagarController::new(state.pool.clone());
    let response = controller.list_by_empresa(empresa_id).await?;
    Ok(Json(response))
}

async fn pagar_conta(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<PagarContaRequest>,
) -> Result<Json<ApiResponse<ContaPagarResponse>>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = ContaPagarController::new(state.pool.clone());
    let response = controller.pagar(id, empresa_id, request).await?;
    Ok(Json(response))
}

async fn delete_conta(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = ContaPagarController::new(state.pool.clone());
    controller.delete(id, empresa_id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Conta removida com sucesso"
    })))
}
