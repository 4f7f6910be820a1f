use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::json;
use uuid::Uuid;

use crate::controllers::manutencao_controller::ManutencaoController;
use crate::dto::api::ApiResponse;
use crate::dto::manutencao_dto::{
    CreateManutencaoRequest, ManutencaoResponse, UpdateManutencaoRequest,
};
use crate::routes::empresa_id_da_sessao;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_manutencao_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_manutencao))
        .route("/", get(list_manutencoes))
        .route("/:id", get(get_manutencao))
        .route("/:id", put(update_manutencao))
        .route("/:id", delete(delete_manutencao))
}

async fn create_manutencao(
    State(state): State<AppState>,
    Json(request): Json<CreateManutencaoRequest>,
) -> Result<Json<ApiResponse<ManutencaoResponse>>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = ManutencaoController::new(state.pool.clone());
    let response = controller.create(empresa_id, request).await?;
    Ok(Json(response))
}

async fn get_manutencao(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ManutencaoResponse>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = ManutencaoController::new(state.pool.clone());
    let response = controller.get_by_id(id, empresa_id).await?;
    Ok(Json(response))
}

async fn list_manutencoes(
    State(state): State<AppState>,
) -> Result<Json<Vec<ManutencaoResponse>>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = ManutencaoController::new(state.pool.clone());
    let response = controller.list_by_empresa(empresa_id).await?;
    Ok(Json(response))
}

async fn update_manutencao(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateManutencaoRequest>,
) -> Result<Json<ApiResponse<ManutencaoResponse>>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = ManutencaoController::new(state.pool.clone());
    let response = controller.update(id, empresa_id, request).await?;
    Ok(Json(response))
}

async fn delete_manutencao(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = ManutencaoController::new(state.pool.clone());
    controller.delete(id, empresa_id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Manutenção removida com sucesso"
    })))
}
