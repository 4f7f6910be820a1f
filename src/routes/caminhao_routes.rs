use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::json;
use uuid::Uuid;

use crate::controllers::caminhao_controller::CaminhaoController;
use crate::controllers::manutencao_controller::ManutencaoController;
use crate::dto::api::ApiResponse;
use crate::dto::caminhao_dto::{CaminhaoResponse, CreateCaminhaoRequest, UpdateCaminhaoRequest};
use crate::dto::manutencao_dto::ManutencaoResponse;
use crate::routes::empresa_id_da_sessao;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_caminhao_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_caminhao))
        .route("/", get(list_caminhoes))
        .route("/:id", get(get_caminhao))
        .route("/:id", put(update_caminhao))
        .route("/:id", delete(delete_caminhao))
        .route("/:id/recompute", post(recompute_status))
        .route("/:id/manutencoes", get(list_manutencoes))
}

async fn create_caminhao(
    State(state): State<AppState>,
    Json(request): Json<CreateCaminhaoRequest>,
) -> Result<Json<ApiResponse<CaminhaoResponse>>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = CaminhaoController::new(state.pool.clone());
    let response = controller.create(empresa_id, request).await?;
    Ok(Json(response))
}

async fn get_caminhao(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CaminhaoResponse>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = CaminhaoController::new(state.pool.clone());
    let response = controller.get_by_id(id, empresa_id).await?;
    Ok(Json(response))
}

async fn list_caminhoes(
    State(state): State<AppState>,
) -> Result<Json<Vec<CaminhaoResponse>>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = CaminhaoController::new(state.pool.clone());
    let response = controller.list_by_empresa(empresa_id).await?;
    Ok(Json(response))
}

async fn update_caminhao(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCaminhaoRequest>,
) -> Result<Json<ApiResponse<CaminhaoResponse>>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = CaminhaoController::new(state.pool.clone());
    let response = controller.update(id, empresa_id, request).await?;
    Ok(Json(response))
}

async fn delete_caminhao(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = CaminhaoController::new(state.pool.clone());
    controller.delete(id, empresa_id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Caminhão removido com sucesso"
    })))
}

async fn recompute_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = CaminhaoController::new(state.pool.clone());
    let status = controller.recompute_status(id, empresa_id).await?;
    Ok(Json(json!({
        "success": true,
        "status": status.as_str()
    })))
}

async fn list_manutencoes(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ManutencaoResponse>>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = ManutencaoController::new(state.pool.clone());
    let response = controller.list_by_caminhao(id, empresa_id).await?;
    Ok(Json(response))
}
