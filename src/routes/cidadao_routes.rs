use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::json;
use uuid::Uuid;

use crate::controllers::cidadao_controller::CidadaoController;
use crate::controllers::inscricao_controller::InscricaoController;
use crate::dto::api::ApiResponse;
use crate::dto::cidadao_dto::{CidadaoResponse, CreateCidadaoRequest, UpdateCidadaoRequest};
use crate::dto::inscricao_dto::InscricaoResponse;
use crate::routes::empresa_id_da_sessao;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_cidadao_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_cidadao))
        .route("/", get(list_cidadaos))
        .route("/:id", get(get_cidadao))
        .route("/:id", put(update_cidadao))
        .route("/:id", delete(delete_cidadao))
        .route("/:id/inscricoes", get(list_inscricoes))
}

async fn create_cidadao(
    State(state): State<AppState>,
    Json(request): Json<CreateCidadaoRequest>,
) -> Result<Json<ApiResponse<CidadaoResponse>>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = CidadaoController::new(state.pool.clone());
    let response = controller.create(empresa_id, request).await?;
    Ok(Json(response))
}

async fn get_cidadao(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CidadaoResponse>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = CidadaoController::new(state.pool.clone());
    let response = controller.get_by_id(id, empresa_id).await?;
    Ok(Json(response))
}

async fn list_cidadaos(
    State(state): State<AppState>,
) -> Result<Json<Vec<CidadaoResponse>>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = CidadaoController::new(state.pool.clone());
    let response = controller.list_by_empresa(empresa_id).await?;
    Ok(Json(response))
}

async fn update_cidadao(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCidadaoRequest>,
) -> Result<Json<ApiResponse<CidadaoResponse>>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = CidadaoController::new(state.pool.clone());
    let response = controller.update(id, empresa_id, request).await?;
    Ok(Json(response))
}

async fn delete_cidadao(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = CidadaoController::new(state.pool.clone());
    controller.delete(id, empresa_id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Cidadão removido com sucesso"
    })))
}

async fn list_inscricoes(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<InscricaoResponse>>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = InscricaoController::new(state.pool.clone());
    let response = controller.list_by_cidadao(id, empresa_id).await?;
    Ok(Json(response))
}
