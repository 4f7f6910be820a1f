use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::inscricao_controller::InscricaoController;
use crate::dto::api::ApiResponse;
use crate::dto::inscricao_dto::{
    CreateInscricaoRequest, InscricaoResponse, UpdateInscricaoStatusRequest,
};
use crate::routes::empresa_id_da_sessao;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_inscricao_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_inscricao))
        .route("/:id", get(get_inscricao))
        .route("/:id/status", put(update_status))
}

async fn create_inscricao(
    State(state): State<AppState>,
    Json(request): Json<CreateInscricaoRequest>,
) -> Result<Json<ApiResponse<InscricaoResponse>>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = InscricaoController::new(state.pool.clone());
    let response = controller.create(empresa_id, request).await?;
    Ok(Json(response))
}

async fn get_inscricao(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InscricaoResponse>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = InscricaoController::new(state.pool.clone());
    let response = controller.get_by_id(id, empresa_id).await?;
    Ok(Json(response))
}

async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateInscricaoStatusRequest>,
) -> Result<Json<ApiResponse<InscricaoResponse>>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = InscricaoController::new(state.pool.clone());
    let response = controller.atualizar_status(id, empresa_id, request).await?;
    Ok(Json(response))
}
