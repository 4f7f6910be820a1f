use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::json;
use uuid::Uuid;

use crate::controllers::acao_controller::AcaoController;
use crate::controllers::inscricao_controller::InscricaoController;
use crate::dto::acao_dto::{
    AcaoResponse, CreateAcaoRequest, CreateOfertaRequest, OfertaResponse,
    TransicaoStatusRequest, UpdateAcaoRequest, VincularCaminhaoRequest,
};
use crate::dto::api::ApiResponse;
use crate::dto::inscricao_dto::InscricaoResponse;
use crate::routes::empresa_id_da_sessao;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_acao_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_acao))
        .route("/", get(list_acoes))
        .route("/:id", get(get_acao))
        .route("/:id", put(update_acao))
        .route("/:id", delete(delete_acao))
        .route("/:id/status", post(transicionar_status))
        .route("/:id/caminhoes", post(vincular_caminhao))
        .route("/:id/caminhoes/:caminhao_id", delete(desvincular_caminhao))
        .route("/:id/ofertas", post(criar_oferta))
        .route("/:id/ofertas", get(listar_ofertas))
        .route("/:id/inscricoes", get(listar_inscricoes))
}

async fn create_acao(
    State(state): State<AppState>,
    Json(request): Json<CreateAcaoRequest>,
) -> Result<Json<ApiResponse<AcaoResponse>>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = AcaoController::new(state.pool.clone());
    let response = controller.create(empresa_id, request).await?;
    Ok(Json(response))
}

async fn get_acao(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AcaoResponse>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = AcaoController::new(state.pool.clone());
    let response = controller.get_by_id(id, empresa_id).await?;
    Ok(Json(response))
}

async fn list_acoes(State(state): State<AppState>) -> Result<Json<Vec<AcaoResponse>>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = AcaoController::new(state.pool.clone());
    let response = controller.list_by_empresa(empresa_id).await?;
    Ok(Json(response))
}

async fn update_acao(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateAcaoRequest>,
) -> Result<Json<ApiResponse<AcaoResponse>>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = AcaoController::new(state.pool.clone());
    let response = controller.update(id, empresa_id, request).await?;
    Ok(Json(response))
}

async fn delete_acao(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = AcaoController::new(state.pool.clone());
    controller.delete(id, empresa_id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Ação removida com sucesso"
    })))
}

async fn transicionar_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<TransicaoStatusRequest>,
) -> Result<Json<ApiResponse<AcaoResponse>>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = AcaoController::new(state.pool.clone());
    let response = controller.transicionar_status(id, empresa_id, request).await?;
    Ok(Json(response))
}

async fn vincular_caminhao(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<VincularCaminhaoRequest>,
) -> Result<Json<ApiResponse<AcaoResponse>>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = AcaoController::new(state.pool.clone());
    let response = controller.vincular_caminhao(id, empresa_id, request).await?;
    Ok(Json(response))
}

async fn desvincular_caminhao(
    State(state): State<AppState>,
    Path((id, caminhao_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<serde_json::Value>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = AcaoController::new(state.pool.clone());
    controller
        .desvincular_caminhao(id, empresa_id, caminhao_id)
        .await?;
    Ok(Json(json!({
        "success": true,
        "message": "Caminhão desvinculado da ação"
    })))
}

async fn criar_oferta(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CreateOfertaRequest>,
) -> Result<Json<ApiResponse<OfertaResponse>>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = AcaoController::new(state.pool.clone());
    let response = controller.criar_oferta(id, empresa_id, request).await?;
    Ok(Json(response))
}

async fn listar_ofertas(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<OfertaResponse>>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = AcaoController::new(state.pool.clone());
    let response = controller.listar_ofertas(id, empresa_id).await?;
    Ok(Json(response))
}

async fn listar_inscricoes(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<InscricaoResponse>>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = InscricaoController::new(state.pool.clone());
    let response = controller.list_by_acao(id, empresa_id).await?;
    Ok(Json(response))
}
