use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::json;
use uuid::Uuid;

use crate::controllers::curso_exame_controller::CursoExameController;
use crate::dto::api::ApiResponse;
use crate::dto::curso_exame_dto::{
    CreateCursoExameRequest, CursoExameResponse, UpdateCursoExameRequest,
};
use crate::routes::empresa_id_da_sessao;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_curso_exame_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_curso_exame))
        .route("/", get(list_cursos_exames))
        .route("/:id", get(get_curso_exame))
        .route("/:id", put(update_curso_exame))
        .route("/:id", delete(delete_curso_exame))
}

async fn create_curso_exame(
    State(state): State<AppState>,
    Json(request): Json<CreateCursoExameRequest>,
) -> Result<Json<ApiResponse<CursoExameResponse>>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = CursoExameController::new(state.pool.clone());
    let response = controller.create(empresa_id, request).await?;
    Ok(Json(response))
}

async fn get_curso_exame(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CursoExameResponse>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = CursoExameController::new(state.pool.clone());
    let response = controller.get_by_id(id, empresa_id).await?;
    Ok(Json(response))
}

async fn update_curso_exame(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCursoExameRequest>,
) -> Result<Json<ApiResponse<CursoExameResponse>>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = CursoExameController::new(state.pool.clone());
    let response = controller.update(id, empresa_id, request).await?;
    Ok(Json(response))
}

async fn delete_curso_exame(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = CursoExameController::new(state.pool.clone());
    controller.delete(id, empresa_id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Curso/exame removido com sucesso"
    })))
}

async fn list_cursos_exames(
    State(state): State<AppState>,
) -> Result<Json<Vec<CursoExameResponse>>, AppError> {
    let empresa_id = empresa_id_da_sessao();
    let controller = CursoExameController::new(state.pool.clone());
    let response = controller.list_by_empresa(empresa_id).await?;
    Ok(Json(response))
}
