use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::api::ApiResponse;
use crate::dto::curso_exame_dto::{
    CreateCursoExameRequest, CursoExameResponse, UpdateCursoExameRequest,
};
use crate::models::curso_exame::{CursoExame, TIPOS_CURSO_EXAME};
use crate::repositories::curso_exame_repository::CursoExameRepository;
use crate::utils::errors::{AppError, AppResult};

pub struct CursoExameController {
    repository: CursoExameRepository,
}

impl CursoExameController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CursoExameRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        empresa_id: Uuid,
        request: CreateCursoExameRequest,
    ) -> AppResult<ApiResponse<CursoExameResponse>> {
        request.validate()?;
        validar_tipo(&request.tipo)?;

        let item = self
            .repository
            .create(empresa_id, request.nome, request.tipo)
            .await?;

        Ok(ApiResponse::success_with_message(
            item.into(),
            "Curso/exame cadastrado com sucesso".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid, empresa_id: Uuid) -> AppResult<CursoExameResponse> {
        let item = self.carregar(id, empresa_id).await?;
        Ok(item.into())
    }

    pub async fn list_by_empresa(&self, empresa_id: Uuid) -> AppResult<Vec<CursoExameResponse>> {
        let itens = self.repository.find_by_empresa(empresa_id).await?;
        Ok(itens.into_iter().map(CursoExameResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        empresa_id: Uuid,
        request: UpdateCursoExameRequest,
    ) -> AppResult<ApiResponse<CursoExameResponse>> {
        request.validate()?;

        let atual = self.carregar(id, empresa_id).await?;

        if let Some(tipo) = &request.tipo {
            validar_tipo(tipo)?;
        }

        let item = self
            .repository
            .update(
                id,
                request.nome.unwrap_or(atual.nome),
                request.tipo.unwrap_or(atual.tipo),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            item.into(),
            "Curso/exame atualizado com sucesso".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid, empresa_id: Uuid) -> AppResult<()> {
        self.carregar(id, empresa_id).await?;
        self.repository.delete(id).await?;
        Ok(())
    }

    async fn carregar(&self, id: Uuid, empresa_id: Uuid) -> AppResult<CursoExame> {
        let item = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Curso/exame não encontrado".to_string()))?;

        if item.empresa_id != empresa_id {
            return Err(AppError::Forbidden(
                "Curso/exame não pertence a esta empresa".to_string(),
            ));
        }

        Ok(item)
    }
}

fn validar_tipo(tipo: &str) -> AppResult<()> {
    if TIPOS_CURSO_EXAME.contains(&tipo) {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "Tipo de curso/exame inválido: '{}'",
            tipo
        )))
    }
}
