use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::api::ApiResponse;
use crate::dto::caminhao_dto::{CaminhaoResponse, CreateCaminhaoRequest, UpdateCaminhaoRequest};
use crate::models::caminhao::{Caminhao, CaminhaoStatus};
use crate::repositories::caminhao_repository::CaminhaoRepository;
use crate::services::caminhao_status_service::CaminhaoStatusService;
use crate::utils::errors::{AppError, AppResult};

pub struct CaminhaoController {
    repository: CaminhaoRepository,
    status_service: CaminhaoStatusService,
}

impl CaminhaoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CaminhaoRepository::new(pool.clone()),
            status_service: CaminhaoStatusService::new(pool),
        }
    }

    pub async fn create(
        &self,
        empresa_id: Uuid,
        request: CreateCaminhaoRequest,
    ) -> AppResult<ApiResponse<CaminhaoResponse>> {
        request.validate()?;

        if self.repository.placa_exists(&request.placa, empresa_id).await? {
            return Err(AppError::Conflict(
                "A placa já está registrada para esta empresa".to_string(),
            ));
        }

        let caminhao = self
            .repository
            .create(empresa_id, request.placa, request.modelo)
            .await?;

        Ok(ApiResponse::success_with_message(
            caminhao.into(),
            "Caminhão criado com sucesso".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid, empresa_id: Uuid) -> AppResult<CaminhaoResponse> {
        let caminhao = self.carregar(id, empresa_id).await?;
        Ok(caminhao.into())
    }

    pub async fn list_by_empresa(&self, empresa_id: Uuid) -> AppResult<Vec<CaminhaoResponse>> {
        let caminhoes = self.repository.find_by_empresa(empresa_id).await?;
        Ok(caminhoes.into_iter().map(CaminhaoResponse::from).collect())
    }

    /// Atualiza campos cadastrais. O status nunca vem do cliente:
    /// requests com status são ignoradas por construção (o DTO não
    /// tem o campo).
    pub async fn update(
        &self,
        id: Uuid,
        empresa_id: Uuid,
        request: UpdateCaminhaoRequest,
    ) -> AppResult<ApiResponse<CaminhaoResponse>> {
        request.validate()?;

        let atual = self.carregar(id, empresa_id).await?;

        let caminhao = self
            .repository
            .update(
                id,
                request.placa.unwrap_or(atual.placa),
                request.modelo.or(atual.modelo),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            caminhao.into(),
            "Caminhão atualizado com sucesso".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid, empresa_id: Uuid) -> AppResult<()> {
        self.carregar(id, empresa_id).await?;
        self.repository.delete(id).await?;
        Ok(())
    }

    /// Expõe o sincronizador para uso operacional.
    pub async fn recompute_status(
        &self,
        id: Uuid,
        empresa_id: Uuid,
    ) -> AppResult<CaminhaoStatus> {
        self.carregar(id, empresa_id).await?;
        self.status_service.recompute(id).await
    }

    async fn carregar(&self, id: Uuid, empresa_id: Uuid) -> AppResult<Caminhao> {
        let caminhao = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Caminhão não encontrado".to_string()))?;

        if caminhao.empresa_id != empresa_id {
            return Err(AppError::Forbidden(
                "Caminhão não pertence a esta empresa".to_string(),
            ));
        }

        Ok(caminhao)
    }
}
