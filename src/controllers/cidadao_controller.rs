use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::api::ApiResponse;
use crate::dto::cidadao_dto::{CidadaoResponse, CreateCidadaoRequest, UpdateCidadaoRequest};
use crate::models::cidadao::Cidadao;
use crate::repositories::cidadao_repository::CidadaoRepository;
use crate::utils::errors::{AppError, AppResult};

pub struct CidadaoController {
    repository: CidadaoRepository,
}

impl CidadaoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CidadaoRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        empresa_id: Uuid,
        request: CreateCidadaoRequest,
    ) -> AppResult<ApiResponse<CidadaoResponse>> {
        request.validate()?;

        if self.repository.cpf_exists(&request.cpf, empresa_id).await? {
            return Err(AppError::Conflict(
                "CPF já cadastrado para esta empresa".to_string(),
            ));
        }

        let cidadao = self
            .repository
            .create(empresa_id, request.nome, request.cpf, request.data_nascimento)
            .await?;

        Ok(ApiResponse::success_with_message(
            cidadao.into(),
            "Cidadão cadastrado com sucesso".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid, empresa_id: Uuid) -> AppResult<CidadaoResponse> {
        let cidadao = self.carregar(id, empresa_id).await?;
        Ok(cidadao.into())
    }

    pub async fn list_by_empresa(&self, empresa_id: Uuid) -> AppResult<Vec<CidadaoResponse>> {
        let cidadaos = self.repository.find_by_empresa(empresa_id).await?;
        Ok(cidadaos.into_iter().map(CidadaoResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        empresa_id: Uuid,
        request: UpdateCidadaoRequest,
    ) -> AppResult<ApiResponse<CidadaoResponse>> {
        request.validate()?;

        let atual = self.carregar(id, empresa_id).await?;

        if let Some(cpf) = &request.cpf {
            if *cpf != atual.cpf && self.repository.cpf_exists(cpf, empresa_id).await? {
                return Err(AppError::Conflict(
                    "CPF já cadastrado para esta empresa".to_string(),
                ));
            }
        }

        let cidadao = self
            .repository
            .update(
                id,
                request.nome.unwrap_or(atual.nome),
                request.cpf.unwrap_or(atual.cpf),
                request.data_nascimento.or(atual.data_nascimento),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            cidadao.into(),
            "Cidadão atualizado com sucesso".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid, empresa_id: Uuid) -> AppResult<()> {
        self.carregar(id, empresa_id).await?;
        self.repository.delete(id).await?;
        Ok(())
    }

    async fn carregar(&self, id: Uuid, empresa_id: Uuid) -> AppResult<Cidadao> {
        let cidadao = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cidadão não encontrado".to_string()))?;

        if cidadao.empresa_id != empresa_id {
            return Err(AppError::Forbidden(
                "Cidadão não pertence a esta empresa".to_string(),
            ));
        }

        Ok(cidadao)
    }
}
