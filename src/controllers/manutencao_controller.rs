use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::api::ApiResponse;
use crate::dto::manutencao_dto::{
    CreateManutencaoRequest, ManutencaoResponse, UpdateManutencaoRequest,
};
use crate::models::manutencao::{Manutencao, ManutencaoStatus, PAGAMENTOS};
use crate::repositories::caminhao_repository::CaminhaoRepository;
use crate::repositories::manutencao_repository::ManutencaoRepository;
use crate::services::manutencao_service::{DadosManutencao, ManutencaoService};
use crate::utils::errors::{AppError, AppResult};

pub struct ManutencaoController {
    repository: ManutencaoRepository,
    caminhoes: CaminhaoRepository,
    service: ManutencaoService,
}

impl ManutencaoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ManutencaoRepository::new(pool.clone()),
            caminhoes: CaminhaoRepository::new(pool.clone()),
            service: ManutencaoService::new(pool),
        }
    }

    pub async fn create(
        &self,
        empresa_id: Uuid,
        request: CreateManutencaoRequest,
    ) -> AppResult<ApiResponse<ManutencaoResponse>> {
        request.validate()?;

        let caminhao = self
            .caminhoes
            .find_by_id(request.caminhao_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Caminhão não encontrado".to_string()))?;
        if caminhao.empresa_id != empresa_id {
            return Err(AppError::Forbidden(
                "Caminhão não pertence a esta empresa".to_string(),
            ));
        }

        let status = parse_status(request.status.as_deref().unwrap_or("scheduled"))?;
        let pagamento = parse_pagamento(request.pagamento.as_deref().unwrap_or("pending"))?;

        let manutencao = self
            .service
            .registrar(
                empresa_id,
                caminhao.id,
                DadosManutencao {
                    titulo: request.titulo,
                    tipo: request.tipo,
                    status,
                    data_prevista: request.data_prevista,
                    data_conclusao: request.data_conclusao,
                    custo_estimado: request.custo_estimado,
                    custo_real: request.custo_real,
                    pagamento,
                },
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            manutencao.into(),
            "Manutenção registrada com sucesso".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid, empresa_id: Uuid) -> AppResult<ManutencaoResponse> {
        let manutencao = self.carregar(id, empresa_id).await?;
        Ok(manutencao.into())
    }

    pub async fn list_by_empresa(&self, empresa_id: Uuid) -> AppResult<Vec<ManutencaoResponse>> {
        let manutencoes = self.repository.find_by_empresa(empresa_id).await?;
        Ok(manutencoes.into_iter().map(ManutencaoResponse::from).collect())
    }

    pub async fn list_by_caminhao(
        &self,
        caminhao_id: Uuid,
        empresa_id: Uuid,
    ) -> AppResult<Vec<ManutencaoResponse>> {
        let caminhao = self
            .caminhoes
            .find_by_id(caminhao_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Caminhão não encontrado".to_string()))?;
        if caminhao.empresa_id != empresa_id {
            return Err(AppError::Forbidden(
                "Caminhão não pertence a esta empresa".to_string(),
            ));
        }

        let manutencoes = self.repository.find_by_caminhao(caminhao_id).await?;
        Ok(manutencoes.into_iter().map(ManutencaoResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        empresa_id: Uuid,
        request: UpdateManutencaoRequest,
    ) -> AppResult<ApiResponse<ManutencaoResponse>> {
        request.validate()?;

        let atual = self.carregar(id, empresa_id).await?;

        let status = match &request.status {
            Some(s) => parse_status(s)?,
            None => parse_status(&atual.status)?,
        };
        let pagamento = match &request.pagamento {
            Some(p) => parse_pagamento(p)?,
            None => atual.pagamento.clone(),
        };

        let manutencao = self
            .service
            .atualizar(
                id,
                // Some(None) limpa o campo; None mantém o atual.
                // Zerar o custo real derruba a conta espelho.
                DadosManutencao {
                    titulo: request.titulo.unwrap_or(atual.titulo),
                    tipo: request.tipo.unwrap_or(atual.tipo),
                    status,
                    data_prevista: request.data_prevista.unwrap_or(atual.data_prevista),
                    data_conclusao: request.data_conclusao.unwrap_or(atual.data_conclusao),
                    custo_estimado: request.custo_estimado.unwrap_or(atual.custo_estimado),
                    custo_real: request.custo_real.unwrap_or(atual.custo_real),
                    pagamento,
                },
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            manutencao.into(),
            "Manutenção atualizada com sucesso".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid, empresa_id: Uuid) -> AppResult<()> {
        self.carregar(id, empresa_id).await?;
        self.service.excluir(id).await
    }

    async fn carregar(&self, id: Uuid, empresa_id: Uuid) -> AppResult<Manutencao> {
        let manutencao = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Manutenção não encontrada".to_string()))?;

        if manutencao.empresa_id != empresa_id {
            return Err(AppError::Forbidden(
                "Manutenção não pertence a esta empresa".to_string(),
            ));
        }

        Ok(manutencao)
    }
}

fn parse_status(value: &str) -> AppResult<ManutencaoStatus> {
    ManutencaoStatus::parse(value)
        .ok_or_else(|| AppError::BadRequest(format!("Status de manutenção inválido: '{}'", value)))
}

fn parse_pagamento(value: &str) -> AppResult<String> {
    if PAGAMENTOS.contains(&value) {
        Ok(value.to_string())
    } else {
        Err(AppError::BadRequest(format!(
            "Status de pagamento inválido: '{}'",
            value
        )))
    }
}
