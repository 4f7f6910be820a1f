use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::api::ApiResponse;
use crate::dto::conta_pagar_dto::{
    ContaPagarResponse, CreateContaPagarRequest, PagarContaRequest,
};
use crate::models::conta_pagar::ContaPagar;
use crate::repositories::caminhao_repository::CaminhaoRepository;
use crate::repositories::conta_pagar_repository::ContaPagarRepository;
use crate::utils::errors::{AppError, AppResult};

pub struct ContaPagarController {
    repository: ContaPagarRepository,
    caminhoes: CaminhaoRepository,
}

impl ContaPagarController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ContaPagarRepository::new(pool.clone()),
            caminhoes: CaminhaoRepository::new(pool),
        }
    }

    /// Lança uma conta manual. Contas espelho de manutenção nunca
    /// passam por aqui: só o hook de manutenção as cria.
    pub async fn create(
        &self,
        empresa_id: Uuid,
        request: CreateContaPagarRequest,
    ) -> AppResult<ApiResponse<ContaPagarResponse>> {
        request.validate()?;

        if request.valor <= Decimal::ZERO {
            return Err(AppError::BadRequest(
                "Valor da conta deve ser positivo".to_string(),
            ));
        }

        if let Some(caminhao_id) = request.caminhao_id {
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
        }

        let conta = self
            .repository
            .create(
                empresa_id,
                request.caminhao_id,
                None,
                request.descricao,
                request.valor,
                request.data_vencimento,
                None,
                "pending",
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            conta.into(),
            "Conta lançada com sucesso".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid, empresa_id: Uuid) -> AppResult<ContaPagarResponse> {
        let conta = self.carregar(id, empresa_id).await?;
        Ok(conta.into())
    }

    pub async fn list_by_empresa(&self, empresa_id: Uuid) -> AppResult<Vec<ContaPagarResponse>> {
        let contas = self.repository.find_by_empresa(empresa_id).await?;
        Ok(contas.into_iter().map(ContaPagarResponse::from).collect())
    }

    pub async fn pagar(
        &self,
        id: Uuid,
        empresa_id: Uuid,
        request: PagarContaRequest,
    ) -> AppResult<ApiResponse<ContaPagarResponse>> {
        let conta = self.carregar(id, empresa_id).await?;

        if conta.status == "paid" {
            return Err(AppError::Conflict("Conta já está paga".to_string()));
        }

        let data = request
            .data_pagamento
            .unwrap_or_else(|| Utc::now().date_naive());
        let conta = self.repository.marcar_paga(id, data).await?;

        Ok(ApiResponse::success_with_message(
            conta.into(),
            "Conta quitada com sucesso".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid, empresa_id: Uuid) -> AppResult<()> {
        let conta = self.carregar(id, empresa_id).await?;

        if conta.eh_espelho() {
            return Err(AppError::Forbidden(
                "Conta espelho de manutenção é gerida pelo sistema".to_string(),
            ));
        }

        self.repository.delete(id).await?;
        Ok(())
    }

    async fn carregar(&self, id: Uuid, empresa_id: Uuid) -> AppResult<ContaPagar> {
        let conta = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Conta a pagar não encontrada".to_string()))?;

        if conta.empresa_id != empresa_id {
            return Err(AppError::Forbidden(
                "Conta não pertence a esta empresa".to_string(),
            ));
        }

        Ok(conta)
    }
}
