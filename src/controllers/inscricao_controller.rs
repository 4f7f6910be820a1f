use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::api::ApiResponse;
use crate::dto::inscricao_dto::{
    CreateInscricaoRequest, InscricaoResponse, UpdateInscricaoStatusRequest,
};
use crate::models::inscricao::{Inscricao, InscricaoStatus};
use crate::repositories::cidadao_repository::CidadaoRepository;
use crate::repositories::inscricao_repository::InscricaoRepository;
use crate::repositories::oferta_repository::OfertaRepository;
use crate::services::elegibilidade_service::{ElegibilidadeService, PoliticaOferta};
use crate::utils::errors::{AppError, AppResult};

pub struct InscricaoController {
    repository: InscricaoRepository,
    ofertas: OfertaRepository,
    cidadaos: CidadaoRepository,
    elegibilidade: ElegibilidadeService,
}

impl InscricaoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: InscricaoRepository::new(pool.clone()),
            ofertas: OfertaRepository::new(pool.clone()),
            cidadaos: CidadaoRepository::new(pool.clone()),
            elegibilidade: ElegibilidadeService::new(pool),
        }
    }

    /// Inscreve um cidadão: valida posse, vagas e elegibilidade, nessa
    /// ordem. Rejeição de elegibilidade vira 409 com código e datas.
    pub async fn create(
        &self,
        empresa_id: Uuid,
        request: CreateInscricaoRequest,
    ) -> AppResult<ApiResponse<InscricaoResponse>> {
        let oferta = self
            .ofertas
            .find_by_id(request.oferta_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Oferta não encontrada".to_string()))?;
        if oferta.empresa_id != empresa_id {
            return Err(AppError::Forbidden(
                "Oferta não pertence a esta empresa".to_string(),
            ));
        }

        let cidadao = self
            .cidadaos
            .find_by_id(request.cidadao_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cidadão não encontrado".to_string()))?;
        if cidadao.empresa_id != empresa_id {
            return Err(AppError::Forbidden(
                "Cidadão não pertence a esta empresa".to_string(),
            ));
        }

        // limite de vagas fica fora do checador de elegibilidade
        let ocupadas = self.repository.count_ativas_por_oferta(oferta.id).await?;
        if ocupadas >= i64::from(oferta.vagas) {
            return Err(AppError::Conflict(
                "Oferta sem vagas disponíveis".to_string(),
            ));
        }

        let politica = PoliticaOferta::from(&oferta);
        if let Some(motivo) = self
            .elegibilidade
            .verificar(cidadao.id, oferta.curso_exame_id, politica)
            .await?
        {
            return Err(AppError::Rejeicao(
                motivo.mensagem(),
                serde_json::to_value(motivo).unwrap_or_default(),
            ));
        }

        let data = request
            .data_inscricao
            .unwrap_or_else(|| Utc::now().date_naive());

        let inscricao = self
            .repository
            .create(
                empresa_id,
                cidadao.id,
                oferta.acao_id,
                oferta.id,
                oferta.curso_exame_id,
                data,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            inscricao.into(),
            "Inscrição realizada com sucesso".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid, empresa_id: Uuid) -> AppResult<InscricaoResponse> {
        let inscricao = self.carregar(id, empresa_id).await?;
        Ok(inscricao.into())
    }

    pub async fn list_by_acao(
        &self,
        acao_id: Uuid,
        empresa_id: Uuid,
    ) -> AppResult<Vec<InscricaoResponse>> {
        let inscricoes = self.repository.find_by_acao(acao_id).await?;
        Ok(inscricoes
            .into_iter()
            .filter(|i| i.empresa_id == empresa_id)
            .map(InscricaoResponse::from)
            .collect())
    }

    pub async fn list_by_cidadao(
        &self,
        cidadao_id: Uuid,
        empresa_id: Uuid,
    ) -> AppResult<Vec<InscricaoResponse>> {
        let inscricoes = self.repository.find_by_cidadao(cidadao_id).await?;
        Ok(inscricoes
            .into_iter()
            .filter(|i| i.empresa_id == empresa_id)
            .map(InscricaoResponse::from)
            .collect())
    }

    /// Só `pending -> attended | absent`; o resultado final não muda.
    pub async fn atualizar_status(
        &self,
        id: Uuid,
        empresa_id: Uuid,
        request: UpdateInscricaoStatusRequest,
    ) -> AppResult<ApiResponse<InscricaoResponse>> {
        let atual = self.carregar(id, empresa_id).await?;

        let destino = InscricaoStatus::parse(&request.status).ok_or_else(|| {
            AppError::BadRequest(format!("Status de inscrição inválido: '{}'", request.status))
        })?;

        if destino == InscricaoStatus::Pending {
            return Err(AppError::BadRequest(
                "Inscrição não pode voltar para pending".to_string(),
            ));
        }
        if atual.status != InscricaoStatus::Pending.as_str() {
            return Err(AppError::Conflict(format!(
                "Inscrição já resolvida como '{}'",
                atual.status
            )));
        }

        let inscricao = self.repository.update_status(id, destino.as_str()).await?;

        Ok(ApiResponse::success_with_message(
            inscricao.into(),
            "Status da inscrição atualizado".to_string(),
        ))
    }

    async fn carregar(&self, id: Uuid, empresa_id: Uuid) -> AppResult<Inscricao> {
        let inscricao = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Inscrição não encontrada".to_string()))?;

        if inscricao.empresa_id != empresa_id {
            return Err(AppError::Forbidden(
                "Inscrição não pertence a esta empresa".to_string(),
            ));
        }

        Ok(inscricao)
    }
}
