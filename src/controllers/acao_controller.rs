use sqlx::PgPool;
use tracing::error;
use uuid::Uuid;
use validator::Validate;

use crate::dto::acao_dto::{
    AcaoResponse, CreateAcaoRequest, CreateOfertaRequest, OfertaResponse,
    TransicaoStatusRequest, UpdateAcaoRequest, VincularCaminhaoRequest,
};
use crate::dto::api::ApiResponse;
use crate::models::acao::{Acao, AcaoStatus, TIPOS_ACAO};
use crate::repositories::acao_repository::AcaoRepository;
use crate::repositories::caminhao_repository::CaminhaoRepository;
use crate::repositories::curso_exame_repository::CursoExameRepository;
use crate::repositories::oferta_repository::OfertaRepository;
use crate::services::caminhao_status_service::CaminhaoStatusService;
use crate::utils::errors::{AppError, AppResult};

pub struct AcaoController {
    repository: AcaoRepository,
    caminhoes: CaminhaoRepository,
    ofertas: OfertaRepository,
    cursos_exames: CursoExameRepository,
    status_service: CaminhaoStatusService,
}

impl AcaoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AcaoRepository::new(pool.clone()),
            caminhoes: CaminhaoRepository::new(pool.clone()),
            ofertas: OfertaRepository::new(pool.clone()),
            cursos_exames: CursoExameRepository::new(pool.clone()),
            status_service: CaminhaoStatusService::new(pool),
        }
    }

    pub async fn create(
        &self,
        empresa_id: Uuid,
        request: CreateAcaoRequest,
    ) -> AppResult<ApiResponse<AcaoResponse>> {
        request.validate()?;

        if !TIPOS_ACAO.contains(&request.tipo.as_str()) {
            return Err(AppError::BadRequest(format!(
                "Tipo de ação inválido: '{}'",
                request.tipo
            )));
        }
        if request.data_fim < request.data_inicio {
            return Err(AppError::BadRequest(
                "Data final anterior à data inicial".to_string(),
            ));
        }

        let acao = self
            .repository
            .create(
                empresa_id,
                request.nome,
                request.tipo,
                request.municipio,
                request.uf,
                request.data_inicio,
                request.data_fim,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            acao.into(),
            "Ação criada com sucesso".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid, empresa_id: Uuid) -> AppResult<AcaoResponse> {
        let acao = self.carregar(id, empresa_id).await?;
        Ok(acao.into())
    }

    pub async fn list_by_empresa(&self, empresa_id: Uuid) -> AppResult<Vec<AcaoResponse>> {
        let acoes = self.repository.find_by_empresa(empresa_id).await?;
        Ok(acoes.into_iter().map(AcaoResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        empresa_id: Uuid,
        request: UpdateAcaoRequest,
    ) -> AppResult<ApiResponse<AcaoResponse>> {
        request.validate()?;

        let atual = self.carregar(id, empresa_id).await?;

        if let Some(tipo) = &request.tipo {
            if !TIPOS_ACAO.contains(&tipo.as_str()) {
                return Err(AppError::BadRequest(format!("Tipo de ação inválido: '{}'", tipo)));
            }
        }

        let data_inicio = request.data_inicio.unwrap_or(atual.data_inicio);
        let data_fim = request.data_fim.unwrap_or(atual.data_fim);
        if data_fim < data_inicio {
            return Err(AppError::BadRequest(
                "Data final anterior à data inicial".to_string(),
            ));
        }

        let acao = self
            .repository
            .update(
                id,
                request.nome.unwrap_or(atual.nome),
                request.tipo.unwrap_or(atual.tipo),
                request.municipio.unwrap_or(atual.municipio),
                request.uf.unwrap_or(atual.uf),
                data_inicio,
                data_fim,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            acao.into(),
            "Ação atualizada com sucesso".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid, empresa_id: Uuid) -> AppResult<()> {
        self.carregar(id, empresa_id).await?;
        self.repository.delete(id).await?;
        Ok(())
    }

    /// Transição monotônica de status. Depois da transição, todos os
    /// caminhões vinculados são ressincronizados (entrar em `active`
    /// pode levá-los a `in_action`; sair de `active` os libera).
    pub async fn transicionar_status(
        &self,
        id: Uuid,
        empresa_id: Uuid,
        request: TransicaoStatusRequest,
    ) -> AppResult<ApiResponse<AcaoResponse>> {
        let acao = self.carregar(id, empresa_id).await?;

        let destino = AcaoStatus::parse(&request.status).ok_or_else(|| {
            AppError::BadRequest(format!("Status de ação inválido: '{}'", request.status))
        })?;
        let atual = AcaoStatus::parse(&acao.status).ok_or_else(|| {
            AppError::Internal(format!("Status persistido inválido: '{}'", acao.status))
        })?;

        if !atual.pode_transicionar(destino) {
            return Err(AppError::Conflict(format!(
                "Transição de status inválida: {} -> {}",
                atual.as_str(),
                destino.as_str()
            )));
        }

        self.repository.update_status(id, destino.as_str()).await?;
        self.ressincronizar_vinculados(id).await?;

        let acao = self.carregar(id, empresa_id).await?;
        Ok(ApiResponse::success_with_message(
            acao.into(),
            "Status da ação atualizado".to_string(),
        ))
    }

    pub async fn vincular_caminhao(
        &self,
        id: Uuid,
        empresa_id: Uuid,
        request: VincularCaminhaoRequest,
    ) -> AppResult<ApiResponse<AcaoResponse>> {
        let acao = self.carregar(id, empresa_id).await?;

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

        self.repository.link_caminhao(id, caminhao.id).await?;
        self.status_service.recompute(caminhao.id).await?;

        Ok(ApiResponse::success_with_message(
            acao.into(),
            "Caminhão vinculado à ação".to_string(),
        ))
    }

    pub async fn desvincular_caminhao(
        &self,
        id: Uuid,
        empresa_id: Uuid,
        caminhao_id: Uuid,
    ) -> AppResult<()> {
        self.carregar(id, empresa_id).await?;
        self.repository.unlink_caminhao(id, caminhao_id).await?;
        self.status_service.recompute(caminhao_id).await?;
        Ok(())
    }

    pub async fn criar_oferta(
        &self,
        id: Uuid,
        empresa_id: Uuid,
        request: CreateOfertaRequest,
    ) -> AppResult<ApiResponse<OfertaResponse>> {
        request.validate()?;

        self.carregar(id, empresa_id).await?;

        let curso_exame = self
            .cursos_exames
            .find_by_id(request.curso_exame_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Curso/exame não encontrado".to_string()))?;
        if curso_exame.empresa_id != empresa_id {
            return Err(AppError::Forbidden(
                "Curso/exame não pertence a esta empresa".to_string(),
            ));
        }

        let oferta = self
            .ofertas
            .create(
                empresa_id,
                id,
                request.curso_exame_id,
                request.vagas,
                request.permite_repeticao,
                request.intervalo_repeticao_meses,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            oferta.into(),
            "Oferta criada com sucesso".to_string(),
        ))
    }

    pub async fn listar_ofertas(
        &self,
        id: Uuid,
        empresa_id: Uuid,
    ) -> AppResult<Vec<OfertaResponse>> {
        self.carregar(id, empresa_id).await?;
        let ofertas = self.ofertas.find_by_acao(id).await?;
        Ok(ofertas.into_iter().map(OfertaResponse::from).collect())
    }

    /// Um caminhão que falhe não impede a ressincronização dos demais.
    async fn ressincronizar_vinculados(&self, acao_id: Uuid) -> AppResult<()> {
        for caminhao_id in self.repository.caminhoes_vinculados(acao_id).await? {
            if let Err(e) = self.status_service.recompute(caminhao_id).await {
                error!("Falha ao ressincronizar caminhão {}: {}", caminhao_id, e);
            }
        }
        Ok(())
    }

    async fn carregar(&self, id: Uuid, empresa_id: Uuid) -> AppResult<Acao> {
        let acao = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Ação não encontrada".to_string()))?;

        if acao.empresa_id != empresa_id {
            return Err(AppError::Forbidden(
                "Ação não pertence a esta empresa".to_string(),
            ));
        }

        Ok(acao)
    }
}
