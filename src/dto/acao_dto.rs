use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::acao::Acao;
use crate::models::oferta::AcaoOferta;

// Request para criar uma ação
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAcaoRequest {
    #[validate(length(min = 3, max = 150))]
    pub nome: String,

    pub tipo: String,

    #[validate(length(min = 2, max = 100))]
    pub municipio: String,

    #[validate(custom = "crate::utils::validation::validate_uf")]
    pub uf: String,

    pub data_inicio: NaiveDate,
    pub data_fim: NaiveDate,
}

// Request para atualizar uma ação (status fora: transição tem endpoint próprio)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAcaoRequest {
    #[validate(length(min = 3, max = 150))]
    pub nome: Option<String>,

    pub tipo: Option<String>,

    #[validate(length(min = 2, max = 100))]
    pub municipio: Option<String>,

    #[validate(custom = "crate::utils::validation::validate_uf")]
    pub uf: Option<String>,

    pub data_inicio: Option<NaiveDate>,
    pub data_fim: Option<NaiveDate>,
}

// Request de transição de status (monotônica)
#[derive(Debug, Deserialize)]
pub struct TransicaoStatusRequest {
    pub status: String,
}

// Request para vincular um caminhão à ação
#[derive(Debug, Deserialize)]
pub struct VincularCaminhaoRequest {
    pub caminhao_id: Uuid,
}

// Request para criar uma oferta de curso/exame dentro da ação
#[derive(Debug, Deserialize, Validate)]
pub struct CreateOfertaRequest {
    pub curso_exame_id: Uuid,

    #[validate(range(min = 1, max = 10000))]
    pub vagas: i32,

    pub permite_repeticao: bool,

    #[validate(range(min = 1, max = 120))]
    pub intervalo_repeticao_meses: Option<i32>,
}

// Response de ação
#[derive(Debug, Serialize)]
pub struct AcaoResponse {
    pub id: Uuid,
    pub empresa_id: Uuid,
    pub numero: i32,
    pub nome: String,
    pub tipo: String,
    pub municipio: String,
    pub uf: String,
    pub data_inicio: NaiveDate,
    pub data_fim: NaiveDate,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Acao> for AcaoResponse {
    fn from(acao: Acao) -> Self {
        Self {
            id: acao.id,
            empresa_id: acao.empresa_id,
            numero: acao.numero,
            nome: acao.nome,
            tipo: acao.tipo,
            municipio: acao.municipio,
            uf: acao.uf,
            data_inicio: acao.data_inicio,
            data_fim: acao.data_fim,
            status: acao.status,
            created_at: acao.created_at,
        }
    }
}

// Response de oferta
#[derive(Debug, Serialize)]
pub struct OfertaResponse {
    pub id: Uuid,
    pub acao_id: Uuid,
    pub curso_exame_id: Uuid,
    pub vagas: i32,
    pub permite_repeticao: bool,
    pub intervalo_repeticao_meses: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl From<AcaoOferta> for OfertaResponse {
    fn from(oferta: AcaoOferta) -> Self {
        Self {
            id: oferta.id,
            acao_id: oferta.acao_id,
            curso_exame_id: oferta.curso_exame_id,
            vagas: oferta.vagas,
            permite_repeticao: oferta.permite_repeticao,
            intervalo_repeticao_meses: oferta.intervalo_repeticao_meses,
            created_at: oferta.created_at,
        }
    }
}
