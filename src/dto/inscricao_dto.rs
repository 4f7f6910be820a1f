use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::inscricao::Inscricao;

// Request para inscrever um cidadão em uma oferta
#[derive(Debug, Deserialize)]
pub struct CreateInscricaoRequest {
    pub cidadao_id: Uuid,
    pub oferta_id: Uuid,
    // default: hoje
    pub data_inscricao: Option<NaiveDate>,
}

// Request para mover o status da inscrição (pending -> attended|absent)
#[derive(Debug, Deserialize)]
pub struct UpdateInscricaoStatusRequest {
    pub status: String,
}

// Response de inscrição
#[derive(Debug, Serialize)]
pub struct InscricaoResponse {
    pub id: Uuid,
    pub cidadao_id: Uuid,
    pub acao_id: Uuid,
    pub oferta_id: Uuid,
    pub curso_exame_id: Uuid,
    pub status: String,
    pub data_inscricao: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl From<Inscricao> for InscricaoResponse {
    fn from(inscricao: Inscricao) -> Self {
        Self {
            id: inscricao.id,
            cidadao_id: inscricao.cidadao_id,
            acao_id: inscricao.acao_id,
            oferta_id: inscricao.oferta_id,
            curso_exame_id: inscricao.curso_exame_id,
            status: inscricao.status,
            data_inscricao: inscricao.data_inscricao,
            created_at: inscricao.created_at,
        }
    }
}
