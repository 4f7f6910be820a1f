//! Modelo de Inscrição
//!
//! Registro do cidadão em uma oferta de curso/exame dentro de uma ação.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InscricaoStatus {
    Pending,
    Attended,
    Absent,
}

impl InscricaoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InscricaoStatus::Pending => "pending",
            InscricaoStatus::Attended => "attended",
            InscricaoStatus::Absent => "absent",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(InscricaoStatus::Pending),
            "attended" => Some(InscricaoStatus::Attended),
            "absent" => Some(InscricaoStatus::Absent),
            _ => None,
        }
    }
}

/// Inscrição principal - mapeia a tabela `inscricoes`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Inscricao {
    pub id: Uuid,
    pub empresa_id: Uuid,
    pub cidadao_id: Uuid,
    pub acao_id: Uuid,
    pub oferta_id: Uuid,
    pub curso_exame_id: Uuid,
    pub status: String,
    pub data_inscricao: NaiveDate,
    pub created_at: DateTime<Utc>,
}
