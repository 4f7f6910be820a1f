//! Modelo de Ação (campanha de campo)
//!
//! Uma ação é uma campanha itinerante em um município, oferecendo
//! cursos/exames e mobilizando caminhões da frota.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Status da ação. As transições são monotônicas:
/// `planned -> active -> completed`, sem caminho de volta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AcaoStatus {
    Planned,
    Active,
    Completed,
}

impl AcaoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AcaoStatus::Planned => "planned",
            AcaoStatus::Active => "active",
            AcaoStatus::Completed => "completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "planned" => Some(AcaoStatus::Planned),
            "active" => Some(AcaoStatus::Active),
            "completed" => Some(AcaoStatus::Completed),
            _ => None,
        }
    }

    /// Só permite avançar um passo na sequência; nunca voltar nem pular.
    pub fn pode_transicionar(self, destino: AcaoStatus) -> bool {
        matches!(
            (self, destino),
            (AcaoStatus::Planned, AcaoStatus::Active)
                | (AcaoStatus::Active, AcaoStatus::Completed)
        )
    }
}

/// Tipos de ação aceitos pela API.
pub const TIPOS_ACAO: [&str; 2] = ["course", "health"];

/// Ação principal - mapeia a tabela `acoes`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Acao {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transicao_avanca_um_passo() {
        assert!(AcaoStatus::Planned.pode_transicionar(AcaoStatus::Active));
        assert!(AcaoStatus::Active.pode_transicionar(AcaoStatus::Completed));
    }

    #[test]
    fn transicao_nunca_volta_nem_pula() {
        assert!(!AcaoStatus::Planned.pode_transicionar(AcaoStatus::Completed));
        assert!(!AcaoStatus::Active.pode_transicionar(AcaoStatus::Planned));
        assert!(!AcaoStatus::Completed.pode_transicionar(AcaoStatus::Active));
        assert!(!AcaoStatus::Completed.pode_transicionar(AcaoStatus::Planned));
        assert!(!AcaoStatus::Active.pode_transicionar(AcaoStatus::Active));
    }

    #[test]
    fn parse_e_as_str_sao_consistentes() {
        for s in ["planned", "active", "completed"] {
            assert_eq!(AcaoStatus::parse(s).unwrap().as_str(), s);
        }
        assert!(AcaoStatus::parse("cancelled").is_none());
    }
}
