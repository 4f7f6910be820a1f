//! Modelo de Caminhão (unidade móvel)
//!
//! O campo `status` é DERIVADO: nunca é escrito por endpoint de
//! usuário, apenas pelo sincronizador de status
//! (`services::caminhao_status_service`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Status do caminhão, sempre igual à reconciliação de
/// manutenções abertas + vínculos com ações ativas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaminhaoStatus {
    Available,
    InMaintenance,
    InAction,
}

impl CaminhaoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaminhaoStatus::Available => "available",
            CaminhaoStatus::InMaintenance => "in_maintenance",
            CaminhaoStatus::InAction => "in_action",
        }
    }
}

/// Caminhão principal - mapeia a tabela `caminhoes`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Caminhao {
    pub id: Uuid,
    pub empresa_id: Uuid,
    pub placa: String,
    pub modelo: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
