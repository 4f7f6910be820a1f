use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::caminhao::Caminhao;

// Request para criar um caminhão
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCaminhaoRequest {
    #[validate(length(min = 7, max = 8))]
    pub placa: String,

    #[validate(length(min = 2, max = 100))]
    pub modelo: Option<String>,
}

// Request para atualizar um caminhão.
// Sem campo de status: o status é derivado e só o sincronizador escreve.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCaminhaoRequest {
    #[validate(length(min = 7, max = 8))]
    pub placa: Option<String>,

    #[validate(length(min = 2, max = 100))]
    pub modelo: Option<String>,
}

// Response de caminhão
#[derive(Debug, Serialize)]
pub struct CaminhaoResponse {
    pub id: Uuid,
    pub empresa_id: Uuid,
    pub placa: String,
    pub modelo: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<Caminhao> for CaminhaoResponse {
    fn from(caminhao: Caminhao) -> Self {
        Self {
            id: caminhao.id,
            empresa_id: caminhao.empresa_id,
            placa: caminhao.placa,
            modelo: caminhao.modelo,
            status: caminhao.status,
            created_at: caminhao.created_at,
        }
    }
}
