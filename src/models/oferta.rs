//! Modelo de Oferta de curso/exame dentro de uma ação
//!
//! Carrega a política de repetição que governa a elegibilidade de
//! inscrição (`permite_repeticao` + `intervalo_repeticao_meses`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Oferta - mapeia a tabela `acao_ofertas`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AcaoOferta {
    pub id: Uuid,
    pub empresa_id: Uuid,
    pub acao_id: Uuid,
    pub curso_exame_id: Uuid,
    pub vagas: i32,
    pub permite_repeticao: bool,
    pub intervalo_repeticao_meses: Option<i32>,
    pub created_at: DateTime<Utc>,
}
