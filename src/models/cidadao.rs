//! Modelo de Cidadão

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Cidadão atendido pelas ações - mapeia a tabela `cidadaos`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Cidadao {
    pub id: Uuid,
    pub empresa_id: Uuid,
    pub nome: String,
    pub cpf: String,
    pub data_nascimento: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}
