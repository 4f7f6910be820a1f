use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::curso_exame::CursoExame;

// Request para cadastrar um curso/exame no catálogo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCursoExameRequest {
    #[validate(length(min = 3, max = 150))]
    pub nome: String,

    pub tipo: String,
}

// Request para atualizar um curso/exame
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCursoExameRequest {
    #[validate(length(min = 3, max = 150))]
    pub nome: Option<String>,

    pub tipo: Option<String>,
}

// Response de curso/exame
#[derive(Debug, Serialize)]
pub struct CursoExameResponse {
    pub id: Uuid,
    pub nome: String,
    pub tipo: String,
    pub created_at: DateTime<Utc>,
}

impl From<CursoExame> for CursoExameResponse {
    fn from(item: CursoExame) -> Self {
        Self {
            id: item.id,
            nome: item.nome,
            tipo: item.tipo,
            created_at: item.created_at,
        }
    }
}
