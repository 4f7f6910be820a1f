//! Modelo de Curso/Exame (catálogo)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Tipos aceitos no catálogo.
pub const TIPOS_CURSO_EXAME: [&str; 2] = ["course", "exam"];

/// Item do catálogo de cursos e exames - mapeia `cursos_exames`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CursoExame {
    pub id: Uuid,
    pub empresa_id: Uuid,
    pub nome: String,
    pub tipo: String,
    pub created_at: DateTime<Utc>,
}
