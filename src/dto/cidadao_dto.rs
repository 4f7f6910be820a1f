use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::cidadao::Cidadao;

// Request para cadastrar um cidadão
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCidadaoRequest {
    #[validate(length(min = 3, max = 150))]
    pub nome: String,

    #[validate(custom = "crate::utils::validation::validate_cpf")]
    pub cpf: String,

    pub data_nascimento: Option<NaiveDate>,
}

// Request para atualizar um cidadão
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCidadaoRequest {
    #[validate(length(min = 3, max = 150))]
    pub nome: Option<String>,

    #[validate(custom = "crate::utils::validation::validate_cpf")]
    pub cpf: Option<String>,

    pub data_nascimento: Option<NaiveDate>,
}

// Response de cidadão
#[derive(Debug, Serialize)]
pub struct CidadaoResponse {
    pub id: Uuid,
    pub nome: String,
    pub cpf: String,
    pub data_nascimento: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl From<Cidadao> for CidadaoResponse {
    fn from(cidadao: Cidadao) -> Self {
        Self {
            id: cidadao.id,
            nome: cidadao.nome,
            cpf: cidadao.cpf,
            data_nascimento: cidadao.data_nascimento,
            created_at: cidadao.created_at,
        }
    }
}
