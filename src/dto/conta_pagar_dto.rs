use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::conta_pagar::ContaPagar;

// Request para lançar uma conta manual (não espelho)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateContaPagarRequest {
    pub caminhao_id: Option<Uuid>,

    #[validate(length(min = 3, max = 200))]
    pub descricao: String,

    pub valor: Decimal,
    pub data_vencimento: Option<NaiveDate>,
}

// Request para quitar uma conta
#[derive(Debug, Deserialize)]
pub struct PagarContaRequest {
    // default: hoje
    pub data_pagamento: Option<NaiveDate>,
}

// Response de conta a pagar
#[derive(Debug, Serialize)]
pub struct ContaPagarResponse {
    pub id: Uuid,
    pub caminhao_id: Option<Uuid>,
    pub manutencao_id: Option<Uuid>,
    pub descricao: String,
    pub valor: Decimal,
    pub data_vencimento: Option<NaiveDate>,
    pub data_pagamento: Option<NaiveDate>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<ContaPagar> for ContaPagarResponse {
    fn from(conta: ContaPagar) -> Self {
        Self {
            id: conta.id,
            caminhao_id: conta.caminhao_id,
            manutencao_id: conta.manutencao_id,
            descricao: conta.descricao,
            valor: conta.valor,
            data_vencimento: conta.data_vencimento,
            data_pagamento: conta.data_pagamento,
            status: conta.status,
            created_at: conta.created_at,
        }
    }
}
