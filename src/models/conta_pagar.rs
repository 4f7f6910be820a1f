//! Modelo de Conta a Pagar
//!
//! Registro financeiro. Quando `manutencao_id` está presente a conta
//! é um espelho gerado pelo sistema a partir do custo real da
//! manutenção; nesse caso só o hook de manutenção cria/atualiza/apaga.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Conta a pagar - mapeia a tabela `contas_pagar`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ContaPagar {
    pub id: Uuid,
    pub empresa_id: Uuid,
    pub caminhao_id: Option<Uuid>,
    pub manutencao_id: Option<Uuid>,
    pub descricao: String,
    pub valor: Decimal,
    pub data_vencimento: Option<NaiveDate>,
    pub data_pagamento: Option<NaiveDate>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl ContaPagar {
    /// Espelho de manutenção: gerida pelo sistema, não pela API.
    pub fn eh_espelho(&self) -> bool {
        self.manutencao_id.is_some()
    }
}
