//! Modelo de Manutenção
//!
//! Registro de reparo/serviço contra um caminhão. Enquanto o status
//! estiver em {scheduled, in_progress} o caminhão dono fica
//! obrigatoriamente em `in_maintenance`.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManutencaoStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl ManutencaoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ManutencaoStatus::Scheduled => "scheduled",
            ManutencaoStatus::InProgress => "in_progress",
            ManutencaoStatus::Completed => "completed",
            ManutencaoStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "scheduled" => Some(ManutencaoStatus::Scheduled),
            "in_progress" => Some(ManutencaoStatus::InProgress),
            "completed" => Some(ManutencaoStatus::Completed),
            "cancelled" => Some(ManutencaoStatus::Cancelled),
            _ => None,
        }
    }

    /// Aberta = ainda segura o caminhão em manutenção.
    pub fn esta_aberta(&self) -> bool {
        matches!(self, ManutencaoStatus::Scheduled | ManutencaoStatus::InProgress)
    }
}

/// Status de pagamento aceitos para manutenção e conta a pagar.
pub const PAGAMENTOS: [&str; 2] = ["pending", "paid"];

/// Manutenção principal - mapeia a tabela `manutencoes`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Manutencao {
    pub id: Uuid,
    pub empresa_id: Uuid,
    pub caminhao_id: Uuid,
    pub titulo: String,
    pub tipo: String,
    pub status: String,
    pub data_prevista: Option<NaiveDate>,
    pub data_conclusao: Option<NaiveDate>,
    pub custo_estimado: Option<Decimal>,
    pub custo_real: Option<Decimal>,
    pub pagamento: String,
    pub created_at: DateTime<Utc>,
}

impl Manutencao {
    pub fn esta_aberta(&self) -> bool {
        ManutencaoStatus::parse(&self.status)
            .map(|s| s.esta_aberta())
            .unwrap_or(false)
    }

    /// Janela vencida: ainda aberta mas a data de conclusão já passou.
    /// É o critério de seleção da varredura periódica.
    pub fn esta_vencida(&self, hoje: NaiveDate) -> bool {
        self.esta_aberta() && self.data_conclusao.map(|d| d < hoje).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn manutencao(status: &str, conclusao: Option<NaiveDate>) -> Manutencao {
        Manutencao {
            id: Uuid::new_v4(),
            empresa_id: Uuid::new_v4(),
            caminhao_id: Uuid::new_v4(),
            titulo: "Troca de óleo".to_string(),
            tipo: "preventiva".to_string(),
            status: status.to_string(),
            data_prevista: None,
            data_conclusao: conclusao,
            custo_estimado: None,
            custo_real: None,
            pagamento: "pending".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn abertas_sao_scheduled_e_in_progress() {
        assert!(manutencao("scheduled", None).esta_aberta());
        assert!(manutencao("in_progress", None).esta_aberta());
        assert!(!manutencao("completed", None).esta_aberta());
        assert!(!manutencao("cancelled", None).esta_aberta());
    }

    #[test]
    fn vencida_exige_aberta_e_data_no_passado() {
        let hoje = NaiveDate::from_ymd_opt(2026, 8, 23).unwrap();
        let ontem = NaiveDate::from_ymd_opt(2026, 8, 22).unwrap();
        let amanha = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();

        assert!(manutencao("in_progress", Some(ontem)).esta_vencida(hoje));
        assert!(manutencao("scheduled", Some(ontem)).esta_vencida(hoje));
        assert!(!manutencao("in_progress", Some(hoje)).esta_vencida(hoje));
        assert!(!manutencao("in_progress", Some(amanha)).esta_vencida(hoje));
        assert!(!manutencao("completed", Some(ontem)).esta_vencida(hoje));
        assert!(!manutencao("in_progress", None).esta_vencida(hoje));
    }
}
