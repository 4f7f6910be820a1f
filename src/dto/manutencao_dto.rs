use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::manutencao::Manutencao;

/// Distingue campo ausente (mantém o valor atual) de `null` explícito
/// (limpa o valor): ausente -> `None`, `null` -> `Some(None)`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// Request para criar uma manutenção
#[derive(Debug, Deserialize, Validate)]
pub struct CreateManutencaoRequest {
    pub caminhao_id: Uuid,

    #[validate(length(min = 3, max = 150))]
    pub titulo: String,

    #[validate(length(min = 3, max = 50))]
    pub tipo: String,

    // default 'scheduled'
    pub status: Option<String>,

    pub data_prevista: Option<NaiveDate>,
    pub data_conclusao: Option<NaiveDate>,
    pub custo_estimado: Option<Decimal>,
    pub custo_real: Option<Decimal>,

    // default 'pending'
    pub pagamento: Option<String>,
}

// Request para atualizar uma manutenção. Datas e custos usam
// double_option: `null` limpa, campo ausente mantém o atual.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateManutencaoRequest {
    #[validate(length(min = 3, max = 150))]
    pub titulo: Option<String>,

    #[validate(length(min = 3, max = 50))]
    pub tipo: Option<String>,

    pub status: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub data_prevista: Option<Option<NaiveDate>>,

    #[serde(default, deserialize_with = "double_option")]
    pub data_conclusao: Option<Option<NaiveDate>>,

    #[serde(default, deserialize_with = "double_option")]
    pub custo_estimado: Option<Option<Decimal>>,

    // `null` limpa o custo real e derruba a conta espelho
    #[serde(default, deserialize_with = "double_option")]
    pub custo_real: Option<Option<Decimal>>,

    pub pagamento: Option<String>,
}

// Response de manutenção
#[derive(Debug, Serialize)]
pub struct ManutencaoResponse {
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

impl From<Manutencao> for ManutencaoResponse {
    fn from(manutencao: Manutencao) -> Self {
        Self {
            id: manutencao.id,
            empresa_id: manutencao.empresa_id,
            caminhao_id: manutencao.caminhao_id,
            titulo: manutencao.titulo,
            tipo: manutencao.tipo,
            status: manutencao.status,
            data_prevista: manutencao.data_prevista,
            data_conclusao: manutencao.data_conclusao,
            custo_estimado: manutencao.custo_estimado,
            custo_real: manutencao.custo_real,
            pagamento: manutencao.pagamento,
            created_at: manutencao.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custo_real_null_limpa_e_ausente_mantem() {
        let com_null: UpdateManutencaoRequest =
            serde_json::from_str(r#"{ "custo_real": null }"#).unwrap();
        assert_eq!(com_null.custo_real, Some(None));

        let ausente: UpdateManutencaoRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(ausente.custo_real, None);

        let com_valor: UpdateManutencaoRequest =
            serde_json::from_str(r#"{ "custo_real": "150.00" }"#).unwrap();
        assert_eq!(com_valor.custo_real, Some(Some(Decimal::new(15000, 2))));
    }

    #[test]
    fn datas_e_custo_estimado_distinguem_null_de_ausente() {
        let request: UpdateManutencaoRequest = serde_json::from_str(
            r#"{ "data_prevista": null, "data_conclusao": "2026-09-10" }"#,
        )
        .unwrap();

        assert_eq!(request.data_prevista, Some(None));
        assert_eq!(
            request.data_conclusao,
            Some(NaiveDate::from_ymd_opt(2026, 9, 10))
        );
        assert_eq!(request.custo_estimado, None);
    }
}
