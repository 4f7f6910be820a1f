//! Hook de ciclo de vida da manutenção
//!
//! Toda escrita de manutenção passa por aqui:
//! 1. persiste a linha;
//! 2. ressincroniza o status do caminhão dono;
//! 3. espelha o custo real em conta a pagar (best-effort: falha no
//!    espelho é logada e NÃO desfaz a escrita da manutenção).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use crate::models::manutencao::{Manutencao, ManutencaoStatus};
use crate::repositories::conta_pagar_repository::ContaPagarRepository;
use crate::repositories::manutencao_repository::ManutencaoRepository;
use crate::services::caminhao_status_service::CaminhaoStatusService;
use crate::utils::errors::{not_found_error, AppResult};

/// Campos de escrita de uma manutenção, já validados pelo controller.
#[derive(Debug, Clone)]
pub struct DadosManutencao {
    pub titulo: String,
    pub tipo: String,
    pub status: ManutencaoStatus,
    pub data_prevista: Option<NaiveDate>,
    pub data_conclusao: Option<NaiveDate>,
    pub custo_estimado: Option<Decimal>,
    pub custo_real: Option<Decimal>,
    pub pagamento: String,
}

/// Conta espelho a manter para uma manutenção, ou nenhuma.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EspelhoConta {
    pub descricao: String,
    pub valor: Decimal,
    pub data_vencimento: Option<NaiveDate>,
    pub data_pagamento: Option<NaiveDate>,
    pub pago: bool,
}

/// Decisão pura do espelhamento: conta existe enquanto houver custo
/// real positivo; valor e datas seguem a manutenção.
pub fn decidir_espelho(manutencao: &Manutencao) -> Option<EspelhoConta> {
    let custo = manutencao.custo_real?;
    if custo <= Decimal::ZERO {
        return None;
    }

    let pago = manutencao.pagamento == "paid";
    Some(EspelhoConta {
        descricao: format!("Manutenção: {}", manutencao.titulo),
        valor: custo,
        data_vencimento: manutencao.data_conclusao.or(manutencao.data_prevista),
        data_pagamento: if pago { manutencao.data_conclusao } else { None },
        pago,
    })
}

pub struct ManutencaoService {
    manutencoes: ManutencaoRepository,
    contas: ContaPagarRepository,
    status: CaminhaoStatusService,
}

impl ManutencaoService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            manutencoes: ManutencaoRepository::new(pool.clone()),
            contas: ContaPagarRepository::new(pool.clone()),
            status: CaminhaoStatusService::new(pool),
        }
    }

    pub async fn registrar(
        &self,
        empresa_id: Uuid,
        caminhao_id: Uuid,
        dados: DadosManutencao,
    ) -> AppResult<Manutencao> {
        let manutencao = self
            .manutencoes
            .create(
                empresa_id,
                caminhao_id,
                dados.titulo,
                dados.tipo,
                dados.status.as_str(),
                dados.data_prevista,
                dados.data_conclusao,
                dados.custo_estimado,
                dados.custo_real,
                &dados.pagamento,
            )
            .await?;

        self.status.recompute(caminhao_id).await?;
        self.espelhar_conta(&manutencao).await;

        Ok(manutencao)
    }

    pub async fn atualizar(&self, id: Uuid, dados: DadosManutencao) -> AppResult<Manutencao> {
        let atual = self
            .manutencoes
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Manutenção", &id.to_string()))?;

        let manutencao = self
            .manutencoes
            .update(
                id,
                dados.titulo,
                dados.tipo,
                dados.status.as_str(),
                dados.data_prevista,
                dados.data_conclusao,
                dados.custo_estimado,
                dados.custo_real,
                &dados.pagamento,
            )
            .await?;

        self.status.recompute(atual.caminhao_id).await?;
        self.espelhar_conta(&manutencao).await;

        Ok(manutencao)
    }

    pub async fn excluir(&self, id: Uuid) -> AppResult<()> {
        let atual = self
            .manutencoes
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Manutenção", &id.to_string()))?;

        // conta espelho sai junto
        self.contas.delete_by_manutencao(id).await?;
        self.manutencoes.delete(id).await?;
        self.status.recompute(atual.caminhao_id).await?;

        Ok(())
    }

    /// Efeito secundário best-effort: nunca propaga o erro.
    async fn espelhar_conta(&self, manutencao: &Manutencao) {
        if let Err(e) = self.aplicar_espelho(manutencao).await {
            warn!(
                "Falha ao espelhar conta a pagar da manutenção {}: {}",
                manutencao.id, e
            );
        }
    }

    async fn aplicar_espelho(&self, manutencao: &Manutencao) -> AppResult<()> {
        let existente = self.contas.find_by_manutencao(manutencao.id).await?;

        match (decidir_espelho(manutencao), existente) {
            (Some(espelho), None) => {
                self.contas
                    .create(
                        manutencao.empresa_id,
                        Some(manutencao.caminhao_id),
                        Some(manutencao.id),
                        espelho.descricao,
                        espelho.valor,
                        espelho.data_vencimento,
                        espelho.data_pagamento,
                        if espelho.pago { "paid" } else { "pending" },
                    )
                    .await?;
            }
            (Some(espelho), Some(conta)) => {
                self.contas
                    .update_espelho(
                        conta.id,
                        espelho.descricao,
                        espelho.valor,
                        espelho.data_vencimento,
                        espelho.data_pagamento,
                        if espelho.pago { "paid" } else { "pending" },
                    )
                    .await?;
            }
            (None, Some(conta)) => {
                // custo real zerado/removido: espelho deixa de existir
                self.contas.delete(conta.id).await?;
            }
            (None, None) => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn manutencao(custo_real: Option<Decimal>, pagamento: &str) -> Manutencao {
        Manutencao {
            id: Uuid::new_v4(),
            empresa_id: Uuid::new_v4(),
            caminhao_id: Uuid::new_v4(),
            titulo: "Troca de freios".to_string(),
            tipo: "corretiva".to_string(),
            status: "in_progress".to_string(),
            data_prevista: NaiveDate::from_ymd_opt(2026, 9, 1),
            data_conclusao: NaiveDate::from_ymd_opt(2026, 9, 10),
            custo_estimado: Some(Decimal::new(80000, 2)),
            custo_real,
            pagamento: pagamento.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn sem_custo_real_nao_ha_espelho() {
        assert_eq!(decidir_espelho(&manutencao(None, "pending")), None);
        assert_eq!(
            decidir_espelho(&manutencao(Some(Decimal::ZERO), "pending")),
            None
        );
    }

    #[test]
    fn custo_real_gera_espelho_pendente() {
        let m = manutencao(Some(Decimal::new(123450, 2)), "pending");
        let espelho = decidir_espelho(&m).unwrap();

        assert_eq!(espelho.descricao, "Manutenção: Troca de freios");
        assert_eq!(espelho.valor, Decimal::new(123450, 2));
        assert_eq!(espelho.data_vencimento, m.data_conclusao);
        assert_eq!(espelho.data_pagamento, None);
        assert!(!espelho.pago);
    }

    #[test]
    fn pagamento_pago_reflete_no_espelho() {
        let m = manutencao(Some(Decimal::new(50000, 2)), "paid");
        let espelho = decidir_espelho(&m).unwrap();

        assert!(espelho.pago);
        assert_eq!(espelho.data_pagamento, m.data_conclusao);
    }

    #[test]
    fn vencimento_cai_na_data_prevista_sem_conclusao() {
        let mut m = manutencao(Some(Decimal::new(50000, 2)), "pending");
        m.data_conclusao = None;
        let espelho = decidir_espelho(&m).unwrap();

        assert_eq!(espelho.data_vencimento, m.data_prevista);
    }
}
