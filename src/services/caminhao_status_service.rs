//! Sincronizador de status do caminhão
//!
//! O status do caminhão é uma projeção: reconciliação das manutenções
//! abertas com os vínculos a ações ativas. Nenhum endpoint escreve o
//! campo diretamente; toda mutação relevante (manutenção, transição de
//! ação, vínculo) chama `recompute`, que é idempotente e converge para
//! o mesmo valor independente da ordem das invocações concorrentes.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::caminhao::CaminhaoStatus;
use crate::repositories::caminhao_repository::CaminhaoRepository;
use crate::utils::errors::{not_found_error, AppResult};

/// Derivação pura: manutenção sempre domina vínculo com ação
/// (um caminhão em reparo não sai a campo, mesmo vinculado).
pub fn derive_status(manutencoes_abertas: i64, vinculos_ativos: i64) -> CaminhaoStatus {
    if manutencoes_abertas > 0 {
        CaminhaoStatus::InMaintenance
    } else if vinculos_ativos > 0 {
        CaminhaoStatus::InAction
    } else {
        CaminhaoStatus::Available
    }
}

pub struct CaminhaoStatusService {
    caminhoes: CaminhaoRepository,
}

impl CaminhaoStatusService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            caminhoes: CaminhaoRepository::new(pool),
        }
    }

    /// Recalcula e grava o status derivado. Seguro chamar quantas
    /// vezes for preciso; só escreve quando o valor muda.
    pub async fn recompute(&self, caminhao_id: Uuid) -> AppResult<CaminhaoStatus> {
        let caminhao = self
            .caminhoes
            .find_by_id(caminhao_id)
            .await?
            .ok_or_else(|| not_found_error("Caminhão", &caminhao_id.to_string()))?;

        let abertas = self.caminhoes.count_manutencoes_abertas(caminhao_id).await?;
        let ativos = self.caminhoes.count_vinculos_ativos(caminhao_id).await?;
        let novo = derive_status(abertas, ativos);

        if caminhao.status != novo.as_str() {
            self.caminhoes.update_status(caminhao_id, novo.as_str()).await?;
            info!(
                "Caminhão {} ({}): status {} -> {}",
                caminhao.placa,
                caminhao_id,
                caminhao.status,
                novo.as_str()
            );
        }

        Ok(novo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manutencao_domina_acao() {
        // vinculado a ação ativa E em manutenção -> manutenção vence
        assert_eq!(derive_status(1, 1), CaminhaoStatus::InMaintenance);
        assert_eq!(derive_status(3, 0), CaminhaoStatus::InMaintenance);
    }

    #[test]
    fn acao_ativa_sem_manutencao_vira_in_action() {
        assert_eq!(derive_status(0, 1), CaminhaoStatus::InAction);
        assert_eq!(derive_status(0, 2), CaminhaoStatus::InAction);
    }

    #[test]
    fn sem_nada_fica_disponivel() {
        assert_eq!(derive_status(0, 0), CaminhaoStatus::Available);
    }

    #[test]
    fn derivacao_eh_deterministica() {
        // mesma entrada, mesma saída: base da idempotência do recompute
        for abertas in 0..3 {
            for ativos in 0..3 {
                assert_eq!(
                    derive_status(abertas, ativos),
                    derive_status(abertas, ativos)
                );
            }
        }
    }
}
