//! Varredura periódica de manutenções
//!
//! Roda uma vez na subida do processo e depois em período fixo
//! (configurável, padrão 1 hora): fecha janelas de manutenção
//! vencidas e ressincroniza o status dos caminhões afetados. Erro em
//! um item é logado e não aborta a passada.

use std::collections::HashSet;
use std::time::Duration;

use chrono::Utc;
use sqlx::PgPool;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::repositories::manutencao_repository::ManutencaoRepository;
use crate::services::caminhao_status_service::CaminhaoStatusService;
use crate::utils::errors::AppResult;

pub struct SweepService {
    manutencoes: ManutencaoRepository,
    status: CaminhaoStatusService,
}

impl SweepService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            manutencoes: ManutencaoRepository::new(pool.clone()),
            status: CaminhaoStatusService::new(pool),
        }
    }

    /// Uma passada completa. Retorna quantas manutenções foram fechadas.
    pub async fn run_once(&self) -> AppResult<usize> {
        let hoje = Utc::now().date_naive();
        let vencidas = self.manutencoes.find_vencidas(hoje).await?;

        if vencidas.is_empty() {
            debug!("Varredura: nenhuma manutenção vencida");
            return Ok(0);
        }

        let mut fechadas = 0usize;
        let mut afetados: HashSet<Uuid> = HashSet::new();

        for manutencao in &vencidas {
            // a consulta e o predicado do modelo devem concordar
            if !manutencao.esta_vencida(hoje) {
                continue;
            }
            match self.manutencoes.update_status(manutencao.id, "completed").await {
                Ok(()) => {
                    info!(
                        "Manutenção {} ('{}') vencida em {:?}: marcada como completed",
                        manutencao.id, manutencao.titulo, manutencao.data_conclusao
                    );
                    fechadas += 1;
                    afetados.insert(manutencao.caminhao_id);
                }
                Err(e) => {
                    error!("Falha ao concluir manutenção {}: {}", manutencao.id, e);
                }
            }
        }

        // o recompute decide sozinho se o caminhão sai de in_maintenance
        // (pode haver outra manutenção ainda aberta)
        for caminhao_id in afetados {
            if let Err(e) = self.status.recompute(caminhao_id).await {
                error!("Falha ao ressincronizar caminhão {}: {}", caminhao_id, e);
            }
        }

        Ok(fechadas)
    }

    /// Dispara a varredura em background: primeira passada imediata,
    /// depois a cada `periodo`. O handle fica com o main, que o aborta
    /// no shutdown.
    pub fn spawn(self, periodo: Duration) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(periodo);
            loop {
                // o primeiro tick resolve imediatamente
                ticker.tick().await;
                match self.run_once().await {
                    Ok(n) if n > 0 => {
                        info!("🧹 Varredura fechou {} manutenção(ões) vencida(s)", n)
                    }
                    Ok(_) => {}
                    Err(e) => error!("Varredura de manutenções falhou: {}", e),
                }
            }
        })
    }
}
