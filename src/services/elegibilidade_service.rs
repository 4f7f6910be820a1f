//! Checador de elegibilidade de inscrição
//!
//! Avalia se um cidadão pode se inscrever em uma oferta de
//! curso/exame, olhando o histórico de inscrições em QUALQUER ação e
//! a política de repetição da oferta. Função pura, sem efeito
//! colateral: quem cria a linha de inscrição (e aplica limite de
//! vagas) é o controller.

use chrono::{Months, NaiveDate, Utc};
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::inscricao::InscricaoStatus;
use crate::models::oferta::AcaoOferta;
use crate::repositories::inscricao_repository::InscricaoRepository;
use crate::utils::errors::AppResult;

/// Política de repetição carregada da oferta
#[derive(Debug, Clone, Copy)]
pub struct PoliticaOferta {
    pub permite_repeticao: bool,
    pub intervalo_repeticao_meses: Option<u32>,
}

impl From<&AcaoOferta> for PoliticaOferta {
    fn from(oferta: &AcaoOferta) -> Self {
        Self {
            permite_repeticao: oferta.permite_repeticao,
            intervalo_repeticao_meses: oferta
                .intervalo_repeticao_meses
                .and_then(|m| u32::try_from(m).ok()),
        }
    }
}

/// Inscrição ativa mais recente do cidadão no mesmo curso/exame
#[derive(Debug, Clone, Copy)]
pub struct InscricaoPrevia {
    pub status: InscricaoStatus,
    pub data: NaiveDate,
}

/// Motivo de rejeição. Informativo: vira HTTP 409 com código e datas
/// para o frontend montar a mensagem, nunca é tratado como falha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "code")]
pub enum MotivoRejeicao {
    #[serde(rename = "NO_REPETITION_ALLOWED")]
    RepeticaoNaoPermitida {
        #[serde(rename = "previous_date")]
        data_anterior: NaiveDate,
    },
    #[serde(rename = "ALREADY_ENROLLED_ELSEWHERE")]
    JaInscritoEmOutraAcao {
        #[serde(rename = "previous_date")]
        data_anterior: NaiveDate,
    },
    #[serde(rename = "PERIODICITY_NOT_ELAPSED")]
    PeriodicidadeNaoCumprida {
        #[serde(rename = "previous_date")]
        data_anterior: NaiveDate,
        #[serde(rename = "next_eligible_date")]
        proxima_data_elegivel: NaiveDate,
    },
}

impl MotivoRejeicao {
    /// Mensagem pronta para o usuário final.
    pub fn mensagem(&self) -> String {
        match self {
            MotivoRejeicao::RepeticaoNaoPermitida { data_anterior } => format!(
                "Este curso/exame não permite repetição; inscrição anterior em {}",
                data_anterior.format("%d/%m/%Y")
            ),
            MotivoRejeicao::JaInscritoEmOutraAcao { data_anterior } => format!(
                "Cidadão já possui inscrição pendente neste curso/exame desde {}",
                data_anterior.format("%d/%m/%Y")
            ),
            MotivoRejeicao::PeriodicidadeNaoCumprida {
                proxima_data_elegivel,
                ..
            } => format!(
                "Periodicidade não cumprida; próxima data elegível em {}",
                proxima_data_elegivel.format("%d/%m/%Y")
            ),
        }
    }
}

/// Avaliação pura da elegibilidade, na ordem da política:
/// 1. sem inscrição prévia ativa -> elegível
/// 2. oferta não permite repetição -> NO_REPETITION_ALLOWED
/// 3. prévia ainda pendente -> ALREADY_ENROLLED_ELSEWHERE
/// 4. prévia atendida dentro do intervalo -> PERIODICITY_NOT_ELAPSED
/// 5. caso contrário -> elegível
pub fn avaliar(
    previa: Option<InscricaoPrevia>,
    politica: PoliticaOferta,
    hoje: NaiveDate,
) -> Option<MotivoRejeicao> {
    let previa = previa?;

    if !politica.permite_repeticao {
        return Some(MotivoRejeicao::RepeticaoNaoPermitida {
            data_anterior: previa.data,
        });
    }

    if previa.status == InscricaoStatus::Pending {
        return Some(MotivoRejeicao::JaInscritoEmOutraAcao {
            data_anterior: previa.data,
        });
    }

    if previa.status == InscricaoStatus::Attended {
        if let Some(meses) = politica.intervalo_repeticao_meses.filter(|m| *m > 0) {
            let proxima = previa
                .data
                .checked_add_months(Months::new(meses))
                .unwrap_or(previa.data);
            if hoje < proxima {
                return Some(MotivoRejeicao::PeriodicidadeNaoCumprida {
                    data_anterior: previa.data,
                    proxima_data_elegivel: proxima,
                });
            }
        }
    }

    None
}

/// Wrapper com acesso a dados: busca a prévia e delega para `avaliar`.
pub struct ElegibilidadeService {
    inscricoes: InscricaoRepository,
}

impl ElegibilidadeService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            inscricoes: InscricaoRepository::new(pool),
        }
    }

    pub async fn verificar(
        &self,
        cidadao_id: Uuid,
        curso_exame_id: Uuid,
        politica: PoliticaOferta,
    ) -> AppResult<Option<MotivoRejeicao>> {
        let previa = self
            .inscricoes
            .find_ultima_ativa(cidadao_id, curso_exame_id)
            .await?
            .and_then(|i| {
                InscricaoStatus::parse(&i.status).map(|status| InscricaoPrevia {
                    status,
                    data: i.data_inscricao,
                })
            });

        Ok(avaliar(previa, politica, Utc::now().date_naive()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn politica(permite: bool, meses: Option<u32>) -> PoliticaOferta {
        PoliticaOferta {
            permite_repeticao: permite,
            intervalo_repeticao_meses: meses,
        }
    }

    fn data(ano: i32, mes: u32, dia: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(ano, mes, dia).unwrap()
    }

    #[test]
    fn sem_historico_sempre_elegivel() {
        let hoje = data(2026, 8, 23);
        assert_eq!(avaliar(None, politica(false, None), hoje), None);
        assert_eq!(avaliar(None, politica(true, Some(6)), hoje), None);
    }

    #[test]
    fn sem_repeticao_rejeita_qualquer_previa() {
        let hoje = data(2026, 8, 23);
        let anterior = data(2020, 1, 10);

        for status in [InscricaoStatus::Pending, InscricaoStatus::Attended] {
            let previa = InscricaoPrevia { status, data: anterior };
            // rejeita mesmo com intervalo configurado e já decorrido
            assert_eq!(
                avaliar(Some(previa), politica(false, Some(6)), hoje),
                Some(MotivoRejeicao::RepeticaoNaoPermitida { data_anterior: anterior })
            );
        }
    }

    #[test]
    fn pendente_em_outra_acao_rejeita() {
        let hoje = data(2026, 8, 23);
        let previa = InscricaoPrevia {
            status: InscricaoStatus::Pending,
            data: data(2026, 8, 1),
        };
        assert_eq!(
            avaliar(Some(previa), politica(true, None), hoje),
            Some(MotivoRejeicao::JaInscritoEmOutraAcao {
                data_anterior: data(2026, 8, 1)
            })
        );
    }

    #[test]
    fn periodicidade_rejeita_antes_e_libera_na_data() {
        let anterior = data(2026, 1, 15);
        let proxima = data(2026, 7, 15); // 15/01 + 6 meses
        let previa = InscricaoPrevia {
            status: InscricaoStatus::Attended,
            data: anterior,
        };
        let pol = politica(true, Some(6));

        // véspera: rejeitado com a próxima data elegível
        assert_eq!(
            avaliar(Some(previa), pol, data(2026, 7, 14)),
            Some(MotivoRejeicao::PeriodicidadeNaoCumprida {
                data_anterior: anterior,
                proxima_data_elegivel: proxima,
            })
        );
        // na data exata e depois: elegível
        assert_eq!(avaliar(Some(previa), pol, proxima), None);
        assert_eq!(avaliar(Some(previa), pol, data(2026, 12, 1)), None);
    }

    #[test]
    fn periodicidade_ajusta_fim_de_mes() {
        // 31/08 + 6 meses cai em fevereiro: chrono fixa no último dia
        let previa = InscricaoPrevia {
            status: InscricaoStatus::Attended,
            data: data(2026, 8, 31),
        };
        let pol = politica(true, Some(6));

        assert_eq!(
            avaliar(Some(previa), pol, data(2027, 2, 27)),
            Some(MotivoRejeicao::PeriodicidadeNaoCumprida {
                data_anterior: data(2026, 8, 31),
                proxima_data_elegivel: data(2027, 2, 28),
            })
        );
        assert_eq!(avaliar(Some(previa), pol, data(2027, 2, 28)), None);
    }

    // Contrato HTTP da rejeição: o motivo real do checador vira 409
    // com code e datas no corpo, sem passar por nenhum stub.
    #[tokio::test]
    async fn rejeicao_vira_409_com_codigo_e_datas() {
        use axum::response::IntoResponse;

        use crate::utils::errors::AppError;

        let previa = InscricaoPrevia {
            status: InscricaoStatus::Attended,
            data: data(2026, 1, 15),
        };
        let motivo = avaliar(Some(previa), politica(true, Some(6)), data(2026, 7, 14))
            .expect("deveria rejeitar por periodicidade");

        let response =
            AppError::Rejeicao(motivo.mensagem(), serde_json::to_value(motivo).unwrap())
                .into_response();

        assert_eq!(response.status(), axum::http::StatusCode::CONFLICT);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["code"], "PERIODICITY_NOT_ELAPSED");
        assert_eq!(body["details"]["previous_date"], "2026-01-15");
        assert_eq!(body["details"]["next_eligible_date"], "2026-07-15");
    }

    #[test]
    fn atendida_sem_intervalo_sempre_elegivel() {
        let hoje = data(2026, 8, 23);
        let previa = InscricaoPrevia {
            status: InscricaoStatus::Attended,
            data: data(2026, 8, 22), // ontem
        };
        assert_eq!(avaliar(Some(previa), politica(true, None), hoje), None);
        // intervalo zero conta como sem periodicidade
        assert_eq!(avaliar(Some(previa), politica(true, Some(0)), hoje), None);
    }
}
