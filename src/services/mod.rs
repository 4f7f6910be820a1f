//! Lógica de negócio
//!
//! Os quatro componentes centrais do sistema:
//! - `elegibilidade_service`: checador de elegibilidade de inscrição
//! - `caminhao_status_service`: sincronizador do status derivado do caminhão
//! - `manutencao_service`: hook de ciclo de vida da manutenção (+ espelho financeiro)
//! - `sweep_service`: varredura periódica de manutenções vencidas

pub mod caminhao_status_service;
pub mod elegibilidade_service;
pub mod manutencao_service;
pub mod sweep_service;
