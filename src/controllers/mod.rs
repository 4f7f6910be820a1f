//! Controllers: validação, checagem de posse (multi-tenant) e
//! orquestração entre repositórios e serviços.

pub mod acao_controller;
pub mod caminhao_controller;
pub mod cidadao_controller;
pub mod conta_pagar_controller;
pub mod curso_exame_controller;
pub mod inscricao_controller;
pub mod manutencao_controller;
