//! DTOs de request/response da API

pub mod acao_dto;
pub mod api;
pub mod caminhao_dto;
pub mod cidadao_dto;
pub mod conta_pagar_dto;
pub mod curso_exame_dto;
pub mod inscricao_dto;
pub mod manutencao_dto;
