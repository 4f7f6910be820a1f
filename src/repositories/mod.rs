//! Camada de acesso a dados
//!
//! Cada repositório é dono de um `PgPool` clonado e expõe CRUD de
//! linha + consultas filtradas simples. Nenhuma regra de negócio
//! mora aqui.

pub mod acao_repository;
pub mod caminhao_repository;
pub mod cidadao_repository;
pub mod conta_pagar_repository;
pub mod curso_exame_repository;
pub mod inscricao_repository;
pub mod manutencao_repository;
pub mod oferta_repository;
