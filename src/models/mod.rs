//! Modelos de domínio
//!
//! Structs que mapeiam as tabelas PostgreSQL e os enums de status
//! usados pela lógica de sincronização e elegibilidade.

pub mod acao;
pub mod caminhao;
pub mod cidadao;
pub mod conta_pagar;
pub mod curso_exame;
pub mod inscricao;
pub mod manutencao;
pub mod oferta;

pub use acao::{Acao, AcaoStatus};
pub use caminhao::{Caminhao, CaminhaoStatus};
pub use cidadao::Cidadao;
pub use conta_pagar::ContaPagar;
pub use curso_exame::CursoExame;
pub use inscricao::{Inscricao, InscricaoStatus};
pub use manutencao::{Manutencao, ManutencaoStatus};
pub use oferta::AcaoOferta;
