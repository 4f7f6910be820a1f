//! Routers da API, um por recurso

pub mod acao_routes;
pub mod caminhao_routes;
pub mod cidadao_routes;
pub mod conta_pagar_routes;
pub mod curso_exame_routes;
pub mod inscricao_routes;
pub mod manutencao_routes;

use uuid::Uuid;

// TODO: Extrair empresa_id do JWT quando o middleware de auth entrar
// Por enquanto usamos uma empresa fixa de exemplo
pub(crate) fn empresa_id_da_sessao() -> Uuid {
    Uuid::nil()
}
