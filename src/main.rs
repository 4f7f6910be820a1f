mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use tokio::signal;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use database::DatabaseConnection;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use services::sweep_service::SweepService;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Carregar variáveis de ambiente
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚚 Gestão de Ações de Campo - API");
    info!("=================================");

    let config = EnvironmentConfig::default();

    // Inicializar base de dados
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Erro conectando ao banco de dados: {}", e);
            return Err(anyhow::anyhow!("Erro de banco de dados: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    // Varredura de manutenções: uma passada na subida, depois periódica.
    // O handle fica aqui para ser abortado no shutdown.
    let sweep_periodo = Duration::from_secs(config.sweep_interval_secs);
    info!(
        "🧹 Varredura de manutenções a cada {}s (primeira passada imediata)",
        config.sweep_interval_secs
    );
    let sweep_handle = SweepService::new(pool.clone()).spawn(sweep_periodo);

    // CORS: liberado em desenvolvimento, origens explícitas em produção
    let cors = if config.is_production() {
        cors_middleware_with_origins(config.cors_origins.clone())
    } else {
        cors_middleware()
    };

    let app_state = AppState::new(pool, config.clone());

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api/acao", routes::acao_routes::create_acao_router())
        .nest("/api/caminhao", routes::caminhao_routes::create_caminhao_router())
        .nest("/api/manutencao", routes::manutencao_routes::create_manutencao_router())
        .nest("/api/inscricao", routes::inscricao_routes::create_inscricao_router())
        .nest("/api/cidadao", routes::cidadao_routes::create_cidadao_router())
        .nest("/api/curso-exame", routes::curso_exame_routes::create_curso_exame_router())
        .nest("/api/conta-pagar", routes::conta_pagar_routes::create_conta_pagar_router())
        .layer(cors)
        .with_state(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando em http://{}", addr);
    info!("🔍 Endpoints disponíveis:");
    info!("   GET  /health - Liveness check");
    info!("📅 Ações:");
    info!("   POST /api/acao - Criar ação");
    info!("   POST /api/acao/:id/status - Transição de status (monotônica)");
    info!("   POST /api/acao/:id/caminhoes - Vincular caminhão");
    info!("   POST /api/acao/:id/ofertas - Criar oferta de curso/exame");
    info!("🚛 Caminhões:");
    info!("   POST /api/caminhao - Criar caminhão");
    info!("   POST /api/caminhao/:id/recompute - Ressincronizar status");
    info!("🔧 Manutenções:");
    info!("   POST /api/manutencao - Registrar manutenção (espelha conta a pagar)");
    info!("📝 Inscrições:");
    info!("   POST /api/inscricao - Inscrever cidadão (checa elegibilidade)");
    info!("   PUT  /api/inscricao/:id/status - Marcar attended/absent");
    info!("💰 Contas a pagar:");
    info!("   POST /api/conta-pagar/:id/pagar - Quitar conta");

    // Iniciar servidor em background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Erro do servidor: {}", e);
                anyhow::Error::from(e)
            })
    });

    // Esperar o servidor terminar
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminou com erro: {}", e);
    }

    // Derrubar a varredura junto com o processo
    sweep_handle.abort();

    info!("👋 Servidor terminado");
    Ok(())
}

/// Liveness check
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "acoes-backend",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Sinal de desligamento graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Ctrl+C recebido, desligando servidor...");
        },
        _ = terminate => {
            info!("🛑 Sinal de término recebido, desligando servidor...");
        },
    }
}
