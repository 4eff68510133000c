/// Poller de tarefas do Microsoft To-Do
///
/// Fluxo:
/// - Lê o par de tokens do Token Store (variáveis de ambiente)
/// - Busca a lista de tarefas no Graph em intervalo fixo
/// - Em 401, renova os tokens via OAuth2 e repete a busca
/// - Imprime "<status> : <subject>" por tarefa no stdout
///
/// Qualquer erro de rede, renovação ou decodificação encerra o processo.
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;

use mstodo_poller::auth::{EnvTokenStore, OAuthConfig, TokenRefresher};
use mstodo_poller::config::Settings;
use mstodo_poller::services::{TaskPoller, TasksClient};
use mstodo_poller::utils::logging::*;
use mstodo_poller::utils::AppError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Carregar variáveis de ambiente do arquivo .env (se existir)
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    // Inicializar tracing
    tracing_subscriber::fmt::init();

    if dotenv_loaded {
        log_info("✅ Arquivo .env carregado com sucesso");
    } else {
        // Em produção não existe .env; as variáveis vêm do ambiente
        tracing::debug!("Arquivo .env não encontrado, usando variáveis de ambiente do sistema");
    }

    // Carregar configurações
    let settings = Settings::new()
        .map_err(|e| AppError::Config(format!("Falha ao carregar configurações: {}", e)))?;
    log_config_loaded(&std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string()));

    let oauth_config = OAuthConfig::from_settings(&settings);
    if oauth_config.client_id.is_empty() {
        log_warning("⚠️ MSTODO_CLIENT_ID não configurado; a renovação de token irá falhar");
        log_info(&format!(
            "ℹ️ Para autorizar o app e obter o par inicial de tokens: {}",
            oauth_config.authorization_url()
        ));
    }

    // Cliente HTTP compartilhado, com timeout explícito por requisição
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(settings.graph.http_timeout_secs))
        .build()
        .context("Falha ao criar cliente HTTP")?;

    let store = Arc::new(EnvTokenStore::new());
    let refresher = TokenRefresher::new(http_client.clone(), oauth_config);
    let tasks = TasksClient::new(http_client, settings.graph.tasks_url.clone());

    let poller = TaskPoller::new(
        tasks,
        refresher,
        store,
        Duration::from_secs(settings.poller.interval_secs),
    );

    log_poller_started(settings.poller.interval_secs);

    // Só retorna em erro fatal
    poller.run().await?;

    Ok(())
}
