use tracing::{debug, error, info, warn};

pub fn log_config_loaded(env: &str) {
    info!("Configuration loaded successfully for environment: {}", env);
}

pub fn log_poller_started(interval_secs: u64) {
    info!(
        "🚀 Poller de tarefas iniciado (intervalo: {}s)",
        interval_secs
    );
}

pub fn log_poll_cycle() {
    debug!("Iniciando ciclo de consulta de tarefas");
}

pub fn log_tasks_printed(count: usize) {
    info!("📋 {} tarefa(s) impressa(s)", count);
}

pub fn log_unauthorized() {
    warn!("⚠️ Token não autorizado (401). Renovando tokens...");
}

pub fn log_tokens_refreshed() {
    info!("✅ Tokens renovados e gravados no Token Store");
}

pub fn log_info(message: &str) {
    info!("{}", message);
}

pub fn log_error(message: &str) {
    error!("{}", message);
}

pub fn log_warning(message: &str) {
    warn!("{}", message);
}
