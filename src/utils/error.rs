use thiserror::Error;

/// Tipos de erro do poller de tarefas
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Erro de rede: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Erro de serialização: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Erro de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Falha na renovação do token: {0}")]
    TokenRefresh(String),

    #[error("Token não autorizado mesmo após a renovação")]
    Unauthorized,
}

impl AppError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn token_error(msg: impl Into<String>) -> Self {
        Self::TokenRefresh(msg.into())
    }
}

/// Tipo de resultado padrão do crate
pub type AppResult<T> = Result<T, AppError>;
