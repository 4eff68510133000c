use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Endpoint de listagem de tarefas do Microsoft To-Do (Graph API beta)
pub const DEFAULT_TASKS_URL: &str = "https://graph.microsoft.com/beta/me/outlook/tasks";

/// Endpoint de token OAuth2 da Microsoft (tenant common)
pub const DEFAULT_TOKEN_URL: &str =
    "https://login.microsoftonline.com/common/oauth2/v2.0/token";

/// Redirect URI de cliente nativo registrada no app
pub const DEFAULT_REDIRECT_URI: &str =
    "https://login.microsoftonline.com/common/oauth2/nativeclient";

/// Escopos exigidos pela aplicação
pub const DEFAULT_SCOPE: &str = "offline_access user.read tasks.read";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    #[serde(default)]
    pub graph: GraphSettings,
    #[serde(default)]
    pub oauth: OAuthSettings,
    #[serde(default)]
    pub poller: PollerSettings,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GraphSettings {
    #[serde(default = "default_tasks_url")]
    pub tasks_url: String,
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OAuthSettings {
    /// Client ID do app registrado no Azure AD (MSTODO_CLIENT_ID)
    #[serde(default)]
    pub client_id: String,
    #[serde(default = "default_token_url")]
    pub token_url: String,
    #[serde(default = "default_redirect_uri")]
    pub redirect_uri: String,
    #[serde(default = "default_scope")]
    pub scope: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PollerSettings {
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

fn default_tasks_url() -> String {
    DEFAULT_TASKS_URL.to_string()
}

fn default_http_timeout_secs() -> u64 {
    30
}

fn default_token_url() -> String {
    DEFAULT_TOKEN_URL.to_string()
}

fn default_redirect_uri() -> String {
    DEFAULT_REDIRECT_URI.to_string()
}

fn default_scope() -> String {
    DEFAULT_SCOPE.to_string()
}

fn default_interval_secs() -> u64 {
    10
}

impl Default for GraphSettings {
    fn default() -> Self {
        Self {
            tasks_url: default_tasks_url(),
            http_timeout_secs: default_http_timeout_secs(),
        }
    }
}

impl Default for OAuthSettings {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            token_url: default_token_url(),
            redirect_uri: default_redirect_uri(),
            scope: default_scope(),
        }
    }
}

impl Default for PollerSettings {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let mut builder = Config::builder()
            // Arquivo de configuração base
            .add_source(File::with_name("config/default").required(false))
            // Arquivo específico do ambiente
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false));

        // Variáveis de ambiente específicas
        if let Ok(client_id) = std::env::var("MSTODO_CLIENT_ID") {
            builder = builder.set_override("oauth.client_id", client_id)?;
        }
        if let Ok(tasks_url) = std::env::var("MSTODO_TASKS_URL") {
            builder = builder.set_override("graph.tasks_url", tasks_url)?;
        }
        if let Ok(token_url) = std::env::var("MSTODO_TOKEN_URL") {
            builder = builder.set_override("oauth.token_url", token_url)?;
        }
        if let Ok(interval) = std::env::var("MSTODO_POLL_INTERVAL_SECS") {
            builder = builder.set_override("poller.interval_secs", interval)?;
        }

        builder = builder.add_source(Environment::with_prefix("MSTODO"));

        let s = builder.build()?;

        s.try_deserialize()
    }
}
