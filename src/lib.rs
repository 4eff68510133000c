// Biblioteca do poller de tarefas do Microsoft To-Do
// Expõe módulos para uso em testes e no binário

pub mod auth;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;

pub use auth::{EnvTokenStore, OAuthConfig, TokenPair, TokenRefresher, TokenStore};
pub use config::Settings;
pub use services::{TaskPoller, TasksClient};
pub use utils::{AppError, AppResult};
