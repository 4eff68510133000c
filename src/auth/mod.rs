//! # Módulo de autenticação OAuth2 (Microsoft identity platform)
//!
//! Módulo isolado para o ciclo de vida dos tokens de acesso ao Graph.
//!
//! ## Responsabilidades:
//! - Armazenar o par de tokens (access + refresh) do processo
//! - Renovar tokens via grant `refresh_token`
//! - Fornecer a URL de autorização para obter o par inicial
//!
//! ## Estrutura:
//! - `config.rs`: Configurações OAuth2
//! - `token_store.rs`: Armazenamento do par de tokens
//! - `refresher.rs`: Cliente HTTP de renovação de tokens

pub mod config;
pub mod refresher;
pub mod token_store;

pub use config::OAuthConfig;
pub use refresher::{RefreshResponse, TokenRefresher};
pub use token_store::{EnvTokenStore, MemoryTokenStore, TokenPair, TokenStore};
