//! Token Store
//!
//! Armazenamento do par de tokens do processo. O laço de controle enxerga
//! apenas o trait `TokenStore`; a implementação padrão grava em variáveis
//! de ambiente e vale somente pelo tempo de vida do processo.

use std::env;
use std::sync::RwLock;

use crate::utils::AppResult;

/// Variável de ambiente com o access token atual
pub const ACCESS_TOKEN_VAR: &str = "MSTODO_ACCESS_TOKEN";

/// Variável de ambiente com o refresh token atual
pub const REFRESH_TOKEN_VAR: &str = "MSTODO_REFRESH_TOKEN";

/// Par de tokens corrente do processo
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl TokenPair {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

/// Abstração de armazenamento do par de tokens.
///
/// Permite trocar o backend (ambiente, arquivo, secret store) sem tocar no
/// laço de controle.
pub trait TokenStore: Send + Sync {
    /// Retorna o par corrente; valores ausentes viram strings vazias
    fn read(&self) -> TokenPair;

    /// Sobrescreve o par corrente incondicionalmente, sem validar formato
    fn write(&self, pair: &TokenPair) -> AppResult<()>;
}

/// Armazenamento em variáveis de ambiente do processo.
///
/// A escrita só é visível dentro do processo e se perde no restart.
#[derive(Debug, Clone, Default)]
pub struct EnvTokenStore;

impl EnvTokenStore {
    pub fn new() -> Self {
        Self
    }
}

impl TokenStore for EnvTokenStore {
    fn read(&self) -> TokenPair {
        TokenPair {
            access_token: env::var(ACCESS_TOKEN_VAR).unwrap_or_default(),
            refresh_token: env::var(REFRESH_TOKEN_VAR).unwrap_or_default(),
        }
    }

    fn write(&self, pair: &TokenPair) -> AppResult<()> {
        env::set_var(ACCESS_TOKEN_VAR, &pair.access_token);
        env::set_var(REFRESH_TOKEN_VAR, &pair.refresh_token);
        Ok(())
    }
}

/// Armazenamento em memória, usado em testes e em cenários embutidos
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    pair: RwLock<TokenPair>,
}

impl MemoryTokenStore {
    pub fn new(pair: TokenPair) -> Self {
        Self {
            pair: RwLock::new(pair),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn read(&self) -> TokenPair {
        self.pair.read().unwrap().clone()
    }

    fn write(&self, pair: &TokenPair) -> AppResult<()> {
        *self.pair.write().unwrap() = pair.clone();
        Ok(())
    }
}
