//! Token Refresher
//!
//! Cliente HTTP que troca um refresh token por um novo par de tokens no
//! endpoint OAuth2 da Microsoft. Não persiste nada; quem chama grava o par
//! no Token Store.

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::config::OAuthConfig;
use super::token_store::TokenPair;
use crate::utils::logging::*;
use crate::utils::{truncate_safe, AppError, AppResult};

/// Resposta do endpoint de token da Microsoft
#[derive(Debug, Deserialize)]
pub struct RefreshResponse {
    #[serde(default)]
    pub token_type: String,

    #[serde(default)]
    pub scope: String,

    #[serde(default)]
    pub expires_in: u64,

    #[serde(default)]
    pub ext_expires_in: u64,

    pub access_token: String,

    pub refresh_token: String,
}

/// Cliente de renovação de tokens
pub struct TokenRefresher {
    http_client: Client,
    config: OAuthConfig,
}

impl TokenRefresher {
    pub fn new(http_client: Client, config: OAuthConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Trocar o refresh token por um novo par de tokens.
    ///
    /// Retorna `access_token` e `refresh_token` exatamente como vieram na
    /// resposta, sem validar se estão vazios; a expiração informada em
    /// `expires_in` não é acompanhada do lado do cliente.
    pub async fn refresh(&self, old_refresh_token: &str) -> AppResult<TokenPair> {
        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("scope", self.config.scope.as_str()),
            ("refresh_token", old_refresh_token),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("grant_type", "refresh_token"),
        ];

        debug!("POST {}", self.config.token_url);

        let response = self
            .http_client
            .post(&self.config.token_url)
            .form(&params)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            log_error(&format!(
                "❌ Renovação de token rejeitada: {} - {}",
                status, error_text
            ));
            return Err(AppError::TokenRefresh(format!(
                "[{}]: {}",
                status, error_text
            )));
        }

        let body = response.text().await?;
        let refreshed: RefreshResponse = serde_json::from_str(&body)?;

        log_info(&format!(
            "✅ Novo access token obtido: {}...",
            truncate_safe(&refreshed.access_token, 8)
        ));

        Ok(TokenPair {
            access_token: refreshed.access_token,
            refresh_token: refreshed.refresh_token,
        })
    }
}
