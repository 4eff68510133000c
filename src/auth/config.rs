//! OAuth2 Configuration
//!
//! Centraliza as configurações necessárias para o fluxo OAuth2 da Microsoft

use serde::{Deserialize, Serialize};

use crate::config::Settings;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthConfig {
    /// Client ID do app registrado no Azure AD
    pub client_id: String,

    /// Endpoint de token (grant refresh_token)
    pub token_url: String,

    /// Redirect URI registrada no app
    pub redirect_uri: String,

    /// Escopos solicitados na renovação
    pub scope: String,
}

impl OAuthConfig {
    /// Criar configuração a partir das settings carregadas
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            client_id: settings.oauth.client_id.clone(),
            token_url: settings.oauth.token_url.clone(),
            redirect_uri: settings.oauth.redirect_uri.clone(),
            scope: settings.oauth.scope.clone(),
        }
    }

    /// Gerar a URL de autorização da Microsoft.
    ///
    /// O poller em si só executa o grant `refresh_token`; esta URL serve
    /// para o usuário autorizar o app uma única vez e obter o par inicial
    /// de tokens.
    pub fn authorization_url(&self) -> String {
        format!(
            "https://login.microsoftonline.com/common/oauth2/v2.0/authorize?client_id={}&response_type=code&redirect_uri={}&scope={}",
            self.client_id,
            urlencoding::encode(&self.redirect_uri),
            urlencoding::encode(&self.scope)
        )
    }
}
