//! Laço de controle do poller
//!
//! Ciclo: ler tokens → buscar tarefas → (em 401: renovar, regravar e
//! repetir a busca) → imprimir → dormir. Qualquer erro dos colaboradores é
//! fatal e sobe para o binário; não há retry nem backoff.

use std::sync::Arc;
use std::time::Duration;

use reqwest::StatusCode;

use crate::auth::{TokenRefresher, TokenStore};
use crate::services::printer::print_tasks;
use crate::services::tasks::TasksClient;
use crate::utils::logging::*;
use crate::utils::{AppError, AppResult};

pub struct TaskPoller {
    tasks: TasksClient,
    refresher: TokenRefresher,
    store: Arc<dyn TokenStore>,
    interval: Duration,
}

impl TaskPoller {
    pub fn new(
        tasks: TasksClient,
        refresher: TokenRefresher,
        store: Arc<dyn TokenStore>,
        interval: Duration,
    ) -> Self {
        Self {
            tasks,
            refresher,
            store,
            interval,
        }
    }

    /// Executar o laço indefinidamente.
    ///
    /// Só retorna em erro; o processo roda até ser encerrado por fora.
    pub async fn run(&self) -> AppResult<()> {
        loop {
            self.poll_once().await?;
            tokio::time::sleep(self.interval).await;
        }
    }

    /// Executar um ciclo completo de consulta.
    ///
    /// No primeiro 401 o corpo rejeitado é descartado, os tokens são
    /// renovados e gravados no store antes da nova busca. Um segundo 401
    /// consecutivo é classificado como falha de autorização em vez de
    /// seguir para a impressão.
    pub async fn poll_once(&self) -> AppResult<()> {
        log_poll_cycle();

        let pair = self.store.read();
        let mut response = self.tasks.fetch(&pair.access_token).await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            log_unauthorized();

            // Encerra a conexão da resposta rejeitada antes de renovar
            drop(response);

            let new_pair = self.refresher.refresh(&pair.refresh_token).await?;
            self.store.write(&new_pair)?;
            log_tokens_refreshed();

            response = self.tasks.fetch(&new_pair.access_token).await?;

            if response.status() == StatusCode::UNAUTHORIZED {
                log_error("❌ Tarefas continuam não autorizadas após renovar o token");
                return Err(AppError::Unauthorized);
            }
        }

        print_tasks(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{MemoryTokenStore, OAuthConfig, TokenPair};
    use httpmock::prelude::*;
    use serde_json::json;

    fn build_poller(server: &MockServer, store: Arc<dyn TokenStore>) -> TaskPoller {
        let http_client = reqwest::Client::new();
        let config = OAuthConfig {
            client_id: "test_client_id".to_string(),
            token_url: server.url("/token"),
            redirect_uri: "https://login.microsoftonline.com/common/oauth2/nativeclient"
                .to_string(),
            scope: "offline_access user.read tasks.read".to_string(),
        };

        TaskPoller::new(
            TasksClient::new(http_client.clone(), server.url("/tasks")),
            TokenRefresher::new(http_client, config),
            store,
            Duration::from_secs(10),
        )
    }

    #[tokio::test]
    async fn test_poll_once_without_refresh() {
        let server = MockServer::start();
        let tasks_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/tasks")
                .header("authorization", "Bearer A1");
            then.status(200).json_body(json!({
                "value": [{ "status": "completed", "subject": "Buy milk" }]
            }));
        });

        let store = Arc::new(MemoryTokenStore::new(TokenPair::new("A1", "R1")));
        let poller = build_poller(&server, store.clone());

        poller.poll_once().await.unwrap();

        // Sem 401, o par original permanece intocado
        assert_eq!(store.read(), TokenPair::new("A1", "R1"));
        tasks_mock.assert();
    }

    #[tokio::test]
    async fn test_poll_once_refreshes_after_unauthorized() {
        let server = MockServer::start();

        // Primeira busca: token antigo rejeitado com corpo vazio
        let rejected_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/tasks")
                .header("authorization", "Bearer A1");
            then.status(401);
        });

        let refresh_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/token")
                .body_contains("refresh_token=R1")
                .body_contains("grant_type=refresh_token");
            then.status(200)
                .json_body(json!({ "access_token": "A2", "refresh_token": "R2" }));
        });

        // Nova busca já com o token renovado
        let retry_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/tasks")
                .header("authorization", "Bearer A2");
            then.status(200).json_body(json!({ "value": [] }));
        });

        let store = Arc::new(MemoryTokenStore::new(TokenPair::new("A1", "R1")));
        let poller = build_poller(&server, store.clone());

        poller.poll_once().await.unwrap();

        // O store termina com o par renovado
        assert_eq!(store.read(), TokenPair::new("A2", "R2"));
        rejected_mock.assert();
        refresh_mock.assert();
        retry_mock.assert();
    }

    #[tokio::test]
    async fn test_poll_once_second_unauthorized_is_failure() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(GET).path("/tasks");
            then.status(401);
        });
        server.mock(|when, then| {
            when.method(POST).path("/token");
            then.status(200)
                .json_body(json!({ "access_token": "A2", "refresh_token": "R2" }));
        });

        let store = Arc::new(MemoryTokenStore::new(TokenPair::new("A1", "R1")));
        let poller = build_poller(&server, store.clone());

        let result = poller.poll_once().await;

        assert!(matches!(result, Err(AppError::Unauthorized)));
        // O par renovado foi gravado antes da segunda busca
        assert_eq!(store.read(), TokenPair::new("A2", "R2"));
    }

    #[tokio::test]
    async fn test_poll_once_refresh_failure_is_fatal() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(GET).path("/tasks");
            then.status(401);
        });
        server.mock(|when, then| {
            when.method(POST).path("/token");
            then.status(400).body(r#"{"error":"invalid_grant"}"#);
        });

        let store = Arc::new(MemoryTokenStore::new(TokenPair::new("A1", "R1")));
        let poller = build_poller(&server, store.clone());

        let result = poller.poll_once().await;

        assert!(matches!(result, Err(AppError::TokenRefresh(_))));
        // Renovação rejeitada não altera o store
        assert_eq!(store.read(), TokenPair::new("A1", "R1"));
    }

    #[tokio::test]
    async fn test_poll_once_malformed_body_is_decode_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/tasks");
            then.status(200).body("<html>erro</html>");
        });

        let store = Arc::new(MemoryTokenStore::new(TokenPair::new("A1", "R1")));
        let poller = build_poller(&server, store);

        let result = poller.poll_once().await;

        assert!(matches!(result, Err(AppError::Json(_))));
    }
}
