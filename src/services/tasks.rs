//! Cliente HTTP do endpoint de listagem de tarefas

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Response};
use tracing::debug;

use crate::utils::AppResult;

/// Cliente do endpoint de tarefas do Graph.
///
/// Devolve a resposta crua: interpretar o status HTTP (inclusive o 401 que
/// dispara a renovação de token) é responsabilidade de quem chama.
#[derive(Debug, Clone)]
pub struct TasksClient {
    http_client: Client,
    tasks_url: String,
}

impl TasksClient {
    pub fn new(http_client: Client, tasks_url: impl Into<String>) -> Self {
        Self {
            http_client,
            tasks_url: tasks_url.into(),
        }
    }

    /// Buscar a lista de tarefas com o access token informado.
    ///
    /// Falha apenas por erro de construção da requisição ou de transporte
    /// (DNS, conexão recusada, TLS, timeout do cliente HTTP).
    pub async fn fetch(&self, access_token: &str) -> AppResult<Response> {
        debug!("GET {}", self.tasks_url);

        let response = self
            .http_client
            .get(&self.tasks_url)
            .header(AUTHORIZATION, format!("Bearer {}", access_token))
            .send()
            .await?;

        Ok(response)
    }
}
