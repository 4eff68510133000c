//! Modelos da listagem de tarefas retornada pela Graph API

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Página de tarefas retornada pelo endpoint de listagem.
///
/// O link de continuação (`@odata.nextLink`) é desserializado, porém a
/// paginação não é seguida: cada ciclo consome apenas a primeira página.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskPage {
    #[serde(rename = "@odata.context", default)]
    pub odata_context: String,

    #[serde(rename = "@odata.nextLink", default, skip_serializing_if = "Option::is_none")]
    pub odata_next_link: Option<String>,

    #[serde(default)]
    pub value: Vec<TaskRecord>,
}

/// Uma tarefa do To-Do.
///
/// Apenas `id`, `status` e `subject` são consumidos; os demais campos que a
/// API envia (datas, importância, corpo, categorias, recorrência etc.) ficam
/// preservados em `extra` como mapa opaco.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecord {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub subject: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
