//! Impressão das tarefas na saída padrão

use std::io::{self, Write};

use reqwest::Response;

use crate::models::TaskPage;
use crate::utils::logging::*;
use crate::utils::AppResult;

/// Linha de cabeçalho impressa antes das tarefas
pub const TASKS_HEADER: &str = "📋 Tarefas (status : assunto)";

/// Decodificar o corpo da listagem de tarefas
pub fn decode_page(body: &str) -> AppResult<TaskPage> {
    Ok(serde_json::from_str(body)?)
}

/// Decodificar a resposta e imprimir as tarefas no stdout.
///
/// Um corpo que não decodifica como `TaskPage` propaga o erro sem imprimir
/// nenhuma linha de tarefa.
pub async fn print_tasks(response: Response) -> AppResult<()> {
    let body = response.text().await?;
    let page = decode_page(&body)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_tasks(&mut out, &page)?;

    log_tasks_printed(page.value.len());

    Ok(())
}

/// Escrever o cabeçalho e uma linha `"<status> : <subject>"` por tarefa,
/// na ordem em que vieram no payload.
pub fn write_tasks<W: Write>(out: &mut W, page: &TaskPage) -> AppResult<()> {
    writeln!(out, "{}", TASKS_HEADER)?;

    for task in &page.value {
        writeln!(out, "{} : {}", task.status, task.subject)?;
    }

    Ok(())
}
