//! `ask` and `repl` subcommands.

use std::io::{BufRead, Write};
use std::path::Path;

use floatchat_argo::Dataset;
use floatchat_chat::external::GeminiClient;
use floatchat_chat::{ChatEngine, ChatRequest};
use floatchat_model::TempModel;

fn build_engine(data: &str, model: Option<&str>) -> anyhow::Result<ChatEngine> {
    let dataset = Dataset::load(Path::new(data))?;
    log::info!("chat: loaded {} records from {}", dataset.len(), data);

    let mut engine = ChatEngine::new(dataset);
    if let Some(path) = model {
        engine = engine.with_predictor(TempModel::load(Path::new(path))?);
    }
    if let Some(client) = GeminiClient::from_env() {
        log::info!("chat: external fallback client enabled");
        engine = engine.with_fallback(client);
    }
    Ok(engine)
}

pub async fn run_ask(
    data: &str,
    prompt: &str,
    session: &str,
    model: Option<&str>,
) -> anyhow::Result<()> {
    let mut engine = build_engine(data, model)?;
    let request = ChatRequest {
        prompt: prompt.to_string(),
        session_id: session.to_string(),
    };
    let response = engine.respond(&request).await;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

pub async fn run_repl(data: &str, session: &str) -> anyhow::Result<()> {
    let mut engine = build_engine(data, None)?;
    println!("FloatChat - ask about the loaded ARGO data (blank line or 'exit' to quit)");

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let prompt = line.trim();
        if prompt.is_empty() || prompt == "exit" || prompt == "quit" {
            break;
        }

        let request = ChatRequest {
            prompt: prompt.to_string(),
            session_id: session.to_string(),
        };
        let response = engine.respond(&request).await;
        println!("{}\n", response.summary());
    }
    Ok(())
}
