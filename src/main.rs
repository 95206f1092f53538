//! # rule-inference — Host de Linha de Comando
//!
//! Lê um documento de [`Session`] (regras já estruturadas + fatos semeados +
//! configuração), roda a inferência e imprime as relações derivadas.
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! # Executar com logs padrão (info)
//! cargo run -- session.json
//!
//! # Sobrescrever o filtro de contexto da sessão
//! cargo run -- session.json application/person
//!
//! # Executar com logs detalhados
//! RUST_LOG=debug cargo run -- session.json
//! ```

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use rule_inference::Session;

fn main() -> Result<()> {
    // Aceita RUST_LOG para configurar o nível; padrão "info".
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .context("uso: rule-inference <session.json> [contexto]")?;

    let session = Session::from_path(&path)
        .with_context(|| format!("Falha ao carregar {}", path))?;
    let (mut engine, mut config) = session
        .into_engine()
        .context("Falha ao semear o motor")?;

    if let Some(filter) = args.next() {
        config.context_filter = Some(filter);
    }

    tracing::info!(
        facts = engine.facts().len(),
        predicates = engine.predicates().len(),
        context = ?config.context_filter,
        "* inferindo"
    );
    let outcome = engine.run(&config);

    for result in &outcome.results {
        println!("{}", result.explanation);
    }
    println!();
    for relation in engine.facts() {
        let inferred = outcome.results.iter().any(|r| r.relation == *relation);
        println!("{}{}", relation, if inferred { " *" } else { "" });
    }

    Ok(())
}
