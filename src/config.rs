//! # Configuração de Inferência
//!
//! Parâmetros de uma chamada de inferência, com os mesmos padrões da
//! interface `infer(context = "*/*", max_depth = 2, max_iterations = 2)`.
//!
//! | Campo | Padrão | Efeito |
//! |-------|--------|--------|
//! | `context_filter` | `Some("*/*")` | Quais contextos participam (`None` = todos) |
//! | `max_depth` | `2` | Saltos máximos de regras em cadeia |
//! | `max_iterations` | `2` | Rodadas máximas do ponto fixo |
//!
//! Desserializável com campos opcionais:
//!
//! ```json
//! { "context_filter": "application/*", "max_iterations": 10 }
//! ```

use serde::{Deserialize, Serialize};

/// Contexto padrão: casa com qualquer contexto.
pub const DEFAULT_CONTEXT: &str = "*/*";
pub const DEFAULT_MAX_DEPTH: usize = 2;
pub const DEFAULT_MAX_ITERATIONS: usize = 2;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    pub context_filter: Option<String>,
    pub max_depth: usize,
    pub max_iterations: usize,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            context_filter: Some(DEFAULT_CONTEXT.to_string()),
            max_depth: DEFAULT_MAX_DEPTH,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl InferenceConfig {
    pub fn with_context(mut self, filter: impl Into<String>) -> Self {
        self.context_filter = Some(filter.into());
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}
