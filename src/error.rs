//! # Erros do Motor
//!
//! O caminho de casamento e avaliação **nunca** falha com erro: ausência de
//! solução é representada por "nenhuma ligação" ou "nenhuma conclusão".
//! Os erros abaixo vêm apenas das bordas do sistema:
//!
//! | Variante | Origem |
//! |----------|--------|
//! | [`RuleSet`](EngineError::RuleSet) | Documento de regras/sessão malformado (com linha e coluna) |
//! | [`EntityNotFound`](EngineError::EntityNotFound) | [`KnowledgeSource`](crate::core::KnowledgeSource) não conhece o ID |
//! | [`Source`](EngineError::Source) | Falha do backend da fonte de conhecimento |
//! | [`Io`](EngineError::Io) | Leitura de arquivo de sessão |

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// O documento entregue pelo parser externo não pôde ser decodificado.
    #[error("documento de regras inválido na linha {line}, coluna {column}: {message}")]
    RuleSet {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("entidade '{id}' não encontrada na fonte de conhecimento")]
    EntityNotFound { id: String },

    #[error("falha na fonte de conhecimento ao consultar '{id}': {message}")]
    Source { id: String, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// Converte um erro do `serde_json` preservando a posição.
    pub fn from_decode(err: serde_json::Error) -> Self {
        EngineError::RuleSet {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }
}
