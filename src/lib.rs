//! # Rule Inference — Motor de Encadeamento para Frente
//!
//! Biblioteca que deriva **novos fatos** a partir de um armazém de relações
//! binárias tipadas e predicados de entidades, aplicando regras
//! declarativas agrupadas em contextos até atingir o ponto fixo.
//!
//! ## Fluxo
//!
//! ```text
//! RuleSet (parser externo) + aliases + fatos/predicados semeados
//!   └── InferenceEngine (ponto fixo)
//!        └── para cada Context que casa com o filtro
//!             └── para cada Rule (exceto cadeias acima de max_depth)
//!                  └── avaliador → casador de condições → ligações
//!                       └── instanciação → deduplicação → próxima rodada
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use rule_inference::core::{Attribute, RuleSet};
//! use rule_inference::InferenceEngine;
//!
//! let rules = RuleSet::from_json(r#"{
//!     "aliases": { "genealogy": "relation/family-link" },
//!     "contexts": [{ "pattern": "*/*", "rules": [{
//!         "name": "father_of",
//!         "conditions": [
//!             { "kind": "relation", "subject": "A", "relation": "genealogy", "object": "B",
//!               "attributes": [{ "key": "role", "value": "parent of" }] },
//!             { "kind": "predicate", "subject": "A", "key": "gender", "value": "male" }
//!         ],
//!         "conclusion": { "subject": "A", "object": "B", "relation": "genealogy",
//!                         "attributes": [{ "key": "label", "value": "father of" }] }
//!     }] }]
//! }"#).unwrap();
//!
//! let mut engine = InferenceEngine::new(rules);
//! engine.add_fact("John", "genealogy", "Mary", vec![Attribute::new("role", "parent of")]);
//! engine.add_predicate("John", "gender", "male");
//!
//! let derived = engine.infer(Some("*/*"), 2, 1);
//! assert_eq!(derived.len(), 1);
//! assert_eq!(derived[0].attribute("label"), Some("father of"));
//! ```

/// Módulo `config` — parâmetros de uma chamada de inferência.
pub mod config;

/// Módulo `core` — tipos de dados: relações, predicados, regras, armazém.
pub mod core;

/// Módulo `error` — erros das bordas (documentos, fontes de conhecimento).
pub mod error;

/// Módulo `inference` — casamento, avaliação e ponto fixo.
pub mod inference;

/// Módulo `session` — documento JSON consumido pelo host.
pub mod session;

/// Módulo `shared` — motor compartilhado entre threads.
pub mod shared;

pub use config::InferenceConfig;
pub use error::EngineError;
pub use inference::{InferenceEngine, InferenceOutcome, InferenceResult};
pub use session::Session;
pub use shared::SharedEngine;
