//! # Módulo Inference — Motor de Encadeamento para Frente
//!
//! Este módulo deriva **novas relações** a partir dos fatos do
//! [`FactStore`](crate::core::FactStore) aplicando as regras de um
//! [`RuleSet`](crate::core::RuleSet) até o ponto fixo.
//!
//! ## Componentes
//!
//! | Módulo | Papel |
//! |--------|-------|
//! | [`alias`] | Nome curto → tipo canônico de relação |
//! | [`context`] | Casamento de padrões `type/subtype` com curingas |
//! | [`matcher`] | Uma condição + um mapa de ligações → extensões consistentes |
//! | [`evaluator`] | Junção das condições de uma regra e instanciação da conclusão |
//! | [`depth`] | Detecção de regras em cadeia e limite de saltos |
//! | [`dedup`] | Igualdade estrutural contra rodada e armazém |
//! | [`engine`] | Driver de ponto fixo |
//!
//! ## Exemplo
//!
//! ```text
//! Fatos:  John ~genealogy Mary {role="parent of"},  John.gender="male"
//! Regra:  father_of: IF (A ~genealogy B AND role="parent of" AND A has gender="male")
//!                    THEN RELATE(A, B, "genealogy") WITH label="father of"
//! Deriva: John -> Mary : relation/family-link {label="father of"}
//! ```

pub mod alias;
pub mod context;
pub mod dedup;
pub mod depth;
pub mod engine;
pub mod evaluator;
pub mod matcher;

pub use alias::AliasResolver;
pub use context::context_matches;
pub use engine::{InferenceEngine, InferenceOutcome, InferenceResult};
pub use matcher::Bindings;
