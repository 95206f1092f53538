//! # Módulo Core — Tipos Fundamentais do Domínio
//!
//! Este módulo agrupa os **tipos de dados** sobre os quais o motor de
//! inferência trabalha:
//!
//! - [`Attribute`] — par chave/valor
//! - [`Relation`] — fato: aresta tipada e atribuída entre duas entidades
//! - [`Predicate`] — atributo afirmado diretamente sobre uma entidade
//! - [`Condition`], [`Conclusion`], [`Rule`], [`Context`], [`RuleSet`] — regras entregues pelo parser externo
//! - [`FactStore`] — armazém somente-acréscimo da sessão
//! - [`KnowledgeSource`] — capacidade externa para semear o armazém
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use rule_inference::core::{Attribute, FactStore, Relation};
//!
//! let mut store = FactStore::new();
//! store.add_relation(Relation::new(
//!     "John",
//!     "relation/family-link",
//!     "Mary",
//!     vec![Attribute::new("role", "parent of")],
//! ));
//! assert_eq!(store.relation_count(), 1);
//! ```

/// Sub-módulo com [`Attribute`], [`Relation`] e [`Predicate`].
pub mod relation;

/// Sub-módulo com as estruturas de regra ([`RuleSet`] e companhia).
pub mod rule;

/// Sub-módulo com o [`FactStore`].
pub mod fact_store;

/// Sub-módulo com a capacidade [`KnowledgeSource`].
pub mod source;

pub use fact_store::FactStore;
pub use relation::{Attribute, Predicate, Relation};
pub use rule::{Conclusion, Condition, Context, PredicatePattern, RelationPattern, Rule, RuleSet};
pub use source::{Edge, EntityRecord, KnowledgeSource, MemorySource};
