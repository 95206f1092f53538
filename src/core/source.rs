//! # Fonte de Conhecimento — Capacidade Externa de Consulta
//!
//! O motor não embute dados de exemplo. Quando precisa ser semeado a partir
//! de um backend real, usa a capacidade [`KnowledgeSource`]:
//!
//! ```text
//! dado um ID  →  atributos da entidade + arestas de saída
//! ```
//!
//! Atributos viram [`Predicate`](super::Predicate)s e arestas viram
//! [`Relation`](super::Relation)s no armazém da sessão. Veja
//! [`InferenceEngine::load_from_source`](crate::inference::InferenceEngine::load_from_source).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::relation::Attribute;
use crate::error::EngineError;

/// Aresta de saída de uma entidade.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Nome canônico ou alias do tipo da relação.
    pub relation: String,
    /// Entidade de destino.
    pub target: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

/// Tudo o que uma fonte sabe sobre uma entidade.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub id: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

/// Backend capaz de responder "quem é esta entidade e para onde ela aponta".
///
/// Implementações devem devolver [`EngineError::EntityNotFound`] para IDs
/// desconhecidos e [`EngineError::Source`] para falhas do próprio backend.
pub trait KnowledgeSource {
    fn lookup(&self, id: &str) -> Result<EntityRecord, EngineError>;
}

/// Fonte em memória indexada por ID.
///
/// Começa vazia; guarda apenas o que o chamador inserir.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    entities: HashMap<String, EntityRecord>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insere (ou substitui) o registro de uma entidade.
    pub fn insert(&mut self, record: EntityRecord) {
        self.entities.insert(record.id.clone(), record);
    }

    /// Acrescenta atributos e arestas ao registro já existente com o mesmo
    /// ID, ou insere o registro se o ID é novo.
    ///
    /// Devolve `true` quando o ID ainda não existia.
    pub fn merge(&mut self, record: EntityRecord) -> bool {
        match self.entities.get_mut(&record.id) {
            Some(existing) => {
                existing.attributes.extend(record.attributes);
                existing.edges.extend(record.edges);
                false
            }
            None => {
                self.insert(record);
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl KnowledgeSource for MemorySource {
    fn lookup(&self, id: &str) -> Result<EntityRecord, EngineError> {
        self.entities
            .get(id)
            .cloned()
            .ok_or_else(|| EngineError::EntityNotFound { id: id.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_source_lookup() {
        let mut source = MemorySource::new();
        assert!(source.is_empty());
        source.insert(EntityRecord {
            id: "person1".into(),
            attributes: vec![Attribute::new("gender", "male")],
            edges: vec![Edge {
                relation: "genealogy".into(),
                target: "person2".into(),
                attributes: vec![Attribute::new("role", "parent of")],
            }],
        });

        let record = source.lookup("person1").unwrap();
        assert_eq!(record.edges.len(), 1);
        assert_eq!(record.edges[0].target, "person2");
        assert!(matches!(
            source.lookup("person9"),
            Err(EngineError::EntityNotFound { id }) if id == "person9"
        ));
    }

    #[test]
    fn merge_accumulates_records_with_same_id() {
        let mut source = MemorySource::new();
        let record = |key: &str, value: &str| EntityRecord {
            id: "p1".into(),
            attributes: vec![Attribute::new(key, value)],
            edges: vec![],
        };

        assert!(source.merge(record("gender", "male")));
        assert!(!source.merge(record("age", "40")));
        assert_eq!(source.len(), 1);

        let merged = source.lookup("p1").unwrap();
        assert_eq!(
            merged.attributes,
            vec![Attribute::new("gender", "male"), Attribute::new("age", "40")]
        );
    }
}
