//! # Sessão — Documento de Entrada do Host
//!
//! Um [`Session`] reúne, em um único JSON, tudo o que o host precisa para
//! rodar uma inferência:
//!
//! ```json
//! {
//!   "rules":      { "aliases": {...}, "contexts": [...] },
//!   "facts":      [{ "subject": "John", "relation": "genealogy", "object": "Mary",
//!                    "attributes": [{ "key": "role", "value": "parent of" }] }],
//!   "predicates": [{ "entity": "John", "key": "gender", "value": "male" }],
//!   "entities":   [{ "id": "person1", "attributes": [...], "edges": [...] }],
//!   "config":     { "context_filter": "*/*", "max_depth": 2, "max_iterations": 2 }
//! }
//! ```
//!
//! `rules` é a saída estruturada do parser externo. `facts` podem usar
//! aliases; são canonicalizados ao entrar no motor. `entities` são servidas
//! por uma [`MemorySource`] e carregadas via
//! [`InferenceEngine::load_from_source`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::InferenceConfig;
use crate::core::{EntityRecord, MemorySource, Predicate, Relation, RuleSet};
use crate::error::EngineError;
use crate::inference::InferenceEngine;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    pub rules: RuleSet,
    pub facts: Vec<Relation>,
    pub predicates: Vec<Predicate>,
    pub entities: Vec<EntityRecord>,
    pub config: InferenceConfig,
}

impl Session {
    /// Decodifica o documento, com linha e coluna em caso de erro.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        serde_json::from_str(json).map_err(EngineError::from_decode)
    }

    /// Lê e decodifica um arquivo de sessão.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Monta o motor semeado e devolve-o junto com a configuração da sessão.
    pub fn into_engine(self) -> Result<(InferenceEngine, InferenceConfig), EngineError> {
        let mut engine = InferenceEngine::new(self.rules);
        for fact in self.facts {
            engine.add_fact(fact.subject, &fact.relation, fact.object, fact.attributes);
        }
        for predicate in self.predicates {
            engine.add_predicate(predicate.entity, predicate.key, predicate.value);
        }

        if !self.entities.is_empty() {
            // IDs repetidos se fundem em um só registro, na ordem da primeira aparição.
            let mut ids: Vec<String> = Vec::new();
            let mut source = MemorySource::new();
            for record in self.entities {
                let id = record.id.clone();
                if source.merge(record) {
                    ids.push(id);
                }
            }
            let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
            engine.load_from_source(&source, &ids)?;
        }

        Ok((engine, self.config))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn document() -> serde_json::Value {
        json!({
            "rules": {
                "aliases": { "genealogy": "relation/family-link" },
                "contexts": [{
                    "pattern": "application/person",
                    "rules": [{
                        "name": "child_of",
                        "conditions": [{ "kind": "relation", "subject": "A", "relation": "genealogy", "object": "B",
                                         "attributes": [{ "key": "role", "value": "parent of" }] }],
                        "conclusion": { "subject": "B", "object": "A", "relation": "genealogy",
                                        "attributes": [{ "key": "role", "value": "child of" }] }
                    }]
                }]
            },
            "facts": [{ "subject": "John", "relation": "genealogy", "object": "Mary",
                        "attributes": [{ "key": "role", "value": "parent of" }] }],
            "entities": [{ "id": "person1",
                           "attributes": [{ "key": "gender", "value": "male" }],
                           "edges": [{ "relation": "genealogy", "target": "person2",
                                       "attributes": [{ "key": "role", "value": "parent of" }] }] }],
            "config": { "max_iterations": 3 }
        })
    }

    #[test]
    fn session_builds_seeded_engine() {
        let session = Session::from_json(&document().to_string()).unwrap();
        let (mut engine, config) = session.into_engine().unwrap();

        assert_eq!(config.max_iterations, 3);
        assert_eq!(config.max_depth, 2);
        assert_eq!(engine.facts().len(), 2);
        assert!(engine.facts().iter().all(|f| f.relation == "relation/family-link"));
        assert_eq!(engine.predicates().len(), 1);

        let derived = engine.infer_with(&config);
        let children: Vec<(&str, &str)> = derived
            .iter()
            .map(|r| (r.subject.as_str(), r.object.as_str()))
            .collect();
        assert_eq!(children, vec![("Mary", "John"), ("person2", "person1")]);
    }

    #[test]
    fn empty_document_uses_defaults() {
        let session = Session::from_json("{}").unwrap();
        assert_eq!(session.config, InferenceConfig::default());
        let (mut engine, config) = session.into_engine().unwrap();
        assert!(engine.infer_with(&config).is_empty());
    }

    /// Registros com o mesmo ID são fundidos; nenhum atributo se perde nem se repete
    #[test]
    fn repeated_entity_ids_are_merged() {
        let doc = json!({
            "entities": [
                { "id": "p1", "attributes": [{ "key": "gender", "value": "male" }] },
                { "id": "p2", "attributes": [{ "key": "gender", "value": "female" }] },
                { "id": "p1", "attributes": [{ "key": "age", "value": "40" }],
                  "edges": [{ "relation": "genealogy", "target": "p2" }] }
            ]
        });
        let session = Session::from_json(&doc.to_string()).unwrap();
        let (engine, _) = session.into_engine().unwrap();

        let predicates: Vec<String> = engine.predicates().iter().map(|p| p.to_string()).collect();
        assert_eq!(
            predicates,
            vec![r#"p1.gender="male""#, r#"p1.age="40""#, r#"p2.gender="female""#]
        );
        assert_eq!(engine.facts().len(), 1);
        assert_eq!(engine.facts()[0].subject, "p1");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Session::from_path("/nonexistent/session.json").unwrap_err();
        assert!(matches!(err, EngineError::Io(_)));
    }

    #[test]
    fn malformed_document_reports_position() {
        let doc = "{\n  \"facts\": [\n    { \"subject\": \"John\" }\n  ]\n}";
        let err = Session::from_json(doc).unwrap_err();
        assert!(matches!(err, EngineError::RuleSet { line: 3, .. }), "{:?}", err);
    }
}
