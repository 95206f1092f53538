//! # SharedEngine — Motor Compartilhado Entre Threads
//!
//! O [`InferenceEngine`] não tem travas internas. Hosts concorrentes devem
//! serializar `add_fact`, `add_predicate` e `infer` contra uma mesma
//! instância; o [`SharedEngine`] faz isso com `Arc<Mutex<_>>`.
//!
//! ```text
//! thread A ── add_fact ──┐
//! thread B ── infer ─────┼──► Mutex<InferenceEngine>   (uma chamada por vez)
//! thread C ── facts ─────┘
//! ```
//!
//! Uma chamada `infer` segura a trava até o fim: não há resultado parcial.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::InferenceConfig;
use crate::core::{Attribute, Relation};
use crate::inference::{InferenceEngine, InferenceOutcome};

#[derive(Clone)]
pub struct SharedEngine {
    inner: Arc<Mutex<InferenceEngine>>,
}

impl SharedEngine {
    pub fn new(engine: InferenceEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    pub fn add_fact(
        &self,
        subject: &str,
        relation: &str,
        object: &str,
        attributes: Vec<Attribute>,
    ) {
        self.inner.lock().add_fact(subject, relation, object, attributes);
    }

    pub fn add_predicate(&self, entity: &str, key: &str, value: &str) {
        self.inner.lock().add_predicate(entity, key, value);
    }

    pub fn infer(&self, config: &InferenceConfig) -> Vec<Relation> {
        self.inner.lock().infer_with(config)
    }

    pub fn run(&self, config: &InferenceConfig) -> InferenceOutcome {
        self.inner.lock().run(config)
    }

    /// Cópia dos fatos atuais, tirada sob a trava.
    pub fn facts(&self) -> Vec<Relation> {
        self.inner.lock().facts().to_vec()
    }

    /// Executa `f` com acesso exclusivo ao motor.
    pub fn with_engine<R>(&self, f: impl FnOnce(&mut InferenceEngine) -> R) -> R {
        let mut engine = self.inner.lock();
        f(&mut *engine)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::core::RuleSet;

    fn transitive_rules() -> RuleSet {
        let doc = serde_json::json!({
            "contexts": [{
                "pattern": "*/*",
                "rules": [{
                    "name": "transitive",
                    "conditions": [
                        { "kind": "relation", "subject": "A", "relation": "link", "object": "B" },
                        { "kind": "relation", "subject": "B", "relation": "link", "object": "C" }
                    ],
                    "conclusion": { "subject": "A", "object": "C", "relation": "link" }
                }]
            }]
        });
        RuleSet::from_json(&doc.to_string()).unwrap()
    }

    /// Inserções concorrentes são serializadas e nenhuma se perde
    #[test]
    fn concurrent_inserts_then_infer() {
        let shared = SharedEngine::new(InferenceEngine::new(transitive_rules()));

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let shared = shared.clone();
                thread::spawn(move || {
                    shared.add_fact(&format!("n{}", i), "link", &format!("n{}", i + 1), vec![]);
                    shared.add_predicate(&format!("n{}", i), "visited", "yes");
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(shared.facts().len(), 4);
        assert_eq!(shared.with_engine(|e| e.predicates().len()), 4);

        let outcome = shared.run(&InferenceConfig::default().with_max_iterations(10));
        assert!(outcome.converged);
        assert!(outcome
            .results
            .iter()
            .any(|r| r.relation.subject == "n0" && r.relation.object == "n4"));
        assert!(shared.infer(&InferenceConfig::default()).is_empty());
    }
}
