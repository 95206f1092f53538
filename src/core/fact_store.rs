//! # FactStore — Armazém de Fatos da Sessão
//!
//! O [`FactStore`] guarda as relações e os predicados conhecidos em uma
//! sessão de inferência. É **somente-acréscimo**: nada é removido nem
//! reescrito, e o motor só acrescenta fatos nas fronteiras entre iterações.
//!
//! ## Armazenamento
//!
//! - **Relações**: `Vec<Relation>` — na ordem de inserção/derivação
//! - **Predicados**: `Vec<Predicate>` — na ordem de inserção
//!
//! A ordem é preservada para que a varredura do casador de condições seja
//! determinística: mesmos fatos + mesmas regras ⇒ mesma saída.

use super::relation::{Predicate, Relation};

/// Armazém em memória de [Relation]s e [Predicate]s.
#[derive(Clone, Debug, Default)]
pub struct FactStore {
    relations: Vec<Relation>,
    predicates: Vec<Predicate>,
}

impl FactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acrescenta uma relação. O nome da relação já deve estar canônico.
    pub fn add_relation(&mut self, relation: Relation) {
        tracing::debug!(%relation, "FactStore: relação armazenada");
        self.relations.push(relation);
    }

    /// Acrescenta um lote de relações preservando a ordem.
    pub fn extend_relations(&mut self, relations: impl IntoIterator<Item = Relation>) {
        for relation in relations {
            self.add_relation(relation);
        }
    }

    pub fn add_predicate(&mut self, predicate: Predicate) {
        tracing::debug!(%predicate, "FactStore: predicado armazenado");
        self.predicates.push(predicate);
    }

    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Relações cujo tipo canônico é exatamente `name`, na ordem de inserção.
    pub fn relations_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Relation> {
        self.relations.iter().filter(move |r| r.relation == name)
    }

    /// `true` se existe um predicado exatamente igual a `(entity, key, value)`.
    pub fn has_predicate(&self, entity: &str, key: &str, value: &str) -> bool {
        self.predicates
            .iter()
            .any(|p| p.entity == entity && p.key == key && p.value == value)
    }

    /// `true` se já existe uma relação estruturalmente igual a `relation`.
    pub fn contains_relation(&self, relation: &Relation) -> bool {
        self.relations.iter().any(|r| r.same_as(relation))
    }

    pub fn relation_count(&self) -> usize {
        self.relations.len()
    }

    pub fn predicate_count(&self) -> usize {
        self.predicates.len()
    }
}
