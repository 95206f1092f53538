//! Deduplicação estrutural de relações derivadas.
//!
//! Uma relação recém-instanciada é descartada se já existir, ignorando a
//! ordem dos atributos, entre as aceitas nesta rodada ou no armazém.

use crate::core::{FactStore, Relation};

pub fn is_duplicate(candidate: &Relation, round: &[Relation], store: &FactStore) -> bool {
    round.iter().any(|r| r.same_as(candidate)) || store.contains_relation(candidate)
}
