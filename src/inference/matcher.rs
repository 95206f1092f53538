//! # Casador de Condições
//!
//! Dada **uma** condição e **um** mapa de ligações parcial, produz todas as
//! extensões consistentes desse mapa contra o [`FactStore`].
//!
//! ## Padrão de Relação: `A ~genealogy B AND role="parent of"`
//!
//! ```text
//! 1. resolve o alias → "relation/family-link"
//! 2. para cada fato com esse tipo canônico (ordem de inserção):
//!      A ligado?  precisa ser igual ao sujeito do fato; senão liga A = sujeito
//!      B ligado?  precisa ser igual ao objeto do fato;  senão liga B = objeto
//!      cada atributo exigido precisa existir no fato (chave e valor exatos)
//!    cada fato aceito gera um ramo de solução
//! ```
//!
//! Este é o **único ponto de ramificação** da busca: N fatos aceitos ⇒ N
//! mapas estendidos.
//!
//! ## Padrão de Predicado: `A has gender="male"`
//!
//! A variável precisa já estar ligada. Predicados nunca criam ligações; uma
//! variável livre aqui significa zero soluções.
//!
//! O mapa de entrada nunca é modificado: cada ramo recebe sua própria cópia.

use std::collections::BTreeMap;

use super::alias::AliasResolver;
use crate::core::{Condition, FactStore, PredicatePattern, Relation, RelationPattern};

/// Variável → identificador de entidade.
pub type Bindings = BTreeMap<String, String>;

/// Todas as extensões de `bindings` que satisfazem `condition`.
pub fn match_condition(
    condition: &Condition,
    bindings: &Bindings,
    store: &FactStore,
    aliases: &AliasResolver<'_>,
) -> Vec<Bindings> {
    match condition {
        Condition::Relation(pattern) => match_relation(pattern, bindings, store, aliases),
        Condition::Predicate(pattern) => match_predicate(pattern, bindings, store),
    }
}

fn match_relation(
    pattern: &RelationPattern,
    bindings: &Bindings,
    store: &FactStore,
    aliases: &AliasResolver<'_>,
) -> Vec<Bindings> {
    let canonical = aliases.resolve(&pattern.relation);
    store
        .relations_named(canonical)
        .filter_map(|fact| bind_relation(pattern, fact, bindings))
        .collect()
}

/// Tenta casar um único fato candidato; `None` rejeita o candidato.
fn bind_relation(
    pattern: &RelationPattern,
    fact: &Relation,
    bindings: &Bindings,
) -> Option<Bindings> {
    let attributes_present = pattern
        .attributes
        .iter()
        .all(|attr| fact.has_attribute(&attr.key, &attr.value));
    if !attributes_present {
        return None;
    }

    let mut extended = bindings.clone();
    bind_var(&mut extended, &pattern.subject, &fact.subject)?;
    bind_var(&mut extended, &pattern.object, &fact.object)?;
    Some(extended)
}

/// Liga `var` a `value`, ou confirma a ligação existente.
fn bind_var(bindings: &mut Bindings, var: &str, value: &str) -> Option<()> {
    match bindings.get(var) {
        Some(bound) if bound == value => Some(()),
        Some(_) => None,
        None => {
            bindings.insert(var.to_string(), value.to_string());
            Some(())
        }
    }
}

fn match_predicate(
    pattern: &PredicatePattern,
    bindings: &Bindings,
    store: &FactStore,
) -> Vec<Bindings> {
    let Some(entity) = bindings.get(&pattern.subject) else {
        tracing::trace!(var = %pattern.subject, "predicado com variável livre, sem soluções");
        return Vec::new();
    };
    if store.has_predicate(entity, &pattern.key, &pattern.value) {
        vec![bindings.clone()]
    } else {
        Vec::new()
    }
}
