//! # Avaliador de Regras
//!
//! Enumera todos os mapas de ligações que satisfazem a lista completa de
//! condições de uma regra e instancia a conclusão para cada um.
//!
//! ## Algoritmo (junção com retrocesso por fronteira)
//!
//! ```text
//! fronteira = [ {} ]
//! para cada condição, da esquerda para a direita:
//!     fronteira = ⋃ match_condition(condição, m)  para m em fronteira
//!     se fronteira vazia: a regra não produz nada
//! para cada m em fronteira:
//!     sujeito = m[conclusão.sujeito] ou o próprio token
//!     objeto  = m[conclusão.objeto]  ou o próprio token
//!     descarta se sujeito ou objeto vazio
//! ```
//!
//! ## Custo
//!
//! Exponencial no número de padrões de relação no pior caso (um ramo por
//! fato aceito em cada condição). Adequado para conjuntos pequenos de
//! regras e fatos.

use super::alias::AliasResolver;
use super::matcher::{match_condition, Bindings};
use crate::core::{Conclusion, FactStore, Relation, Rule};

/// Mapas de ligações que satisfazem todas as condições de `rule`.
///
/// Regras sem condições são rejeitadas e não produzem solução.
pub fn solve(rule: &Rule, store: &FactStore, aliases: &AliasResolver<'_>) -> Vec<Bindings> {
    if rule.conditions.is_empty() {
        tracing::trace!(rule = %rule.name, "regra sem condições rejeitada");
        return Vec::new();
    }

    let mut frontier = vec![Bindings::new()];
    for (step, condition) in rule.conditions.iter().enumerate() {
        frontier = frontier
            .iter()
            .flat_map(|bindings| match_condition(condition, bindings, store, aliases))
            .collect();
        tracing::trace!(rule = %rule.name, step, frontier = frontier.len(), "condição avaliada");
        if frontier.is_empty() {
            break;
        }
    }
    frontier
}

/// Instancia a conclusão para um mapa de ligações.
///
/// Tokens sem ligação são usados literalmente. O tipo da relação passa pelo
/// resolvedor de aliases; os atributos são copiados sem substituição.
/// Devolve `None` se o sujeito ou o objeto ficarem vazios.
pub fn instantiate(
    conclusion: &Conclusion,
    bindings: &Bindings,
    aliases: &AliasResolver<'_>,
) -> Option<Relation> {
    let subject = substitute(&conclusion.subject, bindings);
    let object = substitute(&conclusion.object, bindings);
    if subject.is_empty() || object.is_empty() {
        return None;
    }
    Some(Relation::new(
        subject,
        aliases.resolve(&conclusion.relation),
        object,
        conclusion.attributes.clone(),
    ))
}

fn substitute<'a>(token: &'a str, bindings: &'a Bindings) -> &'a str {
    bindings.get(token).map(String::as_str).unwrap_or(token)
}

/// Todas as relações que `rule` produz contra o armazém atual.
pub fn apply_rule(rule: &Rule, store: &FactStore, aliases: &AliasResolver<'_>) -> Vec<Relation> {
    solve(rule, store, aliases)
        .iter()
        .filter_map(|bindings| instantiate(&rule.conclusion, bindings, aliases))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::core::{Attribute, Condition, Predicate, PredicatePattern, RelationPattern};

    const FAMILY: &str = "relation/family-link";

    fn aliases() -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert("genealogy".to_string(), FAMILY.to_string());
        map
    }

    fn store() -> FactStore {
        let mut store = FactStore::new();
        let parent = || vec![Attribute::new("role", "parent of")];
        store.add_relation(Relation::new("John", FAMILY, "Mary", parent()));
        store.add_relation(Relation::new("Mary", FAMILY, "Alice", parent()));
        store.add_predicate(Predicate::new("John", "gender", "male"));
        store
    }

    fn hop(s: &str, o: &str) -> Condition {
        Condition::Relation(RelationPattern {
            subject: s.into(),
            relation: "genealogy".into(),
            object: o.into(),
            attributes: vec![Attribute::new("role", "parent of")],
        })
    }

    fn rule(conditions: Vec<Condition>, from: &str, to: &str, attrs: Vec<Attribute>) -> Rule {
        Rule {
            name: "test".into(),
            conditions,
            conclusion: Conclusion {
                subject: from.into(),
                object: to.into(),
                relation: "genealogy".into(),
                attributes: attrs,
            },
        }
    }

    #[test]
    fn father_of_yields_one_relation() {
        let map = aliases();
        let has_male = Condition::Predicate(PredicatePattern {
            subject: "A".into(),
            key: "gender".into(),
            value: "male".into(),
        });
        let r = rule(
            vec![hop("A", "B"), has_male],
            "A",
            "B",
            vec![Attribute::new("label", "father of")],
        );
        let out = apply_rule(&r, &store(), &AliasResolver::new(&map));
        assert_eq!(
            out,
            vec![Relation::new("John", FAMILY, "Mary", vec![Attribute::new("label", "father of")])]
        );
    }

    /// A junção segue o elo B entre os dois saltos
    #[test]
    fn join_across_conditions() {
        let map = aliases();
        let r = rule(
            vec![hop("A", "B"), hop("B", "C")],
            "A",
            "C",
            vec![Attribute::new("role", "grandparent")],
        );
        let solutions = solve(&r, &store(), &AliasResolver::new(&map));
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0]["A"], "John");
        assert_eq!(solutions[0]["B"], "Mary");
        assert_eq!(solutions[0]["C"], "Alice");
    }

    #[test]
    fn zero_condition_rule_is_rejected() {
        let map = aliases();
        let r = rule(vec![], "x", "y", vec![]);
        assert!(apply_rule(&r, &store(), &AliasResolver::new(&map)).is_empty());
    }

    #[test]
    fn empty_frontier_yields_nothing() {
        let map = aliases();
        let r = rule(vec![hop("A", "B"), hop("B", "C"), hop("C", "D")], "A", "D", vec![]);
        assert!(apply_rule(&r, &store(), &AliasResolver::new(&map)).is_empty());
    }

    /// Token livre na conclusão vira constante
    #[test]
    fn unbound_conclusion_token_is_literal() {
        let map = aliases();
        let r = rule(vec![hop("A", "B")], "A", "family_root", vec![]);
        let out = apply_rule(&r, &store(), &AliasResolver::new(&map));
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|rel| rel.object == "family_root"));
        assert_eq!(out[0].subject, "John");
        assert_eq!(out[1].subject, "Mary");
    }

    #[test]
    fn empty_subject_or_object_is_discarded() {
        let map = aliases();
        let r = rule(vec![hop("A", "B")], "", "B", vec![]);
        assert!(apply_rule(&r, &store(), &AliasResolver::new(&map)).is_empty());

        let mut bindings = Bindings::new();
        bindings.insert("A".into(), String::new());
        let conclusion = Conclusion {
            subject: "A".into(),
            object: "B".into(),
            relation: "genealogy".into(),
            attributes: vec![],
        };
        assert!(instantiate(&conclusion, &bindings, &AliasResolver::new(&map)).is_none());
    }
}
