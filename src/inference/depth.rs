//! # Limite de Profundidade Transitiva
//!
//! Regras em forma de **cadeia** derivam relações que pulam vários saltos:
//!
//! ```text
//! A ~r B  AND  B ~r C  AND  C ~r D   ⊢   RELATE(A, D, r)      (3 saltos)
//! ```
//!
//! Uma regra é cadeia quando:
//! - tem ao menos 2 padrões de relação;
//! - o sujeito de algum padrão é o objeto de um padrão anterior;
//! - a conclusão vai do primeiro sujeito da cadeia ao último objeto.
//!
//! A profundidade é o número de padrões de relação. Se passar de
//! `max_depth`, a regra inteira é ignorada naquela chamada; não há
//! avaliação parcial nem truncamento.

use crate::core::{RelationPattern, Rule};

/// `true` se a regra tem a forma de cadeia descrita acima.
pub fn is_chain_shaped(rule: &Rule) -> bool {
    let patterns: Vec<&RelationPattern> = rule.relation_patterns().collect();
    let (Some(first), Some(last)) = (patterns.first(), patterns.last()) else {
        return false;
    };
    if patterns.len() < 2 {
        return false;
    }

    let linked = patterns
        .iter()
        .enumerate()
        .skip(1)
        .any(|(i, p)| patterns[..i].iter().any(|prev| prev.object == p.subject));

    linked && rule.conclusion.subject == first.subject && rule.conclusion.object == last.object
}

/// Número de saltos (padrões de relação) da regra.
pub fn hop_count(rule: &Rule) -> usize {
    rule.relation_patterns().count()
}

/// `true` se a regra deve ser pulada com o `max_depth` informado.
pub fn exceeds_depth(rule: &Rule, max_depth: usize) -> bool {
    is_chain_shaped(rule) && hop_count(rule) > max_depth
}
