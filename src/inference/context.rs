//! # Casamento de Contextos
//!
//! Cada [`Context`](crate::core::Context) carrega um padrão tipo MIME
//! (`type/subtype`) que delimita quando suas regras valem. Uma chamada de
//! inferência pode passar um filtro no mesmo formato.
//!
//! | Regra do contexto | Filtro | Casa? |
//! |-------------------|--------|-------|
//! | `text/book` | *(nenhum)* | sim |
//! | `text/book` | `text/*` | sim |
//! | `text/book` | `application/*` | não |
//! | `*/*` | qualquer | sim |
//! | qualquer | `*/*` | sim |
//!
//! Um padrão sem `/` é lido como `type/*`.

const ANY: &str = "*/*";

/// Decide se as regras de `rule_context` se aplicam ao filtro da consulta.
pub fn context_matches(rule_context: &str, query_filter: Option<&str>) -> bool {
    let Some(filter) = query_filter else {
        return true;
    };
    if rule_context == ANY || filter == ANY {
        return true;
    }

    let (rule_type, rule_subtype) = split_pattern(rule_context);
    let (query_type, query_subtype) = split_pattern(filter);
    part_matches(rule_type, query_type) && part_matches(rule_subtype, query_subtype)
}

fn split_pattern(pattern: &str) -> (&str, &str) {
    pattern.split_once('/').unwrap_or((pattern, "*"))
}

fn part_matches(a: &str, b: &str) -> bool {
    a == b || a == "*" || b == "*"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_filter_always_matches() {
        assert!(context_matches("text/book", None));
        assert!(context_matches("*/*", None));
    }

    #[test]
    fn wildcard_subtype() {
        assert!(context_matches("text/book", Some("text/*")));
        assert!(!context_matches("text/book", Some("application/*")));
        assert!(context_matches("text/*", Some("text/book")));
    }

    #[test]
    fn universal_pattern_on_either_side() {
        assert!(context_matches("*/*", Some("application/person")));
        assert!(context_matches("*/*", Some("anything")));
        assert!(context_matches("application/person", Some("*/*")));
    }

    #[test]
    fn exact_and_wildcard_type() {
        assert!(context_matches("application/person", Some("application/person")));
        assert!(!context_matches("application/person", Some("application/book")));
        assert!(context_matches("application/person", Some("*/person")));
        assert!(!context_matches("application/person", Some("*/book")));
    }

    /// Padrão sem barra vale como `type/*`
    #[test]
    fn bare_type_pattern() {
        assert!(context_matches("text/book", Some("text")));
        assert!(!context_matches("text/book", Some("application")));
    }
}
