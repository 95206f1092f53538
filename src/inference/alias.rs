//! Resolução de aliases de tipo de relação.
//!
//! `USE relation/family-link AS genealogy` no texto das regras vira a entrada
//! `"genealogy" → "relation/family-link"` no mapa. Nomes sem entrada são
//! tratados como já canônicos.

use std::collections::BTreeMap;

/// Visão somente-leitura sobre o mapa de aliases de um [`RuleSet`](crate::core::RuleSet).
#[derive(Clone, Copy, Debug)]
pub struct AliasResolver<'a> {
    aliases: &'a BTreeMap<String, String>,
}

impl<'a> AliasResolver<'a> {
    pub fn new(aliases: &'a BTreeMap<String, String>) -> Self {
        Self { aliases }
    }

    /// Devolve o tipo canônico de `name`, ou o próprio `name` se não houver alias.
    pub fn resolve<'n>(&self, name: &'n str) -> &'n str
    where
        'a: 'n,
    {
        self.aliases.get(name).map(String::as_str).unwrap_or(name)
    }
}
