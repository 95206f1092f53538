//! # Regras — Condições, Conclusões e Contextos
//!
//! Estes tipos formam a **árvore de valores** que o parser externo entrega
//! ao motor. O motor nunca lê texto de regras: recebe um [`RuleSet`] já
//! validado e o trata como imutável.
//!
//! ## Hierarquia
//!
//! ```text
//! RuleSet
//!  ├── aliases: { "genealogy" → "relation/family-link", ... }
//!  └── contexts: [Context]
//!       └── Context { pattern: "application/person", rules: [Rule] }
//!            └── Rule { name, conditions: [Condition], conclusion }
//! ```
//!
//! ## Formato de Entrega (JSON)
//!
//! ```json
//! {
//!   "aliases": { "genealogy": "relation/family-link" },
//!   "contexts": [{
//!     "pattern": "application/person",
//!     "rules": [{
//!       "name": "father_of",
//!       "conditions": [
//!         { "kind": "relation", "subject": "A", "relation": "genealogy", "object": "B",
//!           "attributes": [{ "key": "role", "value": "parent of" }] },
//!         { "kind": "predicate", "subject": "A", "key": "gender", "value": "male" }
//!       ],
//!       "conclusion": { "subject": "A", "object": "B", "relation": "genealogy",
//!                       "attributes": [{ "key": "label", "value": "father of" }] }
//!     }]
//!   }]
//! }
//! ```

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::relation::Attribute;
use crate::error::EngineError;

/// Padrão de relação: `subject ~relation object` com atributos exigidos.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationPattern {
    /// Variável do sujeito (ex: "A").
    pub subject: String,
    /// Nome canônico ou alias do tipo de relação.
    pub relation: String,
    /// Variável do objeto (ex: "B").
    pub object: String,
    /// Atributos que o fato precisa carregar para casar.
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

/// Padrão de predicado: `subject has key="value"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredicatePattern {
    /// Variável da entidade. Precisa estar ligada por uma condição anterior.
    pub subject: String,
    pub key: String,
    pub value: String,
}

/// Condição de uma regra — união etiquetada entre os dois tipos de padrão.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Condition {
    /// Casa contra o armazém de relações; pode introduzir novas ligações.
    Relation(RelationPattern),
    /// Casa contra o armazém de predicados; nunca introduz ligações.
    Predicate(PredicatePattern),
}

impl Condition {
    /// Variáveis mencionadas pela condição, na ordem em que aparecem.
    pub fn variables(&self) -> Vec<&str> {
        match self {
            Condition::Relation(p) => vec![p.subject.as_str(), p.object.as_str()],
            Condition::Predicate(p) => vec![p.subject.as_str()],
        }
    }

    pub fn as_relation(&self) -> Option<&RelationPattern> {
        match self {
            Condition::Relation(p) => Some(p),
            Condition::Predicate(_) => None,
        }
    }
}

/// Modelo da conclusão: `RELATE(subject, object, relation) WITH attributes`.
///
/// Os valores dos atributos são copiados literalmente; nunca passam por
/// substituição de variáveis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conclusion {
    pub subject: String,
    pub object: String,
    /// Nome canônico ou alias do tipo da relação produzida.
    pub relation: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

/// Regra nomeada: lista ordenada de condições + modelo de conclusão.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    pub conditions: Vec<Condition>,
    pub conclusion: Conclusion,
}

impl Rule {
    /// Padrões de relação da regra, na ordem declarada.
    pub fn relation_patterns(&self) -> impl Iterator<Item = &RelationPattern> {
        self.conditions.iter().filter_map(Condition::as_relation)
    }

    /// Conjunto de todas as variáveis usadas nas condições.
    pub fn condition_variables(&self) -> BTreeSet<&str> {
        self.conditions
            .iter()
            .flat_map(|c| c.variables())
            .collect()
    }

    /// Tokens da conclusão que não aparecem em nenhuma condição.
    ///
    /// Não é erro: na instanciação esses tokens são usados como constantes.
    pub fn free_conclusion_vars(&self) -> Vec<&str> {
        let bound = self.condition_variables();
        [self.conclusion.subject.as_str(), self.conclusion.object.as_str()]
            .into_iter()
            .filter(|v| !bound.contains(v))
            .collect()
    }
}

/// Agrupamento de regras sob um padrão tipo MIME (`type/subtype`, com `*`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    pub pattern: String,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

/// Conjunto completo de regras entregue pelo parser externo.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    /// Nome curto → tipo canônico de relação.
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
    /// Contextos na ordem declarada.
    #[serde(default)]
    pub contexts: Vec<Context>,
}

impl RuleSet {
    /// Decodifica o documento JSON produzido pelo parser externo.
    ///
    /// # Erros
    ///
    /// [`EngineError::RuleSet`] com linha e coluna do ponto onde a
    /// decodificação falhou.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        serde_json::from_str(json).map_err(EngineError::from_decode)
    }

    /// Total de regras somando todos os contextos.
    pub fn rule_count(&self) -> usize {
        self.contexts.iter().map(|c| c.rules.len()).sum()
    }

    /// Itera sobre `(contexto, regra)` na ordem declarada.
    pub fn rules(&self) -> impl Iterator<Item = (&Context, &Rule)> {
        self.contexts
            .iter()
            .flat_map(|ctx| ctx.rules.iter().map(move |rule| (ctx, rule)))
    }
}
