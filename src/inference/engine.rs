//! # Motor de Inferência — Driver de Ponto Fixo
//!
//! O [`InferenceEngine`] possui o [`RuleSet`] (imutável) e o [`FactStore`]
//! da sessão, e roda rodadas de derivação até o ponto fixo ou até esgotar
//! o orçamento de iterações.
//!
//! ## Algoritmo
//!
//! ```text
//! acumulado = []
//! para iteração em 1..=max_iterations:
//!     rodada = []
//!     para contexto em contextos que casam com o filtro:
//!         para regra em contexto.regras:
//!             se regra é cadeia com saltos > max_depth: pula
//!             para relação em avaliar(regra):
//!                 se não é duplicata (rodada + armazém): rodada += relação
//!     se rodada vazia: ponto fixo, para
//!     acumulado += rodada
//!     armazém += rodada          ← visível só a partir da próxima iteração
//! ```
//!
//! Como o armazém só cresce entre rodadas, todas as regras de uma rodada
//! enxergam o mesmo instantâneo e o resultado não depende da ordem em que
//! contextos e regras são visitados dentro da rodada.
//!
//! ## Concorrência
//!
//! Síncrono e sem travas internas. Para compartilhar entre threads use
//! [`SharedEngine`](crate::shared::SharedEngine).

use super::alias::AliasResolver;
use super::context::context_matches;
use super::dedup::is_duplicate;
use super::depth::{exceeds_depth, hop_count};
use super::evaluator::{instantiate, solve};
use super::matcher::Bindings;
use crate::config::InferenceConfig;
use crate::core::{Attribute, FactStore, KnowledgeSource, Predicate, Relation, RuleSet};
use crate::error::EngineError;

/// Uma relação derivada com a explicação de onde ela veio.
///
/// ## Exemplo de Explicação
///
/// ```text
/// father_of [application/person]: A=John, B=Mary ⊢ John -> Mary : relation/family-link {label="father of"}
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InferenceResult {
    /// A relação nova, já aceita no armazém.
    pub relation: Relation,
    /// Nome da regra que a produziu.
    pub rule: String,
    /// Padrão do contexto da regra.
    pub context: String,
    /// Rodada (1-indexed) em que foi derivada.
    pub iteration: usize,
    /// Explicação legível do raciocínio.
    pub explanation: String,
}

/// Resultado completo de uma chamada de inferência.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InferenceOutcome {
    /// Derivações na ordem em que ocorreram, sem duplicatas.
    pub results: Vec<InferenceResult>,
    /// Rodadas executadas, incluindo a rodada vazia final quando houver.
    pub iterations: usize,
    /// `true` se alguma rodada terminou sem fatos novos.
    pub converged: bool,
}

impl InferenceOutcome {
    pub fn relations(&self) -> Vec<Relation> {
        self.results.iter().map(|r| r.relation.clone()).collect()
    }

    pub fn into_relations(self) -> Vec<Relation> {
        self.results.into_iter().map(|r| r.relation).collect()
    }
}

/// Motor de inferência com encadeamento para frente.
#[derive(Clone, Debug)]
pub struct InferenceEngine {
    rules: RuleSet,
    store: FactStore,
}

impl InferenceEngine {
    /// Cria o motor a partir do conjunto de regras entregue pelo parser externo.
    ///
    /// Regras com tokens de conclusão livres ou sem condições são aceitas,
    /// mas registradas com `warn`.
    pub fn new(rules: RuleSet) -> Self {
        for (context, rule) in rules.rules() {
            if rule.conditions.is_empty() {
                tracing::warn!(
                    context = %context.pattern,
                    rule = %rule.name,
                    "regra sem condições nunca dispara"
                );
            }
            let free = rule.free_conclusion_vars();
            if !free.is_empty() {
                tracing::warn!(
                    context = %context.pattern,
                    rule = %rule.name,
                    tokens = ?free,
                    "tokens da conclusão fora das condições serão usados como constantes"
                );
            }
        }
        tracing::info!(
            contexts = rules.contexts.len(),
            rules = rules.rule_count(),
            aliases = rules.aliases.len(),
            "regras carregadas"
        );
        Self {
            rules,
            store: FactStore::new(),
        }
    }

    /// Acrescenta um fato, resolvendo o alias do tipo da relação na inserção.
    pub fn add_fact(
        &mut self,
        subject: impl Into<String>,
        relation: &str,
        object: impl Into<String>,
        attributes: Vec<Attribute>,
    ) {
        let canonical = AliasResolver::new(&self.rules.aliases).resolve(relation);
        self.store
            .add_relation(Relation::new(subject, canonical, object, attributes));
    }

    pub fn add_predicate(
        &mut self,
        entity: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.store.add_predicate(Predicate::new(entity, key, value));
    }

    /// Semeia o armazém a partir de uma [`KnowledgeSource`].
    ///
    /// Para cada ID: atributos viram predicados da entidade e arestas viram
    /// fatos com a entidade como sujeito. Todas as consultas são feitas antes
    /// de qualquer inserção, então uma falha não deixa o armazém semeado pela
    /// metade.
    ///
    /// # Retorno
    ///
    /// Número de fatos e predicados acrescentados.
    pub fn load_from_source(
        &mut self,
        source: &dyn KnowledgeSource,
        ids: &[&str],
    ) -> Result<usize, EngineError> {
        let records = ids
            .iter()
            .map(|id| source.lookup(id))
            .collect::<Result<Vec<_>, _>>()?;

        let mut added = 0;
        for record in records {
            for attr in record.attributes {
                self.add_predicate(record.id.clone(), attr.key, attr.value);
                added += 1;
            }
            for edge in record.edges {
                self.add_fact(record.id.clone(), &edge.relation, edge.target, edge.attributes);
                added += 1;
            }
        }
        tracing::info!(entities = ids.len(), added, "fonte de conhecimento carregada");
        Ok(added)
    }

    /// Deriva novas relações e devolve-as na ordem de derivação.
    ///
    /// `context_filter = None` aceita todos os contextos; `Some("*/*")` tem o
    /// mesmo efeito.
    pub fn infer(
        &mut self,
        context_filter: Option<&str>,
        max_depth: usize,
        max_iterations: usize,
    ) -> Vec<Relation> {
        self.execute(context_filter, max_depth, max_iterations)
            .into_relations()
    }

    /// Igual a [`infer`](Self::infer), com os parâmetros vindos de um [`InferenceConfig`].
    pub fn infer_with(&mut self, config: &InferenceConfig) -> Vec<Relation> {
        self.run(config).into_relations()
    }

    /// Roda a inferência e devolve as derivações explicadas.
    pub fn run(&mut self, config: &InferenceConfig) -> InferenceOutcome {
        self.execute(
            config.context_filter.as_deref(),
            config.max_depth,
            config.max_iterations,
        )
    }

    fn execute(
        &mut self,
        context_filter: Option<&str>,
        max_depth: usize,
        max_iterations: usize,
    ) -> InferenceOutcome {
        let Self { rules, store } = self;
        let aliases = AliasResolver::new(&rules.aliases);
        let mut outcome = InferenceOutcome::default();

        for iteration in 1..=max_iterations {
            outcome.iterations = iteration;
            let mut accepted: Vec<Relation> = Vec::new();
            let mut round: Vec<InferenceResult> = Vec::new();

            for (context, rule) in rules.rules() {
                // Já reportadas em `new`.
                if rule.conditions.is_empty() {
                    continue;
                }
                if !context_matches(&context.pattern, context_filter) {
                    continue;
                }
                if exceeds_depth(rule, max_depth) {
                    tracing::debug!(
                        rule = %rule.name,
                        hops = hop_count(rule),
                        max_depth,
                        "regra em cadeia acima da profundidade, ignorada"
                    );
                    continue;
                }

                for bindings in solve(rule, store, &aliases) {
                    let Some(relation) = instantiate(&rule.conclusion, &bindings, &aliases) else {
                        continue;
                    };
                    if is_duplicate(&relation, &accepted, store) {
                        tracing::trace!(rule = %rule.name, %relation, "duplicata descartada");
                        continue;
                    }

                    tracing::debug!(rule = %rule.name, iteration, %relation, "relação inferida");
                    let explanation = format!(
                        "{} [{}]: {} ⊢ {}",
                        rule.name,
                        context.pattern,
                        describe_bindings(&bindings),
                        relation
                    );
                    round.push(InferenceResult {
                        relation: relation.clone(),
                        rule: rule.name.clone(),
                        context: context.pattern.clone(),
                        iteration,
                        explanation,
                    });
                    accepted.push(relation);
                }
            }

            if round.is_empty() {
                outcome.converged = true;
                break;
            }
            store.extend_relations(accepted);
            outcome.results.extend(round);
        }

        tracing::info!(
            iterations = outcome.iterations,
            derived = outcome.results.len(),
            converged = outcome.converged,
            "inferência concluída"
        );
        outcome
    }

    pub fn rule_set(&self) -> &RuleSet {
        &self.rules
    }

    pub fn store(&self) -> &FactStore {
        &self.store
    }

    pub fn facts(&self) -> &[Relation] {
        self.store.relations()
    }

    pub fn predicates(&self) -> &[Predicate] {
        self.store.predicates()
    }
}

/// `A=John, B=Mary` — na ordem das variáveis.
fn describe_bindings(bindings: &Bindings) -> String {
    bindings
        .iter()
        .map(|(var, value)| format!("{}={}", var, value))
        .collect::<Vec<_>>()
        .join(", ")
}
