//! # Relation — Fatos do Armazém
//!
//! Uma [`Relation`] é uma **aresta direcionada, tipada e atribuída** entre
//! duas entidades. É a unidade que o motor de inferência consulta e produz.
//!
//! ## Estrutura
//!
//! ```text
//! Relation {
//!     subject:    "John",
//!     relation:   "relation/family-link",   (sempre na forma canônica)
//!     object:     "Mary",
//!     attributes: [role="parent of"],
//! }
//! ```
//!
//! Um [`Predicate`] é um atributo afirmado **diretamente** sobre uma entidade
//! (ex: `John.gender = "male"`), sem relação com outra entidade.
//!
//! ## Igualdade Estrutural
//!
//! Dois fatos são "o mesmo fato" quando têm sujeito, objeto e relação iguais
//! e o **mesmo conjunto** de atributos, independentemente da ordem.
//! Veja [`Relation::same_as`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Par chave/valor anexado a uma relação ou a um padrão de condição.
///
/// A igualdade considera os dois campos. A ordenação (chave, depois valor)
/// é usada para comparar conjuntos de atributos sem depender da ordem.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Attribute {
    /// Nome do atributo (ex: "role").
    pub key: String,
    /// Valor textual do atributo (ex: "parent of").
    pub value: String,
}

impl Attribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=\"{}\"", self.key, self.value)
    }
}

/// Relação binária entre duas entidades — o "fato" do armazém.
///
/// O campo `relation` está **sempre** na forma canônica (pós-alias).
/// Quem garante isso é o [`InferenceEngine`](crate::inference::InferenceEngine),
/// que resolve aliases tanto na inserção quanto na instanciação de conclusões.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    /// Entidade de origem.
    pub subject: String,
    /// Tipo canônico da relação (ex: "relation/family-link").
    pub relation: String,
    /// Entidade de destino.
    pub object: String,
    /// Atributos da relação, na ordem em que foram fornecidos.
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl Relation {
    pub fn new(
        subject: impl Into<String>,
        relation: impl Into<String>,
        object: impl Into<String>,
        attributes: Vec<Attribute>,
    ) -> Self {
        Self {
            subject: subject.into(),
            relation: relation.into(),
            object: object.into(),
            attributes,
        }
    }

    /// Procura um atributo pela chave exata e devolve o valor.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }

    /// Verifica se a relação carrega exatamente o par `key=value`.
    ///
    /// A comparação é **case-sensitive** em chave e valor. Se a relação tiver
    /// a mesma chave repetida, basta que uma das ocorrências case.
    pub fn has_attribute(&self, key: &str, value: &str) -> bool {
        self.attributes
            .iter()
            .any(|a| a.key == key && a.value == value)
    }

    /// Atributos ordenados por chave (e valor) — forma normalizada para comparação.
    pub fn sorted_attributes(&self) -> Vec<&Attribute> {
        let mut attrs: Vec<&Attribute> = self.attributes.iter().collect();
        attrs.sort();
        attrs
    }

    /// Igualdade estrutural: mesmos sujeito, objeto e relação, e o mesmo
    /// conjunto de atributos sem considerar a ordem.
    ///
    /// `derive(PartialEq)` compara atributos posição a posição; este método
    /// é o usado pela deduplicação.
    pub fn same_as(&self, other: &Relation) -> bool {
        self.subject == other.subject
            && self.object == other.object
            && self.relation == other.relation
            && self.attributes.len() == other.attributes.len()
            && self.sorted_attributes() == other.sorted_attributes()
    }
}

/// Formato legível: `John -> Mary : relation/family-link {role="parent of"}`.
impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} : {} {{", self.subject, self.object, self.relation)?;
        for (i, attr) in self.attributes.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", attr)?;
        }
        write!(f, "}}")
    }
}

/// Atributo afirmado diretamente sobre uma entidade.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Predicate {
    pub entity: String,
    pub key: String,
    pub value: String,
}

impl Predicate {
    pub fn new(
        entity: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            entity: entity.into(),
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}=\"{}\"", self.entity, self.key, self.value)
    }
}
