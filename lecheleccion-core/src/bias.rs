//! Bias records and their scores
//!
//! A bias record attributes four political-leaning scores to some entity.
//! The entity is referenced polymorphically (`biasable_type` + `biasable_id`
//! in the database); here that pair becomes the [`Biasable`] variant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Discriminator value the database uses for article references.
pub const ARTICLE_KIND: &str = "Article";

/// The four scores of a bias record.
///
/// Values are conceptually in `0.0..=1.0`; nothing enforces that.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BiasScores {
    pub libertarian: f64,
    pub green: f64,
    pub liberal: f64,
    pub conservative: f64,
}

impl BiasScores {
    /// Sentinel reported when there is nothing to average.
    pub const EMPTY: BiasScores = BiasScores {
        libertarian: 0.0,
        green: 0.0,
        liberal: 0.0,
        conservative: 0.0,
    };

    pub fn new(libertarian: f64, green: f64, liberal: f64, conservative: f64) -> Self {
        Self {
            libertarian,
            green,
            liberal,
            conservative,
        }
    }

    /// Column-wise mean, or [`BiasScores::EMPTY`] for no input.
    pub fn mean<'a, I>(scores: I) -> Self
    where
        I: IntoIterator<Item = &'a BiasScores>,
    {
        let mut sum = Self::EMPTY;
        let mut count = 0usize;
        for s in scores {
            sum.libertarian += s.libertarian;
            sum.green += s.green;
            sum.liberal += s.liberal;
            sum.conservative += s.conservative;
            count += 1;
        }

        if count == 0 {
            return Self::EMPTY;
        }

        let n = count as f64;
        Self::new(
            sum.libertarian / n,
            sum.green / n,
            sum.liberal / n,
            sum.conservative / n,
        )
    }

    /// Build from nullable SQL averages; NULL (empty table) becomes 0.0.
    pub fn from_nullable(
        libertarian: Option<f64>,
        green: Option<f64>,
        liberal: Option<f64>,
        conservative: Option<f64>,
    ) -> Self {
        Self::new(
            libertarian.unwrap_or(0.0),
            green.unwrap_or(0.0),
            liberal.unwrap_or(0.0),
            conservative.unwrap_or(0.0),
        )
    }

    pub fn as_array(&self) -> [f64; 4] {
        [self.libertarian, self.green, self.liberal, self.conservative]
    }
}

/// The entity a bias record scores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "BiasableRef", into = "BiasableRef")]
pub enum Biasable {
    Article(i64),
    /// Any other polymorphic target, kept verbatim
    Other { kind: String, id: i64 },
}

impl Biasable {
    /// Rebuild the variant from the stored `(biasable_type, biasable_id)` pair.
    pub fn from_parts(kind: impl Into<String>, id: i64) -> Self {
        let kind = kind.into();
        if kind == ARTICLE_KIND {
            Self::Article(id)
        } else {
            Self::Other { kind, id }
        }
    }

    pub fn kind(&self) -> &str {
        match self {
            Self::Article(_) => ARTICLE_KIND,
            Self::Other { kind, .. } => kind,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            Self::Article(id) | Self::Other { id, .. } => *id,
        }
    }

    pub fn article_id(&self) -> Option<i64> {
        match self {
            Self::Article(id) => Some(*id),
            Self::Other { .. } => None,
        }
    }
}

/// Wire form of [`Biasable`]: the flat pair clients already consume.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BiasableRef {
    biasable_type: String,
    biasable_id: i64,
}

impl From<BiasableRef> for Biasable {
    fn from(r: BiasableRef) -> Self {
        Self::from_parts(r.biasable_type, r.biasable_id)
    }
}

impl From<Biasable> for BiasableRef {
    fn from(b: Biasable) -> Self {
        Self {
            biasable_type: b.kind().to_owned(),
            biasable_id: b.id(),
        }
    }
}

/// A bias record from `collections.biases`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiasMeta {
    pub id: i64,
    #[serde(flatten)]
    pub scores: BiasScores,
    #[serde(flatten)]
    pub subject: Biasable,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
