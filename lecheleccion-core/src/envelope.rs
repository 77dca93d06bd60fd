//! Response envelopes
//!
//! Built per request and dropped after serialization.

use serde::{Deserialize, Serialize};

use crate::{Article, BiasScores, User};

/// `GET /api/articles` body: the article page plus the bias averages.
///
/// The averages cover the whole bias table, not just `articles`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticlesEnvelope {
    pub articles: Vec<Article>,
    #[serde(flatten)]
    pub averages: BiasScores,
}

/// `GET /api/users` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersEnvelope {
    pub index: Vec<User>,
}
