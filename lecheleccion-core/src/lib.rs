//! lecheleccion-core: data model for the lecheleccion bias API
//!
//! Articles, their political-bias scores and users are owned by an external
//! system of record. This crate only describes their shape and the JSON
//! contract the HTTP layer serves (camelCase field names throughout).

pub mod article;
pub mod bias;
pub mod envelope;
pub mod user;

pub use article::{Article, ARTICLE_LIST_LIMIT};
pub use bias::{BiasMeta, BiasScores, Biasable};
pub use envelope::{ArticlesEnvelope, UsersEnvelope};
pub use user::User;
