//! Individual transformation stages
//!
//! Each stage implements [Runnable](super::Runnable) and can be chained onto a
//! [Transform](super::Transform).

pub mod normalization;
pub mod parsing;
pub mod tokenization;

pub use normalization::CommentNormalization;
pub use parsing::Parsing;
pub use tokenization::CoreTokenization;
