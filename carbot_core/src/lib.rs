#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod book;
pub mod normalize;
pub mod pattern;
pub mod rules;

pub use book::{Attribute, Lookup, ModelRecord, SpecBook};
pub use normalize::tokenize;
pub use pattern::{Template, Token};
pub use rules::{Dispatch, Rule, RuleSet};
