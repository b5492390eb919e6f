//! Candidate command inspection.
//!
//! Two views of the same input string: [`validation`] gives the lenient
//! pass/fail verdict a submission form shows while the user types, and
//! [`parser`] does the strict conversion into a request template once the
//! command is accepted. [`catalogue`] is the shared table of recognized
//! option tokens.

pub mod catalogue;
pub mod parser;
pub mod validation;

pub use parser::parse;
pub use validation::validate;
