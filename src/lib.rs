//! ribos: genetic-code translation of annotated coding features.
//!
//! Sequences are translated under NCBI genetic code tables with support for
//! IUPAC ambiguity consensus, `transl_except` and `codon` overrides, partial
//! features and opt-in auto-fixes.

pub mod error;

pub mod amino_acid;
pub mod cli;
pub mod config;
pub mod exception;
pub mod fasta;
pub mod feature;
pub mod genetic_code;
pub mod iupac;
pub mod translation;

pub use error::Error;
pub use feature::{Feature, FeatureAttributes};
pub use genetic_code::{GeneticCodeTable, GeneticCodeTableRegistry};
pub use translation::{TranslationResult, Translator};
