//! Nucleotide-to-protein translation of annotated coding features.
//!
//! [`Translator`] walks a sequence codon by codon, resolving each through a
//! [`CodonTranslator`] bound to one genetic code table, and collects residues,
//! diagnostics and applied fixes in a [`TranslationResult`].

pub mod codon;
pub mod codon_translator;
pub mod comparison;
pub mod diagnostic;
pub mod fixes;
pub mod result;
pub mod translator;

pub use codon::Codon;
pub use codon_translator::CodonTranslator;
pub use comparison::{TranslationComparison, equals_translation};
pub use diagnostic::Diagnostic;
pub use fixes::FixOptions;
pub use result::TranslationResult;
pub use translator::Translator;
