//! Feature attributes that configure a translation.

use std::collections::BTreeMap;

/// Feature types whose translation carries no stop codon.
const PEPTIDE_TYPES: [&str; 4] = ["mat_peptide", "sig_peptide", "transit_peptide", "propeptide"];

/// Read access to a feature's type and attributes.
///
/// Implemented by whatever annotation model the caller uses. The provided methods
/// derive translation flags from NCBI GFF3 attribute conventions.
pub trait FeatureAttributes {
    /// Feature type, e.g. `CDS` or `mat_peptide`.
    fn feature_type(&self) -> &str;

    /// First value of an attribute.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Every value of a repeatable attribute, in order.
    fn attribute_list(&self, name: &str) -> Vec<&str>;

    fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// `pseudo` or `pseudogene` present.
    fn is_pseudo(&self) -> bool {
        self.has_attribute("pseudo") || self.has_attribute("pseudogene")
    }

    /// `partial=true` without `start_range`/`end_range` marks both ends partial.
    fn is_five_prime_partial(&self) -> bool {
        self.has_attribute("start_range") || self.is_partial_without_ranges()
    }

    fn is_three_prime_partial(&self) -> bool {
        self.has_attribute("end_range") || self.is_partial_without_ranges()
    }

    fn is_partial_without_ranges(&self) -> bool {
        self.attribute("partial")
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"))
            && !self.has_attribute("start_range")
            && !self.has_attribute("end_range")
    }

    fn is_peptide(&self) -> bool {
        PEPTIDE_TYPES.contains(&self.feature_type())
    }

    /// Annotated biological exception: internal stop codons are expected.
    fn has_exception(&self) -> bool {
        self.has_attribute("exception") || self.has_attribute("ribosomal_slippage")
    }
}

/// A minimal feature: a type and multi-valued attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feature {
    feature_type: String,
    attributes: BTreeMap<String, Vec<String>>,
}

impl Feature {
    #[must_use]
    pub fn new(feature_type: &str) -> Self {
        Self {
            feature_type: feature_type.to_string(),
            attributes: BTreeMap::new(),
        }
    }

    /// Append a value to an attribute.
    pub fn add_attribute(&mut self, name: &str, value: &str) {
        self.attributes
            .entry(name.to_string())
            .or_default()
            .push(value.to_string());
    }

    #[must_use]
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.add_attribute(name, value);
        self
    }

    /// Add a valueless attribute such as `pseudo`.
    #[must_use]
    pub fn with_flag(self, name: &str) -> Self {
        self.with_attribute(name, "")
    }
}

impl FeatureAttributes for Feature {
    fn feature_type(&self) -> &str {
        &self.feature_type
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    fn attribute_list(&self, name: &str) -> Vec<&str> {
        self.attributes
            .get(name)
            .map(|values| values.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }
}
