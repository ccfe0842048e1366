//! This module provides the Metabolite struct representing a network metabolite

use std::hash::Hash;

use derive_builder::Builder;
use indexmap::IndexMap;

/// Represents a metabolite in the reaction network
#[derive(Builder, Debug, Clone)]
pub struct Metabolite {
    /// Used to identify the metabolite (must be unique)
    pub id: String,
    /// Human Readable name of the metabolite
    #[builder(default = "None")]
    pub name: Option<String>,
    /// Identifiers of the atoms making up the metabolite's mapped skeleton
    ///
    /// Only metabolites taking part in atom-mapped reactions need atoms; an
    /// empty list is valid for metabolites used under metabolite topology only.
    #[builder(default = "Vec::new()")]
    pub atoms: Vec<String>,
    /// Cross-references into external chemical databases
    ///
    /// An IndexMap<String, String> of {database name: external identifier}
    #[builder(default = "IndexMap::new()")]
    pub xrefs: IndexMap<String, String>,
}

impl Metabolite {
    /// Display label for the metabolite, falling back to the id when unnamed
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    /// Whether the metabolite declares the given atom
    pub fn has_atom(&self, atom: &str) -> bool {
        self.atoms.iter().any(|a| a == atom)
    }
}

impl Hash for Metabolite {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state); // Hash by id
    }
}
