//! This module provides structs for representing reactions and their atom mappings

use std::fmt::{Display, Formatter};

use derive_builder::Builder;

/// Reference to a single atom within a metabolite
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AtomRef {
    /// Metabolite the atom belongs to
    pub metabolite: String,
    /// Atom identifier within that metabolite
    pub atom: String,
}

impl AtomRef {
    pub fn new(metabolite: &str, atom: &str) -> AtomRef {
        AtomRef {
            metabolite: metabolite.to_string(),
            atom: atom.to_string(),
        }
    }

    /// Globally unique key for the atom entity
    ///
    /// # Note:
    /// The key is "{metabolite_id}:{atom_id}"
    pub fn key(&self) -> String {
        format!("{}:{}", self.metabolite, self.atom)
    }
}

impl Display for AtomRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Correspondence between one reactant atom and one product atom of a reaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomMapping {
    pub from: AtomRef,
    pub to: AtomRef,
}

/// Represents a reaction in the network
#[derive(Builder, Debug, Clone)]
pub struct Reaction {
    /// Used to identify the reaction
    pub id: String,
    /// Human-readable reaction name
    #[builder(default = "None")]
    pub name: Option<String>,
    /// Ids of substrate metabolites
    #[builder(default = "Vec::new()")]
    pub substrates: Vec<String>,
    /// Ids of product metabolites
    #[builder(default = "Vec::new()")]
    pub products: Vec<String>,
    /// Atom transitions within the reaction
    #[builder(default = "Vec::new()")]
    pub atom_mappings: Vec<AtomMapping>,
    /// Enzyme classes catalyzing the reaction
    ///
    /// Empty for spontaneous / non-enzymatic reactions
    #[builder(default = "Vec::new()")]
    pub enzymes: Vec<String>,
}

impl Reaction {
    /// Display label for the reaction, falling back to the id when unnamed
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    /// Whether the reaction carries any atom mappings
    pub fn is_atom_mapped(&self) -> bool {
        !self.atom_mappings.is_empty()
    }
}
