//! Module providing the ReactionNetwork struct and its annotation tables

pub mod annotation;
pub mod metabolite;
pub mod reaction;

use indexmap::IndexMap;

use crate::network::metabolite::Metabolite;
use crate::network::reaction::Reaction;

/// A reaction network with atom mappings and metabolite reference data
///
/// Networks are loaded once per analysis run and treated as read-only
/// downstream; graph construction never mutates them.
#[derive(Debug, Clone)]
pub struct ReactionNetwork {
    /// Map of reaction ids to Reaction objects
    pub reactions: IndexMap<String, Reaction>,
    /// Map of metabolite ids to Metabolite objects
    pub metabolites: IndexMap<String, Metabolite>,
    /// Id associated with the network
    pub id: Option<String>,
    /// A version identifier for the network, stored as a string
    pub version: Option<String>,
}

impl ReactionNetwork {
    pub fn new_empty() -> Self {
        ReactionNetwork {
            reactions: IndexMap::new(),
            metabolites: IndexMap::new(),
            id: None,
            version: None,
        }
    }

    /// Add a reaction to the network
    pub fn add_reaction(&mut self, reaction: Reaction) {
        let id = reaction.id.clone();
        self.reactions.insert(id, reaction);
    }

    /// Add a metabolite to the network
    pub fn add_metabolite(&mut self, metabolite: Metabolite) {
        let id = metabolite.id.clone();
        self.metabolites.insert(id, metabolite);
    }

    /// Look up a metabolite by id
    pub fn metabolite(&self, id: &str) -> Option<&Metabolite> {
        self.metabolites.get(id)
    }

    /// Display label for a metabolite id, falling back to the id itself
    pub fn metabolite_label<'a>(&'a self, id: &'a str) -> &'a str {
        self.metabolites.get(id).map(|m| m.label()).unwrap_or(id)
    }
}
