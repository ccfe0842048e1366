//! Module providing the MetabolicGraph struct and its construction
//!
//! A metabolic graph is derived once from a fixed network + annotation + data
//! snapshot and is immutable afterwards; scoring consumes it without changing
//! its topology.

pub mod build;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use indexmap::IndexMap;
use petgraph::graph::{EdgeIndex, Graph, NodeIndex};
use petgraph::Undirected;
use thiserror::Error;

use crate::data::DifferentialRecord;

pub(crate) type Index = u32;

/// Underlying petgraph structure of a metabolic graph
pub type NetGraph = Graph<VertexData, EdgeData, Undirected, Index>;

/// Vertex granularity of the constructed graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// One vertex per atom entity, edges are atom transitions within reactions
    Atoms,
    /// One vertex per metabolite, edges connect substrates to products
    Metabolites,
}

impl Display for Topology {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Topology::Atoms => write!(f, "atoms"),
            Topology::Metabolites => write!(f, "metabolites"),
        }
    }
}

impl FromStr for Topology {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "atoms" => Ok(Topology::Atoms),
            "metabolites" => Ok(Topology::Metabolites),
            other => Err(GraphError::InvalidTopology(other.to_string())),
        }
    }
}

/// Payload attached to each graph vertex
#[derive(Debug, Clone, PartialEq)]
pub struct VertexData {
    /// Unique vertex id: "{metabolite}:{atom}" under atom topology, the
    /// metabolite id otherwise
    pub id: String,
    /// Human-readable label resolved from metabolite annotation
    pub label: String,
    /// Metabolite the vertex belongs to
    pub metabolite: String,
    /// Differential record joined by metabolite identifier, absent when the
    /// tables carry no row for this metabolite
    pub record: Option<DifferentialRecord>,
}

/// Payload attached to each graph edge
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeData {
    /// Reaction the edge represents
    pub reaction: String,
    /// Human-readable label of the reaction
    pub label: String,
    /// Genes resolved for the reaction, annotation order first then extras
    pub genes: Vec<String>,
    /// The gene whose differential record is attached, when any matched
    pub gene: Option<String>,
    /// Differential record of the best-matching gene, absent when none matched
    pub record: Option<DifferentialRecord>,
}

/// A typed, labeled, weighted graph derived from a reaction network
#[derive(Debug, Clone)]
pub struct MetabolicGraph {
    pub(crate) graph: NetGraph,
    pub(crate) topology: Topology,
    pub(crate) vertex_ids: IndexMap<String, NodeIndex<Index>>,
}

impl MetabolicGraph {
    /// The topology the graph was built under
    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Borrow the underlying petgraph structure
    pub fn graph(&self) -> &NetGraph {
        &self.graph
    }

    pub fn vertex(&self, index: NodeIndex<Index>) -> &VertexData {
        &self.graph[index]
    }

    pub fn edge(&self, index: EdgeIndex<Index>) -> &EdgeData {
        &self.graph[index]
    }

    /// Look up a vertex by its id
    pub fn find_vertex(&self, id: &str) -> Option<NodeIndex<Index>> {
        self.vertex_ids.get(id).copied()
    }

    /// Whether any edge carries a gene differential record
    pub fn has_gene_records(&self) -> bool {
        self.graph
            .edge_indices()
            .any(|e| self.graph[e].record.is_some())
    }

    /// Whether any vertex carries a metabolite differential record
    pub fn has_metabolite_records(&self) -> bool {
        self.graph
            .node_indices()
            .any(|v| self.graph[v].record.is_some())
    }
}

/// Errors raised during graph construction
#[derive(Error, Debug)]
pub enum GraphError {
    /// The topology string is neither "atoms" nor "metabolites"
    #[error("unrecognized topology '{0}', expected 'atoms' or 'metabolites'")]
    InvalidTopology(String),
    /// After filtering, no edges remain
    #[error("no edges remain after filtering; relax inputs or set keep_non_enzymatic")]
    EmptyGraph,
    /// An atom mapping references an atom its metabolite does not declare
    #[error("reaction '{reaction}' maps atom '{atom}' absent from metabolite '{metabolite}'")]
    InconsistentMapping {
        reaction: String,
        metabolite: String,
        atom: String,
    },
    /// A reaction references a metabolite missing from the network
    #[error("reaction '{reaction}' references unknown metabolite '{metabolite}'")]
    UnknownMetabolite { reaction: String, metabolite: String },
}
