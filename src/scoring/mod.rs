//! Module for scoring metabolic graphs ahead of subgraph optimization

pub mod policy;

use std::fmt::{Display, Formatter};

use log::info;
use petgraph::graph::{EdgeIndex, Graph, NodeIndex};
use petgraph::Undirected;
use thiserror::Error;

use crate::data::DifferentialRecord;
use crate::graph::{EdgeData, Index, MetabolicGraph, Topology, VertexData};
use crate::scoring::policy::ScoringPolicy;

/// Significance parameter for one data type
///
/// The three states are deliberately distinct: a caller who merely says
/// nothing (`NotSupplied`) has not acknowledged that the corresponding data
/// type exists on the graph, while `Excluded` explicitly opts it out of
/// scoring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SignificanceK {
    /// The caller did not address this data type
    NotSupplied,
    /// The caller explicitly excluded this data type from scoring
    Excluded,
    /// Score this data type with the given positive k
    Supplied(f64),
}

/// Up/down regulation of a scored element, used for display on the result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl From<&DifferentialRecord> for Direction {
    fn from(record: &DifferentialRecord) -> Self {
        if record.is_up() {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

/// Scored vertex payload
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredVertexData {
    pub vertex: VertexData,
    pub score: f64,
    /// Present only when a record contributed to the score
    pub direction: Option<Direction>,
}

/// Scored edge payload
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredEdgeData {
    pub edge: EdgeData,
    pub score: f64,
    /// Present only when a record contributed to the score
    pub direction: Option<Direction>,
}

/// Underlying petgraph structure of a scored graph
pub type ScoredNetGraph = Graph<ScoredVertexData, ScoredEdgeData, Undirected, Index>;

/// A metabolic graph with a numeric score on every vertex and edge
///
/// Same topology as the input graph; scoring never adds or removes elements.
#[derive(Debug, Clone)]
pub struct ScoredGraph {
    pub(crate) graph: ScoredNetGraph,
    pub(crate) topology: Topology,
}

impl ScoredGraph {
    /// Score every element of `graph`
    ///
    /// Elements with an attached record are scored through `policy` with the
    /// k of their data type; elements without a record (and elements whose
    /// data type is `Excluded`) receive the policy's uniform baseline.
    ///
    /// # Errors
    /// - [`ScoringError::MissingParameter`] when the graph carries records of
    ///   a data type whose k is `NotSupplied`
    /// - [`ScoringError::InvalidK`] when a supplied k is not a positive,
    ///   finite number
    pub fn score(
        graph: &MetabolicGraph,
        k_gene: SignificanceK,
        k_met: SignificanceK,
        policy: &dyn ScoringPolicy,
    ) -> Result<ScoredGraph, ScoringError> {
        let k_gene = check_parameter(DataKind::Gene, k_gene, graph.has_gene_records())?;
        let k_met = check_parameter(DataKind::Metabolite, k_met, graph.has_metabolite_records())?;

        let scored = graph.graph().map(
            |_, vertex| {
                let (score, direction) = score_element(vertex.record.as_ref(), k_met, policy);
                ScoredVertexData {
                    vertex: vertex.clone(),
                    score,
                    direction,
                }
            },
            |_, edge| {
                let (score, direction) = score_element(edge.record.as_ref(), k_gene, policy);
                ScoredEdgeData {
                    edge: edge.clone(),
                    score,
                    direction,
                }
            },
        );

        info!(
            "scored {} graph: {} vertices, {} edges",
            graph.topology(),
            scored.node_count(),
            scored.edge_count()
        );

        Ok(ScoredGraph {
            graph: scored,
            topology: graph.topology(),
        })
    }

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
    pub fn graph(&self) -> &ScoredNetGraph {
        &self.graph
    }

    pub fn vertex(&self, index: NodeIndex<Index>) -> &ScoredVertexData {
        &self.graph[index]
    }

    pub fn edge(&self, index: EdgeIndex<Index>) -> &ScoredEdgeData {
        &self.graph[index]
    }

    /// Sum of all vertex and edge scores
    pub fn total_score(&self) -> f64 {
        let vertices: f64 = self
            .graph
            .node_indices()
            .map(|v| self.graph[v].score)
            .sum();
        let edges: f64 = self.graph.edge_indices().map(|e| self.graph[e].score).sum();
        vertices + edges
    }

    pub(crate) fn contains_vertex(&self, index: NodeIndex<Index>) -> bool {
        index.index() < self.graph.node_count()
    }

    pub(crate) fn contains_edge(&self, index: EdgeIndex<Index>) -> bool {
        index.index() < self.graph.edge_count()
    }
}

/// Effective k for one data type: None means "baseline everything"
fn check_parameter(
    kind: DataKind,
    k: SignificanceK,
    has_records: bool,
) -> Result<Option<f64>, ScoringError> {
    match k {
        SignificanceK::NotSupplied => {
            if has_records {
                Err(ScoringError::MissingParameter(kind))
            } else {
                Ok(None)
            }
        }
        SignificanceK::Excluded => Ok(None),
        SignificanceK::Supplied(value) => {
            if value.is_finite() && value > 0.0 {
                Ok(Some(value))
            } else {
                Err(ScoringError::InvalidK(value))
            }
        }
    }
}

fn score_element(
    record: Option<&DifferentialRecord>,
    k: Option<f64>,
    policy: &dyn ScoringPolicy,
) -> (f64, Option<Direction>) {
    match (record, k) {
        (Some(record), Some(k)) => (policy.score_record(record, k), Some(record.into())),
        _ => (policy.baseline(), None),
    }
}

/// Which kind of differential data a parameter refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataKind {
    Gene,
    Metabolite,
}

impl Display for DataKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DataKind::Gene => write!(f, "gene"),
            DataKind::Metabolite => write!(f, "metabolite"),
        }
    }
}

/// Errors raised during scoring
#[derive(Error, Debug)]
pub enum ScoringError {
    /// The graph carries records of a data type the caller did not address;
    /// pass `SignificanceK::Excluded` to acknowledge the exclusion
    #[error("graph carries {0} records but no {0} significance parameter was supplied")]
    MissingParameter(DataKind),
    /// A supplied significance parameter is not a positive, finite number
    #[error("significance parameter must be positive and finite, got {0}")]
    InvalidK(f64),
}
