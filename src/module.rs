//! Result modules returned by external subgraph solvers
//!
//! A module is a connected subset of a scored graph's vertices and edges,
//! maximizing total score. Solving itself happens in an external collaborator
//! implementing [`ModuleSolver`]; this crate only validates structural
//! containment of the returned subset and exposes it for export.

use petgraph::graph::{EdgeIndex, NodeIndex};
use thiserror::Error;

use crate::graph::Index;
use crate::scoring::ScoredGraph;

/// A validated subgraph of a scored graph, terminal output of the pipeline
#[derive(Debug, Clone)]
pub struct Module {
    vertices: Vec<NodeIndex<Index>>,
    edges: Vec<EdgeIndex<Index>>,
}

impl Module {
    /// Wrap a solver result, checking structural containment
    ///
    /// Every vertex and edge must exist in `graph`, and every listed edge's
    /// endpoints must be listed vertices. Connectivity is the solver's claim
    /// and is not re-checked here.
    pub fn from_solver_result(
        graph: &ScoredGraph,
        vertices: Vec<NodeIndex<Index>>,
        edges: Vec<EdgeIndex<Index>>,
    ) -> Result<Module, ModuleError> {
        for &vertex in &vertices {
            if !graph.contains_vertex(vertex) {
                return Err(ModuleError::NotInGraph {
                    element: format!("vertex {}", vertex.index()),
                });
            }
        }
        for &edge in &edges {
            if !graph.contains_edge(edge) {
                return Err(ModuleError::NotInGraph {
                    element: format!("edge {}", edge.index()),
                });
            }
            let (a, b) = graph
                .graph()
                .edge_endpoints(edge)
                .expect("edge index checked above");
            if !vertices.contains(&a) || !vertices.contains(&b) {
                return Err(ModuleError::DanglingEdge {
                    reaction: graph.edge(edge).edge.reaction.clone(),
                });
            }
        }
        Ok(Module { vertices, edges })
    }

    pub fn vertices(&self) -> &[NodeIndex<Index>] {
        &self.vertices
    }

    pub fn edges(&self) -> &[EdgeIndex<Index>] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Total score of the module's elements in `graph`
    pub fn score(&self, graph: &ScoredGraph) -> f64 {
        let vertices: f64 = self.vertices.iter().map(|&v| graph.vertex(v).score).sum();
        let edges: f64 = self.edges.iter().map(|&e| graph.edge(e).score).sum();
        vertices + edges
    }

    /// Vertex ids of the module, in solver order, for downstream exporters
    pub fn vertex_ids<'a>(&self, graph: &'a ScoredGraph) -> Vec<&'a str> {
        self.vertices
            .iter()
            .map(|&v| graph.vertex(v).vertex.id.as_str())
            .collect()
    }
}

/// Seam implemented by external subgraph solvers
///
/// A solver consumes an immutable scored graph and returns an induced
/// connected subgraph maximizing total score. Both heuristic and exact
/// implementations fit behind this trait.
pub trait ModuleSolver {
    fn solve(&self, graph: &ScoredGraph) -> Result<Module, SolverFailure>;
}

/// Failure reported by an external solver
#[derive(Error, Debug)]
#[error("solver failed: {0}")]
pub struct SolverFailure(pub String);

/// Errors raised while validating a solver result
#[derive(Error, Debug)]
pub enum ModuleError {
    /// The solver returned an element outside the scored graph
    #[error("solver result contains {element} not present in the scored graph")]
    NotInGraph { element: String },
    /// The solver returned an edge whose endpoint is not in the module
    #[error("solver result contains edge for reaction '{reaction}' with an endpoint outside the module")]
    DanglingEdge { reaction: String },
}
