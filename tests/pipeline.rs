//! End-to-end pipeline test on a small hand-built network

use indexmap::IndexMap;
use metgraph::data::{DifferentialRecord, DifferentialTable};
use metgraph::graph::build::BuildOptionsBuilder;
use metgraph::graph::{GraphError, MetabolicGraph, Topology};
use metgraph::module::{Module, ModuleSolver, SolverFailure};
use metgraph::network::annotation::GeneAnnotation;
use metgraph::network::metabolite::MetaboliteBuilder;
use metgraph::network::reaction::{AtomMapping, AtomRef, ReactionBuilder};
use metgraph::network::ReactionNetwork;
use metgraph::scoring::policy::LogPValueScore;
use metgraph::scoring::{ScoredGraph, SignificanceK};

/// Trivial solver taking the whole graph as the module
struct WholeGraphSolver;

impl ModuleSolver for WholeGraphSolver {
    fn solve(&self, graph: &ScoredGraph) -> Result<Module, SolverFailure> {
        let vertices: Vec<_> = graph.graph().node_indices().collect();
        let edges: Vec<_> = graph.graph().edge_indices().collect();
        Module::from_solver_result(graph, vertices, edges)
            .map_err(|err| SolverFailure(err.to_string()))
    }
}

/// Four metabolites in a chain, three reactions; R3 has no enzyme
fn setup_network() -> ReactionNetwork {
    let mut network = ReactionNetwork::new_empty();
    for (id, name) in [
        ("glc", "D-Glucose"),
        ("g6p", "Glucose 6-phosphate"),
        ("f6p", "Fructose 6-phosphate"),
        ("fbp", "Fructose 1,6-bisphosphate"),
    ] {
        let mut met = MetaboliteBuilder::default()
            .id(id.to_string())
            .name(Some(name.to_string()))
            .atoms(vec!["c1".to_string()])
            .build()
            .unwrap();
        met.xrefs.insert("hmdb".to_string(), format!("HMDB_{}", id));
        network.add_metabolite(met);
    }
    for (rxn, from, to, enzyme) in [
        ("R1", "glc", "g6p", Some("2.7.1.1")),
        ("R2", "g6p", "f6p", Some("5.3.1.9")),
        ("R3", "f6p", "fbp", None),
    ] {
        network.add_reaction(
            ReactionBuilder::default()
                .id(rxn.to_string())
                .substrates(vec![from.to_string()])
                .products(vec![to.to_string()])
                .atom_mappings(vec![AtomMapping {
                    from: AtomRef::new(from, "c1"),
                    to: AtomRef::new(to, "c1"),
                }])
                .enzymes(enzyme.map(|e| vec![e.to_string()]).unwrap_or_default())
                .build()
                .unwrap(),
        );
    }
    network
}

fn setup_annotation() -> GeneAnnotation {
    let mut annotation = GeneAnnotation::new_empty();
    annotation
        .enzyme_genes
        .insert("2.7.1.1".to_string(), vec!["HK1".to_string()]);
    annotation
        .enzyme_genes
        .insert("5.3.1.9".to_string(), vec!["GPI".to_string()]);
    annotation
        .gene_symbols
        .insert("HK1".to_string(), "Hexokinase 1".to_string());
    annotation
}

#[test]
fn build_score_solve() {
    let network = setup_network();
    let annotation = setup_annotation();

    let mut gene_diff = DifferentialTable::new();
    gene_diff.insert("HK1", DifferentialRecord::new(2.3, 0.002));
    gene_diff.insert("GPI", DifferentialRecord::new(-0.4, 0.6));
    gene_diff.insert("UNRELATED", DifferentialRecord::new(5.0, 0.0001));

    let mut met_diff = DifferentialTable::new();
    met_diff.insert("HMDB_g6p", DifferentialRecord::new(1.1, 0.01));

    let options = BuildOptionsBuilder::default()
        .topology(Topology::Atoms)
        .keep_non_enzymatic(false)
        .build()
        .unwrap();
    let graph = MetabolicGraph::build(
        &network,
        &annotation,
        Some(&gene_diff),
        Some(&met_diff),
        &options,
    )
    .unwrap();

    // R3 dropped, atoms of glc/g6p/f6p remain
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.vertex_count(), 3);
    // Unmatched table rows are ignored, unmatched vertices carry no record
    let g6p = graph.find_vertex("g6p:c1").unwrap();
    assert!(graph.vertex(g6p).record.is_some());
    let glc = graph.find_vertex("glc:c1").unwrap();
    assert!(graph.vertex(glc).record.is_none());

    let policy = LogPValueScore::default();
    let scored = ScoredGraph::score(
        &graph,
        SignificanceK::Supplied(25.0),
        SignificanceK::Supplied(25.0),
        &policy,
    )
    .unwrap();
    assert_eq!(scored.vertex_count(), graph.vertex_count());
    assert_eq!(scored.edge_count(), graph.edge_count());

    let module = WholeGraphSolver.solve(&scored).unwrap();
    assert_eq!(module.vertex_count(), 3);
    assert_eq!(module.edge_count(), 2);
    assert_eq!(module.score(&scored), scored.total_score());
}

#[test]
fn larger_k_never_shrinks_total_score() {
    let network = setup_network();
    let annotation = setup_annotation();
    let mut gene_diff = DifferentialTable::new();
    gene_diff.insert("HK1", DifferentialRecord::new(2.3, 0.002));
    gene_diff.insert("GPI", DifferentialRecord::new(-0.4, 0.6));
    let options = BuildOptionsBuilder::default()
        .topology(Topology::Atoms)
        .build()
        .unwrap();
    let graph =
        MetabolicGraph::build(&network, &annotation, Some(&gene_diff), None, &options).unwrap();
    let policy = LogPValueScore::default();
    let total_at = |k: f64| {
        ScoredGraph::score(
            &graph,
            SignificanceK::Supplied(k),
            SignificanceK::NotSupplied,
            &policy,
        )
        .unwrap()
        .total_score()
    };
    assert!(total_at(100.0) >= total_at(25.0));
    assert!(total_at(25.0) >= total_at(5.0));
}

#[test]
fn topology_string_round_trip() {
    let topology: Topology = "metabolites".parse().unwrap();
    assert_eq!(topology, Topology::Metabolites);
    assert!(matches!(
        "reactions".parse::<Topology>(),
        Err(GraphError::InvalidTopology(_))
    ));
}

#[test]
fn metabolite_topology_connects_substrates_to_products() {
    let network = setup_network();
    let annotation = setup_annotation();
    let options = BuildOptionsBuilder::default()
        .topology(Topology::Metabolites)
        .keep_non_enzymatic(true)
        .build()
        .unwrap();
    let graph = MetabolicGraph::build(&network, &annotation, None, None, &options).unwrap();
    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.edge_count(), 3);
    let glc = graph.find_vertex("glc").unwrap();
    assert_eq!(graph.vertex(glc).label, "D-Glucose");
}

#[test]
fn extra_gene_map_broadens_coverage() {
    let network = setup_network();
    let annotation = setup_annotation();
    let mut extra = IndexMap::new();
    extra.insert("R3".to_string(), vec!["PFKL".to_string()]);
    let options = BuildOptionsBuilder::default()
        .topology(Topology::Atoms)
        .extra_gene_map(Some(extra))
        .keep_non_enzymatic(false)
        .build()
        .unwrap();
    let graph = MetabolicGraph::build(&network, &annotation, None, None, &options).unwrap();
    assert_eq!(graph.edge_count(), 3);
}
