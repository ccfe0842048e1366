//! Construction of metabolic graphs from a network, annotation, and data snapshot

use derive_builder::Builder;
use indexmap::IndexMap;
use log::{debug, info};
use petgraph::graph::NodeIndex;

use crate::configuration::CONFIGURATION;
use crate::data::{DifferentialRecord, DifferentialTable};
use crate::graph::{EdgeData, GraphError, Index, MetabolicGraph, NetGraph, Topology, VertexData};
use crate::network::annotation::GeneAnnotation;
use crate::network::reaction::Reaction;
use crate::network::ReactionNetwork;

/// Options controlling graph construction
///
/// # Examples
/// ```rust
/// use metgraph::graph::build::BuildOptionsBuilder;
/// use metgraph::graph::Topology;
/// let options = BuildOptionsBuilder::default()
///     .topology(Topology::Atoms)
///     .keep_non_enzymatic(true)
///     .build()
///     .unwrap();
/// ```
#[derive(Builder, Debug, Clone)]
pub struct BuildOptions {
    /// Vertex granularity of the constructed graph
    pub topology: Topology,
    /// Supplementary {reaction id: gene ids} table broadening gene coverage
    ///
    /// Genes listed here are appended after the genes resolved through the
    /// primary annotation, deduplicated.
    #[builder(default = "None")]
    pub extra_gene_map: Option<IndexMap<String, Vec<String>>>,
    /// Whether reactions with no resolvable genes are retained
    #[builder(default = "CONFIGURATION.read().unwrap().keep_non_enzymatic")]
    pub keep_non_enzymatic: bool,
}

impl MetabolicGraph {
    /// Build a labeled, record-carrying graph from a network snapshot
    ///
    /// For each reaction the associated genes are resolved via `annotation`
    /// (and `extra_gene_map` when supplied); reactions resolving to no genes
    /// are dropped unless `keep_non_enzymatic` is set. Differential rows that
    /// match no graph element are ignored; elements without a matching row
    /// carry no record.
    ///
    /// # Parameters
    /// - `network`: reaction network with atom mappings and metabolites
    /// - `annotation`: organism gene/enzyme annotation
    /// - `gene_diff`: differential table keyed by gene identifier, joined
    ///   onto edges (the best p-value among a reaction's genes wins)
    /// - `met_diff`: differential table keyed by metabolite identifier (or a
    ///   cross-referenced external identifier), joined onto vertices
    /// - `options`: see [`BuildOptions`]
    pub fn build(
        network: &ReactionNetwork,
        annotation: &GeneAnnotation,
        gene_diff: Option<&DifferentialTable>,
        met_diff: Option<&DifferentialTable>,
        options: &BuildOptions,
    ) -> Result<MetabolicGraph, GraphError> {
        let gene_index = index_gene_table(annotation, gene_diff);

        // The atom-mapping invariant holds network-wide, so it is checked
        // under either topology and before any reaction is filtered out
        for (_, reaction) in &network.reactions {
            verify_atom_mappings(network, reaction)?;
        }

        // Resolve genes and filter non-enzymatic reactions up front
        let mut kept: Vec<(&Reaction, Vec<String>)> = Vec::new();
        let mut dropped = 0usize;
        for (_, reaction) in &network.reactions {
            let genes = resolve_genes(reaction, annotation, options.extra_gene_map.as_ref());
            if genes.is_empty() && !options.keep_non_enzymatic {
                debug!("dropping non-enzymatic reaction '{}'", reaction.id);
                dropped += 1;
                continue;
            }
            kept.push((reaction, genes));
        }

        let mut graph = NetGraph::default();
        let mut vertex_ids: IndexMap<String, NodeIndex<Index>> = IndexMap::new();

        for (reaction, genes) in &kept {
            let best = best_gene_record(genes, &gene_index);
            let edge_data = |gene: Option<&String>, record: Option<DifferentialRecord>| EdgeData {
                reaction: reaction.id.clone(),
                label: reaction.label().to_string(),
                genes: genes.clone(),
                gene: gene.cloned(),
                record,
            };
            let (gene, record) = match &best {
                Some((g, r)) => (Some(*g), Some(*r)),
                None => (None, None),
            };
            match options.topology {
                Topology::Atoms => {
                    for mapping in &reaction.atom_mappings {
                        let from = intern_atom_vertex(
                            &mut graph,
                            &mut vertex_ids,
                            network,
                            &mapping.from.metabolite,
                            &mapping.from.key(),
                            met_diff,
                        );
                        let to = intern_atom_vertex(
                            &mut graph,
                            &mut vertex_ids,
                            network,
                            &mapping.to.metabolite,
                            &mapping.to.key(),
                            met_diff,
                        );
                        graph.add_edge(from, to, edge_data(gene, record));
                    }
                }
                Topology::Metabolites => {
                    for substrate in &reaction.substrates {
                        for product in &reaction.products {
                            // Transport-style pairs of a metabolite with
                            // itself contribute no edge
                            if substrate == product {
                                continue;
                            }
                            let a = intern_metabolite_vertex(
                                &mut graph,
                                &mut vertex_ids,
                                network,
                                substrate,
                                met_diff,
                            );
                            let b = intern_metabolite_vertex(
                                &mut graph,
                                &mut vertex_ids,
                                network,
                                product,
                                met_diff,
                            );
                            graph.add_edge(a, b, edge_data(gene, record));
                        }
                    }
                }
            }
        }

        if graph.edge_count() == 0 {
            return Err(GraphError::EmptyGraph);
        }

        info!(
            "built {} graph: {} vertices, {} edges ({} reactions kept, {} dropped)",
            options.topology,
            graph.node_count(),
            graph.edge_count(),
            kept.len(),
            dropped
        );

        Ok(MetabolicGraph {
            graph,
            topology: options.topology,
            vertex_ids,
        })
    }
}

/// Genes for a reaction: primary annotation order first, then extras, deduplicated
fn resolve_genes(
    reaction: &Reaction,
    annotation: &GeneAnnotation,
    extra_gene_map: Option<&IndexMap<String, Vec<String>>>,
) -> Vec<String> {
    let mut genes: Vec<String> = Vec::new();
    for enzyme in &reaction.enzymes {
        for gene in annotation.genes_for_enzyme(enzyme) {
            if !genes.contains(gene) {
                genes.push(gene.clone());
            }
        }
    }
    if let Some(extra) = extra_gene_map {
        if let Some(more) = extra.get(&reaction.id) {
            for gene in more {
                if !genes.contains(gene) {
                    genes.push(gene.clone());
                }
            }
        }
    }
    genes
}

/// Re-key a gene table by canonical gene id, keeping the smallest p-value
/// when several identifiers collapse onto one gene
fn index_gene_table(
    annotation: &GeneAnnotation,
    gene_diff: Option<&DifferentialTable>,
) -> IndexMap<String, DifferentialRecord> {
    let mut index: IndexMap<String, DifferentialRecord> = IndexMap::new();
    if let Some(table) = gene_diff {
        for (id, record) in table.iter() {
            let canonical = annotation.canonical_gene(id);
            match index.get(canonical) {
                Some(existing) if existing.p_value <= record.p_value => {}
                _ => {
                    index.insert(canonical.to_string(), *record);
                }
            }
        }
    }
    index
}

/// Best differential record among a reaction's genes (smallest p-value,
/// earlier gene wins ties)
fn best_gene_record<'a>(
    genes: &'a [String],
    gene_index: &IndexMap<String, DifferentialRecord>,
) -> Option<(&'a String, DifferentialRecord)> {
    let mut best: Option<(&String, DifferentialRecord)> = None;
    for gene in genes {
        if let Some(record) = gene_index.get(gene.as_str()) {
            if best.map_or(true, |(_, b)| record.p_value < b.p_value) {
                best = Some((gene, *record));
            }
        }
    }
    best
}

/// Differential record for a metabolite: direct id match first, then the
/// metabolite's external cross-references
fn metabolite_record(
    network: &ReactionNetwork,
    metabolite: &str,
    met_diff: Option<&DifferentialTable>,
) -> Option<DifferentialRecord> {
    let table = met_diff?;
    if let Some(record) = table.get(metabolite) {
        return Some(*record);
    }
    let met = network.metabolite(metabolite)?;
    for xref in met.xrefs.values() {
        if let Some(record) = table.get(xref) {
            return Some(*record);
        }
    }
    None
}

fn verify_atom_mappings(network: &ReactionNetwork, reaction: &Reaction) -> Result<(), GraphError> {
    for mapping in &reaction.atom_mappings {
        for end in [&mapping.from, &mapping.to] {
            let met = network
                .metabolite(&end.metabolite)
                .ok_or_else(|| GraphError::UnknownMetabolite {
                    reaction: reaction.id.clone(),
                    metabolite: end.metabolite.clone(),
                })?;
            if !met.has_atom(&end.atom) {
                return Err(GraphError::InconsistentMapping {
                    reaction: reaction.id.clone(),
                    metabolite: end.metabolite.clone(),
                    atom: end.atom.clone(),
                });
            }
        }
    }
    Ok(())
}

fn intern_atom_vertex(
    graph: &mut NetGraph,
    vertex_ids: &mut IndexMap<String, NodeIndex<Index>>,
    network: &ReactionNetwork,
    metabolite: &str,
    key: &str,
    met_diff: Option<&DifferentialTable>,
) -> NodeIndex<Index> {
    if let Some(&vertex) = vertex_ids.get(key) {
        return vertex;
    }
    let vertex = graph.add_node(VertexData {
        id: key.to_string(),
        label: network.metabolite_label(metabolite).to_string(),
        metabolite: metabolite.to_string(),
        record: metabolite_record(network, metabolite, met_diff),
    });
    vertex_ids.insert(key.to_string(), vertex);
    vertex
}

fn intern_metabolite_vertex(
    graph: &mut NetGraph,
    vertex_ids: &mut IndexMap<String, NodeIndex<Index>>,
    network: &ReactionNetwork,
    metabolite: &str,
    met_diff: Option<&DifferentialTable>,
) -> NodeIndex<Index> {
    if let Some(&vertex) = vertex_ids.get(metabolite) {
        return vertex;
    }
    let vertex = graph.add_node(VertexData {
        id: metabolite.to_string(),
        label: network.metabolite_label(metabolite).to_string(),
        metabolite: metabolite.to_string(),
        record: metabolite_record(network, metabolite, met_diff),
    });
    vertex_ids.insert(metabolite.to_string(), vertex);
    vertex
}
