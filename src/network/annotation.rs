//! Organism-specific gene and enzyme annotation
//!
//! Annotation objects are read-only reference data loaded once per analysis
//! run and passed explicitly into graph construction.

use indexmap::IndexMap;

/// Maps enzyme classes to genes for a single organism
#[derive(Debug, Clone, Default)]
pub struct GeneAnnotation {
    /// Map of enzyme class ids to the genes encoding them
    pub enzyme_genes: IndexMap<String, Vec<String>>,
    /// Map of gene ids to display symbols
    pub gene_symbols: IndexMap<String, String>,
    /// Map of external gene identifiers to canonical gene ids
    pub gene_xrefs: IndexMap<String, String>,
}

impl GeneAnnotation {
    pub fn new_empty() -> Self {
        GeneAnnotation::default()
    }

    /// Genes encoding the given enzyme class, empty when unannotated
    pub fn genes_for_enzyme(&self, enzyme: &str) -> &[String] {
        self.enzyme_genes
            .get(enzyme)
            .map(|genes| genes.as_slice())
            .unwrap_or(&[])
    }

    /// Display symbol for a gene, falling back to the gene id
    pub fn symbol<'a>(&'a self, gene: &'a str) -> &'a str {
        self.gene_symbols
            .get(gene)
            .map(|s| s.as_str())
            .unwrap_or(gene)
    }

    /// Resolve an identifier to its canonical gene id
    ///
    /// Identifiers that are already canonical (or unknown) pass through
    /// unchanged.
    pub fn canonical_gene<'a>(&'a self, id: &'a str) -> &'a str {
        self.gene_xrefs.get(id).map(|g| g.as_str()).unwrap_or(id)
    }
}
