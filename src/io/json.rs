//! Module providing JSON IO for reaction networks and annotations
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::network::annotation::GeneAnnotation;
use crate::network::metabolite::Metabolite;
use crate::network::reaction::{AtomMapping, AtomRef, Reaction};
use crate::network::ReactionNetwork;

// region JSON Network
/// Represents a JSON serialized network, used for reading and writing
/// network snapshots
#[derive(Serialize, Deserialize)]
struct JsonNetwork {
    metabolites: Vec<JsonMetabolite>,
    reactions: Vec<JsonReaction>,
    id: Option<String>,
    version: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct JsonMetabolite {
    id: String,
    name: Option<String>,
    #[serde(default)]
    atoms: Vec<String>,
    #[serde(default)]
    xrefs: IndexMap<String, String>,
}

#[derive(Serialize, Deserialize)]
struct JsonReaction {
    id: String,
    name: Option<String>,
    #[serde(default)]
    substrates: Vec<String>,
    #[serde(default)]
    products: Vec<String>,
    #[serde(default)]
    atom_mappings: Vec<JsonAtomMapping>,
    #[serde(default)]
    enzymes: Vec<String>,
}

#[derive(Serialize, Deserialize)]
struct JsonAtomMapping {
    from: JsonAtomRef,
    to: JsonAtomRef,
}

#[derive(Serialize, Deserialize)]
struct JsonAtomRef {
    metabolite: String,
    atom: String,
}

#[derive(Serialize, Deserialize)]
struct JsonAnnotation {
    #[serde(default)]
    enzyme_genes: IndexMap<String, Vec<String>>,
    #[serde(default)]
    gene_symbols: IndexMap<String, String>,
    #[serde(default)]
    gene_xrefs: IndexMap<String, String>,
}
// endregion JSON Network

// region Conversions
impl From<JsonMetabolite> for Metabolite {
    fn from(m: JsonMetabolite) -> Self {
        Self {
            id: m.id,
            name: m.name,
            atoms: m.atoms,
            xrefs: m.xrefs,
        }
    }
}

impl From<JsonAtomRef> for AtomRef {
    fn from(a: JsonAtomRef) -> Self {
        Self {
            metabolite: a.metabolite,
            atom: a.atom,
        }
    }
}

impl From<JsonReaction> for Reaction {
    fn from(r: JsonReaction) -> Self {
        Self {
            id: r.id,
            name: r.name,
            substrates: r.substrates,
            products: r.products,
            atom_mappings: r
                .atom_mappings
                .into_iter()
                .map(|m| AtomMapping {
                    from: m.from.into(),
                    to: m.to.into(),
                })
                .collect(),
            enzymes: r.enzymes,
        }
    }
}

impl ReactionNetwork {
    /// Read a reaction network snapshot from a JSON file
    pub fn read_json<P: AsRef<Path>>(path: P) -> Result<ReactionNetwork, JsonError> {
        let network_str = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(err) => return Err(JsonError::UnableToRead(format!("{:?}", err))),
        };
        let json_network = match serde_json::from_str::<JsonNetwork>(&network_str) {
            Ok(network) => network,
            Err(err) => return Err(JsonError::UnableToParse(format!("{:?}", err))),
        };
        Ok(ReactionNetwork::from_json(json_network))
    }

    fn from_json(json_network: JsonNetwork) -> Self {
        let mut network = ReactionNetwork::new_empty();
        for m in json_network.metabolites {
            network.add_metabolite(m.into());
        }
        for r in json_network.reactions {
            network.add_reaction(r.into());
        }
        network.id = json_network.id;
        network.version = json_network.version;
        network
    }
}

impl GeneAnnotation {
    /// Read an organism annotation from a JSON file
    pub fn read_json<P: AsRef<Path>>(path: P) -> Result<GeneAnnotation, JsonError> {
        let annotation_str = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(err) => return Err(JsonError::UnableToRead(format!("{:?}", err))),
        };
        let json_annotation = match serde_json::from_str::<JsonAnnotation>(&annotation_str) {
            Ok(annotation) => annotation,
            Err(err) => return Err(JsonError::UnableToParse(format!("{:?}", err))),
        };
        Ok(GeneAnnotation {
            enzyme_genes: json_annotation.enzyme_genes,
            gene_symbols: json_annotation.gene_symbols,
            gene_xrefs: json_annotation.gene_xrefs,
        })
    }
}
// endregion Conversions

#[derive(Error, Debug)]
pub enum JsonError {
    #[error("Unable to read file due to {0}")]
    UnableToRead(String),
    #[error("Unable to parse json due to {0}")]
    UnableToParse(String),
}

#[cfg(test)]
mod json_tests {
    use super::*;

    #[test]
    fn parse_network() {
        let data = r#"{
"metabolites":[
{"id":"glc","name":"D-Glucose","atoms":["c1","c2"],"xrefs":{"hmdb":"HMDB00122"}},
{"id":"pyr","name":"Pyruvate","atoms":["c1"]}
],
"reactions":[
{"id":"R1","name":"Glycolysis lump","substrates":["glc"],"products":["pyr"],
"atom_mappings":[{"from":{"metabolite":"glc","atom":"c1"},"to":{"metabolite":"pyr","atom":"c1"}}],
"enzymes":["2.7.1.1"]}
],
"id":"toy","version":"1"
}"#;
        let json_network = serde_json::from_str::<JsonNetwork>(data).unwrap();
        let network = ReactionNetwork::from_json(json_network);
        assert_eq!(network.metabolites.len(), 2);
        assert_eq!(network.reactions.len(), 1);
        assert_eq!(network.id.as_deref(), Some("toy"));
        let glc = network.metabolite("glc").unwrap();
        assert_eq!(glc.label(), "D-Glucose");
        assert_eq!(glc.xrefs.get("hmdb").map(|s| s.as_str()), Some("HMDB00122"));
        let r1 = &network.reactions["R1"];
        assert!(r1.is_atom_mapped());
        assert_eq!(r1.atom_mappings[0].from.key(), "glc:c1");
        assert_eq!(r1.enzymes, vec!["2.7.1.1"]);
    }

    #[test]
    fn parse_network_with_defaults() {
        // Optional blocks may be left out entirely
        let data = r#"{
"metabolites":[{"id":"glc","name":null}],
"reactions":[{"id":"R1","name":null}],
"id":null,"version":null
}"#;
        let json_network = serde_json::from_str::<JsonNetwork>(data).unwrap();
        let network = ReactionNetwork::from_json(json_network);
        assert!(network.metabolite("glc").unwrap().atoms.is_empty());
        assert!(!network.reactions["R1"].is_atom_mapped());
        assert!(network.reactions["R1"].enzymes.is_empty());
    }

    #[test]
    fn parse_annotation() {
        let data = r#"{
"enzyme_genes":{"1.1.1.1":["G1","G2"]},
"gene_symbols":{"G1":"Adh1"},
"gene_xrefs":{"ENSG0001":"G1"}
}"#;
        let json_annotation = serde_json::from_str::<JsonAnnotation>(data).unwrap();
        let annotation = GeneAnnotation {
            enzyme_genes: json_annotation.enzyme_genes,
            gene_symbols: json_annotation.gene_symbols,
            gene_xrefs: json_annotation.gene_xrefs,
        };
        assert_eq!(annotation.genes_for_enzyme("1.1.1.1"), &["G1", "G2"]);
        assert_eq!(annotation.symbol("G1"), "Adh1");
        assert_eq!(annotation.canonical_gene("ENSG0001"), "G1");
    }

    #[test]
    fn missing_file() {
        match ReactionNetwork::read_json("/nonexistent/network.json") {
            Err(JsonError::UnableToRead(_)) => {}
            _ => panic!("expected UnableToRead"),
        }
    }

    #[test]
    fn malformed_json() {
        use std::io::Write;
        let path = std::env::temp_dir().join("metgraph_malformed_network.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"{\"metabolites\":[").unwrap();
        match ReactionNetwork::read_json(&path) {
            Err(JsonError::UnableToParse(_)) => {}
            _ => panic!("expected UnableToParse"),
        }
    }
}
