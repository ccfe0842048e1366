//! Process-wide default settings for graph construction and scoring
use std::sync::{LazyLock, RwLock};

pub static CONFIGURATION: LazyLock<RwLock<Configuration>> =
    LazyLock::new(|| RwLock::new(Configuration::default()));

pub struct Configuration {
    /// Score assigned to vertices and edges that carry no differential record
    pub baseline_score: f64,
    /// Whether reactions with no resolvable genes are kept by default
    pub keep_non_enzymatic: bool,
    /// Smallest p-value the scorer will distinguish; smaller values are clamped
    pub p_value_floor: f64,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            baseline_score: -0.1,
            keep_non_enzymatic: false,
            p_value_floor: 1e-300,
        }
    }
}
