//! Core rust implementation of metgraph, a crate for constructing and scoring
//! metabolic graphs ahead of active-module detection.
//!
//! The pipeline is a synchronous, side-effect-free chain: a read-only
//! [`network::ReactionNetwork`] plus organism annotation and differential
//! tables is joined into a [`graph::MetabolicGraph`], scored into a
//! [`scoring::ScoredGraph`], and handed to an external combinatorial solver
//! behind the [`module::ModuleSolver`] trait. The returned [`module::Module`]
//! is terminal and only consumed by exporters.
#![allow(unused)]

pub mod configuration;
pub mod data;
pub mod graph;
pub mod io;
pub mod module;
pub mod network;
pub mod scoring;

pub use configuration::{Configuration, CONFIGURATION};
