//! Module for reading networks, annotations, and differential tables
pub mod json;
pub mod tables;
