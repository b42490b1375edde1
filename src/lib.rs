pub mod api;
pub mod array_gen;
pub mod config;
pub mod data_models;
pub mod harness;
pub mod search;
pub mod stats;
