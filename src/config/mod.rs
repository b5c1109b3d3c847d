// src/config/mod.rs
//! Configuration system for pokedex-vault
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{load, Config, Features, Keys, Paths, Remote};

mod app;
mod defaults;
