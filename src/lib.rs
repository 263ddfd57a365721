//! Interactive orbit visualizer client.
//!
//! Member crates hold the parameter model, the scene transformer and the request
//! controller; this crate wires them to configuration and a line-oriented
//! presentation shell, and hosts the binaries.

pub mod logging;
pub mod settings;
pub mod shell;

pub use orbit_client as client;
pub use orbit_config as config;
pub use orbit_core as core;
pub use orbit_export as export;
pub use orbit_params as params;
pub use orbit_scene as scene;
