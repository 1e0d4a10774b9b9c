//! Airplane: steer a bomber over a column of approaching tanks and bomb them
//! before they roll past the bottom of the screen.
//!
//! The library holds the simulation (`entities`, `compute`), the asset and
//! drawing ports (`assets`, `render`), and runtime configuration. The
//! `airplane` binary supplies a terminal host.

pub mod assets;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod render;
pub mod tuning;
