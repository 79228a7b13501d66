//! geoshelf - console inventory for 2D and 3D shapes
//!
//! The library half of the `geoshelf` binary: configuration loading, console
//! input mapping, and the interactive session. Shape geometry lives in
//! `geoshelf_math` and the inventory types in `geoshelf_core`.

pub mod config;
pub mod input;
pub mod systems;
