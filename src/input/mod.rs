//! Input handling module
//!
//! Provides input mapping from raw console lines to semantic actions and values.

mod input_mapper;

pub use input_mapper::{InputMapper, MenuAction, IndexInput, DimensionInput};
