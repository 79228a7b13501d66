//! Input mapping from raw console lines to semantic actions
//!
//! Maps menu selections to actions like Add, Find, Exit, and parses the
//! numeric answers to index and dimension prompts. Nothing here touches the
//! inventory; the session decides what to do with the mapped input.

use geoshelf_core::ShapeKind;

/// Actions selectable from the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Create a shape and append it (1)
    Add,
    /// Remove a shape by index (2)
    Remove,
    /// Show a shape by index (3)
    Find,
    /// List every stored shape (4)
    List,
    /// Leave the session (5)
    Exit,
}

/// Parsed answer to an index prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexInput {
    /// A non-negative index
    Index(usize),
    /// A negative integer; never a valid position
    Negative(i64),
    /// Not an integer at all
    Invalid,
}

/// Parsed answer to a dimension prompt
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DimensionInput {
    /// A strictly positive, finite number
    Positive(f64),
    /// A finite number that is zero or negative
    NotPositive(f64),
    /// Not a finite number (text, NaN, infinity)
    Invalid,
}

/// Maps raw console lines to actions and values
pub struct InputMapper;

impl InputMapper {
    /// Map a main menu selection to an action
    pub fn map_menu(line: &str) -> Option<MenuAction> {
        match line.trim() {
            "1" => Some(MenuAction::Add),
            "2" => Some(MenuAction::Remove),
            "3" => Some(MenuAction::Find),
            "4" => Some(MenuAction::List),
            "5" => Some(MenuAction::Exit),
            _ => None,
        }
    }

    /// Map a shape type selection (1-6, menu order) to a kind
    pub fn map_shape_kind(line: &str) -> Option<ShapeKind> {
        let choice: usize = line.trim().parse().ok()?;
        ShapeKind::ALL.get(choice.checked_sub(1)?).copied()
    }

    /// Parse an index answer
    pub fn parse_index(line: &str) -> IndexInput {
        match line.trim().parse::<i64>() {
            Ok(value) => match usize::try_from(value) {
                Ok(index) => IndexInput::Index(index),
                Err(_) => IndexInput::Negative(value),
            },
            Err(_) => IndexInput::Invalid,
        }
    }

    /// Parse a dimension answer
    pub fn parse_dimension(line: &str) -> DimensionInput {
        match line.trim().parse::<f64>() {
            Ok(value) if !value.is_finite() => DimensionInput::Invalid,
            Ok(value) if value > 0.0 => DimensionInput::Positive(value),
            Ok(value) => DimensionInput::NotPositive(value),
            Err(_) => DimensionInput::Invalid,
        }
    }
}
