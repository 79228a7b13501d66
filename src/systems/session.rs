//! Console session over a shape inventory
//!
//! Runs the menu loop: add, remove by index, find by index, list, exit.
//! All prompting and parsing happens here; the inventory itself only ever
//! sees validated shapes and plain indices.

use std::io::{self, BufRead, Write};

use geoshelf_core::{ShapeClass, ShapeKind, ShapeList, ShapeTemplate};

use crate::config::{AppConfig, ReplConfig};
use crate::input::{DimensionInput, IndexInput, InputMapper, MenuAction};
use super::Console;

fn dimension_label(kind: ShapeKind) -> &'static str {
    if kind.class() == ShapeClass::PLANAR {
        "2D"
    } else {
        "3D"
    }
}

/// Whether the menu loop keeps going
enum Flow {
    Continue,
    Stop,
}

/// Interactive inventory session
///
/// Generic over its input and output so tests can script a session with
/// in-memory buffers.
pub struct Session<R, W> {
    console: Console<R, W>,
    shapes: ShapeList,
    repl: ReplConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with an empty inventory and default messages
    pub fn new(input: R, output: W) -> Self {
        Self {
            console: Console::new(input, output),
            shapes: ShapeList::new(),
            repl: ReplConfig::default(),
        }
    }

    /// Apply configuration: session messages and seed shapes
    ///
    /// Seed templates that fail validation are logged and skipped.
    pub fn with_config(mut self, config: &AppConfig) -> Self {
        self.repl = config.repl.clone();
        for template in &config.inventory.seed {
            match template.build() {
                Ok(shape) => {
                    self.shapes.append(shape);
                }
                Err(e) => log::warn!("Skipping seed {}: {}", template.kind(), e),
            }
        }
        log::info!("Inventory seeded with {} shapes", self.shapes.len());
        self
    }

    /// Get the inventory
    pub fn shapes(&self) -> &ShapeList {
        &self.shapes
    }

    /// Consume the session, returning the output
    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    /// Run the menu loop until the user exits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        self.console.say(&self.repl.welcome)?;

        loop {
            self.print_menu()?;
            let Some(line) = self.console.ask("Your choice: ")? else {
                log::debug!("Input closed, ending session");
                return Ok(());
            };

            let flow = match InputMapper::map_menu(&line) {
                Some(MenuAction::Add) => self.add_shape()?,
                Some(MenuAction::Remove) => self.remove_shape()?,
                Some(MenuAction::Find) => self.find_shape()?,
                Some(MenuAction::List) => self.list_shapes()?,
                Some(MenuAction::Exit) => {
                    self.console.say(&self.repl.farewell)?;
                    return Ok(());
                }
                None => {
                    self.console.say("Invalid choice. Please select a valid option (1-5).")?;
                    Flow::Continue
                }
            };

            if let Flow::Stop = flow {
                return Ok(());
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        self.console.say("\nPlease choose an option:")?;
        self.console.say("1. Add Shape")?;
        self.console.say("2. Remove Shape by Index")?;
        self.console.say("3. Find Shape by Index")?;
        self.console.say("4. List All Shapes")?;
        self.console.say("5. Exit")
    }

    fn add_shape(&mut self) -> io::Result<Flow> {
        self.console.say("\nChoose the type of shape to add:")?;
        for (i, kind) in ShapeKind::ALL.iter().enumerate() {
            self.console.say(format_args!("{}. {} ({})", i + 1, kind, dimension_label(*kind)))?;
        }

        let Some(line) = self.console.ask("Your choice: ")? else {
            return Ok(Flow::Stop);
        };
        let Some(kind) = InputMapper::map_shape_kind(&line) else {
            self.console.say("Invalid shape type selected.")?;
            return Ok(Flow::Continue);
        };

        self.console.say(format_args!("\nCreating a {}:", kind))?;
        let mut dims = Vec::with_capacity(kind.fields().len());
        for field in kind.fields() {
            match self.ask_positive(&format!("Enter {}: ", field))? {
                Some(value) => dims.push(value),
                None => return Ok(Flow::Stop),
            }
        }

        let built = ShapeTemplate::from_dimensions(kind, &dims)
            .map(|template| template.build());
        match built {
            Some(Ok(shape)) => {
                let summary = shape.describe();
                self.shapes.append(shape);
                log::info!("Added {} ({} shapes stored)", kind, self.shapes.len());
                self.console.say(format_args!("Shape added successfully: {}", summary))?;
            }
            Some(Err(e)) => {
                log::debug!("Rejected {}: {}", kind, e);
                self.console.say(format_args!("Error adding shape: {}", e))?;
            }
            None => {
                log::error!("Collected {} dimensions for {}", dims.len(), kind);
                self.console.say("Error adding shape: wrong number of dimensions")?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Re-prompt until a positive number is entered; `None` at end of input
    fn ask_positive(&mut self, prompt: &str) -> io::Result<Option<f64>> {
        loop {
            let Some(line) = self.console.ask(prompt)? else {
                return Ok(None);
            };
            match InputMapper::parse_dimension(&line) {
                DimensionInput::Positive(value) => return Ok(Some(value)),
                DimensionInput::NotPositive(_) => {
                    self.console.say("Value must be positive. Please try again.")?;
                }
                DimensionInput::Invalid => {
                    self.console.say("Invalid input. Please enter a numerical value.")?;
                }
            }
        }
    }

    /// Ask for an index; `Ok(None)` at end of input
    fn ask_index(&mut self, prompt: &str) -> io::Result<Option<IndexInput>> {
        Ok(self
            .console
            .ask(prompt)?
            .map(|line| InputMapper::parse_index(&line)))
    }

    fn remove_shape(&mut self) -> io::Result<Flow> {
        let Some(answer) = self.ask_index("\nEnter the index of the shape to remove: ")? else {
            return Ok(Flow::Stop);
        };

        let (shown, removed) = match answer {
            IndexInput::Index(index) => (index as i64, self.shapes.remove_at(index)),
            IndexInput::Negative(value) => (value, false),
            IndexInput::Invalid => {
                self.console.say("Invalid input. Please enter a valid integer index.")?;
                return Ok(Flow::Continue);
            }
        };

        if removed {
            log::info!("Removed index {} ({} shapes stored)", shown, self.shapes.len());
            self.console.say(format_args!("Shape at index {} removed successfully.", shown))?;
        } else {
            self.console.say(format_args!(
                "Failed to remove shape at index {}. Please ensure the index is valid.",
                shown
            ))?;
        }
        Ok(Flow::Continue)
    }

    fn find_shape(&mut self) -> io::Result<Flow> {
        let Some(answer) = self.ask_index("\nEnter the index of the shape to find: ")? else {
            return Ok(Flow::Stop);
        };

        let (shown, found) = match answer {
            IndexInput::Index(index) => (index as i64, self.shapes.find_at(index)),
            IndexInput::Negative(value) => (value, None),
            IndexInput::Invalid => {
                self.console.say("Invalid input. Please enter a valid integer index.")?;
                return Ok(Flow::Continue);
            }
        };

        let message = match found {
            Some(shape) => format!("Shape at index {}: {}", shown, shape.describe()),
            None => format!("No shape found at index {}.", shown),
        };
        self.console.say(message)?;
        Ok(Flow::Continue)
    }

    fn list_shapes(&mut self) -> io::Result<Flow> {
        self.console.say("\nListing all shapes:")?;
        if self.shapes.is_empty() {
            self.console.say("No shapes stored.")?;
            return Ok(Flow::Continue);
        }

        for (index, shape) in self.shapes.iter() {
            self.console.say(format_args!("Index {}: {}", index, shape))?;
        }
        Ok(Flow::Continue)
    }
}
