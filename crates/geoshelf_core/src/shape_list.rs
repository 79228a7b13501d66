//! Ordered shape collection
//!
//! The ShapeList owns every shape in the inventory. Shapes live in a slot map
//! and a separate order vector records insertion order, so positions are
//! 0-based and dense while each shape also has a [`ShapeKey`] that stays valid
//! when other shapes are removed.

use slotmap::{new_key_type, SlotMap};

use crate::{Shape, ShapeClass};

// Define generational key type for stored shapes
new_key_type! {
    /// Key to a shape in a [`ShapeList`]
    ///
    /// Unlike an index, a key keeps pointing at the same shape when earlier
    /// shapes are removed. Keys of removed shapes return None.
    pub struct ShapeKey;
}

/// Insertion-ordered, index-addressable collection of shapes
#[derive(Clone, Debug, Default)]
pub struct ShapeList {
    /// Shape storage (using generational keys)
    shapes: SlotMap<ShapeKey, Shape>,
    /// Keys in insertion order; position in this vector is the shape's index
    order: Vec<ShapeKey>,
}

impl ShapeList {
    /// Create a new empty list
    pub fn new() -> Self {
        Self {
            shapes: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    /// Create a list with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            shapes: SlotMap::with_capacity_and_key(capacity),
            order: Vec::with_capacity(capacity),
        }
    }

    /// Add a shape at the end, returning its key
    pub fn append(&mut self, shape: Shape) -> ShapeKey {
        let kind = shape.kind();
        let key = self.shapes.insert(shape);
        self.order.push(key);
        log::debug!("Appended {} at index {}", kind, self.order.len() - 1);
        key
    }

    /// Remove the shape at `index`
    ///
    /// Returns false and leaves the list untouched if `index` is out of range.
    /// Later shapes shift down by one.
    pub fn remove_at(&mut self, index: usize) -> bool {
        self.take_at(index).is_some()
    }

    /// Remove the shape at `index` and return it
    pub fn take_at(&mut self, index: usize) -> Option<Shape> {
        if index >= self.order.len() {
            log::debug!("Remove at index {} rejected (len {})", index, self.order.len());
            return None;
        }
        let key = self.order.remove(index);
        let shape = self.shapes.remove(key);
        if let Some(ref shape) = shape {
            log::debug!("Removed {} from index {}", shape.kind(), index);
        }
        shape
    }

    /// Get the shape at `index`
    pub fn find_at(&self, index: usize) -> Option<&Shape> {
        self.order.get(index).and_then(|&key| self.shapes.get(key))
    }

    /// Get a mutable reference to the shape at `index`
    ///
    /// Edits go through the shape's own validated setters.
    pub fn find_at_mut(&mut self, index: usize) -> Option<&mut Shape> {
        let key = *self.order.get(index)?;
        self.shapes.get_mut(key)
    }

    /// Get a shape by key
    pub fn get(&self, key: ShapeKey) -> Option<&Shape> {
        self.shapes.get(key)
    }

    /// Get a mutable shape by key
    pub fn get_mut(&mut self, key: ShapeKey) -> Option<&mut Shape> {
        self.shapes.get_mut(key)
    }

    /// Current index of the shape with this key
    pub fn index_of(&self, key: ShapeKey) -> Option<usize> {
        if !self.shapes.contains_key(key) {
            return None;
        }
        self.order.iter().position(|&k| k == key)
    }

    /// Get the number of shapes
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the list is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Remove all shapes
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.order.clear();
    }

    /// Iterate over (index, shape) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Shape)> + '_ {
        self.order
            .iter()
            .enumerate()
            .filter_map(move |(i, &key)| self.shapes.get(key).map(|shape| (i, shape)))
    }

    /// Iterate over shapes whose class intersects `class`, keeping list indices
    pub fn iter_class(&self, class: ShapeClass) -> impl Iterator<Item = (usize, &Shape)> + '_ {
        self.iter().filter(move |(_, shape)| class.intersects(shape.class()))
    }

    /// Iterate over (key, shape) pairs in insertion order
    pub fn iter_with_keys(&self) -> impl Iterator<Item = (ShapeKey, &Shape)> + '_ {
        self.order
            .iter()
            .filter_map(move |&key| self.shapes.get(key).map(|shape| (key, shape)))
    }
}

impl Extend<Shape> for ShapeList {
    fn extend<T: IntoIterator<Item = Shape>>(&mut self, iter: T) {
        for shape in iter {
            self.append(shape);
        }
    }
}

impl FromIterator<Shape> for ShapeList {
    fn from_iter<T: IntoIterator<Item = Shape>>(iter: T) -> Self {
        let mut list = ShapeList::new();
        list.extend(iter);
        list
    }
}
