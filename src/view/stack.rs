use std::slice::Iter;

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use super::config::{StackConfig, DEFAULT_STACK_NAME};
use super::depth::{Count, Depth};
use super::presence::Presence;

/// LIFO stack of opaque view descriptors.
///
/// Every edge case answers with `None` instead of an error: pushing an
/// absent item, popping or peeking an empty stack.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct ViewStack<T> {
    name: String,
    inner: Vec<T>,
    depth: Depth,
}

impl<T> Default for ViewStack<T> {
    fn default() -> Self {
        Self {
            name: DEFAULT_STACK_NAME.to_string(),
            inner: Vec::new(),
            depth: Depth::new(),
        }
    }
}

impl<T> ViewStack<T> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Vec::with_capacity(capacity),
            ..Default::default()
        }
    }

    pub fn from_config(config: &StackConfig) -> Self {
        Self {
            name: config.name.clone(),
            inner: Vec::with_capacity(config.initial_capacity),
            depth: Depth::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Removes and returns the top item.
    pub fn pop(&mut self) -> Option<T> {
        let item = match self.inner.pop() {
            Some(item) => item,
            None => {
                debug!("{}: pop on empty stack", self.name);
                return None;
            }
        };
        let depth = self.depth.dec();
        if depth < 0 {
            warn!("{}: depth counter went negative ({})", self.name, depth);
        }
        trace!("{}: pop, depth {}", self.name, depth);
        Some(item)
    }

    /// Borrows the top item.
    pub fn current_ref(&self) -> Option<&T> {
        self.inner.last()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn depth(&self) -> Count {
        self.depth.get()
    }

    /// Host-side access to the depth counter. Adjusting it does not touch
    /// the items.
    pub fn depth_mut(&mut self) -> &mut Depth {
        &mut self.depth
    }

    /// Items from bottom to top.
    pub fn iter(&self) -> Iter<'_, T> {
        self.inner.iter()
    }

    /// Drops every item, counting each one as a pop.
    pub fn clear(&mut self) {
        let dropped = self.inner.len() as Count;
        self.inner.clear();
        let depth = self.depth.sub(dropped);
        trace!("{}: cleared {} items, depth {}", self.name, dropped, depth);
    }
}

impl<T: Presence + Clone> ViewStack<T> {
    /// Pushes `item` and hands it back, or returns `None` without touching
    /// the stack when `item` is absent.
    pub fn push(&mut self, item: T) -> Option<T> {
        if !item.is_present() {
            debug!("{}: ignoring push of absent item", self.name);
            return None;
        }
        self.push_item(item)
    }
}

impl<T: Clone> ViewStack<T> {
    /// Pushes the item inside `item`, or returns `None` when there is none.
    /// Unlike `push`, `T` needs no `Presence` impl.
    pub fn push_opt(&mut self, item: Option<T>) -> Option<T> {
        match item {
            Some(item) => self.push_item(item),
            None => {
                debug!("{}: ignoring push of absent item", self.name);
                None
            }
        }
    }

    fn push_item(&mut self, item: T) -> Option<T> {
        self.inner.push(item.clone());
        let depth = self.depth.inc();
        trace!("{}: push, depth {}", self.name, depth);
        Some(item)
    }

    /// Returns a copy of the top item without removing it.
    pub fn current(&self) -> Option<T> {
        self.inner.last().cloned()
    }
}

impl<'a, T> IntoIterator for &'a ViewStack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
