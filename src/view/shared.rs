use std::sync::Arc;

use parking_lot::Mutex;

use super::config::StackConfig;
use super::depth::Count;
use super::presence::Presence;
use super::stack::ViewStack;

/// Cloneable handle to one `ViewStack` shared between threads.
///
/// Each call holds the lock for the whole operation, so items and the depth
/// counter always change together.
#[derive(Debug)]
pub struct SharedViewStack<T> {
    inner: Arc<Mutex<ViewStack<T>>>,
}

impl<T> Clone for SharedViewStack<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for SharedViewStack<T> {
    fn default() -> Self {
        Self::from_stack(ViewStack::new())
    }
}

impl<T> SharedViewStack<T> {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn from_config(config: &StackConfig) -> Self {
        Self::from_stack(ViewStack::from_config(config))
    }

    pub fn from_stack(stack: ViewStack<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(stack)),
        }
    }

    pub fn pop(&self) -> Option<T> {
        self.inner.lock().pop()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn depth(&self) -> Count {
        self.inner.lock().depth()
    }

    /// Runs `f` with exclusive access, for sequences that must not interleave
    /// with other handles.
    pub fn with<R, F: FnOnce(&mut ViewStack<T>) -> R>(&self, f: F) -> R {
        let mut stack = self.inner.lock();
        f(&mut stack)
    }
}

impl<T: Presence + Clone> SharedViewStack<T> {
    pub fn push(&self, item: T) -> Option<T> {
        self.inner.lock().push(item)
    }
}

impl<T: Clone> SharedViewStack<T> {
    pub fn push_opt(&self, item: Option<T>) -> Option<T> {
        self.inner.lock().push_opt(item)
    }

    pub fn current(&self) -> Option<T> {
        self.inner.lock().current()
    }
}
