use serde::{Deserialize, Serialize};

pub type Count = i64;

/// Net number of successful pushes minus successful pops.
///
/// Kept apart from the item sequence: a host may adjust it, after which it
/// no longer tracks the sequence length. Arithmetic saturates at the
/// `Count` bounds.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default, Hash)]
pub struct Depth {
    value: Count,
}

impl Depth {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn get(&self) -> Count {
        self.value
    }

    pub fn set(&mut self, value: Count) {
        self.value = value;
    }

    pub fn inc(&mut self) -> Count {
        self.value = self.value.saturating_add(1);
        self.value
    }

    pub fn dec(&mut self) -> Count {
        self.sub(1)
    }

    pub fn sub(&mut self, n: Count) -> Count {
        self.value = self.value.saturating_sub(n);
        self.value
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }
}

impl From<Depth> for Count {
    fn from(depth: Depth) -> Count {
        depth.value
    }
}
