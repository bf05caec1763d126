#[macro_use]
extern crate lazy_static;

#[macro_use]
mod macros;

pub mod view;

pub use view::{
    stack_interact, Count, Depth, OpError, Presence, ReturnValue, SharedViewStack, StackConfig,
    StackOps, ViewStack, OP_VARIANTS,
};
