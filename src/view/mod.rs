pub mod config;
pub mod depth;
pub mod ops;
pub mod presence;
pub mod shared;
pub mod stack;

pub use config::StackConfig;
pub use depth::{Count, Depth};
pub use ops::{stack_interact, OpError, ReturnValue, StackOps, OP_VARIANTS};
pub use presence::Presence;
pub use shared::SharedViewStack;
pub use stack::ViewStack;
