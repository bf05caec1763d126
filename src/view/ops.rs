use std::error::Error;
use std::fmt;

use super::depth::Count;
use super::presence::Presence;
use super::stack::ViewStack;

op_variants! {
    StackOps<T>,
    Push(Option<T>) => "push",
    Pop => "pop",
    Current => "current",
    Depth => "depth",
    Len => "len"
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReturnValue<T> {
    Item(T),
    Int(Count),
    Nil,
}

impl<T> ReturnValue<T> {
    pub fn is_nil(&self) -> bool {
        matches!(self, ReturnValue::Nil)
    }
}

impl<T> From<Option<T>> for ReturnValue<T> {
    fn from(item: Option<T>) -> Self {
        item.map(ReturnValue::Item).unwrap_or(ReturnValue::Nil)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpError {
    Unknown(String),
}

impl fmt::Display for OpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpError::Unknown(name) => write!(f, "unknown stack operation: {}", name),
        }
    }
}

impl Error for OpError {}

impl<T> StackOps<T> {
    /// Builds an operation from its exported symbol name. `arg` is only read
    /// by `push`; a missing one makes the push a no-op.
    pub fn lookup(name: &str, arg: Option<T>) -> Result<Self, OpError> {
        match name {
            "push" => Ok(StackOps::Push(arg)),
            "pop" => Ok(StackOps::Pop),
            "current" => Ok(StackOps::Current),
            "depth" => Ok(StackOps::Depth),
            "len" => Ok(StackOps::Len),
            _ => Err(OpError::Unknown(name.to_string())),
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            StackOps::Push(_) => OP_VARIANTS[0],
            StackOps::Pop => OP_VARIANTS[1],
            StackOps::Current => OP_VARIANTS[2],
            StackOps::Depth => OP_VARIANTS[3],
            StackOps::Len => OP_VARIANTS[4],
        }
    }
}

pub fn stack_interact<T: Presence + Clone>(
    stack_op: StackOps<T>,
    stack: &mut ViewStack<T>,
) -> ReturnValue<T> {
    match stack_op {
        StackOps::Push(Some(item)) => stack.push(item).into(),
        StackOps::Push(None) => ReturnValue::Nil,
        StackOps::Pop => stack.pop().into(),
        StackOps::Current => stack.current().into(),
        StackOps::Depth => ReturnValue::Int(stack.depth()),
        StackOps::Len => ReturnValue::Int(stack.len() as Count),
    }
}
