//! Interpreter exit-code table.

use thiserror::Error;

/// A fatal interpreter condition. Every variant carries the exact exit code
/// this process assigns it; there is no recovery from a trap.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VmTrap {
    #[error("unrecognized opcode")]
    IncorrectOpcode = 1,
    #[error("operand out of range for its instruction")]
    IncorrectArgument = 2,
    #[error("memory access outside raw_data bounds")]
    IllegalMemoryAccess = 3,
    #[error("allocation failed")]
    AllocationFailed = 4,
    #[error("division by zero")]
    DivideByZero = 5,
    #[error("null dereference")]
    NullDereference = 6,
    #[error("could not read program file")]
    FileNotRead = 7,
    #[error("value stack overflow")]
    StackOverflow = 8,
    #[error("value stack underflow")]
    StackUnderflow = 9,
    #[error("return-address stack overflow")]
    AdressStackOverflow = 10,
    #[error("return-address stack underflow")]
    AdressStackUnderflow = 11,
    #[error("INT operand is not a bound host-call number")]
    IncorrectIntNumber = 12,
}

impl VmTrap {
    /// The process exit code this process assigns this trap.
    pub fn exit_code(self) -> i32 {
        self as i32
    }
}
