//! Core interpreter for the idle register-based virtual machine.
//!
//! This crate owns the VM state (registers, value stack, return-address
//! stack, flat data memory), the decode-dispatch loop, and the host-call
//! table. The sibling `asm` crate assembles source text into the record
//! stream this crate executes; `wire` defines the on-disk encoding of that
//! stream.

#[macro_use]
extern crate num_derive;

pub mod constants;
pub mod opcodes;
pub mod interp;

pub use interp::core::{Interpreter, TickResult};
pub use interp::error::VmTrap;
pub use interp::hostcall::HOST_CALL_COUNT;

/// A VM register / stack cell: 64 bits, reinterpreted as signed or unsigned
/// depending on the opcode.
pub type Word = u64;

/// The 32-bit immediate field carried by an instruction record.
pub type Immediate = u32;
