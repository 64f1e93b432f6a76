//! Fixed sizes and register-index conventions of the VM state.

/// Number of general/special-purpose registers. `regs[0]` is the flags
/// register, `regs[3]` is the return-address-stack pointer, `regs[8]` is
/// the value-stack pointer.
pub const REG_COUNT: usize = 64;

/// Fixed capacity of the call/return address stack (`radress`).
pub const RADRESS_COUNT: usize = 1024;

/// Size, in bytes, of the flat data memory (`raw_data`).
pub const RAW_DATA_SIZE: usize = 65536;

/// Initial capacity, in 64-bit cells, of the growable value stack.
pub const STACK_INITIAL_CAPACITY: usize = 24576;

/// Size in bytes of one instruction record on the wire (§6).
pub const RECORD_BYTES: usize = 8;

pub const FLAGS_REG: usize = 0;
pub const RADRESS_PTR_REG: usize = 3;
pub const STACK_PTR_REG: usize = 8;

/// Bit set by `CMP` when the compared values are equal.
pub const FLAG_EQUAL: u64 = 0x1;
/// Bit set by `CMP` when the first operand is greater.
pub const FLAG_GREATER: u64 = 0x2;
/// Bit set by `CMP` when the first operand is less.
pub const FLAG_LESS: u64 = 0x4;
