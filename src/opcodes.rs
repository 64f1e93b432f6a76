//! The opcode numbering table , shared between the assembler's
//! emitter and the interpreter's dispatch loop.

use num_derive::{FromPrimitive, ToPrimitive};

/// One row of the numbering table. Discriminants are part of
/// the wire format and must never change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, FromPrimitive, ToPrimitive)]
#[repr(u16)]
pub enum Opcode {
    Hlt = 0,
    Nop = 1,

    /// `_R` reads the second operand from `regs[arg1]`; `_I` reads it from
    /// the record's `imm`, zero-extended. `Rsb`/`Rdv`/`Rmd` swap the operand
    /// order (reverse subtract/divide/modulo).
    AddR = 2,
    AddI = 3,
    SubR = 4,
    SubI = 5,
    RsbR = 6,
    RsbI = 7,
    MulR = 8,
    MulI = 9,
    DivR = 10,
    DivI = 11,
    RdvR = 12,
    RdvI = 13,
    ModR = 14,
    ModI = 15,
    RmdR = 16,
    RmdI = 17,

    /// Signed 64-bit counterparts of `Mul`/`Div`/`Rdv`.
    ImulR = 18,
    ImulI = 19,
    IdivR = 20,
    IdivI = 21,
    IrdvR = 22,
    IrdvI = 23,

    AndR = 24,
    AndI = 25,
    OrR = 26,
    OrI = 27,
    XorR = 28,
    XorI = 29,
    /// Unary: `regs[arg0] = !regs[arg0]`.
    NotR = 30,
    ShrR = 31,
    ShrI = 32,
    ShlR = 33,
    ShlI = 34,

    MovR = 35,
    MovI = 36,
    /// Register/register only.
    Xchg = 37,
    /// Sets the flags register (see `constants::FLAG_*`).
    CmpR = 38,
    CmpI = 39,

    /// Unconditional PC-relative jump.
    Jmp = 40,
    /// Branch iff `regs[0] & 0x1 == 0` — the equal bit is *absent*.
    Je = 41,
    /// Branch iff `regs[0] & 0x4 == 0` — the less bit is *absent*.
    Jl = 42,
    /// Branch iff `regs[0] & 0x2 == 0` — the greater bit is *absent*.
    Jg = 43,
    /// Branch iff `regs[0] & 0x5 == 0`.
    Jle = 44,
    /// Branch iff `regs[0] & 0x3 == 0`.
    Jge = 45,
    /// Branch iff `regs[0] & 0x6 == 0`.
    Jne = 46,

    /// Host-call dispatch; `imm` is the host-call number.
    Int = 47,
    Push = 48,
    Pop = 49,

    /// Arithmetic (sign-preserving) right shift.
    AsrR = 50,
    AsrI = 51,

    /// Bit test / set / reset / invert at index `count & 0x3f`.
    BtR = 52,
    BtI = 53,
    BtsR = 54,
    BtsI = 55,
    BtrR = 56,
    BtrI = 57,
    BtiR = 58,
    BtiI = 59,

    /// PC-relative, like `Jmp`.
    Call = 60,
    Ret = 61,

    LdbR = 62,
    LdbI = 63,
    LddbR = 64,
    LddbI = 65,
    LdqbR = 66,
    LdqbI = 67,
    StbR = 68,
    StbI = 69,
    StdbR = 70,
    StdbI = 71,
    StqbR = 72,
    StqbI = 73,
}

/// Assembler-only pseudo-op: overwrites the next record slot with a raw
/// 64-bit integer instead of emitting a structured record. Never appears on
/// the wire as an opcode value read by the interpreter.
pub const ID_PSEUDO_OP: u16 = 0xF001;
