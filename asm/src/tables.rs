//! Static mnemonic/register/host-call dictionaries.
//!
//! These mirror three flat lookup arrays directly rather
//! than going through a derive macro: the mnemonic table has many rows
//! sharing one name distinguished by an arg-type pair, and the register
//! table has deliberate aliases onto the same index, so a 1:1
//! name-to-variant enum derive doesn't fit either shape.

use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgType {
    Null,
    Reg,
    Imm,
    Ident,
}

pub struct MnemonicRow {
    pub name: &'static str,
    pub opcode: u16,
    pub at0: ArgType,
    pub at1: ArgType,
}

macro_rules! row {
    ($name:expr, $op:expr, $at0:ident, $at1:ident) => {
        MnemonicRow {
            name: $name,
            opcode: $op,
            at0: ArgType::$at0,
            at1: ArgType::$at1,
        }
    };
}

/// Ordered rows of the opcode numbering table, one per `(name, at0, at1)`
/// triple. Lookup is a linear first-match scan  so row order
/// here is significant for mnemonics with aliases (`jl`/`jnge`, etc.).
pub static MNEMONICS: Lazy<Vec<MnemonicRow>> = Lazy::new(|| {
    vec![
        row!("hlt", 0, Null, Null),
        row!("nop", 1, Null, Null),
        row!("add", 2, Reg, Reg),
        row!("add", 3, Reg, Imm),
        row!("sub", 4, Reg, Reg),
        row!("sub", 5, Reg, Imm),
        row!("rsb", 6, Reg, Reg),
        row!("rsb", 7, Reg, Imm),
        row!("mul", 8, Reg, Reg),
        row!("mul", 9, Reg, Imm),
        row!("div", 10, Reg, Reg),
        row!("div", 11, Reg, Imm),
        row!("rdv", 12, Reg, Reg),
        row!("rdv", 13, Reg, Imm),
        row!("mod", 14, Reg, Reg),
        row!("mod", 15, Reg, Imm),
        row!("rmd", 16, Reg, Reg),
        row!("rmd", 17, Reg, Imm),
        row!("imul", 18, Reg, Reg),
        row!("imul", 19, Reg, Imm),
        row!("idiv", 20, Reg, Reg),
        row!("idiv", 21, Reg, Imm),
        row!("irdv", 22, Reg, Reg),
        row!("irdv", 23, Reg, Imm),
        row!("and", 24, Reg, Reg),
        row!("and", 25, Reg, Imm),
        row!("or", 26, Reg, Reg),
        row!("or", 27, Reg, Imm),
        row!("xor", 28, Reg, Reg),
        row!("xor", 29, Reg, Imm),
        row!("not", 30, Reg, Null),
        row!("shr", 31, Reg, Reg),
        row!("shr", 32, Reg, Imm),
        row!("shl", 33, Reg, Reg),
        row!("shl", 34, Reg, Imm),
        row!("mov", 35, Reg, Reg),
        row!("mov", 36, Reg, Imm),
        row!("xchg", 37, Reg, Reg),
        row!("cmp", 38, Reg, Reg),
        row!("cmp", 39, Reg, Imm),
        row!("jmp", 40, Ident, Null),
        row!("je", 41, Ident, Null),
        row!("jl", 42, Ident, Null),
        row!("jnge", 42, Ident, Null),
        row!("jg", 43, Ident, Null),
        row!("jnle", 43, Ident, Null),
        row!("jle", 44, Ident, Null),
        row!("jng", 44, Ident, Null),
        row!("jge", 45, Ident, Null),
        row!("jnl", 45, Ident, Null),
        row!("jne", 46, Ident, Null),
        row!("int", 47, Ident, Null),
        row!("push", 48, Reg, Null),
        row!("pop", 49, Reg, Null),
        row!("asr", 50, Reg, Reg),
        row!("asr", 51, Reg, Imm),
        row!("bt", 52, Reg, Reg),
        row!("bt", 53, Reg, Imm),
        row!("bts", 54, Reg, Reg),
        row!("bts", 55, Reg, Imm),
        row!("btr", 56, Reg, Reg),
        row!("btr", 57, Reg, Imm),
        row!("bti", 58, Reg, Reg),
        row!("bti", 59, Reg, Imm),
        row!("call", 60, Ident, Null),
        row!("ret", 61, Imm, Null),
        row!("ldb", 62, Reg, Reg),
        row!("ldb", 63, Reg, Imm),
        row!("lddb", 64, Reg, Reg),
        row!("lddb", 65, Reg, Imm),
        row!("ldqb", 66, Reg, Reg),
        row!("ldqb", 67, Reg, Imm),
        row!("stb", 68, Reg, Reg),
        row!("stb", 69, Reg, Imm),
        row!("stdb", 70, Reg, Reg),
        row!("stdb", 71, Reg, Imm),
        row!("stqb", 72, Reg, Reg),
        row!("stqb", 73, Reg, Imm),
        row!("id", 0xf001, Imm, Null),
    ]
});

/// Finds the first mnemonic row matching `name` (case-insensitive) and both
/// arg types exactly.
pub fn find_mnemonic(name: &str, at0: ArgType, at1: ArgType) -> Option<&'static MnemonicRow> {
    MNEMONICS
        .iter()
        .find(|row| row.name.eq_ignore_ascii_case(name) && row.at0 == at0 && row.at1 == at1)
}

/// Register name -> index , deduplicated (the alias list
/// lists `y50..y63` twice; duplicate aliases collapse to one entry).
pub static REGISTERS: Lazy<HashMap<String, u8>> = Lazy::new(|| {
    let mut map = HashMap::new();
    let named: &[(&str, u8)] = &[
        ("atr0", 0x00), ("atr1", 0x01), ("rtv", 0x02), ("rta", 0x03),
        ("rg0", 0x04), ("rg1", 0x05), ("rg2", 0x06), ("rg3", 0x07),
        ("sp", 0x08), ("rtaa", 0x09), ("fp", 0x0a), ("t0", 0x0b),
        ("t1", 0x0c), ("t2", 0x0d), ("t3", 0x0e), ("t4", 0x0f),
        ("t5", 0x10), ("t6", 0x11), ("t7", 0x12), ("t8", 0x13),
        ("t9", 0x14), ("t10", 0x15), ("t11", 0x16), ("t12", 0x17),
        ("s0", 0x18), ("s1", 0x19), ("s2", 0x1a), ("s3", 0x1b),
        ("s4", 0x1c), ("s5", 0x1d), ("s6", 0x1e), ("s7", 0x1f),
        ("s8", 0x20), ("s9", 0x21), ("s10", 0x22), ("s11", 0x23),
        ("p0", 0x24), ("p1", 0x25), ("p2", 0x26), ("p3", 0x27),
        ("p4", 0x28), ("p5", 0x29), ("p6", 0x2a), ("p7", 0x2b),
        ("xh", 0x2c), ("xl", 0x2d), ("yh", 0x2e), ("yl", 0x2f),
        ("zh", 0x30), ("zl", 0x31),
    ];
    for &(name, index) in named {
        map.insert(name.to_string(), index);
    }
    for index in 0u8..64 {
        map.insert(format!("y{}", index), index);
    }
    map
});

/// Looks up a register name, case-insensitively.
pub fn find_register(name: &str) -> Option<u8> {
    REGISTERS.get(name.to_ascii_lowercase().as_str()).copied()
}

/// Host-call name -> number , case-sensitive.
pub const HOST_CALLS: &[(&str, u32)] = &[
    ("exit", 0),
    ("abort", 1),
    ("readc", 2),
    ("writec", 3),
    ("loadsd", 4),
    ("loadad", 5),
    ("loadid", 6),
    ("writes", 7),
    ("reads", 8),
    ("writen", 9),
    ("readn", 10),
];

pub fn find_host_call(name: &str) -> Option<u32> {
    HOST_CALLS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, number)| *number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deduplicates_the_y50_to_y63_aliases() {
        assert_eq!(find_register("y50"), Some(0x32));
        assert_eq!(find_register("zl"), Some(0x31));
    }

    #[test]
    fn finds_the_register_reg_immediate_add_row() {
        let row = find_mnemonic("ADD", ArgType::Reg, ArgType::Imm).unwrap();
        assert_eq!(row.opcode, 3);
    }

    #[test]
    fn host_call_lookup_is_case_sensitive() {
        assert_eq!(find_host_call("writec"), Some(3));
        assert_eq!(find_host_call("WRITEC"), None);
    }
}
