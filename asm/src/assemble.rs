//! Two-pass resolver and emitter.

use crate::classify::{self, Operand, ParsedLine};
use crate::error::AsmError;
use crate::lexer;
use crate::symbols::LabelTable;
use crate::tables::{self, ArgType};
use log::{debug, trace};
use wire::{Program, Record};

const ID_PSEUDO_OP: u16 = 0xf001;
const NOP_OPCODE: u16 = 1;

fn split_lines(source: &str) -> Vec<Vec<String>> {
    source
        .lines()
        .map(lexer::tokenize)
        .collect()
}

fn operand_arg_type(operand: &Operand) -> ArgType {
    match operand {
        Operand::Reg(_) => ArgType::Reg,
        Operand::Imm(_) => ArgType::Imm,
        Operand::Ident(_) => ArgType::Ident,
        Operand::Str(_) => ArgType::Null, // no mnemonic row accepts a string operand
    }
}

/// Assembles `source` into a flat record stream.
pub fn assemble(source: &str) -> Result<Program, AsmError> {
    let lines: Vec<Vec<String>> = split_lines(source);
    let parsed: Vec<ParsedLine> = lines
        .iter()
        .enumerate()
        .map(|(line, tokens)| classify::classify_line(tokens, line))
        .collect::<Result<_, _>>()?;

    // Pass 1: capture every tag at its instruction index. Blank lines don't
    // occupy a slot; everything else (including tag-only lines, which emit
    // a NOP) does, keeping pass 1 and pass 2's counters in lockstep
    // (blank lines never occupy a slot).
    let mut labels = LabelTable::new();
    let mut instruction_index = 0usize;
    for line in &parsed {
        if line.is_blank() {
            continue;
        }
        if let Some(tag) = &line.tag {
            labels.define(tag.clone(), instruction_index);
        }
        instruction_index += 1;
    }
    debug!("pass 1 collected {} label(s)", instruction_index);

    // Pass 2: resolve operands and emit records.
    let mut records = Vec::with_capacity(instruction_index);
    let mut current_index = 0usize;
    for (line_number, line) in parsed.iter().enumerate() {
        if line.is_blank() {
            continue;
        }
        if line.is_tag_only() {
            records.push(Record { op: NOP_OPCODE, arg0: 0, arg1: 0, imm: 0 });
            current_index += 1;
            continue;
        }

        let mnemonic = line.mnemonic.as_deref().expect("non-blank, non-tag-only line has a mnemonic");
        trace!("encoding line {}: {}", line_number, mnemonic);
        records.push(encode_line(mnemonic, &line.args, line_number, current_index, &labels)?);
        current_index += 1;
    }

    Ok(Program::from_records(&records))
}

fn encode_line(
    mnemonic: &str,
    args: &[Operand],
    line_number: usize,
    current_index: usize,
    labels: &LabelTable,
) -> Result<Record, AsmError> {
    let at0 = args.get(0).map(operand_arg_type).unwrap_or(ArgType::Null);
    let at1 = args.get(1).map(operand_arg_type).unwrap_or(ArgType::Null);

    let row = tables::find_mnemonic(mnemonic, at0, at1).ok_or_else(|| {
        AsmError::IncorrectInstruction {
            line: line_number,
            mnemonic: mnemonic.to_string(),
        }
    })?;

    if row.opcode == ID_PSEUDO_OP {
        let value = match args.get(0) {
            Some(Operand::Imm(value)) => *value,
            _ => {
                return Err(AsmError::IncorrectArgument {
                    line: line_number,
                    detail: "`id` requires an integer operand".to_string(),
                })
            }
        };
        return Ok(Record::from_raw_u64(value));
    }

    let is_int = mnemonic.eq_ignore_ascii_case("int");
    let mut arg0_byte = 0u8;
    let mut arg1_byte = 0u8;
    let mut imm_value: u32 = 0;

    let mut place = |operand: &Operand, into_arg0: bool| -> Result<(), AsmError> {
        match operand {
            Operand::Reg(index) => {
                if into_arg0 {
                    arg0_byte = *index;
                } else {
                    arg1_byte = *index;
                }
            }
            Operand::Imm(value) => imm_value = *value as u32,
            Operand::Ident(name) => {
                imm_value = if is_int {
                    tables::find_host_call(name).ok_or_else(|| AsmError::IncorrectArgument {
                        line: line_number,
                        detail: format!("undefined host-call `{}`", name),
                    })?
                } else {
                    let target = labels.resolve(name).ok_or_else(|| AsmError::IncorrectArgument {
                        line: line_number,
                        detail: format!("undefined label `{}`", name),
                    })?;
                    let delta = target as i64 - current_index as i64 - 1;
                    delta as i32 as u32
                };
            }
            Operand::Str(_) => {
                return Err(AsmError::IncorrectArgument {
                    line: line_number,
                    detail: "string literals are not valid instruction operands".to_string(),
                })
            }
        }
        Ok(())
    };

    if let Some(operand) = args.get(0) {
        place(operand, true)?;
    }
    if let Some(operand) = args.get(1) {
        place(operand, false)?;
    }

    Ok(Record {
        op: row.opcode,
        arg0: arg0_byte,
        arg1: arg1_byte,
        imm: imm_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regs(program: &Program, n: usize) -> Vec<Record> {
        program
            .bytes()
            .chunks(8)
            .take(n)
            .map(|chunk| Record {
                op: u16::from_le_bytes([chunk[0], chunk[1]]),
                arg0: chunk[2],
                arg1: chunk[3],
                imm: u32::from_le_bytes([chunk[4], chunk[5], chunk[6], chunk[7]]),
            })
            .collect()
    }

    #[test]
    fn assembles_scenario_s1() {
        let program = assemble("mov rg0, 5\nmov rg1, 7\nadd rg0, rg1\nhlt").unwrap();
        let records = regs(&program, 4);
        assert_eq!(records[0], Record { op: 36, arg0: 4, arg1: 0, imm: 5 });
        assert_eq!(records[1], Record { op: 36, arg0: 5, arg1: 0, imm: 7 });
        assert_eq!(records[2], Record { op: 2, arg0: 4, arg1: 5, imm: 0 });
        assert_eq!(records[3], Record { op: 0, arg0: 0, arg1: 0, imm: 0 });
    }

    #[test]
    fn a_label_self_loop_resolves_to_minus_one() {
        let program = assemble("l: mov rg0, 1\njmp l\nhlt").unwrap();
        let records = regs(&program, 3);
        // `jmp l` is the second instruction (index 1); `l` is index 0, so
        // delta = 0 - 1 - 1 = -2.
        assert_eq!(records[1].imm, 0xffff_fffe);
    }

    #[test]
    fn a_tight_self_loop_label_on_its_own_jump() {
        let program = assemble("l: jmp l").unwrap();
        let records = regs(&program, 1);
        assert_eq!(records[0].imm, 0xffff_ffff);
    }

    #[test]
    fn undefined_labels_are_a_hard_error() {
        assert!(assemble("jmp nowhere").is_err());
    }

    #[test]
    fn int_operand_resolves_through_the_host_call_table() {
        let program = assemble("mov rg0, 65\nint writec\nhlt").unwrap();
        let records = regs(&program, 2);
        assert_eq!(records[1], Record { op: 47, arg0: 0, arg1: 0, imm: 3 });
    }

    #[test]
    fn id_pseudo_op_overwrites_the_slot_with_a_raw_integer() {
        let program = assemble("id 0x11223344").unwrap();
        let raw = program.bytes();
        assert_eq!(u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]), 0x1122_3344);
    }
}
