//! Per-line token classifier.

use crate::error::AsmError;
use crate::int_lit;
use crate::tables;

#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Reg(u8),
    Imm(u64),
    Ident(String),
    Str(String),
}

#[derive(Clone, Debug, Default)]
pub struct ParsedLine {
    pub tag: Option<String>,
    pub mnemonic: Option<String>,
    pub args: Vec<Operand>,
}

impl ParsedLine {
    /// A bare `name:` line with no instruction of its own.
    pub fn is_tag_only(&self) -> bool {
        self.tag.is_some() && self.mnemonic.is_none()
    }

    pub fn is_blank(&self) -> bool {
        self.tag.is_none() && self.mnemonic.is_none()
    }
}

fn is_identifier_shaped(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn parse_string_literal(tok: &str) -> Option<String> {
    let bytes = tok.as_bytes();
    if bytes.len() < 2 {
        return None;
    }
    let is_quote = matches!(bytes[0], b'"' | b'\'' | b'`');
    if is_quote && bytes[0] == bytes[bytes.len() - 1] {
        Some(tok[1..tok.len() - 1].to_string())
    } else {
        None
    }
}

fn is_mnemonic_name(tok: &str) -> bool {
    tables::MNEMONICS
        .iter()
        .any(|row| row.name.eq_ignore_ascii_case(tok))
}

/// Classifies one operand token in priority order: register, then
/// string-literal, then identifier, then integer-literal.
fn classify_operand(tok: &str, line: usize) -> Result<Operand, AsmError> {
    if let Some(index) = tables::find_register(tok) {
        return Ok(Operand::Reg(index));
    }
    if let Some(s) = parse_string_literal(tok) {
        return Ok(Operand::Str(s));
    }
    if is_identifier_shaped(tok) {
        return Ok(Operand::Ident(tok.to_string()));
    }
    if int_lit::looks_like_int_literal(tok) {
        return Ok(Operand::Imm(int_lit::parse(tok, line)?));
    }
    Err(AsmError::IncorrectArgument {
        line,
        detail: format!("`{}` is not a register, string, identifier, or integer literal", tok),
    })
}

/// Classifies one line's raw lexemes into a tag, a mnemonic, and its
/// operands.
pub fn classify_line(tokens: &[String], line: usize) -> Result<ParsedLine, AsmError> {
    if tokens.is_empty() {
        return Ok(ParsedLine::default());
    }

    let mut idx = 0;
    let mut tag = None;
    if tokens.len() >= 2 && tokens[1] == ":" {
        if !is_identifier_shaped(&tokens[0]) {
            return Err(AsmError::LabelNameIsNotIdent { line });
        }
        tag = Some(tokens[0].clone());
        idx = 2;
    }

    if idx >= tokens.len() {
        return Ok(ParsedLine {
            tag,
            mnemonic: None,
            args: Vec::new(),
        });
    }

    if !is_mnemonic_name(&tokens[idx]) {
        return Err(AsmError::IncorrectOpcode {
            line,
            mnemonic: tokens[idx].clone(),
        });
    }
    let mnemonic = tokens[idx].clone();
    idx += 1;

    // The tokenizer splits a swap-class run from the digits that follow it
    // (`-1` lexes as `-` then `1`), so a leading minus sign on a numeric
    // operand has to be recombined with the token after it here.
    let mut args = Vec::new();
    while idx < tokens.len() && tokens[idx] != ";" {
        if tokens[idx] == "," {
            idx += 1;
            continue;
        }
        if tokens[idx] == "-" {
            if let Some(next) = tokens.get(idx + 1) {
                let combined = format!("-{}", next);
                if int_lit::looks_like_int_literal(&combined) {
                    args.push(Operand::Imm(int_lit::parse(&combined, line)?));
                    idx += 2;
                    continue;
                }
            }
        }
        args.push(classify_operand(&tokens[idx], line)?);
        idx += 1;
    }

    Ok(ParsedLine {
        tag,
        mnemonic: Some(mnemonic),
        args,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    #[test]
    fn classifies_a_tagged_instruction_line() {
        let tokens = tokenize("loop: add rg0, rg1");
        let parsed = classify_line(&tokens, 0).unwrap();
        assert_eq!(parsed.tag.as_deref(), Some("loop"));
        assert_eq!(parsed.mnemonic.as_deref(), Some("add"));
        assert_eq!(parsed.args, vec![Operand::Reg(0x04), Operand::Reg(0x05)]);
    }

    #[test]
    fn classifies_a_bare_tag_line() {
        let tokens = tokenize("loop:");
        let parsed = classify_line(&tokens, 0).unwrap();
        assert!(parsed.is_tag_only());
    }

    #[test]
    fn classifies_an_immediate_operand() {
        let tokens = tokenize("mov rg0, 5");
        let parsed = classify_line(&tokens, 0).unwrap();
        assert_eq!(parsed.args[1], Operand::Imm(5));
    }

    #[test]
    fn rejects_an_unrecognized_mnemonic() {
        let tokens = tokenize("frobnicate rg0");
        assert!(classify_line(&tokens, 0).is_err());
    }

    #[test]
    fn recombines_a_split_minus_sign_with_its_digits() {
        let tokens = tokenize("mov rg0, -1");
        let parsed = classify_line(&tokens, 0).unwrap();
        assert_eq!(parsed.args[1], Operand::Imm((-1i64) as u64));
    }

    #[test]
    fn recombines_a_split_minus_sign_with_a_prefixed_hex_literal() {
        let tokens = tokenize("mov rg0, -0xFF");
        let parsed = classify_line(&tokens, 0).unwrap();
        assert_eq!(parsed.args[1], Operand::Imm((-0xffi64) as u64));
    }
}
