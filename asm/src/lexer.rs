//! Character-class tokenizer.
//!
//! Every byte belongs to one of five classes; the tokenizer partitions a
//! line into lexemes by how consecutive bytes' classes interact. It never
//! fails — it only ever produces a flat list of raw lexemes for `classify`
//! to refine into typed tokens.

#[derive(Clone, Copy, PartialEq, Eq)]
enum ByteClass {
    Letter,
    Ignorable,
    Delimiter,
    Swap,
    IncludeAll,
}

fn classify_byte(byte: u8) -> ByteClass {
    match byte {
        b'\r' | 0x0b | b'\t' | b'\n' | b' ' => ByteClass::Ignorable,
        b'(' | b')' | b'[' | b']' | b'{' | b'}' | b',' | b':' | b';' => ByteClass::Delimiter,
        b'+' | b'-' | b'*' | b'/' | b'%' | b'^' | b'&' | b'|' | b'~' => ByteClass::Swap,
        b'"' | b'\'' | b'`' => ByteClass::IncludeAll,
        _ => ByteClass::Letter,
    }
}

fn is_quote(byte: u8) -> bool {
    matches!(byte, b'"' | b'\'' | b'`')
}

/// Splits one source line into raw lexemes.
pub fn tokenize(line: &str) -> Vec<String> {
    let bytes = line.as_bytes();
    let mut tokens = Vec::new();
    let mut current: Vec<u8> = Vec::new();
    let mut swap_mode = false;
    let mut string_mode = false;

    let flush = |tokens: &mut Vec<String>, current: &mut Vec<u8>| {
        if !current.is_empty() {
            tokens.push(String::from_utf8_lossy(current).into_owned());
            current.clear();
        }
    };

    for (index, &byte) in bytes.iter().enumerate() {
        if string_mode {
            current.push(byte);
            // A byte right after a backslash is always literal; any other
            // quote byte (not necessarily the one that opened the string)
            // closes it.
            let escaped = index > 0 && bytes[index - 1] == b'\\';
            if is_quote(byte) && !escaped {
                string_mode = false;
                flush(&mut tokens, &mut current);
            }
            continue;
        }

        match classify_byte(byte) {
            ByteClass::Letter => {
                if swap_mode {
                    flush(&mut tokens, &mut current);
                }
                swap_mode = false;
                current.push(byte);
            }
            ByteClass::Ignorable => {
                flush(&mut tokens, &mut current);
                swap_mode = false;
            }
            ByteClass::Delimiter => {
                flush(&mut tokens, &mut current);
                swap_mode = false;
                tokens.push((byte as char).to_string());
            }
            ByteClass::Swap => {
                if !swap_mode {
                    flush(&mut tokens, &mut current);
                }
                swap_mode = true;
                current.push(byte);
            }
            ByteClass::IncludeAll => {
                flush(&mut tokens, &mut current);
                swap_mode = false;
                string_mode = true;
                current.push(byte);
            }
        }
    }

    flush(&mut tokens, &mut current);
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_mnemonic_and_register_operands() {
        assert_eq!(tokenize("add rg0, rg1"), vec!["add", "rg0", ",", "rg1"]);
    }

    #[test]
    fn recognizes_a_tag_line() {
        assert_eq!(tokenize("loop:"), vec!["loop", ":"]);
    }

    #[test]
    fn coalesces_a_swap_run_and_breaks_on_letters() {
        assert_eq!(tokenize("mov rg0, -1"), vec!["mov", "rg0", ",", "-", "1"]);
    }

    #[test]
    fn keeps_quotes_as_part_of_the_string_lexeme() {
        assert_eq!(tokenize(r#"int "hello""#), vec!["int", "\"hello\""]);
    }

    #[test]
    fn honors_a_backslash_escape_inside_a_string() {
        assert_eq!(tokenize(r#""a\"b""#), vec!["\"a\\\"b\""]);
    }

    #[test]
    fn tokenizing_a_lexeme_again_reproduces_it() {
        let tokens = tokenize("hlt;");
        for token in &tokens {
            assert_eq!(tokenize(token), vec![token.clone()]);
        }
    }
}
