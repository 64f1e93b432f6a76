//! Assembler exit-code table.

use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum AsmError {
    #[error("label name is not a valid identifier (line {line})")]
    LabelNameIsNotIdent { line: usize },
    #[error("incorrect argument (line {line}): {detail}")]
    IncorrectArgument { line: usize, detail: String },
    #[error("unrecognized opcode (line {line}): {mnemonic}")]
    IncorrectOpcode { line: usize, mnemonic: String },
    #[error("no instruction form matches (line {line}): {mnemonic}")]
    IncorrectInstruction { line: usize, mnemonic: String },
    #[error("integer constant isn't valid (line {line}): {lexeme}")]
    IntegerConstIsntValid { line: usize, lexeme: String },
    #[error("could not read source file: {0}")]
    FileNotRead(String),
}

impl AsmError {
    /// The process exit code this process assigns this error kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            AsmError::LabelNameIsNotIdent { .. } => 2,
            AsmError::IncorrectArgument { .. } => 3,
            AsmError::IncorrectOpcode { .. } => 4,
            AsmError::IncorrectInstruction { .. } => 5,
            AsmError::IntegerConstIsntValid { .. } => 6,
            AsmError::FileNotRead(_) => 8,
        }
    }
}
