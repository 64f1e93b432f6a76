#[macro_use]
extern crate clap;

use asm::AsmError;
use clap::Arg;
use std::fs;
use std::process;

fn tag(err: &AsmError) -> &'static str {
    match err {
        AsmError::LabelNameIsNotIdent { .. } => "LABEL_NAME_IS_NOT_IDENT",
        AsmError::IncorrectArgument { .. } => "INCORRECT_ARGUMENT",
        AsmError::IncorrectOpcode { .. } => "INCORRECT_OPCODE",
        AsmError::IncorrectInstruction { .. } => "INCORRECT_INSTRUCTION",
        AsmError::IntegerConstIsntValid { .. } => "INTEGER_CONST_ISNT_VALID",
        AsmError::FileNotRead(_) => "FILE_NOT_READ",
    }
}

fn main() {
    env_logger::init();

    let matches = app_from_crate!()
        .arg(
            Arg::with_name("SOURCE")
                .help("Sets the assembly source file to read")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("OUTPUT")
                .help("Sets the binary file to write")
                .required(true)
                .index(2),
        )
        .get_matches();

    let source_path = matches.value_of("SOURCE").unwrap();
    let output_path = matches.value_of("OUTPUT").unwrap();

    let source = match fs::read_to_string(source_path) {
        Ok(text) => text,
        Err(err) => fail(&AsmError::FileNotRead(err.to_string())),
    };

    let program = match asm::assemble(&source) {
        Ok(program) => program,
        Err(err) => fail(&err),
    };

    if let Err(err) = wire::write_file(output_path, &program) {
        fail(&AsmError::FileNotRead(err.to_string()));
    }
}

fn fail(err: &AsmError) -> ! {
    eprintln!("[{}] 0x{:02X}, {}", tag(err), err.exit_code(), err);
    process::exit(err.exit_code());
}
