#[macro_use]
extern crate clap;

use clap::Arg;
use idlevm::{Interpreter, VmTrap};
use std::process;

fn tag(trap: VmTrap) -> &'static str {
    match trap {
        VmTrap::IncorrectOpcode => "INCORRECT_OPCODE",
        VmTrap::IncorrectArgument => "INCORRECT_ARGUMENT",
        VmTrap::IllegalMemoryAccess => "ILLEGAL_MEMORY_ACCESS",
        VmTrap::AllocationFailed => "ALLOCATION_FAILED",
        VmTrap::DivideByZero => "DIVIDE_BY_ZERO",
        VmTrap::NullDereference => "NULL_DEREFERENCE",
        VmTrap::FileNotRead => "FILE_NOT_READ",
        VmTrap::StackOverflow => "STACK_OVERFLOW",
        VmTrap::StackUnderflow => "STACK_UNDERFLOW",
        VmTrap::AdressStackOverflow => "ADRESS_STACK_OVERFLOW",
        VmTrap::AdressStackUnderflow => "ADRESS_STACK_UNDERFLOW",
        VmTrap::IncorrectIntNumber => "INCORRECT_INT_NUMBER",
    }
}

fn main() {
    env_logger::init();

    let matches = app_from_crate!()
        .arg(
            Arg::with_name("BINARY")
                .help("Sets the assembled program file to run")
                .required(true)
                .index(1),
        )
        .get_matches();

    let binary_path = matches.value_of("BINARY").unwrap();

    let program = match wire::read_file(binary_path) {
        Ok(program) => program,
        Err(err) => {
            eprintln!("[FILE_NOT_READ] 0x{:02X}, {}", VmTrap::FileNotRead.exit_code(), err);
            process::exit(VmTrap::FileNotRead.exit_code());
        }
    };

    let mut vm = Interpreter::new(program.into_bytes());
    match vm.run() {
        Ok(code) => process::exit(code),
        Err(trap) => {
            eprintln!("[{}] 0x{:02X}, {}", tag(trap), trap.exit_code(), trap);
            process::exit(trap.exit_code());
        }
    }
}
