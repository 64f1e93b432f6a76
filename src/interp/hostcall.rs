//! Host-call (`INT`) table.
//!
//! Argument convention: inputs in `regs[4]` (and `regs[5]` for a second
//! operand), results in `regs[2]`. Host-call I/O failure surfaces as a
//! truthy/falsy value in `regs[2]`; it is never a trap.

use super::core::Interpreter;
use super::error::VmTrap;
use byteorder::{ByteOrder, LittleEndian};
use std::io::{self, BufRead, Read, Write};

/// Number of bound host-call routines. `INT` operands at or beyond this
/// number trap `INCORRECT_INT_NUMBER`.
pub const HOST_CALL_COUNT: u32 = 11;

/// What a host-call asked the run loop to do next.
pub enum HostCallOutcome {
    Continue,
    /// The `exit` routine was invoked; terminate with this process exit code.
    Exit(i32),
}

pub fn dispatch(vm: &mut Interpreter, number: u32) -> Result<HostCallOutcome, VmTrap> {
    match number {
        0 => Ok(HostCallOutcome::Exit(vm.regs[4] as i32)),
        1 => {
            io::stdout().flush().ok();
            std::process::abort();
        }
        2 => {
            let mut byte = [0u8; 1];
            vm.regs[2] = match io::stdin().read(&mut byte) {
                Ok(0) | Err(_) => u64::MAX, // EOF / error, like getc()'s EOF == -1
                Ok(_) => u64::from(byte[0]),
            };
            Ok(HostCallOutcome::Continue)
        }
        3 => {
            let byte = vm.regs[4] as u8;
            io::stdout().write_all(&[byte]).ok();
            Ok(HostCallOutcome::Continue)
        }
        4 => {
            let index = vm.regs[4] as usize;
            vm.regs[2] = *vm.stack.get(index).ok_or(VmTrap::IllegalMemoryAccess)?;
            Ok(HostCallOutcome::Continue)
        }
        5 => {
            let index = vm.regs[4] as usize;
            vm.regs[2] = *vm.radress.get(index).ok_or(VmTrap::IllegalMemoryAccess)?;
            Ok(HostCallOutcome::Continue)
        }
        6 => {
            // Reads the currently executing instruction image at
            // regs[4] * 8 bytes, not an unrelated memory pointer.
            let index = vm.regs[4] as usize;
            let byte_offset = index
                .checked_mul(8)
                .ok_or(VmTrap::IllegalMemoryAccess)?;
            let slice = vm
                .instructions
                .get(byte_offset..byte_offset + 8)
                .ok_or(VmTrap::IllegalMemoryAccess)?;
            vm.regs[2] = LittleEndian::read_u64(slice);
            Ok(HostCallOutcome::Continue)
        }
        7 => {
            let start = vm.regs[4] as usize;
            let end = vm.raw_data[start..]
                .iter()
                .position(|&b| b == 0)
                .map(|offset| start + offset)
                .ok_or(VmTrap::IllegalMemoryAccess)?;
            io::stdout().write_all(&vm.raw_data[start..end]).ok();
            Ok(HostCallOutcome::Continue)
        }
        8 => {
            let start = vm.regs[4] as usize;
            let max_len = vm.regs[5] as usize;
            let dest = vm
                .raw_data
                .get_mut(start..start + max_len)
                .ok_or(VmTrap::IllegalMemoryAccess)?;
            let mut line = Vec::new();
            let stdin = io::stdin();
            let read = stdin.lock().read_until(b'\n', &mut line).unwrap_or(0);
            let copy_len = read.min(max_len.saturating_sub(1));
            dest[..copy_len].copy_from_slice(&line[..copy_len]);
            if copy_len < dest.len() {
                dest[copy_len] = 0;
            }
            Ok(HostCallOutcome::Continue)
        }
        9 => {
            print!("{}", vm.regs[4] as i64);
            io::stdout().flush().ok();
            Ok(HostCallOutcome::Continue)
        }
        10 => {
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line).ok();
            vm.regs[2] = line.trim().parse::<i64>().unwrap_or(0) as u64;
            Ok(HostCallOutcome::Continue)
        }
        _ => Err(VmTrap::IncorrectIntNumber),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_returns_regs4_as_the_process_exit_code() {
        let mut vm = Interpreter::new(Vec::new());
        vm.regs[4] = 42;
        match dispatch(&mut vm, 0).unwrap() {
            HostCallOutcome::Exit(code) => assert_eq!(code, 42),
            HostCallOutcome::Continue => panic!("expected Exit"),
        }
    }

    #[test]
    fn loadsd_reads_a_value_stack_slot_into_regs2() {
        let mut vm = Interpreter::new(Vec::new());
        vm.stack[3] = 0xdead_beef;
        vm.regs[4] = 3;
        dispatch(&mut vm, 4).unwrap();
        assert_eq!(vm.regs[2], 0xdead_beef);
    }

    #[test]
    fn loadsd_out_of_bounds_traps() {
        let mut vm = Interpreter::new(Vec::new());
        vm.regs[4] = vm.stack.len() as u64;
        assert_eq!(dispatch(&mut vm, 4).unwrap_err(), VmTrap::IllegalMemoryAccess);
    }

    #[test]
    fn loadad_reads_a_return_address_slot_into_regs2() {
        let mut vm = Interpreter::new(Vec::new());
        vm.radress[1] = 7;
        vm.regs[4] = 1;
        dispatch(&mut vm, 5).unwrap();
        assert_eq!(vm.regs[2], 7);
    }

    #[test]
    fn loadid_reads_the_instruction_image_at_regs4_times_eight() {
        let instructions: Vec<u8> = (0..16u8).collect();
        let mut vm = Interpreter::new(instructions);
        vm.regs[4] = 1;
        dispatch(&mut vm, 6).unwrap();
        assert_eq!(vm.regs[2], LittleEndian::read_u64(&[8, 9, 10, 11, 12, 13, 14, 15]));
    }

    #[test]
    fn loadid_out_of_bounds_traps() {
        let mut vm = Interpreter::new(vec![0u8; 8]);
        vm.regs[4] = 5;
        assert_eq!(dispatch(&mut vm, 6).unwrap_err(), VmTrap::IllegalMemoryAccess);
    }

    #[test]
    fn unbound_int_number_traps_incorrect_int_number() {
        let mut vm = Interpreter::new(Vec::new());
        assert_eq!(
            dispatch(&mut vm, HOST_CALL_COUNT).unwrap_err(),
            VmTrap::IncorrectIntNumber
        );
    }
}
