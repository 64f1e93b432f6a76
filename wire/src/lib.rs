//! Binary encoding of the 8-byte instruction record.
//!
//! A compiled program is a flat stream of fixed-size records; there is no
//! header. Each record is `op: u16, arg0: u8, arg1: u8, imm: u32`, all
//! fields little-endian, for 8 bytes total.

use byteorder::{ReadBytesExt, WriteBytesExt};
use std::fs::File;
use std::io::prelude::*;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use util::Endian;

/// Size in bytes of one record on the wire.
pub const RECORD_BYTES: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Record {
    pub op: u16,
    pub arg0: u8,
    pub arg1: u8,
    pub imm: u32,
}

impl Record {
    /// Builds a record whose 8 bytes are `value`'s little-endian bytes
    /// verbatim. Used for the assembler's `id` pseudo-op, which overwrites a
    /// slot with a raw 64-bit integer instead of a structured instruction.
    pub fn from_raw_u64(value: u64) -> Record {
        let bytes = value.to_le_bytes();
        Record {
            op: u16::from_le_bytes([bytes[0], bytes[1]]),
            arg0: bytes[2],
            arg1: bytes[3],
            imm: u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
        }
    }

    pub fn read<R: Read>(reader: &mut R) -> std::io::Result<Record> {
        let op = reader.read_u16::<Endian>()?;
        let arg0 = reader.read_u8()?;
        let arg1 = reader.read_u8()?;
        let imm = reader.read_u32::<Endian>()?;
        Ok(Record { op, arg0, arg1, imm })
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_u16::<Endian>(self.op)?;
        writer.write_u8(self.arg0)?;
        writer.write_u8(self.arg1)?;
        writer.write_u32::<Endian>(self.imm)?;
        Ok(())
    }
}

/// A fully assembled program: the flat record stream the interpreter
/// executes, as raw bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    bytes: Vec<u8>,
}

impl Program {
    pub fn from_records(records: &[Record]) -> Program {
        let mut bytes = Vec::with_capacity(records.len() * RECORD_BYTES);
        for record in records {
            record.write(&mut bytes).expect("writing to a Vec cannot fail");
        }
        Program { bytes }
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Program {
        Program { bytes }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn record_count(&self) -> usize {
        self.bytes.len() / RECORD_BYTES
    }
}

pub fn read<R: Read>(reader: &mut R) -> std::io::Result<Program> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(Program::from_bytes(bytes))
}

pub fn write<W: Write>(writer: &mut W, program: &Program) -> std::io::Result<()> {
    writer.write_all(&program.bytes)
}

pub trait ReadWireExt: Read + Sized {
    fn read_wire(&mut self) -> std::io::Result<Program> {
        read(self)
    }
}

impl<R: Read + Sized> ReadWireExt for R {}

pub trait WriteWireExt: Write + Sized {
    fn write_wire(&mut self, program: &Program) -> std::io::Result<()> {
        write(self, program)
    }
}

impl<W: Write + Sized> WriteWireExt for W {}

pub fn read_file<P: AsRef<Path>>(path: P) -> std::io::Result<Program> {
    BufReader::new(File::open(path)?).read_wire()
}

pub fn write_file<P: AsRef<Path>>(path: P, program: &Program) -> std::io::Result<()> {
    BufWriter::new(File::create(path)?).write_wire(program)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_record_stream() {
        let records = vec![
            Record { op: 2, arg0: 1, arg1: 2, imm: 0 },
            Record { op: 40, arg0: 0, arg1: 0, imm: 0xffff_fffe },
        ];
        let program = Program::from_records(&records);
        let mut buf = Vec::new();
        write(&mut buf, &program).unwrap();

        let read_back = read(&mut &buf[..]).unwrap();
        assert_eq!(read_back.record_count(), 2);
        assert_eq!(&read_back.bytes()[0..8], &program.bytes()[0..8]);
    }

    #[test]
    fn raw_u64_round_trips_through_record_fields() {
        let value: u64 = 0x1122_3344_5566_7788;
        let record = Record::from_raw_u64(value);
        let mut buf = Vec::new();
        record.write(&mut buf).unwrap();
        assert_eq!(u64::from_le_bytes(buf.try_into().unwrap()), value);
    }
}
