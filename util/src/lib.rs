/// Byte order used for every on-disk and on-wire integer field.
pub type Endian = byteorder::LittleEndian;
