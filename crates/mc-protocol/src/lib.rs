//! Minecraft wire primitives used to distribute data-pack definitions.
//!
//! Everything is big-endian; strings and sequences carry a VarInt length prefix.

use std::io::{self, Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use thiserror::Error;

/// Longest string `read_utf` accepts by default, in UTF-16 code units.
pub const MAX_STRING_LEN: usize = 32767;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("VarInt too large")]
    VarIntTooLarge,
    #[error("String too long: {len} > {max}")]
    StringTooLong { len: usize, max: usize },
    #[error("Negative length prefix: {0}")]
    NegativeLength(i32),
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("{0} trailing bytes after value")]
    TrailingBytes(usize),
}

pub type Result<T> = std::result::Result<T, ProtocolError>;

pub trait Encode {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()>;
}

pub trait Decode: Sized {
    fn decode<R: Read>(reader: &mut R) -> Result<Self>;
}

/// Encode a value into a fresh buffer.
pub fn to_bytes<T: Encode + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    value.encode(&mut buf)?;
    Ok(buf)
}

/// Decode a value that must consume the whole slice.
pub fn from_bytes<T: Decode>(bytes: &[u8]) -> Result<T> {
    let mut reader = bytes;
    let value = T::decode(&mut reader)?;
    if !reader.is_empty() {
        return Err(ProtocolError::TrailingBytes(reader.len()));
    }
    Ok(value)
}

pub fn read_varint<R: Read>(reader: &mut R) -> Result<i32> {
    let mut result = 0i32;
    let mut shift = 0;
    loop {
        let byte = reader.read_u8()?;
        result |= ((byte & 0x7F) as i32) << shift;
        if byte & 0x80 == 0 {
            break;
        }
        shift += 7;
        if shift >= 32 {
            return Err(ProtocolError::VarIntTooLarge);
        }
    }
    Ok(result)
}

pub fn write_varint<W: Write>(writer: &mut W, mut value: i32) -> Result<()> {
    loop {
        let mut byte = (value & 0x7F) as u8;
        value = ((value as u32) >> 7) as i32;
        if value != 0 {
            byte |= 0x80;
        }
        writer.write_u8(byte)?;
        if value == 0 {
            break;
        }
    }
    Ok(())
}

/// Read a VarInt length prefix, rejecting negative values.
pub fn read_length<R: Read>(reader: &mut R) -> Result<usize> {
    let len = read_varint(reader)?;
    usize::try_from(len).map_err(|_| ProtocolError::NegativeLength(len))
}

/// Write a VarInt length prefix.
pub fn write_length<W: Write>(writer: &mut W, len: usize) -> Result<()> {
    let len = i32::try_from(len).map_err(|_| ProtocolError::VarIntTooLarge)?;
    write_varint(writer, len)
}

/// Read a length-prefixed string of at most `max` UTF-16 code units.
pub fn read_utf<R: Read>(reader: &mut R, max: usize) -> Result<String> {
    let len = read_length(reader)?;
    // A code unit takes at most three bytes in modified UTF-8.
    if len > max * 3 {
        return Err(ProtocolError::StringTooLong { len, max: max * 3 });
    }
    let mut buf = vec![0u8; len];
    reader.read_exact(&mut buf)?;
    let s = String::from_utf8(buf)?;
    let units = s.encode_utf16().count();
    if units > max {
        return Err(ProtocolError::StringTooLong { len: units, max });
    }
    Ok(s)
}

/// Write a length-prefixed string of at most `max` UTF-16 code units.
pub fn write_utf<W: Write>(writer: &mut W, s: &str, max: usize) -> Result<()> {
    let units = s.encode_utf16().count();
    if units > max {
        return Err(ProtocolError::StringTooLong { len: units, max });
    }
    write_length(writer, s.len())?;
    writer.write_all(s.as_bytes())?;
    Ok(())
}

impl Encode for i32 {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_i32::<BigEndian>(*self)?;
        Ok(())
    }
}

impl Decode for i32 {
    fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(reader.read_i32::<BigEndian>()?)
    }
}

// VarInt wrapper type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VarInt(pub i32);

impl Encode for VarInt {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_varint(writer, self.0)
    }
}

impl Decode for VarInt {
    fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        Ok(VarInt(read_varint(reader)?))
    }
}

impl Encode for str {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_utf(writer, self, MAX_STRING_LEN)
    }
}

impl Encode for String {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.as_str().encode(writer)
    }
}

impl Decode for String {
    fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        read_utf(reader, MAX_STRING_LEN)
    }
}

// Vec<T> encoding (VarInt length prefix)
impl<T: Encode> Encode for [T] {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_length(writer, self.len())?;
        for item in self {
            item.encode(writer)?;
        }
        Ok(())
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.as_slice().encode(writer)
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode<R: Read>(reader: &mut R) -> Result<Self> {
        let len = read_length(reader)?;
        // Cap the preallocation; a hostile prefix must not reserve gigabytes.
        let mut vec = Vec::with_capacity(len.min(256));
        for _ in 0..len {
            vec.push(T::decode(reader)?);
        }
        Ok(vec)
    }
}
