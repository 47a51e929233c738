use super::StringDescriptor;
use crate::error::ConvertError;
use std::io::Write;

/// Writes the primitive pieces of an MO file and tracks how many bytes went out.
#[derive(Debug)]
pub struct MoWriter<'a, W: Write> {
    writer: &'a mut W,
    position: u64,
}

impl<'a, W: Write> MoWriter<'a, W> {
    pub const fn new(writer: &'a mut W) -> Self {
        Self { writer, position: 0 }
    }

    #[must_use]
    pub const fn position(&self) -> u64 {
        self.position
    }

    #[inline]
    pub fn write_u32(&mut self, value: u32) -> Result<(), ConvertError> {
        self.write_bytes(&value.to_le_bytes())
    }

    pub fn write_descriptor(&mut self, descriptor: StringDescriptor) -> Result<(), ConvertError> {
        self.write_u32(descriptor.length)?;
        self.write_u32(descriptor.offset)
    }

    /// Write `s` followed by a zero byte.
    pub fn write_terminated(&mut self, s: &[u8]) -> Result<(), ConvertError> {
        self.write_bytes(s)?;
        self.write_bytes(&[0])
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), ConvertError> {
        self.writer
            .write_all(bytes)
            .map_err(|e| ConvertError::bad_output_with(format!("unable to write at byte {}", self.position), e))?;
        self.position += bytes.len() as u64;
        Ok(())
    }
}
