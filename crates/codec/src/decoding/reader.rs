use crate::DecodingError;

use alloy_primitives::U256;

/// A bounds-checked big-endian cursor over the batch payload.
///
/// Every read validates the requested length against the remaining buffer and
/// fails with [`DecodingError::Eof`] on overrun, centralizing truncation
/// handling for the record walk.
#[derive(Debug)]
pub(crate) struct Reader<'a> {
    buf: &'a [u8],
}

impl<'a> Reader<'a> {
    /// Returns a new reader over the provided buffer.
    pub(crate) const fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    /// Returns true once the cursor reached the end of the buffer.
    pub(crate) const fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Reads `len` raw bytes and advances the cursor.
    pub(crate) fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], DecodingError> {
        if self.buf.len() < len {
            return Err(DecodingError::Eof)
        }
        let (head, rest) = self.buf.split_at(len);
        self.buf = rest;
        Ok(head)
    }

    /// Reads a `len` byte big-endian unsigned integer, failing with
    /// [`DecodingError::ValueOverflow`] for widths over 8 bytes.
    pub(crate) fn read_uint(&mut self, len: usize) -> Result<u64, DecodingError> {
        if len > 8 {
            return Err(DecodingError::ValueOverflow)
        }
        let bytes = self.read_bytes(len)?;
        let mut arr = [0u8; 8];
        arr[8 - len..].copy_from_slice(bytes);
        Ok(u64::from_be_bytes(arr))
    }

    /// Reads a `len` byte big-endian unsigned integer wider than 8 bytes,
    /// failing with [`DecodingError::ValueOverflow`] if it does not fit a u64.
    pub(crate) fn read_wide_uint(&mut self, len: usize) -> Result<u64, DecodingError> {
        let bytes = self.read_bytes(len)?;
        u64::try_from(U256::from_be_slice(bytes)).map_err(|_| DecodingError::ValueOverflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_read_uint_and_advance() {
        let buf = [0x00, 0x01, 0x02, 0xff];
        let mut reader = Reader::new(&buf);

        assert_eq!(reader.read_uint(3).unwrap(), 0x0102);
        assert_eq!(reader.read_uint(1).unwrap(), 0xff);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_should_fail_on_overrun() {
        let buf = [0x00, 0x01];
        let mut reader = Reader::new(&buf);

        assert!(matches!(reader.read_bytes(3), Err(DecodingError::Eof)));
        // a failed read does not advance the cursor.
        assert_eq!(reader.read_uint(2).unwrap(), 1);
    }

    #[test]
    fn test_should_reject_uint_width_over_eight() {
        let buf = [0x01; 9];
        let mut reader = Reader::new(&buf);

        assert!(matches!(reader.read_uint(9), Err(DecodingError::ValueOverflow)));
        // the rejected width does not advance the cursor.
        assert_eq!(reader.read_uint(8).unwrap(), 0x0101_0101_0101_0101);
    }

    #[test]
    fn test_should_fail_on_wide_uint_overflow() {
        let buf = [0xff; 16];
        let mut reader = Reader::new(&buf);

        assert!(matches!(reader.read_wide_uint(16), Err(DecodingError::ValueOverflow)));
    }

    #[test]
    fn test_should_read_wide_uint() {
        let mut buf = [0u8; 32];
        buf[31] = 7;
        let mut reader = Reader::new(&buf);

        assert_eq!(reader.read_wide_uint(32).unwrap(), 7);
    }
}
