//! Reads a packed bitstream, most significant bit first.
//!
//! The compressed payload is a sequence of variable-length Huffman codes, so
//! decompression consumes input one bit at a time. This reader works from any
//! I/O source that supports the read() call; in-memory byte slices work
//! directly since `&[u8]` implements `Read`.

use log::error;

const BUFFER_SIZE: usize = 1024 * 1024;

/// Reads a packed bitstream from a byte source.
#[derive(Debug)]
pub struct BitReader<R> {
    buffer: Vec<u8>,
    cursor: usize,
    bit_index: usize,
    source: R,
}

impl<R: std::io::Read> BitReader<R> {
    /// Creates a new BitReader (with a 1Mbyte buffer).
    pub fn new(source: R) -> Self {
        Self {
            buffer: vec![0; BUFFER_SIZE],
            cursor: BUFFER_SIZE,
            bit_index: 0,
            source,
        }
    }

    /// Check (and refill) the buffer. Returns true if we have data, false if
    /// there is no more. A read error from the source also ends the stream.
    fn have_data(&mut self) -> bool {
        // Only try to read more data when the cursor has walked off the buffer
        if self.cursor == self.buffer.len() {
            // Restore full capacity before reading; the last refill may have
            // truncated the buffer to a short read.
            self.buffer.resize(BUFFER_SIZE, 0);
            let size = match self.source.read(&mut self.buffer) {
                Ok(size) => size,
                Err(e) => {
                    error!("Unable to read source data: {}", e);
                    0
                }
            };
            // If nothing came back from our read attempt, then we have no more data.
            if size == 0 {
                self.buffer.clear();
                self.cursor = 0;
                return false;
            }
            // Adjust the buffer if we read less than the buffer size
            self.buffer.truncate(size);
            // Reset the cursor and bit index
            self.cursor = 0;
            self.bit_index = 0;
        }
        true
    }

    /// Return the next bit as Option<usize> (1 or 0), or None if there is no
    /// more data to read.
    pub fn bit(&mut self) -> Option<usize> {
        // A partial byte is only ever at the cursor, so a refill check is
        // needed just when we are aligned on a byte boundary.
        if self.bit_index == 0 && !self.have_data() {
            return None;
        }
        let bit = (self.buffer[self.cursor] >> (7 - self.bit_index)) & 1;
        self.bit_index = (self.bit_index + 1) % 8;
        if self.bit_index == 0 {
            self.cursor += 1;
        }
        Some(bit as usize)
    }

    /// Return Option<bool> *true* if the next bit is 1, *false* if 0,
    /// consuming the bit, or None if there is no more data to read.
    pub fn bool_bit(&mut self) -> Option<bool> {
        self.bit().map(|bit| bit == 1)
    }

    /// Return Option<usize> of the next n bits, most significant first, or
    /// None if the source runs out before n bits are read.
    pub fn bint(&mut self, n: usize) -> Option<usize> {
        let mut result = 0_usize;
        for _ in 0..n {
            result = result << 1 | self.bit()?;
        }
        Some(result)
    }

    /// Returns a byte as an Option<u8>, or None if there is no more data to
    /// read. This is a convenience function, and calls bint(8).
    pub fn byte(&mut self) -> Option<u8> {
        self.bint(8).map(|byte| byte as u8)
    }

    /// Returns an Option<Vec<u8>> of n bytes, or None if the source runs out
    /// before n bytes are read.
    pub fn bytes(&mut self, n: usize) -> Option<Vec<u8>> {
        let mut result: Vec<u8> = Vec::with_capacity(n);
        for _ in 0..n {
            result.push(self.byte()?);
        }
        Some(result)
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}

#[cfg(test)]
mod test {
    use super::BitReader;

    #[test]
    fn basic_test() {
        let x = [0b10000001_u8].as_slice();
        let mut br = BitReader::new(x);
        assert_eq!(br.bit(), Some(1));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(1));
        assert_eq!(br.bit(), None);
    }

    #[test]
    fn bint_test() {
        let x = [0b00011011].as_slice();
        let mut br = BitReader::new(x);
        assert_eq!(br.bint(5), Some(3));
        assert_eq!(br.bint(1), Some(0));
        assert_eq!(br.bint(2), Some(3));
        assert_eq!(br.bint(1), None);
    }

    #[test]
    fn bint_u32_test() {
        let x = [0, 0, 1, 4].as_slice();
        let mut br = BitReader::new(x);
        assert_eq!(br.bint(32), Some(260));
    }

    #[test]
    fn byte_test() {
        let x = "Hello, world!".as_bytes();
        let mut br = BitReader::new(x);
        assert_eq!(br.byte(), Some(b'H'));
        assert_eq!(br.byte(), Some(b'e'));
        assert_eq!(br.byte(), Some(b'l'));
        assert_eq!(br.byte(), Some(b'l'));
    }

    #[test]
    fn bytes_test() {
        let x = "Hello, world!".as_bytes();
        let mut br = BitReader::new(x);
        assert_eq!(br.bytes(5), Some("Hello".as_bytes().to_vec()));
        assert_eq!(br.bytes(100), None);
    }

    #[test]
    fn loc_test() {
        let x = "Hello, world!".as_bytes();
        let mut br = BitReader::new(x);
        br.bytes(5);
        br.bit();
        assert_eq!(br.loc(), "[5.1]");
    }

    #[test]
    fn bool_bit_test() {
        let x = [0b01010000].as_slice();
        let mut br = BitReader::new(x);
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), Some(true));
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), Some(true));
    }
}
