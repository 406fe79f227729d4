// License below.
//! Implements a sequential little-endian cursor over a byte buffer.
//!
//! The disassembler pulls 16- and 32-bit code units through this
//! cursor. A read that would run past the end of the buffer returns
//! `None` and consumes nothing, which is how the instruction stream
//! terminates. The cursor tracks the address of the next unread byte
//! so that every instruction record can be stamped with the address
//! of its first byte.
#![cfg_attr(feature="clippy", warn(result_unwrap_used, option_unwrap_used, print_stdout))]
#![cfg_attr(feature="clippy", warn(single_match_else, string_add, string_add_assign))]
#![cfg_attr(feature="clippy", warn(wrong_pub_self_convention))]
#![warn(missing_docs)]

use byteorder::{ByteOrder, LittleEndian};

/// A little-endian byte-stream cursor with address tracking.
#[derive(Debug, Clone)]
pub struct ImageReader<'a> {
    bytes: &'a [u8],
    pos: usize,
    addr: u64,
}

impl<'a> ImageReader<'a> {
    /// Creates a cursor over `bytes`, mapped at base address `addr`.
    pub fn new(bytes: &'a [u8], addr: u64) -> ImageReader<'a> {
        ImageReader { bytes: bytes, pos: 0, addr: addr }
    }

    /// The address of the next unread byte.
    pub fn address(&self) -> u64 {
        self.addr
    }

    /// Reads a little-endian halfword, advancing the cursor by 2.
    ///
    /// # Returns
    /// - `Some`: The halfword at the current position.
    /// - `None`: Fewer than 2 bytes remain. Nothing is consumed.
    pub fn try_read_u16_le(&mut self) -> Option<u16> {
        if self.bytes.len() - self.pos < 2 { return None; }
        let x = LittleEndian::read_u16(&self.bytes[self.pos ..]);
        self.pos  += 2;
        self.addr += 2;
        Some(x)
    }

    /// Reads a little-endian word, advancing the cursor by 4.
    ///
    /// # Returns
    /// - `Some`: The word at the current position.
    /// - `None`: Fewer than 4 bytes remain. Nothing is consumed.
    pub fn try_read_u32_le(&mut self) -> Option<u32> {
        if self.bytes.len() - self.pos < 4 { return None; }
        let x = LittleEndian::read_u32(&self.bytes[self.pos ..]);
        self.pos  += 4;
        self.addr += 4;
        Some(x)
    }
}


#[cfg(test)]
mod test {
    #![allow(missing_docs)]

    use super::ImageReader;

    #[test]
    pub fn reads_little_endian_units() {
        let bytes = [0x18, 0xBF, 0xC0, 0x03, 0x5F, 0xD6];
        let mut r = ImageReader::new(&bytes, 0x8000);
        assert_eq!(r.try_read_u16_le(), Some(0xBF18));
        assert_eq!(r.address(), 0x8002);
        assert_eq!(r.try_read_u32_le(), Some(0xD65F03C0));
        assert_eq!(r.address(), 0x8006);
    }

    #[test]
    pub fn short_read_consumes_nothing() {
        let bytes = [0xAA, 0xBB];
        let mut r = ImageReader::new(&bytes, 0);
        assert_eq!(r.try_read_u32_le(), None);
        assert_eq!(r.address(), 0);
        // The remaining halfword is still readable afterwards.
        assert_eq!(r.try_read_u16_le(), Some(0xBBAA));
        assert_eq!(r.try_read_u16_le(), None);
        assert_eq!(r.address(), 2);
    }

    #[test]
    pub fn empty_buffer() {
        let mut r = ImageReader::new(&[], 0x1234);
        assert_eq!(r.try_read_u16_le(), None);
        assert_eq!(r.try_read_u32_le(), None);
        assert_eq!(r.address(), 0x1234);
    }
}


/*
Licensed to the Apache Software Foundation (ASF) under one
or more contributor license agreements.  See the NOTICE file
distributed with this work for additional information
regarding copyright ownership.  The ASF licenses this file
to you under the Apache License, Version 2.0 (the
"License"); you may not use this file except in compliance
with the License.  You may obtain a copy of the License at

  http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing,
software distributed under the License is distributed on an
"AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
KIND, either express or implied.  See the License for the
specific language governing permissions and limitations
under the License.
*/
