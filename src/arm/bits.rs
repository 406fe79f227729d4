// License below.
//! Implements bitfield extraction from raw instruction words.
//!
//! Both instruction sets pack their operands into bit-ranges of a
//! 16- or 32-bit instruction word, frequently split into several
//! non-contiguous pieces. A [`Bitfield`](./struct.Bitfield.html)
//! names one contiguous piece; slices of bitfields are concatenated
//! left-to-right, optionally scaled by a trailing left-shift, and
//! optionally sign-extended from the combined bit count.
//!
//! ```text
//! read:                 (word >> offset) & ((1 << length) - 1)
//! read_fields:          r = 0; for f in fields { r = (r << f.length) | f.read(word) }
//! read_signed_fields:   read_fields, shift left, sign-extend from
//!                       (sum of lengths + shift) bits
//! ```
#![cfg_attr(feature="clippy", warn(result_unwrap_used, option_unwrap_used, print_stdout))]
#![cfg_attr(feature="clippy", warn(single_match_else, string_add, string_add_assign))]
#![cfg_attr(feature="clippy", warn(wrong_pub_self_convention))]
#![warn(missing_docs)]

/// A contiguous span of bits within an instruction word.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Bitfield {
    /// Position of the least significant bit of the span.
    pub offset: u8,
    /// Number of bits in the span.
    pub length: u8,
}

/// Shorthand constructor for a [`Bitfield`](./struct.Bitfield.html).
///
/// The decoder tables read a lot better with `bf(5, 19)` than with
/// a full struct literal per field.
pub const fn bf(offset: u8, length: u8) -> Bitfield {
    Bitfield { offset: offset, length: length }
}

impl Bitfield {
    /// Reads the unsigned value of this bitfield from a word.
    pub fn read(self, word: u32) -> u32 {
        (word >> self.offset) & ((1 << self.length) - 1)
    }

    /// Reads this bitfield from a word and sign-extends it.
    pub fn read_signed(self, word: u32) -> i32 {
        let x = self.read(word);
        let sh = 32 - self.length as u32;
        ((x << sh) as i32) >> sh
    }
}

/// Reads multiple bitfields and concatenates them left-to-right.
///
/// The first field in the slice ends up in the most significant
/// position of the result.
pub fn read_fields(fields: &[Bitfield], word: u32) -> u32 {
    let mut result = 0;
    for f in fields {
        result = (result << f.length) | f.read(word);
    }
    result
}

/// Concatenates bitfields, scales and sign-extends the result.
///
/// The scaling shift is applied before sign-extension, so the sign
/// bit is taken from the concatenated value and the shifted-in zeros
/// count towards the total width. A 19-bit field shifted by 2 is
/// sign-extended from 21 bits.
pub fn read_signed_fields(fields: &[Bitfield], word: u32, shift: u8) -> i64 {
    let mut total = shift as u32;
    for f in fields {
        total += f.length as u32;
    }
    let x = (read_fields(fields, word) as u64) << shift;
    let sh = 64 - total;
    ((x << sh) as i64) >> sh
}


#[cfg(test)]
mod test {
    #![allow(missing_docs)]

    use super::*;

    #[test]
    pub fn single_field_roundtrip() {
        // Insert a value at a field's position, read it back out.
        for &(offset, length, value) in &[
            ( 0_u8,  4_u8, 0b1011_u32),
            ( 5,     5,    0b10001),
            (12,     8,    0xA5),
            (21,    11,    0x7FF),
            (31,     1,    1),
        ] {
            let f = bf(offset, length);
            let word = value << offset;
            assert_eq!(f.read(word), value);
        }
    }

    #[test]
    pub fn field_masks_neighbours() {
        let f = bf(4, 4);
        assert_eq!(f.read(0xFFFF_FFFF), 0xF);
        assert_eq!(f.read(0x0000_0F00), 0);
        assert_eq!(f.read(0x0000_00F0), 0xF);
    }

    #[test]
    pub fn signed_read_extends() {
        assert_eq!(bf(0, 4).read_signed(0b1000), -8);
        assert_eq!(bf(0, 4).read_signed(0b0111), 7);
        assert_eq!(bf(8, 8).read_signed(0xFF00), -1);
    }

    #[test]
    pub fn concatenation_order() {
        // A64 adr: immhi at 5..23, immlo at 29..30.
        let fields = [bf(5, 19), bf(29, 2)];
        let word = (0x12345 << 5) | (0b10 << 29);
        assert_eq!(read_fields(&fields, word), (0x12345 << 2) | 0b10);
    }

    #[test]
    pub fn signed_concatenation_scales_then_extends() {
        // All-ones 19-bit field, scaled by 2: -4, not -1.
        let fields = [bf(5, 19)];
        let word = 0x7FFFF << 5;
        assert_eq!(read_signed_fields(&fields, word, 2), -4);
        // Positive values are unaffected by the extension.
        let word = 0x00123 << 5;
        assert_eq!(read_signed_fields(&fields, word, 2), 0x123 << 2);
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
