// License below.
//! Implements the disassembler core for the T32 and A64 instruction
//! encodings.
//!
//! The public surface is small: construct a
//! [`Disassembler`](./struct.Disassembler.html) from an
//! architecture variant and an [`ImageReader`](./struct.ImageReader.html),
//! then pull [`ArmInstruction`](./struct.ArmInstruction.html) records
//! out of it, one per encoding, in ascending address order.
//!
//! Decoding is total: undefined encodings become `Invalid` records
//! with address and length intact, and the stream only ends when the
//! reader runs out of bytes. The decoder trees are immutable and
//! shared; all mutable state (the cursor and the T32 IT tracking)
//! lives in the disassembler instance, so one instance must not be
//! shared across threads but any number of instances may coexist.
#![cfg_attr(feature="clippy", warn(result_unwrap_used, option_unwrap_used, print_stdout))]
#![cfg_attr(feature="clippy", warn(single_match_else, string_add, string_add_assign))]
#![cfg_attr(feature="clippy", warn(wrong_pub_self_convention))]
#![warn(missing_docs)]

pub use self::condition::ArmCondition;
pub use self::instruction::ArmInstruction;
pub use self::opcode::Opcode;
pub use self::operand::{BarrierOption, ImmValue, MemoryOperand, Operand,
                        PrimitiveType, VectorKind};
pub use self::reader::ImageReader;
pub use self::registers::{RegisterFamily, RegisterId};

pub mod a64;
pub mod bits;
pub mod condition;
pub mod decoder;
pub mod immediates;
pub mod instruction;
pub mod mutators;
pub mod opcode;
pub mod operand;
pub mod reader;
pub mod registers;
pub mod t32;

#[cfg(test)]
mod test;

use self::decoder::DasmState;

/// The instruction set a disassembler decodes.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ArmVariant {
    #[doc = "Thumb-2, 16/32-bit encodings, 16-bit alignment."] T32,
    #[doc = "AArch64, fixed 32-bit encodings and alignment."]  A64,
}

/// A disassembler instance: a cursor over machine code plus the
/// decode state that survives between instructions.
#[derive(Debug)]
pub struct Disassembler<'a> {
    variant: ArmVariant,
    reader: ImageReader<'a>,
    it_condition: ArmCondition,
    it_state: u32,
}

impl<'a> Disassembler<'a> {
    /// Creates a disassembler for the given instruction set.
    pub fn new(variant: ArmVariant, reader: ImageReader<'a>) -> Disassembler<'a> {
        Disassembler {
            variant: variant,
            reader: reader,
            it_condition: ArmCondition::AL,
            it_state: 0,
        }
    }

    /// Decodes the instruction at the cursor.
    ///
    /// # Returns
    /// - `Some`: The decoded record, possibly `Invalid`. The cursor
    ///   has advanced past the encoding.
    /// - `None`: Not enough bytes remain for another instruction.
    pub fn disassemble_one(&mut self) -> Option<ArmInstruction> {
        match self.variant {
            ArmVariant::A64 => self.disassemble_a64(),
            ArmVariant::T32 => self.disassemble_t32(),
        }
    }

    fn disassemble_a64(&mut self) -> Option<ArmInstruction> {
        let addr = self.reader.address();
        let word = match self.reader.try_read_u32_le() {
            Some(x) => x,
            None => return None,
        };
        let mut state = DasmState::new(addr, 4);
        Some(a64::decoder().decode(word, &mut state))
    }

    fn disassemble_t32(&mut self) -> Option<ArmInstruction> {
        let addr = self.reader.address();
        let hw1 = match self.reader.try_read_u16_le() {
            Some(x) => x,
            None => return None,
        };

        // The top five bits of the first halfword pick the length;
        // 0b11100 stays the 16-bit unconditional branch.
        let (mut instruction, mut state) = if (hw1 >> 11) > 0b11100 {
            let hw2 = match self.reader.try_read_u16_le() {
                Some(x) => x,
                None => return None,
            };
            let word = ((hw1 as u32) << 16) | (hw2 as u32);
            let mut state = DasmState::new(addr, 4);
            (t32::long_decoder().decode(word, &mut state), state)
        } else {
            let mut state = DasmState::new(addr, 2);
            (t32::short_decoder().decode(hw1 as u32, &mut state), state)
        };

        self.advance_it_state(&mut instruction, &mut state);
        Some(instruction)
    }

    /// Applies and advances the IT block state machine.
    ///
    /// An `it` instruction loads the machine; each following
    /// instruction consumes one slot, rewriting its own condition to
    /// the block's base condition or its inverse. When the low five
    /// state bits hit the terminator pattern the machine resets.
    fn advance_it_state(&mut self, instruction: &mut ArmInstruction, state: &mut DasmState) {
        if self.it_state != 0 && instruction.opcode != Opcode::IT {
            if self.it_state & 0x1F == 0x10 {
                self.it_state = 0;
                self.it_condition = ArmCondition::AL;
            } else {
                instruction.condition = if (self.it_state >> 4) & 1 != 0 {
                    self.it_condition.invert()
                } else {
                    self.it_condition
                };
                self.it_state <<= 1;
            }
        } else if let Some((cond, mask)) = state.it_block.take() {
            // Normalize the mask: the bits above the terminator are
            // then/else choices encoded relative to the base
            // condition's low bit. After the XOR a set bit always
            // means "else".
            let lowest = mask & mask.wrapping_neg();
            let above = 0xF & !((lowest << 1) - 1);
            self.it_condition = cond;
            self.it_state = if cond as u32 & 1 != 0 { mask ^ above } else { mask };
        }
    }
}

impl<'a> Iterator for Disassembler<'a> {
    type Item = ArmInstruction;

    fn next(&mut self) -> Option<ArmInstruction> {
        self.disassemble_one()
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
