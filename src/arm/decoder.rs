// License below.
//! Implements the dispatch nodes of the decoder trees.
//!
//! A decoder tree is a hierarchy of dispatch nodes mirroring the
//! encoding tables of the ARM Architecture Reference Manual. Inner
//! nodes pick a child by reading bitfields of the instruction word;
//! leaves either assemble an instruction record by running a list of
//! operand mutators, or give up in one of two ways: `Invalid` for
//! encodings the architecture leaves undefined, `Nyi` for encodings
//! this crate does not decode yet. Neither ever aborts the
//! instruction stream.
//!
//! The trees are built once and never mutated, so a single tree is
//! safely shared by any number of disassembler instances.
#![cfg_attr(feature="clippy", warn(result_unwrap_used, option_unwrap_used, print_stdout))]
#![cfg_attr(feature="clippy", warn(single_match_else, string_add, string_add_assign))]
#![cfg_attr(feature="clippy", warn(wrong_pub_self_convention))]
#![warn(missing_docs)]

use std::collections::HashMap;

use super::bits::{read_fields, Bitfield};
use super::condition::ArmCondition;
use super::instruction::ArmInstruction;
use super::mutators::Mutator;
use super::opcode::Opcode;
use super::operand::{Operand, VectorKind};

/// The in-progress decode state of a single instruction.
///
/// A fresh state is created per instruction, which keeps the shared
/// decoder trees free of interior mutability. Mutators fill the
/// state in; the leaf decoder turns it into an
/// [`ArmInstruction`](./struct.ArmInstruction.html).
#[derive(Debug)]
pub struct DasmState {
    /// The address of the instruction being decoded.
    pub addr: u64,
    /// The length in bytes of the instruction being decoded.
    pub length: u8,
    /// The operands collected so far.
    pub operands: Vec<Operand>,
    /// The condition collected so far, `AL` unless a mutator says
    /// otherwise.
    pub condition: ArmCondition,
    /// Whether the instruction updates the status flags.
    pub update_flags: bool,
    /// Whether the instruction writes back to its base register.
    pub writeback: bool,
    /// The pending operand shift operator.
    pub shift_type: Opcode,
    /// The pending operand shift amount.
    pub shift_value: Option<Operand>,
    /// The pending vector arrangement.
    pub vector_data: VectorKind,
    /// Whether `V(..)` register mutators pick the 128-bit bank.
    pub use_q: bool,
    /// The `(condition, mask)` captured from an `it` instruction,
    /// consumed by the driver's IT state machine.
    pub it_block: Option<(ArmCondition, u32)>,
}

impl DasmState {
    /// Creates a fresh decode state for one instruction.
    pub fn new(addr: u64, length: u8) -> DasmState {
        DasmState {
            addr: addr,
            length: length,
            operands: Vec::with_capacity(5),
            condition: ArmCondition::AL,
            update_flags: false,
            writeback: false,
            shift_type: Opcode::Invalid,
            shift_value: None,
            vector_data: VectorKind::Invalid,
            use_q: false,
            it_block: None,
        }
    }

    /// Resets everything except address and length.
    fn clear(&mut self) {
        self.operands.clear();
        self.condition = ArmCondition::AL;
        self.update_flags = false;
        self.writeback = false;
        self.shift_type = Opcode::Invalid;
        self.shift_value = None;
        self.vector_data = VectorKind::Invalid;
        self.use_q = false;
        self.it_block = None;
    }

    /// The `Invalid` record for the current address and length.
    pub fn invalid(&self) -> ArmInstruction {
        ArmInstruction::invalid(self.addr, self.length)
    }

    fn assemble(&mut self, opcode: Opcode) -> ArmInstruction {
        use std::mem;
        ArmInstruction {
            opcode: opcode,
            operands: mem::replace(&mut self.operands, Vec::new()),
            address: self.addr,
            length: self.length,
            condition: self.condition,
            update_flags: self.update_flags,
            writeback: self.writeback,
            shift_type: self.shift_type,
            shift_value: self.shift_value,
            vector_data: self.vector_data,
        }
    }
}

/// One node of a decoder tree.
pub enum Decoder {
    /// A leaf: an opcode plus the mutators extracting its operands.
    Instr(Opcode, Vec<Mutator>),
    /// Dispatches on a contiguous bitfield; has exactly
    /// `2^width` children.
    Mask {
        /// Position of the least significant dispatch bit.
        offset: u8,
        /// Number of dispatch bits.
        width: u8,
        /// One child per possible field value.
        children: Vec<Decoder>,
    },
    /// Dispatches on several concatenated bitfields; has exactly
    /// `2^total` children for their total width.
    BitfieldMask {
        /// The dispatch fields, concatenated left-to-right.
        fields: Vec<Bitfield>,
        /// One child per possible concatenated value.
        children: Vec<Decoder>,
    },
    /// A two-way branch on a predicate over concatenated bitfields.
    Select {
        /// The predicate's input fields.
        fields: Vec<Bitfield>,
        /// The predicate deciding the branch.
        predicate: fn(u32) -> bool,
        /// Taken when the predicate holds.
        yes: Box<Decoder>,
        /// Taken otherwise.
        no: Box<Decoder>,
    },
    /// Dispatches on a bitfield through a partial value map.
    Sparse {
        /// Position of the least significant dispatch bit.
        offset: u8,
        /// Number of dispatch bits.
        width: u8,
        /// Fallback for unmapped values.
        default: Box<Decoder>,
        /// The mapped values.
        table: HashMap<u32, Decoder>,
    },
    /// An encoding that is architecturally defined but not decoded
    /// yet. Logs a diagnostic and yields the `Invalid` record.
    Nyi(&'static str),
    /// An architecturally undefined encoding.
    Invalid,
}

impl Decoder {
    /// Decodes one instruction word.
    ///
    /// Dispatches through the tree until a leaf is reached. Always
    /// returns a record; failures of any kind come back as the
    /// `Invalid` record with address and length filled in.
    pub fn decode(&self, word: u32, state: &mut DasmState) -> ArmInstruction {
        match *self {
            Decoder::Instr(opcode, ref mutators) => {
                state.clear();
                for m in mutators {
                    if !m.apply(word, state) {
                        return state.invalid();
                    }
                }
                state.assemble(opcode)
            }
            Decoder::Mask { offset, width, ref children } => {
                let index = (word >> offset) & ((1 << width) - 1);
                children[index as usize].decode(word, state)
            }
            Decoder::BitfieldMask { ref fields, ref children } => {
                let index = read_fields(fields, word);
                children[index as usize].decode(word, state)
            }
            Decoder::Select { ref fields, predicate, ref yes, ref no } => {
                if predicate(read_fields(fields, word)) {
                    yes.decode(word, state)
                } else {
                    no.decode(word, state)
                }
            }
            Decoder::Sparse { offset, width, ref default, ref table } => {
                let value = (word >> offset) & ((1 << width) - 1);
                match table.get(&value) {
                    Some(child) => child.decode(word, state),
                    None => default.decode(word, state),
                }
            }
            Decoder::Nyi(message) => {
                debug!("unimplemented encoding {:#010X} at {:#X}: {}",
                       word, state.addr, message);
                state.invalid()
            }
            Decoder::Invalid => state.invalid(),
        }
    }
}

/// Builds a leaf decoder.
pub fn instr(opcode: Opcode, mutators: Vec<Mutator>) -> Decoder {
    Decoder::Instr(opcode, mutators)
}

/// Builds a mask decoder over `width` bits at `offset`.
///
/// # Panics
/// In debug builds, if the child count is not `2^width`.
pub fn mask(offset: u8, width: u8, children: Vec<Decoder>) -> Decoder {
    debug_assert!(children.len() == 1 << width,
                  "mask({}, {}) wants {} children, got {}",
                  offset, width, 1 << width, children.len());
    Decoder::Mask { offset: offset, width: width, children: children }
}

/// Builds a mask decoder over concatenated bitfields.
///
/// # Panics
/// In debug builds, if the child count does not match the total
/// field width.
pub fn fields_mask(fields: Vec<Bitfield>, children: Vec<Decoder>) -> Decoder {
    let total: u32 = fields.iter().map(|f| f.length as u32).sum();
    debug_assert!(children.len() == 1 << total,
                  "fields_mask of {} bits wants {} children, got {}",
                  total, 1u64 << total, children.len());
    Decoder::BitfieldMask { fields: fields, children: children }
}

/// Builds a two-way predicate decoder.
pub fn select(fields: Vec<Bitfield>, predicate: fn(u32) -> bool,
              yes: Decoder, no: Decoder) -> Decoder {
    Decoder::Select {
        fields: fields,
        predicate: predicate,
        yes: Box::new(yes),
        no: Box::new(no),
    }
}

/// Builds a sparse decoder from `(value, child)` pairs.
pub fn sparse(offset: u8, width: u8, default: Decoder,
              entries: Vec<(u32, Decoder)>) -> Decoder {
    let mut table = HashMap::with_capacity(entries.len());
    for (value, child) in entries {
        debug_assert!(value < (1 << width));
        let old = table.insert(value, child);
        debug_assert!(old.is_none(), "sparse entry {} doubly assigned", value);
    }
    Decoder::Sparse {
        offset: offset,
        width: width,
        default: Box::new(default),
        table: table,
    }
}

/// Builds a not-yet-implemented leaf.
pub fn nyi(message: &'static str) -> Decoder {
    Decoder::Nyi(message)
}

/// Builds an undefined-encoding leaf.
pub fn invalid() -> Decoder {
    Decoder::Invalid
}


#[cfg(test)]
mod test {
    #![allow(missing_docs)]

    use super::*;
    use super::super::bits::bf;
    use super::super::mutators::Mutator;

    fn leaf(op: Opcode) -> Decoder {
        instr(op, vec![])
    }

    #[test]
    pub fn mask_picks_the_indexed_child() {
        let d = mask(4, 2, vec![
            leaf(Opcode::ADD), leaf(Opcode::SUB),
            leaf(Opcode::AND), leaf(Opcode::ORR),
        ]);
        let mut st = DasmState::new(0, 4);
        assert_eq!(d.decode(0b10_0000, &mut st).opcode, Opcode::SUB);
        assert_eq!(d.decode(0b11_1111, &mut st).opcode, Opcode::ORR);
    }

    #[test]
    pub fn sparse_falls_back_to_default() {
        let d = sparse(0, 4, leaf(Opcode::NOP), vec![
            (3, leaf(Opcode::SEV)),
            (7, leaf(Opcode::WFI)),
        ]);
        let mut st = DasmState::new(0, 4);
        assert_eq!(d.decode(3, &mut st).opcode, Opcode::SEV);
        assert_eq!(d.decode(7, &mut st).opcode, Opcode::WFI);
        assert_eq!(d.decode(9, &mut st).opcode, Opcode::NOP);
    }

    #[test]
    pub fn select_branches_on_predicate() {
        let d = select(vec![bf(0, 5)], |n| n == 31,
                       leaf(Opcode::RET), leaf(Opcode::BR));
        let mut st = DasmState::new(0, 4);
        assert_eq!(d.decode(31, &mut st).opcode, Opcode::RET);
        assert_eq!(d.decode(30, &mut st).opcode, Opcode::BR);
    }

    #[test]
    pub fn failing_mutator_yields_invalid_with_position() {
        let d = instr(Opcode::AND, vec![Mutator::LogicalImm { is64: false }]);
        let mut st = DasmState::new(0x100, 4);
        // N=1 is not a valid 32-bit bitmask immediate.
        let inst = d.decode(1 << 22, &mut st);
        assert_eq!(inst.opcode, Opcode::Invalid);
        assert_eq!(inst.address, 0x100);
        assert_eq!(inst.length, 4);
        assert!(inst.operands.is_empty());
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
