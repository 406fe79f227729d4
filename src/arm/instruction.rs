// License below.
//! Implements the decoded instruction record.
#![cfg_attr(feature="clippy", warn(result_unwrap_used, option_unwrap_used, print_stdout))]
#![cfg_attr(feature="clippy", warn(single_match_else, string_add, string_add_assign))]
#![cfg_attr(feature="clippy", warn(wrong_pub_self_convention))]
#![warn(missing_docs)]

use super::condition::ArmCondition;
use super::opcode::Opcode;
use super::operand::{Operand, VectorKind};

/// One decoded instruction.
///
/// This is the complete output of the disassembler for a single
/// encoding. Address and length are always populated, even for
/// `Invalid` records, so a caller can keep stepping through a
/// partially garbled instruction stream.
#[derive(Debug, PartialEq, Clone)]
pub struct ArmInstruction {
    /// The decoded opcode, `Opcode::Invalid` for undefined encodings.
    pub opcode: Opcode,
    /// The operands, in assembly order.
    pub operands: Vec<Operand>,
    /// The address of the first byte of the encoding.
    pub address: u64,
    /// The length of the encoding in bytes: 2 or 4 for T32, 4 for A64.
    pub length: u8,
    /// The condition under which the instruction executes.
    pub condition: ArmCondition,
    /// Whether the instruction updates the status flags.
    pub update_flags: bool,
    /// Whether the instruction writes a computed address back to its
    /// base register.
    pub writeback: bool,
    /// The shift applied to the last operand, `Opcode::Invalid` when
    /// there is none.
    pub shift_type: Opcode,
    /// The shift amount, when `shift_type` says there is a shift.
    pub shift_value: Option<Operand>,
    /// The SIMD lane arrangement or conversion of the instruction.
    pub vector_data: VectorKind,
}

impl ArmInstruction {
    /// Creates the `Invalid` record for an undecodable encoding at
    /// the given address.
    ///
    /// This is the error signal of the disassembler: it is a normal
    /// record with an empty operand list, never a null value, and it
    /// never aborts the instruction stream.
    pub fn invalid(address: u64, length: u8) -> ArmInstruction {
        ArmInstruction {
            opcode: Opcode::Invalid,
            operands: Vec::new(),
            address: address,
            length: length,
            condition: ArmCondition::AL,
            update_flags: false,
            writeback: false,
            shift_type: Opcode::Invalid,
            shift_value: None,
            vector_data: VectorKind::Invalid,
        }
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
