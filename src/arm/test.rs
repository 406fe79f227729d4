// License below.
#![allow(missing_docs)]

use super::*;

fn t32(bytes: &[u8], addr: u64) -> Disassembler {
    Disassembler::new(ArmVariant::T32, ImageReader::new(bytes, addr))
}

fn a64(bytes: &[u8], addr: u64) -> Disassembler {
    Disassembler::new(ArmVariant::A64, ImageReader::new(bytes, addr))
}

#[test]
pub fn a64_stream_with_addresses() {
    // mov x0, #0; ret
    let code = [0x00, 0x00, 0x80, 0xD2, 0xC0, 0x03, 0x5F, 0xD6];
    let mut dasm = a64(&code, 0x1000);

    let inst = dasm.disassemble_one().unwrap();
    assert_eq!(inst.opcode, Opcode::MOVZ);
    assert_eq!(inst.address, 0x1000);
    assert_eq!(inst.length, 4);

    let inst = dasm.disassemble_one().unwrap();
    assert_eq!(inst.opcode, Opcode::RET);
    assert_eq!(inst.address, 0x1004);

    assert!(dasm.disassemble_one().is_none());
}

#[test]
pub fn a64_truncated_word_ends_the_stream() {
    let code = [0x00, 0x00];
    let mut dasm = a64(&code, 0);
    assert!(dasm.disassemble_one().is_none());
}

#[test]
pub fn a64_invalid_does_not_derail_the_stream() {
    // Four zero bytes, then ret.
    let code = [0x00, 0x00, 0x00, 0x00, 0xC0, 0x03, 0x5F, 0xD6];
    let mut dasm = a64(&code, 0x2000);

    let inst = dasm.disassemble_one().unwrap();
    assert_eq!(inst.opcode, Opcode::Invalid);
    assert_eq!(inst.address, 0x2000);
    assert_eq!(inst.length, 4);

    let inst = dasm.disassemble_one().unwrap();
    assert_eq!(inst.opcode, Opcode::RET);
    assert_eq!(inst.address, 0x2004);
}

#[test]
pub fn t32_mixed_lengths_and_addresses() {
    // nop; bl #+0x100; nop
    let code = [0x00, 0xBF, 0x00, 0xF0, 0x80, 0xF8, 0x00, 0xBF];
    let records: Vec<ArmInstruction> = t32(&code, 0x8000).collect();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].length, 2);
    assert_eq!(records[1].opcode, Opcode::BL);
    assert_eq!(records[1].address, 0x8002);
    assert_eq!(records[1].length, 4);
    assert_eq!(records[2].address, 0x8006);

    // Address plus length always lands on the next record.
    for pair in records.windows(2) {
        assert_eq!(pair[0].address + pair[0].length as u64, pair[1].address);
    }
}

#[test]
pub fn t32_truncated_second_halfword_ends_the_stream() {
    // A lone bl first halfword.
    let code = [0x00, 0xF0];
    let mut dasm = t32(&code, 0);
    assert!(dasm.disassemble_one().is_none());
}

#[test]
pub fn it_block_single_slot() {
    // it ne; mov r0, r1; mov r1, r2
    let code = [0x18, 0xBF, 0x08, 0x46, 0x11, 0x46];
    let records: Vec<ArmInstruction> = t32(&code, 0x8000).collect();
    assert_eq!(records.len(), 3);

    assert_eq!(records[0].opcode, Opcode::IT);
    assert_eq!(records[0].condition, ArmCondition::AL);

    assert_eq!(records[1].opcode, Opcode::MOV);
    assert_eq!(records[1].condition, ArmCondition::NE);

    // The block is one slot long; the third instruction is outside.
    assert_eq!(records[2].opcode, Opcode::MOV);
    assert_eq!(records[2].condition, ArmCondition::AL);
}

#[test]
pub fn it_block_then_then_else() {
    // itte ne; mov r0, r1; mov r1, r2; mov r2, r3; mov r3, r4
    let code = [0x1A, 0xBF, 0x08, 0x46, 0x11, 0x46, 0x1A, 0x46, 0x23, 0x46];
    let records: Vec<ArmInstruction> = t32(&code, 0).collect();
    assert_eq!(records.len(), 5);
    assert_eq!(records[1].condition, ArmCondition::NE);
    assert_eq!(records[2].condition, ArmCondition::NE);
    assert_eq!(records[3].condition, ArmCondition::EQ);
    assert_eq!(records[4].condition, ArmCondition::AL);
}

#[test]
pub fn it_block_with_even_base_condition() {
    // iteq has a zero low condition bit, flipping the mask sense:
    // ite eq; add; sub; outside again.
    // ite eq = 0xBF0C (mask = 0b1100 with cond<0> = 0).
    let code = [0x0C, 0xBF, 0x88, 0x18, 0x88, 0x18, 0x88, 0x18];
    let records: Vec<ArmInstruction> = t32(&code, 0).collect();
    assert_eq!(records[1].condition, ArmCondition::EQ);
    assert_eq!(records[2].condition, ArmCondition::NE);
    assert_eq!(records[3].condition, ArmCondition::AL);
}

#[test]
pub fn iterator_and_one_shot_agree() {
    let code = [0x00, 0xBF, 0x00, 0xBF];
    let collected: Vec<ArmInstruction> = t32(&code, 0x10).collect();
    let mut dasm = t32(&code, 0x10);
    let mut one_by_one = Vec::new();
    while let Some(inst) = dasm.disassemble_one() {
        one_by_one.push(inst);
    }
    assert_eq!(collected, one_by_one);
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
