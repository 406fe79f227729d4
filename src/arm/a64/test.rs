// License below.
#![allow(missing_docs)]

use super::super::condition::ArmCondition;
use super::super::decoder::DasmState;
use super::super::instruction::ArmInstruction;
use super::super::opcode::Opcode;
use super::super::operand::{ImmValue, Operand, PrimitiveType, VectorKind};
use super::super::registers::{RegisterFamily, RegisterId};

fn decode_at(word: u32, addr: u64) -> ArmInstruction {
    let mut state = DasmState::new(addr, 4);
    super::decoder().decode(word, &mut state)
}

fn decode(word: u32) -> ArmInstruction {
    decode_at(word, 0x1_0000)
}

fn w(index: u8) -> Operand {
    Operand::Register(RegisterId::new(RegisterFamily::GpW, index))
}

fn x(index: u8) -> Operand {
    Operand::Register(RegisterId::new(RegisterFamily::GpX, index))
}

fn uimm32(value: i64) -> Operand {
    Operand::Immediate(ImmValue::new(value, PrimitiveType::Word))
}

fn uimm64(value: i64) -> Operand {
    Operand::Immediate(ImmValue::new(value, PrimitiveType::DoubleWord))
}

#[test]
pub fn movz_x0_zero() {
    let inst = decode(0xD280_0000);
    assert_eq!(inst.opcode, Opcode::MOVZ);
    assert_eq!(inst.operands, vec![x(0), uimm64(0)]);
    assert_eq!(inst.length, 4);
    assert_eq!(inst.shift_type, Opcode::Invalid);
}

#[test]
pub fn movz_with_shifted_half() {
    // movz x9, #0xABCD, lsl #32
    let inst = decode(0xD2C5_79A9);
    assert_eq!(inst.opcode, Opcode::MOVZ);
    assert_eq!(inst.operands, vec![x(9), uimm64(0xABCD)]);
    assert_eq!(inst.shift_type, Opcode::LSL);
    assert_eq!(inst.shift_value, Some(Operand::Immediate(
        ImmValue::new(32, PrimitiveType::Byte))));
}

#[test]
pub fn movk_w_rejects_high_halves() {
    // hw = 2 only exists in the 64-bit form.
    let inst = decode(0x72C0_0000);
    assert_eq!(inst.opcode, Opcode::Invalid);
}

#[test]
pub fn ret_reads_the_link_register_slot() {
    let inst = decode(0xD65F_03C0);
    assert_eq!(inst.opcode, Opcode::RET);
    assert_eq!(inst.operands, vec![x(30)]);
    assert_eq!(inst.length, 4);
}

#[test]
pub fn add_w_immediate() {
    let inst = decode(0x1100_0420);
    assert_eq!(inst.opcode, Opcode::ADD);
    assert_eq!(inst.operands, vec![w(0), w(1), uimm32(1)]);
    assert!(!inst.update_flags);
}

#[test]
pub fn subs_sets_the_flag_bit() {
    // subs x0, x1, #4
    let inst = decode(0xF100_1020);
    assert_eq!(inst.opcode, Opcode::SUB);
    assert!(inst.update_flags);
    assert_eq!(inst.operands, vec![x(0), x(1), uimm64(4)]);
}

#[test]
pub fn add_shifted_register() {
    // add x0, x1, x2
    let inst = decode(0x8B02_0020);
    assert_eq!(inst.opcode, Opcode::ADD);
    assert_eq!(inst.operands, vec![x(0), x(1), x(2)]);
    assert_eq!(inst.shift_type, Opcode::Invalid);

    // add w0, w1, w2, lsl #3
    let inst = decode(0x0B02_0C20);
    assert_eq!(inst.opcode, Opcode::ADD);
    assert_eq!(inst.operands, vec![w(0), w(1), w(2)]);
    assert_eq!(inst.shift_type, Opcode::LSL);
    assert_eq!(inst.shift_value, Some(Operand::Immediate(
        ImmValue::new(3, PrimitiveType::Byte))));
}

#[test]
pub fn orr_with_zero_register_source() {
    // mov x2, x1 assembles as orr x2, xzr, x1; the record keeps the
    // raw index 31.
    let inst = decode(0xAA01_03E2);
    assert_eq!(inst.opcode, Opcode::ORR);
    assert_eq!(inst.operands, vec![x(2), x(31), x(1)]);
}

#[test]
pub fn and_bitmask_immediate() {
    // and w1, w2, #0xF
    let inst = decode(0x1200_0C41);
    assert_eq!(inst.opcode, Opcode::AND);
    assert_eq!(inst.operands, vec![w(1), w(2), uimm32(0xF)]);
}

#[test]
pub fn adr_and_adrp_are_pc_relative() {
    // adr x0, #+8
    let inst = decode_at(0x1000_0040, 0x4000);
    assert_eq!(inst.opcode, Opcode::ADR);
    assert_eq!(inst.operands, vec![x(0), Operand::Address(0x4008)]);

    // adrp x0, #+0x1000: the base is the enclosing 4 KiB page.
    let inst = decode_at(0xB000_0000 | (1 << 29), 0x4123);
    assert_eq!(inst.opcode, Opcode::ADRP);
    assert_eq!(inst.operands, vec![x(0), Operand::Address(0x5000)]);
}

#[test]
pub fn branches_compute_targets() {
    // b #-4
    let inst = decode_at(0x17FF_FFFF, 0x8000);
    assert_eq!(inst.opcode, Opcode::B);
    assert_eq!(inst.condition, ArmCondition::AL);
    assert_eq!(inst.operands, vec![Operand::Address(0x7FFC)]);

    // bl #+0x10
    let inst = decode_at(0x9400_0004, 0x8000);
    assert_eq!(inst.opcode, Opcode::BL);
    assert_eq!(inst.operands, vec![Operand::Address(0x8010)]);

    // b.ne #+8 puts the condition in the record, not the operands.
    let inst = decode_at(0x5400_0041, 0x8000);
    assert_eq!(inst.opcode, Opcode::B);
    assert_eq!(inst.condition, ArmCondition::NE);
    assert_eq!(inst.operands, vec![Operand::Address(0x8008)]);
}

#[test]
pub fn compare_and_test_branches() {
    // cbz w3, #+16
    let inst = decode_at(0x3400_0083, 0x100);
    assert_eq!(inst.opcode, Opcode::CBZ);
    assert_eq!(inst.operands, vec![w(3), Operand::Address(0x110)]);

    // tbnz x5, #33, #-8: bit index spills into b5.
    let inst = decode_at(0xB70F_FFC5, 0x100);
    assert_eq!(inst.opcode, Opcode::TBNZ);
    assert_eq!(inst.operands, vec![
        x(5),
        Operand::Immediate(ImmValue::new(33, PrimitiveType::Byte)),
        Operand::Address(0xF8),
    ]);
}

#[test]
pub fn hints_and_barriers() {
    assert_eq!(decode(0xD503_201F).opcode, Opcode::NOP);
    assert_eq!(decode(0xD503_203F).opcode, Opcode::YIELD);
    assert_eq!(decode(0xD503_205F).opcode, Opcode::WFE);

    use super::super::operand::BarrierOption;
    let inst = decode(0xD503_3F9F);
    assert_eq!(inst.opcode, Opcode::DSB);
    assert_eq!(inst.operands, vec![Operand::Barrier(BarrierOption::SY)]);
    let inst = decode(0xD503_3BBF);
    assert_eq!(inst.opcode, Opcode::DMB);
    assert_eq!(inst.operands, vec![Operand::Barrier(BarrierOption::ISH)]);
}

#[test]
pub fn svc_and_brk_carry_their_payload() {
    let inst = decode(0xD400_0001);
    assert_eq!(inst.opcode, Opcode::SVC);
    assert_eq!(inst.operands, vec![uimm32(0)]);

    let inst = decode(0xD43E_0000);
    assert_eq!(inst.opcode, Opcode::BRK);
    assert_eq!(inst.operands, vec![uimm32(0xF000)]);
}

#[test]
pub fn loads_and_stores_scale_their_offsets() {
    // ldr x0, [x1]
    let inst = decode(0xF940_0020);
    assert_eq!(inst.opcode, Opcode::LDR);
    match inst.operands[1] {
        Operand::Memory(ref mem) => {
            assert_eq!(mem.base, RegisterId::new(RegisterFamily::GpX, 1));
            assert_eq!(mem.offset, None);
            assert_eq!(mem.data_type, PrimitiveType::DoubleWord);
        }
        ref other => panic!("expected memory operand, got {:?}", other),
    }

    // ldr x0, [x1, #16]
    let inst = decode(0xF940_0820);
    match inst.operands[1] {
        Operand::Memory(ref mem) => {
            assert_eq!(mem.offset, Some(ImmValue::new(16, PrimitiveType::Word)));
        }
        ref other => panic!("expected memory operand, got {:?}", other),
    }

    // ldrb w2, [x3, #1]: byte offsets are unscaled.
    let inst = decode(0x3940_0462);
    assert_eq!(inst.opcode, Opcode::LDRB);
    match inst.operands[1] {
        Operand::Memory(ref mem) => {
            assert_eq!(mem.offset, Some(ImmValue::new(1, PrimitiveType::Word)));
            assert_eq!(mem.data_type, PrimitiveType::Byte);
        }
        ref other => panic!("expected memory operand, got {:?}", other),
    }
}

#[test]
pub fn unscaled_and_indexed_forms() {
    // ldur x0, [x1, #-8]
    let inst = decode(0xF85F_8020);
    assert_eq!(inst.opcode, Opcode::LDUR);
    match inst.operands[1] {
        Operand::Memory(ref mem) => {
            assert_eq!(mem.offset, Some(ImmValue::new(-8, PrimitiveType::SWord)));
            assert!(!mem.pre_index && !mem.post_index);
        }
        ref other => panic!("expected memory operand, got {:?}", other),
    }

    // str x0, [x1, #-16]!
    let inst = decode(0xF81F_0C20);
    assert_eq!(inst.opcode, Opcode::STR);
    assert!(inst.writeback);
    match inst.operands[1] {
        Operand::Memory(ref mem) => {
            assert!(mem.pre_index);
            assert_eq!(mem.offset, Some(ImmValue::new(-16, PrimitiveType::SWord)));
        }
        ref other => panic!("expected memory operand, got {:?}", other),
    }

    // ldr x0, [x1], #8
    let inst = decode(0xF840_8420);
    assert_eq!(inst.opcode, Opcode::LDR);
    assert!(inst.writeback);
    match inst.operands[1] {
        Operand::Memory(ref mem) => {
            assert!(mem.post_index);
            assert_eq!(mem.offset, Some(ImmValue::new(8, PrimitiveType::SWord)));
        }
        ref other => panic!("expected memory operand, got {:?}", other),
    }
}

#[test]
pub fn register_offset_addressing() {
    // ldr w0, [x1, x2, lsl #2]
    let inst = decode(0xB862_7820);
    assert_eq!(inst.opcode, Opcode::LDR);
    match inst.operands[1] {
        Operand::Memory(ref mem) => {
            assert_eq!(mem.index, Some(RegisterId::new(RegisterFamily::GpX, 2)));
            assert_eq!(mem.index_extend, Opcode::LSL);
            assert_eq!(mem.index_shift, 2);
        }
        ref other => panic!("expected memory operand, got {:?}", other),
    }

    // option = 010 selects a 32-bit index with uxtw.
    let inst = decode(0xB862_4820);
    match inst.operands[1] {
        Operand::Memory(ref mem) => {
            assert_eq!(mem.index, Some(RegisterId::new(RegisterFamily::GpW, 2)));
            assert_eq!(mem.index_extend, Opcode::UXTW);
            assert_eq!(mem.index_shift, 0);
        }
        ref other => panic!("expected memory operand, got {:?}", other),
    }

    // option = 000 is reserved.
    assert_eq!(decode(0xB862_0820).opcode, Opcode::Invalid);
}

#[test]
pub fn stp_pre_indexed() {
    // stp x29, x30, [sp, #-16]!
    let inst = decode(0xA9BF_7BFD);
    assert_eq!(inst.opcode, Opcode::STP);
    assert!(inst.writeback);
    assert_eq!(inst.operands[0], x(29));
    assert_eq!(inst.operands[1], x(30));
    match inst.operands[2] {
        Operand::Memory(ref mem) => {
            assert_eq!(mem.base, RegisterId::new(RegisterFamily::GpX, 31));
            assert_eq!(mem.offset, Some(ImmValue::new(-16, PrimitiveType::SWord)));
            assert!(mem.pre_index);
        }
        ref other => panic!("expected memory operand, got {:?}", other),
    }
}

#[test]
pub fn ldr_literal() {
    // ldr x7, #+0x20
    let inst = decode_at(0x5800_0107, 0x2000);
    assert_eq!(inst.opcode, Opcode::LDR);
    assert_eq!(inst.operands, vec![x(7), Operand::Address(0x2020)]);
}

#[test]
pub fn conditional_select_and_compare() {
    // csel w0, w1, w2, eq
    let inst = decode(0x1A82_0020);
    assert_eq!(inst.opcode, Opcode::CSEL);
    assert_eq!(inst.operands, vec![
        w(0), w(1), w(2), Operand::Condition(ArmCondition::EQ),
    ]);

    // ccmp x1, #5, #0, ne
    let inst = decode(0xFA45_1820);
    assert_eq!(inst.opcode, Opcode::CCMP);
    assert_eq!(inst.operands, vec![
        x(1),
        uimm64(5),
        Operand::Immediate(ImmValue::new(0, PrimitiveType::Byte)),
        Operand::Condition(ArmCondition::NE),
    ]);
}

#[test]
pub fn multiplies_and_divides() {
    // madd x0, x1, x2, x3
    let inst = decode(0x9B02_0C20);
    assert_eq!(inst.opcode, Opcode::MADD);
    assert_eq!(inst.operands, vec![x(0), x(1), x(2), x(3)]);

    // udiv w0, w1, w2
    let inst = decode(0x1AC2_0820);
    assert_eq!(inst.opcode, Opcode::UDIV);
    assert_eq!(inst.operands, vec![w(0), w(1), w(2)]);

    // smaddl x0, w1, w2, x3
    let inst = decode(0x9B22_0C20);
    assert_eq!(inst.opcode, Opcode::SMADDL);
    assert_eq!(inst.operands, vec![x(0), w(1), w(2), x(3)]);
}

#[test]
pub fn scalar_fp_operations() {
    // fadd s0, s1, s2
    let inst = decode(0x1E22_2820);
    assert_eq!(inst.opcode, Opcode::FADD);
    let s = |i| Operand::Register(RegisterId::new(RegisterFamily::SimdS, i));
    assert_eq!(inst.operands, vec![s(0), s(1), s(2)]);

    // fmov s0, #1.0 expands the packed constant.
    let inst = decode(0x1E2E_1000);
    assert_eq!(inst.opcode, Opcode::FMOV);
    assert_eq!(inst.operands, vec![s(0), Operand::Immediate(
        ImmValue::new(0x3F80_0000, PrimitiveType::Real32))]);

    // scvtf d0, w1
    let inst = decode(0x1E62_0020);
    assert_eq!(inst.opcode, Opcode::SCVTF);
    let d = |i| Operand::Register(RegisterId::new(RegisterFamily::SimdD, i));
    assert_eq!(inst.operands, vec![d(0), w(1)]);
}

#[test]
pub fn simd_modified_immediate_movi() {
    // movi v0.4s, #0x55
    let inst = decode(0x4F02_06A0);
    assert_eq!(inst.opcode, Opcode::MOVI);
    assert_eq!(inst.vector_data, VectorKind::I32);
    assert_eq!(inst.operands, vec![
        Operand::Register(RegisterId::new(RegisterFamily::SimdQ, 0)),
        Operand::Immediate(ImmValue::new(0x0000_0055_0000_0055, PrimitiveType::DoubleWord)),
    ]);

    // The cmode=1111/op=1 slot is deliberately undecoded.
    assert_eq!(decode(0x6F00_F400).opcode, Opcode::Invalid);
}

#[test]
pub fn unallocated_word_is_invalid_not_fatal() {
    let inst = decode(0x0000_0000);
    assert_eq!(inst.opcode, Opcode::Invalid);
    assert_eq!(inst.length, 4);
    assert!(inst.operands.is_empty());
}

#[test]
pub fn decoder_is_total_over_random_words() {
    // A cheap xorshift sweep; every word must produce a record.
    let mut seed: u32 = 0x1234_5678;
    for _ in 0 .. 20_000 {
        seed ^= seed << 13;
        seed ^= seed >> 17;
        seed ^= seed << 5;
        let inst = decode(seed);
        assert_eq!(inst.length, 4);
        assert_eq!(inst.address, 0x1_0000);
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
