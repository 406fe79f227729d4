// License below.
//! Implements the 32-bit T32 encodings.
//!
//! The driver glues both halfwords into one word with the first
//! halfword on top, so `hw1` bit `n` is word bit `n + 16` here. The
//! root dispatches on `op1`, word bits 27..28:
//!
//! ```text
//!     111_01_xxx ... | Load/store multiple or dual, data processing
//!                    | with shifted register, coprocessor
//!     111_10_xxx ... | Data processing with immediates, branches
//!                    | and miscellaneous control
//!     111_11_xxx ... | Load/store single, data processing with
//!                    | register operands, multiplies, coprocessor
//! ```
#![cfg_attr(feature="clippy", warn(result_unwrap_used, option_unwrap_used, print_stdout))]
#![cfg_attr(feature="clippy", warn(single_match_else, string_add, string_add_assign))]
#![cfg_attr(feature="clippy", warn(wrong_pub_self_convention))]
#![warn(missing_docs)]

use super::super::bits::bf;
use super::super::decoder::{instr, invalid, mask, nyi, select, sparse, fields_mask, Decoder};
use super::super::mutators::Mutator;
use super::super::opcode::Opcode;
use super::super::operand::PrimitiveType;
use super::super::registers::{CPSR, SPSR};
use super::{is_pc, is_zero};

/// Builds the decoder tree for the 32-bit encodings.
pub fn build_decoder() -> Decoder {
    mask(27, 2, vec![
        invalid(),          // 16-bit space, never dispatched here
        multiple_dual_shifted(),
        immediates_and_branches(),
        loadstore_dpreg_mul(),
    ])
}

fn multiple_dual_shifted() -> Decoder {
    mask(25, 2, vec![
        mask(22, 1, vec![load_store_multiple(), dual_and_table_branch()]),
        data_processing_shifted(),
        nyi("coprocessor"),
        nyi("coprocessor"),
    ])
}

fn load_store_multiple() -> Decoder {
    let form = |op_st, op_ld| {
        let st = instr(op_st, vec![
            Mutator::W(bf(16, 4)),
            Mutator::WbackBit(bf(21, 1)),
            Mutator::RegList(bf(0, 16)),
        ]);
        let ld = instr(op_ld, vec![
            Mutator::W(bf(16, 4)),
            Mutator::WbackBit(bf(21, 1)),
            Mutator::RegList(bf(0, 16)),
        ]);
        mask(20, 1, vec![st, ld])
    };
    mask(23, 2, vec![
        nyi("srs/rfe"),
        form(Opcode::STM, Opcode::LDM),
        form(Opcode::STMDB, Opcode::LDMDB),
        nyi("srs/rfe"),
    ])
}

fn dual_and_table_branch() -> Decoder {
    let dual = |op| instr(op, vec![
        Mutator::W(bf(12, 4)),
        Mutator::W(bf(8, 4)),
        Mutator::MtDual(PrimitiveType::DoubleWord),
    ]);
    let table = sparse(4, 4, nyi("ldrexb/ldrexh"), vec![
        (0, instr(Opcode::TBB, vec![Mutator::MtTable(0)])),
        (1, instr(Opcode::TBH, vec![Mutator::MtTable(1)])),
    ]);
    fields_mask(vec![bf(23, 2), bf(20, 2)], vec![
        nyi("strex"),
        nyi("ldrex"),
        dual(Opcode::STRD),
        dual(Opcode::LDRD),
        nyi("strexb/strexh"),
        table,
        dual(Opcode::STRD),
        dual(Opcode::LDRD),
        dual(Opcode::STRD),
        dual(Opcode::LDRD),
        dual(Opcode::STRD),
        dual(Opcode::LDRD),
        dual(Opcode::STRD),
        dual(Opcode::LDRD),
        dual(Opcode::STRD),
        dual(Opcode::LDRD),
    ])
}

fn shifted_reg_operands() -> Vec<Mutator> {
    vec![
        Mutator::W(bf(8, 4)),
        Mutator::W(bf(16, 4)),
        Mutator::W(bf(0, 4)),
        Mutator::ShiftT(bf(4, 2), vec![bf(12, 3), bf(6, 2)]),
        Mutator::SetFlagsBit(bf(20, 1)),
    ]
}

fn data_processing_shifted() -> Decoder {
    let form = |op| instr(op, shifted_reg_operands());
    let mov_form = |mov_op, base_op| {
        let mov = instr(mov_op, vec![
            Mutator::W(bf(8, 4)),
            Mutator::W(bf(0, 4)),
            Mutator::ShiftT(bf(4, 2), vec![bf(12, 3), bf(6, 2)]),
            Mutator::SetFlagsBit(bf(20, 1)),
        ]);
        select(vec![bf(16, 4)], is_pc, mov, form(base_op))
    };
    sparse(21, 4, invalid(), vec![
        (0b0000, form(Opcode::AND)),
        (0b0001, form(Opcode::BIC)),
        (0b0010, mov_form(Opcode::MOV, Opcode::ORR)),
        (0b0011, mov_form(Opcode::MVN, Opcode::ORN)),
        (0b0100, form(Opcode::EOR)),
        (0b1000, form(Opcode::ADD)),
        (0b1010, form(Opcode::ADC)),
        (0b1011, form(Opcode::SBC)),
        (0b1101, form(Opcode::SUB)),
        (0b1110, form(Opcode::RSB)),
    ])
}

fn immediates_and_branches() -> Decoder {
    mask(15, 1, vec![
        mask(25, 1, vec![modified_immediate(), plain_immediate()]),
        branches_and_misc(),
    ])
}

/// Is this encoding the compare alias, i.e. `Rd = 1111` with the `S`
/// bit set?
fn is_compare_alias(v: u32) -> bool {
    v == 0b11111
}

fn modified_immediate() -> Decoder {
    let form = |op| instr(op, vec![
        Mutator::W(bf(8, 4)),
        Mutator::W(bf(16, 4)),
        Mutator::ModImm,
        Mutator::SetFlagsBit(bf(20, 1)),
    ]);
    let with_alias = |alias_op, base_op| {
        let alias = instr(alias_op, vec![
            Mutator::W(bf(16, 4)),
            Mutator::ModImm,
            Mutator::SetFlags,
        ]);
        select(vec![bf(8, 4), bf(20, 1)], is_compare_alias, alias, form(base_op))
    };
    let mov_form = |mov_op, base_op| {
        let mov = instr(mov_op, vec![
            Mutator::W(bf(8, 4)),
            Mutator::ModImm,
            Mutator::SetFlagsBit(bf(20, 1)),
        ]);
        select(vec![bf(16, 4)], is_pc, mov, form(base_op))
    };
    sparse(21, 4, invalid(), vec![
        (0b0000, with_alias(Opcode::TST, Opcode::AND)),
        (0b0001, form(Opcode::BIC)),
        (0b0010, mov_form(Opcode::MOV, Opcode::ORR)),
        (0b0011, mov_form(Opcode::MVN, Opcode::ORN)),
        (0b0100, with_alias(Opcode::TEQ, Opcode::EOR)),
        (0b1000, with_alias(Opcode::CMN, Opcode::ADD)),
        (0b1010, form(Opcode::ADC)),
        (0b1011, form(Opcode::SBC)),
        (0b1101, with_alias(Opcode::CMP, Opcode::SUB)),
        (0b1110, form(Opcode::RSB)),
    ])
}

fn plain_immediate() -> Decoder {
    let wide_imm = Mutator::Uf(vec![bf(26, 1), bf(12, 3), bf(0, 8)],
                               PrimitiveType::Word, 0);
    let movw_imm = Mutator::Uf(vec![bf(16, 4), bf(26, 1), bf(12, 3), bf(0, 8)],
                               PrimitiveType::Word, 0);
    let lsb = Mutator::Uf(vec![bf(12, 3), bf(6, 2)], PrimitiveType::Byte, 0);
    let addsub = |op, imm: &Mutator| instr(op, vec![
        Mutator::W(bf(8, 4)),
        Mutator::W(bf(16, 4)),
        imm.clone(),
    ]);
    let mov_wide = |op, imm: &Mutator| instr(op, vec![
        Mutator::W(bf(8, 4)),
        imm.clone(),
    ]);
    let bitfield_x = |op| instr(op, vec![
        Mutator::W(bf(8, 4)),
        Mutator::W(bf(16, 4)),
        lsb.clone(),
        Mutator::UPlus1(bf(0, 5), PrimitiveType::Byte),
    ]);
    let bfi = {
        let bfc = instr(Opcode::BFC, vec![
            Mutator::W(bf(8, 4)),
            lsb.clone(),
            Mutator::U(bf(0, 5), PrimitiveType::Byte, 0),
        ]);
        let bfi = instr(Opcode::BFI, vec![
            Mutator::W(bf(8, 4)),
            Mutator::W(bf(16, 4)),
            lsb.clone(),
            Mutator::U(bf(0, 5), PrimitiveType::Byte, 0),
        ]);
        select(vec![bf(16, 4)], is_pc, bfc, bfi)
    };
    sparse(20, 5, nyi("plain binary immediate"), vec![
        (0b00000, addsub(Opcode::ADDW, &wide_imm)),
        (0b00100, mov_wide(Opcode::MOVW, &movw_imm)),
        (0b01010, addsub(Opcode::SUBW, &wide_imm)),
        (0b01100, mov_wide(Opcode::MOVT, &movw_imm)),
        (0b10100, bitfield_x(Opcode::SBFX)),
        (0b10110, bfi),
        (0b11100, bitfield_x(Opcode::UBFX)),
    ])
}

fn branches_and_misc() -> Decoder {
    // T3 conditional branch target: S:J2:J1:imm6:imm11:'0', the J
    // bits taken as-is. Only the T4 encodings invert them.
    let cond_or_misc = || select(
        vec![bf(23, 3)],
        |v| v == 0b111,
        misc_control(),
        instr(Opcode::B, vec![
            Mutator::CondField(bf(22, 4)),
            Mutator::Jt(vec![bf(26, 1), bf(11, 1), bf(13, 1), bf(16, 6), bf(0, 11)], 1),
        ]),
    );
    mask(12, 3, vec![
        cond_or_misc(),
        instr(Opcode::B, vec![Mutator::Jt24]),
        cond_or_misc(),
        instr(Opcode::B, vec![Mutator::Jt24]),
        instr(Opcode::BLX, vec![Mutator::JtBlx]),
        instr(Opcode::BL, vec![Mutator::Jt24]),
        instr(Opcode::BLX, vec![Mutator::JtBlx]),
        instr(Opcode::BL, vec![Mutator::Jt24]),
    ])
}

fn misc_control() -> Decoder {
    let hints = sparse(0, 8, nyi("hint"), vec![
        (0, instr(Opcode::NOP,   vec![])),
        (1, instr(Opcode::YIELD, vec![])),
        (2, instr(Opcode::WFE,   vec![])),
        (3, instr(Opcode::WFI,   vec![])),
        (4, instr(Opcode::SEV,   vec![])),
    ]);
    let barriers = sparse(4, 4, nyi("miscellaneous control"), vec![
        (0b0010, instr(Opcode::CLREX, vec![])),
        (0b0100, instr(Opcode::DSB, vec![Mutator::BarrierOp(bf(0, 4))])),
        (0b0101, instr(Opcode::DMB, vec![Mutator::BarrierOp(bf(0, 4))])),
        (0b0110, instr(Opcode::ISB, vec![Mutator::BarrierOp(bf(0, 4))])),
    ]);
    sparse(20, 7, nyi("miscellaneous system"), vec![
        (0b0111000, instr(Opcode::MSR, vec![Mutator::Reg(CPSR), Mutator::W(bf(16, 4))])),
        (0b0111001, instr(Opcode::MSR, vec![Mutator::Reg(SPSR), Mutator::W(bf(16, 4))])),
        (0b0111010, hints),
        (0b0111011, barriers),
        (0b0111110, instr(Opcode::MRS, vec![Mutator::W(bf(8, 4)), Mutator::Reg(CPSR)])),
        (0b0111111, instr(Opcode::MRS, vec![Mutator::W(bf(8, 4)), Mutator::Reg(SPSR)])),
    ])
}

fn loadstore_dpreg_mul() -> Decoder {
    mask(25, 2, vec![
        load_store_single(),
        mask(24, 1, vec![data_processing_reg(), multiplies()]),
        nyi("coprocessor"),
        nyi("coprocessor"),
    ])
}

fn load_store_single() -> Decoder {
    let form = |op, dt: PrimitiveType, load: bool| {
        let imm8_leaf = || instr(op, vec![Mutator::W(bf(12, 4)), Mutator::MtImm8(dt)]);
        let reg_leaf = select(
            vec![bf(6, 2)],
            is_zero,
            instr(op, vec![Mutator::W(bf(12, 4)), Mutator::MtRegShift(dt)]),
            invalid(),
        );
        let short_forms = mask(8, 4, vec![
            reg_leaf,
            invalid(), invalid(), invalid(),
            invalid(), invalid(), invalid(), invalid(),
            invalid(),
            imm8_leaf(),
            invalid(),
            imm8_leaf(),
            imm8_leaf(),
            imm8_leaf(),
            nyi("unprivileged load/store"),
            imm8_leaf(),
        ]);
        let normal = mask(23, 1, vec![
            short_forms,
            instr(op, vec![Mutator::W(bf(12, 4)), Mutator::MtImm12(dt)]),
        ]);
        let literal = if load {
            instr(op, vec![Mutator::W(bf(12, 4)), Mutator::MtLit(dt)])
        } else {
            invalid()
        };
        select(vec![bf(16, 4)], is_pc, literal, normal)
    };
    // size:L, with the sign-extending loads behind bit 24.
    let unsigned = fields_mask(vec![bf(21, 2), bf(20, 1)], vec![
        form(Opcode::STRB, PrimitiveType::Byte, false),
        form(Opcode::LDRB, PrimitiveType::Byte, true),
        form(Opcode::STRH, PrimitiveType::HalfWord, false),
        form(Opcode::LDRH, PrimitiveType::HalfWord, true),
        form(Opcode::STR,  PrimitiveType::Word, false),
        form(Opcode::LDR,  PrimitiveType::Word, true),
        invalid(),
        invalid(),
    ]);
    let signed = fields_mask(vec![bf(21, 2), bf(20, 1)], vec![
        invalid(),
        form(Opcode::LDRSB, PrimitiveType::SByte, true),
        invalid(),
        form(Opcode::LDRSH, PrimitiveType::SHalfWord, true),
        invalid(),
        invalid(),
        invalid(),
        invalid(),
    ]);
    mask(24, 1, vec![unsigned, signed])
}

fn data_processing_reg() -> Decoder {
    let shift_reg = |ty, set_flags: bool| {
        let mut m = vec![
            Mutator::W(bf(8, 4)),
            Mutator::W(bf(16, 4)),
            Mutator::W(bf(0, 4)),
        ];
        if set_flags { m.push(Mutator::SetFlags); }
        let op = match ty {
            0 => Opcode::LSL,
            1 => Opcode::LSR,
            2 => Opcode::ASR,
            _ => Opcode::ROR,
        };
        instr(op, m)
    };
    let extend = |op| {
        let leaf = instr(op, vec![
            Mutator::W(bf(8, 4)),
            Mutator::W(bf(0, 4)),
            Mutator::RorAmt(bf(4, 2), 8),
        ]);
        select(vec![bf(16, 4)], is_pc, leaf, nyi("extend and add"))
    };
    let pair = |ty, ext: Decoder| {
        mask(7, 1, vec![shift_reg(ty, false), ext])
    };
    let pair_s = |ty, ext: Decoder| {
        mask(7, 1, vec![shift_reg(ty, true), ext])
    };
    let unary = |op| instr(op, vec![Mutator::W(bf(8, 4)), Mutator::W(bf(0, 4))]);
    mask(20, 4, vec![
        pair(0, extend(Opcode::SXTH)),
        pair_s(0, extend(Opcode::UXTH)),
        pair(1, nyi("sxtb16/uxtb16")),
        pair_s(1, nyi("sxtb16/uxtb16")),
        pair(2, extend(Opcode::SXTB)),
        pair_s(2, extend(Opcode::UXTB)),
        pair(3, invalid()),
        pair_s(3, invalid()),
        nyi("parallel arithmetic"),
        sparse(4, 4, nyi("parallel arithmetic"), vec![
            (0b1000, unary(Opcode::REV)),
            (0b1001, unary(Opcode::REV16)),
            (0b1010, unary(Opcode::RBIT)),
            (0b1011, unary(Opcode::REVSH)),
        ]),
        nyi("parallel arithmetic"),
        sparse(4, 4, nyi("parallel arithmetic"), vec![
            (0b1000, unary(Opcode::CLZ)),
        ]),
        nyi("parallel arithmetic"),
        nyi("parallel arithmetic"),
        nyi("parallel arithmetic"),
        nyi("parallel arithmetic"),
    ])
}

fn multiplies() -> Decoder {
    let mla = instr(Opcode::MLA, vec![
        Mutator::W(bf(8, 4)),
        Mutator::W(bf(16, 4)),
        Mutator::W(bf(0, 4)),
        Mutator::W(bf(12, 4)),
    ]);
    let mul = instr(Opcode::MUL, vec![
        Mutator::W(bf(8, 4)),
        Mutator::W(bf(16, 4)),
        Mutator::W(bf(0, 4)),
    ]);
    let mls = instr(Opcode::MLS, vec![
        Mutator::W(bf(8, 4)),
        Mutator::W(bf(16, 4)),
        Mutator::W(bf(0, 4)),
        Mutator::W(bf(12, 4)),
    ]);
    let short = mask(20, 3, vec![
        sparse(4, 4, nyi("halfword multiply"), vec![
            (0, select(vec![bf(12, 4)], is_pc, mul, mla)),
            (1, mls),
        ]),
        nyi("dsp multiply"),
        nyi("dsp multiply"),
        nyi("dsp multiply"),
        nyi("dsp multiply"),
        nyi("dsp multiply"),
        nyi("dsp multiply"),
        nyi("dsp multiply"),
    ]);
    let long4 = |op| instr(op, vec![
        Mutator::W(bf(12, 4)),
        Mutator::W(bf(8, 4)),
        Mutator::W(bf(16, 4)),
        Mutator::W(bf(0, 4)),
    ]);
    let div = |op| instr(op, vec![
        Mutator::W(bf(8, 4)),
        Mutator::W(bf(16, 4)),
        Mutator::W(bf(0, 4)),
    ]);
    let long = sparse(20, 3, nyi("dsp long multiply"), vec![
        (0b000, long4(Opcode::SMULL)),
        (0b001, div(Opcode::SDIV)),
        (0b010, long4(Opcode::UMULL)),
        (0b011, div(Opcode::UDIV)),
        (0b100, long4(Opcode::SMLAL)),
        (0b110, long4(Opcode::UMLAL)),
    ]);
    mask(23, 1, vec![short, long])
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
