// License below.
//! Implements the T32 (Thumb-2) decoder trees.
//!
//! T32 instructions are one or two halfwords long. The top five bits
//! of the first halfword settle the length:
//!
//! ```text
//!     .... ....  .... ....
//!     111x x...  .... .... | 32-bit encoding, except:
//!     1110 0...  .... .... | b, the unconditional 16-bit branch
//!     else                 | 16-bit encoding
//! ```
//!
//! This module holds the 16-bit tree; the 32-bit tree lives in
//! [`wide`](./wide/index.html) and decodes the two halfwords as one
//! word with the first halfword in the upper half.
//!
//! The 16-bit encodings are dense, so the tree is essentially the
//! instruction table of the old Thumb ISA:
//!
//! ```text
//!     000o p_im  m_<M ><D> | Shift Rd = Rm SHIFT(op) #_imm_
//!     0001 1IAN  N><M ><D> | Add/Sub, Rd = Rm OP(A) Rn/#imm3
//!     001o p<D>  imm_ imm_ | Move/Compare/Add/Sub #imm_imm_
//!     0100 00_o  p_<M ><D> | ALU operation, Rd = Rd OP(_op_) Rm
//!     0100 01op  DM<M ><D> | Hi-register Op / BX / BLX
//!     0100 1<D>  imm_ imm_ | LDR Rd, [PC-relative]
//!     0101 ooo<  N><M ><D> | LDR/STR Rd, [Rm, Rn]
//!     011b L_im  m_<M ><D> | LDR/STR{B} Rd, [Rm, #_imm_]
//!     1000 L_im  m_<M ><D> | LDRH/STRH Rd, [Rm, #_imm_]
//!     1001 L<D>  imm_ imm_ | LDR/STR Rd, [SP, #imm_imm_00]
//!     1010 P<D>  imm_ imm_ | ADR / ADD Rd, SP, #imm_imm_00
//!     1011 xxxx  xxxx xxxx | Miscellaneous, incl. IT and hints
//!     1100 L<N>  regs regs | LDM/STM Rn!, { regsregs }
//!     1101 cond  offs offs | B{cond}, UDF, SVC
//!     1110 0off  offs offs | B
//! ```
#![cfg_attr(feature="clippy", warn(result_unwrap_used, option_unwrap_used, print_stdout))]
#![cfg_attr(feature="clippy", warn(single_match_else, string_add, string_add_assign))]
#![cfg_attr(feature="clippy", warn(wrong_pub_self_convention))]
#![warn(missing_docs)]

use super::bits::bf;
use super::decoder::{instr, invalid, mask, nyi, select, sparse, Decoder};
use super::mutators::Mutator;
use super::opcode::Opcode;
use super::operand::PrimitiveType;
use super::registers::{LR, PC, SP};

pub mod wide;


lazy_static! {
    static ref SHORT: Decoder = build_short_decoder();
    static ref LONG: Decoder = wide::build_decoder();
}

/// The shared decoder tree for 16-bit encodings, built on first use.
pub fn short_decoder() -> &'static Decoder {
    &SHORT
}

/// The shared decoder tree for 32-bit encodings, built on first use.
pub fn long_decoder() -> &'static Decoder {
    &LONG
}

fn is_zero(n: u32) -> bool {
    n == 0
}

fn is_pc(n: u32) -> bool {
    n == 15
}

/// Builds the decoder tree for the 16-bit encodings.
pub fn build_short_decoder() -> Decoder {
    mask(13, 3, vec![
        shift_add_sub(),
        move_compare_imm(),
        alu_and_loadstore(),
        load_store_imm5(),
        load_store_half_sp(),
        adr_sp_misc(),
        multiple_and_cond_branch(),
        mask(11, 2, vec![
            instr(Opcode::B, vec![Mutator::Jt(vec![bf(0, 11)], 1)]),
            // The 32-bit encodings never reach this tree; the driver
            // has already read the second halfword for them.
            invalid(),
            invalid(),
            invalid(),
        ]),
    ])
}

fn shift_add_sub() -> Decoder {
    let shift_imm = |op| {
        let plain = instr(op, vec![
            Mutator::W(bf(0, 3)),
            Mutator::W(bf(3, 3)),
            Mutator::U(bf(6, 5), PrimitiveType::Byte, 0),
            Mutator::SetFlags,
        ]);
        let full = instr(op, vec![
            Mutator::W(bf(0, 3)),
            Mutator::W(bf(3, 3)),
            Mutator::UFixed(32, PrimitiveType::Byte),
            Mutator::SetFlags,
        ]);
        // A zero shift amount encodes a shift by 32, except for lsl
        // where it is a plain register move.
        let zero = if op == Opcode::LSL {
            instr(Opcode::MOV, vec![
                Mutator::W(bf(0, 3)),
                Mutator::W(bf(3, 3)),
                Mutator::SetFlags,
            ])
        } else {
            full
        };
        select(vec![bf(6, 5)], is_zero, zero, plain)
    };
    let add_sub = |op, reg: bool| {
        let third = if reg {
            Mutator::W(bf(6, 3))
        } else {
            Mutator::U(bf(6, 3), PrimitiveType::Word, 0)
        };
        instr(op, vec![
            Mutator::W(bf(0, 3)),
            Mutator::W(bf(3, 3)),
            third,
            Mutator::SetFlags,
        ])
    };
    mask(11, 2, vec![
        shift_imm(Opcode::LSL),
        shift_imm(Opcode::LSR),
        shift_imm(Opcode::ASR),
        mask(9, 2, vec![
            add_sub(Opcode::ADD, true),
            add_sub(Opcode::SUB, true),
            add_sub(Opcode::ADD, false),
            add_sub(Opcode::SUB, false),
        ]),
    ])
}

fn move_compare_imm() -> Decoder {
    let form = |op| instr(op, vec![
        Mutator::W(bf(8, 3)),
        Mutator::U(bf(0, 8), PrimitiveType::Word, 0),
        Mutator::SetFlags,
    ]);
    mask(11, 2, vec![
        form(Opcode::MOV),
        form(Opcode::CMP),
        form(Opcode::ADD),
        form(Opcode::SUB),
    ])
}

fn alu_operation() -> Decoder {
    let rr = |op| instr(op, vec![
        Mutator::W(bf(0, 3)),
        Mutator::W(bf(3, 3)),
        Mutator::SetFlags,
    ]);
    mask(6, 4, vec![
        rr(Opcode::AND),
        rr(Opcode::EOR),
        rr(Opcode::LSL),
        rr(Opcode::LSR),
        rr(Opcode::ASR),
        rr(Opcode::ADC),
        rr(Opcode::SBC),
        rr(Opcode::ROR),
        rr(Opcode::TST),
        instr(Opcode::RSB, vec![
            Mutator::W(bf(0, 3)),
            Mutator::W(bf(3, 3)),
            Mutator::UFixed(0, PrimitiveType::Word),
            Mutator::SetFlags,
        ]),
        rr(Opcode::CMP),
        rr(Opcode::CMN),
        rr(Opcode::ORR),
        rr(Opcode::MUL),
        rr(Opcode::BIC),
        rr(Opcode::MVN),
    ])
}

fn hi_register_ops() -> Decoder {
    let split = Mutator::Wf(vec![bf(7, 1), bf(0, 3)]);
    let form = |op, flags: bool| {
        let mut m = vec![split.clone(), Mutator::W(bf(3, 4))];
        if flags { m.push(Mutator::SetFlags); }
        instr(op, m)
    };
    mask(8, 2, vec![
        form(Opcode::ADD, false),
        form(Opcode::CMP, true),
        form(Opcode::MOV, false),
        mask(7, 1, vec![
            instr(Opcode::BX,  vec![Mutator::W(bf(3, 4))]),
            instr(Opcode::BLX, vec![Mutator::W(bf(3, 4))]),
        ]),
    ])
}

fn alu_and_loadstore() -> Decoder {
    let ldr_literal = instr(Opcode::LDR, vec![
        Mutator::W(bf(8, 3)),
        Mutator::Pt(vec![bf(0, 8)], 2),
    ]);
    let ls_reg = |op, dt| instr(op, vec![
        Mutator::W(bf(0, 3)),
        Mutator::MtReg(dt),
    ]);
    let ldr_literal2 = instr(Opcode::LDR, vec![
        Mutator::W(bf(8, 3)),
        Mutator::Pt(vec![bf(0, 8)], 2),
    ]);
    mask(10, 3, vec![
        alu_operation(),
        hi_register_ops(),
        ldr_literal,
        ldr_literal2,
        mask(9, 1, vec![ls_reg(Opcode::STR,   PrimitiveType::Word),
                        ls_reg(Opcode::STRH,  PrimitiveType::HalfWord)]),
        mask(9, 1, vec![ls_reg(Opcode::STRB,  PrimitiveType::Byte),
                        ls_reg(Opcode::LDRSB, PrimitiveType::SByte)]),
        mask(9, 1, vec![ls_reg(Opcode::LDR,   PrimitiveType::Word),
                        ls_reg(Opcode::LDRH,  PrimitiveType::HalfWord)]),
        mask(9, 1, vec![ls_reg(Opcode::LDRB,  PrimitiveType::Byte),
                        ls_reg(Opcode::LDRSH, PrimitiveType::SHalfWord)]),
    ])
}

fn load_store_imm5() -> Decoder {
    let form = |op, dt| instr(op, vec![
        Mutator::W(bf(0, 3)),
        Mutator::MtImm(dt, bf(3, 3), bf(6, 5)),
    ]);
    mask(11, 2, vec![
        form(Opcode::STR,  PrimitiveType::Word),
        form(Opcode::LDR,  PrimitiveType::Word),
        form(Opcode::STRB, PrimitiveType::Byte),
        form(Opcode::LDRB, PrimitiveType::Byte),
    ])
}

fn load_store_half_sp() -> Decoder {
    let half = |op| instr(op, vec![
        Mutator::W(bf(0, 3)),
        Mutator::MtImm(PrimitiveType::HalfWord, bf(3, 3), bf(6, 5)),
    ]);
    let sp_rel = |op| instr(op, vec![
        Mutator::W(bf(8, 3)),
        Mutator::MtSp(PrimitiveType::Word),
    ]);
    mask(11, 2, vec![
        half(Opcode::STRH),
        half(Opcode::LDRH),
        sp_rel(Opcode::STR),
        sp_rel(Opcode::LDR),
    ])
}

fn misc_16bit() -> Decoder {
    let adjust_sp = |op| instr(op, vec![
        Mutator::Reg(SP),
        Mutator::U(bf(0, 7), PrimitiveType::Word, 2),
    ]);
    let cb = |op| instr(op, vec![
        Mutator::W(bf(0, 3)),
        Mutator::JtU(vec![bf(9, 1), bf(3, 5)], 1),
    ]);
    let extend = |op| instr(op, vec![Mutator::W(bf(0, 3)), Mutator::W(bf(3, 3))]);
    let rev = |op| instr(op, vec![Mutator::W(bf(0, 3)), Mutator::W(bf(3, 3))]);
    let it_or_hint = select(
        vec![bf(0, 4)],
        |n| n != 0,
        instr(Opcode::IT, vec![Mutator::It]),
        sparse(4, 4, nyi("hint"), vec![
            (0, instr(Opcode::NOP,   vec![])),
            (1, instr(Opcode::YIELD, vec![])),
            (2, instr(Opcode::WFE,   vec![])),
            (3, instr(Opcode::WFI,   vec![])),
            (4, instr(Opcode::SEV,   vec![])),
        ]),
    );
    sparse(8, 4, invalid(), vec![
        (0b0000, mask(7, 1, vec![adjust_sp(Opcode::ADD), adjust_sp(Opcode::SUB)])),
        (0b0001, cb(Opcode::CBZ)),
        (0b0011, cb(Opcode::CBZ)),
        (0b1001, cb(Opcode::CBNZ)),
        (0b1011, cb(Opcode::CBNZ)),
        (0b0010, mask(6, 2, vec![
            extend(Opcode::SXTH),
            extend(Opcode::SXTB),
            extend(Opcode::UXTH),
            extend(Opcode::UXTB),
        ])),
        (0b0100, instr(Opcode::PUSH, vec![Mutator::RegListHigh(bf(0, 8), bf(8, 1), LR)])),
        (0b0101, instr(Opcode::PUSH, vec![Mutator::RegListHigh(bf(0, 8), bf(8, 1), LR)])),
        (0b0110, nyi("cps")),
        (0b1010, mask(6, 2, vec![
            rev(Opcode::REV),
            rev(Opcode::REV16),
            invalid(),
            rev(Opcode::REVSH),
        ])),
        (0b1100, instr(Opcode::POP, vec![Mutator::RegListHigh(bf(0, 8), bf(8, 1), PC)])),
        (0b1101, instr(Opcode::POP, vec![Mutator::RegListHigh(bf(0, 8), bf(8, 1), PC)])),
        (0b1110, instr(Opcode::BKPT, vec![Mutator::U(bf(0, 8), PrimitiveType::Word, 0)])),
        (0b1111, it_or_hint),
    ])
}

fn adr_sp_misc() -> Decoder {
    let adr = instr(Opcode::ADR, vec![
        Mutator::W(bf(8, 3)),
        Mutator::Pt(vec![bf(0, 8)], 2),
    ]);
    let add_sp = instr(Opcode::ADD, vec![
        Mutator::W(bf(8, 3)),
        Mutator::Reg(SP),
        Mutator::U(bf(0, 8), PrimitiveType::Word, 2),
    ]);
    mask(11, 2, vec![adr, add_sp, misc_16bit(), misc_16bit()])
}

fn multiple_and_cond_branch() -> Decoder {
    let stm = instr(Opcode::STM, vec![
        Mutator::W(bf(8, 3)),
        Mutator::Wback,
        Mutator::RegList(bf(0, 8)),
    ]);
    let ldm = instr(Opcode::LDM, vec![
        Mutator::W(bf(8, 3)),
        Mutator::WbackBaseNotInList(bf(8, 3), bf(0, 8)),
        Mutator::RegList(bf(0, 8)),
    ]);
    let bcond = || instr(Opcode::B, vec![
        Mutator::CondField(bf(8, 4)),
        Mutator::Jt(vec![bf(0, 8)], 1),
    ]);
    let mut branches = Vec::with_capacity(16);
    for _ in 0 .. 14 {
        branches.push(bcond());
    }
    branches.push(instr(Opcode::UDF, vec![Mutator::U(bf(0, 8), PrimitiveType::Word, 0)]));
    branches.push(instr(Opcode::SVC, vec![Mutator::U(bf(0, 8), PrimitiveType::Word, 0)]));
    mask(12, 1, vec![
        mask(11, 1, vec![stm, ldm]),
        mask(8, 4, branches),
    ])
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
