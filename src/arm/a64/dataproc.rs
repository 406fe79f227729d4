// License below.
//! Implements the A64 data processing classes, immediate and register.
#![cfg_attr(feature="clippy", warn(result_unwrap_used, option_unwrap_used, print_stdout))]
#![cfg_attr(feature="clippy", warn(single_match_else, string_add, string_add_assign))]
#![cfg_attr(feature="clippy", warn(wrong_pub_self_convention))]
#![warn(missing_docs)]

use super::super::bits::bf;
use super::super::decoder::{instr, invalid, mask, select, sparse, fields_mask, Decoder};
use super::super::decoder::nyi;
use super::super::mutators::Mutator;
use super::super::opcode::Opcode;
use super::super::operand::PrimitiveType;
use super::{gpreg, is_zero};

fn imm_type(is64: bool) -> PrimitiveType {
    if is64 { PrimitiveType::DoubleWord } else { PrimitiveType::Word }
}

/// The data processing (immediate) class, bits 25..28 = `100x`.
pub fn immediate() -> Decoder {
    mask(23, 3, vec![
        pc_relative(),
        pc_relative(),
        add_sub_immediate(),
        invalid(),              // add/sub with tags
        logical_immediate(),
        move_wide(),
        bitfield(),
        extract(),
    ])
}

fn pc_relative() -> Decoder {
    mask(31, 1, vec![
        instr(Opcode::ADR, vec![
            Mutator::X(bf(0, 5)),
            Mutator::PcRel { fields: vec![bf(5, 19), bf(29, 2)], shift: 0, page: false },
        ]),
        instr(Opcode::ADRP, vec![
            Mutator::X(bf(0, 5)),
            Mutator::PcRel { fields: vec![bf(5, 19), bf(29, 2)], shift: 12, page: true },
        ]),
    ])
}

fn add_sub_imm_form(op: Opcode, set_flags: bool, is64: bool) -> Decoder {
    let mut m = vec![
        gpreg(is64, 0),
        gpreg(is64, 5),
        Mutator::U(bf(10, 12), imm_type(is64), 0),
        Mutator::ShiftAmt(bf(22, 1), 12),
    ];
    if set_flags { m.push(Mutator::SetFlags); }
    instr(op, m)
}

fn add_sub_immediate() -> Decoder {
    mask(29, 3, vec![
        add_sub_imm_form(Opcode::ADD, false, false),
        add_sub_imm_form(Opcode::ADD, true,  false),
        add_sub_imm_form(Opcode::SUB, false, false),
        add_sub_imm_form(Opcode::SUB, true,  false),
        add_sub_imm_form(Opcode::ADD, false, true),
        add_sub_imm_form(Opcode::ADD, true,  true),
        add_sub_imm_form(Opcode::SUB, false, true),
        add_sub_imm_form(Opcode::SUB, true,  true),
    ])
}

fn logical_imm_form(op: Opcode, set_flags: bool, is64: bool) -> Decoder {
    let mut m = vec![
        gpreg(is64, 0),
        gpreg(is64, 5),
        Mutator::LogicalImm { is64: is64 },
    ];
    if set_flags { m.push(Mutator::SetFlags); }
    instr(op, m)
}

fn logical_immediate() -> Decoder {
    mask(29, 3, vec![
        logical_imm_form(Opcode::AND, false, false),
        logical_imm_form(Opcode::ORR, false, false),
        logical_imm_form(Opcode::EOR, false, false),
        logical_imm_form(Opcode::AND, true,  false),
        logical_imm_form(Opcode::AND, false, true),
        logical_imm_form(Opcode::ORR, false, true),
        logical_imm_form(Opcode::EOR, false, true),
        logical_imm_form(Opcode::AND, true,  true),
    ])
}

fn move_wide_form(op: Opcode, is64: bool) -> Decoder {
    let leaf = instr(op, vec![
        gpreg(is64, 0),
        Mutator::Uf(vec![bf(5, 16)], imm_type(is64), 0),
        Mutator::ShiftAmt(bf(21, 2), 16),
    ]);
    if is64 {
        leaf
    } else {
        // 32-bit forms only shift by 0 or 16.
        select(vec![bf(22, 1)], is_zero, leaf, invalid())
    }
}

fn move_wide() -> Decoder {
    mask(29, 3, vec![
        move_wide_form(Opcode::MOVN, false),
        invalid(),
        move_wide_form(Opcode::MOVZ, false),
        move_wide_form(Opcode::MOVK, false),
        move_wide_form(Opcode::MOVN, true),
        invalid(),
        move_wide_form(Opcode::MOVZ, true),
        move_wide_form(Opcode::MOVK, true),
    ])
}

fn bitfield_form(op: Opcode, is64: bool) -> Decoder {
    instr(op, vec![
        gpreg(is64, 0),
        gpreg(is64, 5),
        Mutator::Bm { is64: is64 },
    ])
}

fn bitfield() -> Decoder {
    mask(29, 3, vec![
        bitfield_form(Opcode::SBFM, false),
        bitfield_form(Opcode::BFM,  false),
        bitfield_form(Opcode::UBFM, false),
        invalid(),
        bitfield_form(Opcode::SBFM, true),
        bitfield_form(Opcode::BFM,  true),
        bitfield_form(Opcode::UBFM, true),
        invalid(),
    ])
}

fn extract() -> Decoder {
    let extr32 = instr(Opcode::EXTR, vec![
        gpreg(false, 0),
        gpreg(false, 5),
        gpreg(false, 16),
        Mutator::U(bf(10, 6), PrimitiveType::Word, 0),
    ]);
    let extr64 = instr(Opcode::EXTR, vec![
        gpreg(true, 0),
        gpreg(true, 5),
        gpreg(true, 16),
        Mutator::U(bf(10, 6), PrimitiveType::Word, 0),
    ]);
    mask(29, 3, vec![
        // 32-bit form: N = 0 and imms < 32.
        select(vec![bf(22, 1), bf(15, 1)], is_zero, extr32, invalid()),
        invalid(), invalid(), invalid(),
        select(vec![bf(22, 1)], |n| n == 1, extr64, invalid()),
        invalid(), invalid(), invalid(),
    ])
}

/// The data processing (register) class, bits 25..28 = `x101`.
pub fn register() -> Decoder {
    mask(28, 1, vec![
        mask(24, 1, vec![
            logical_shifted(),
            mask(21, 1, vec![add_sub_shifted(), add_sub_extended()]),
        ]),
        register_misc(),
    ])
}

fn shifted_operands(set_flags: bool, is64: bool) -> Vec<Mutator> {
    let mut m = vec![
        gpreg(is64, 0),
        gpreg(is64, 5),
        gpreg(is64, 16),
        Mutator::ShiftI(bf(22, 2), vec![bf(10, 6)]),
    ];
    if set_flags { m.push(Mutator::SetFlags); }
    m
}

fn logical_shifted() -> Decoder {
    let form = |op, set_flags, is64| instr(op, shifted_operands(set_flags, is64));
    fields_mask(vec![bf(31, 1), bf(29, 2), bf(21, 1)], vec![
        form(Opcode::AND, false, false), form(Opcode::BIC, false, false),
        form(Opcode::ORR, false, false), form(Opcode::ORN, false, false),
        form(Opcode::EOR, false, false), form(Opcode::EON, false, false),
        form(Opcode::AND, true,  false), form(Opcode::BIC, true,  false),
        form(Opcode::AND, false, true),  form(Opcode::BIC, false, true),
        form(Opcode::ORR, false, true),  form(Opcode::ORN, false, true),
        form(Opcode::EOR, false, true),  form(Opcode::EON, false, true),
        form(Opcode::AND, true,  true),  form(Opcode::BIC, true,  true),
    ])
}

fn add_sub_shifted() -> Decoder {
    let form = |op, set_flags, is64| instr(op, shifted_operands(set_flags, is64));
    mask(29, 3, vec![
        form(Opcode::ADD, false, false),
        form(Opcode::ADD, true,  false),
        form(Opcode::SUB, false, false),
        form(Opcode::SUB, true,  false),
        form(Opcode::ADD, false, true),
        form(Opcode::ADD, true,  true),
        form(Opcode::SUB, false, true),
        form(Opcode::SUB, true,  true),
    ])
}

fn add_sub_extended() -> Decoder {
    let form = |op, set_flags, is64: bool| {
        let mut m = vec![
            gpreg(is64, 0),
            gpreg(is64, 5),
            Mutator::RmExt { is64: is64 },
        ];
        if set_flags { m.push(Mutator::SetFlags); }
        instr(op, m)
    };
    mask(29, 3, vec![
        form(Opcode::ADD, false, false),
        form(Opcode::ADD, true,  false),
        form(Opcode::SUB, false, false),
        form(Opcode::SUB, true,  false),
        form(Opcode::ADD, false, true),
        form(Opcode::ADD, true,  true),
        form(Opcode::SUB, false, true),
        form(Opcode::SUB, true,  true),
    ])
}

fn register_misc() -> Decoder {
    mask(21, 4, vec![
        add_sub_carry(),        // 0000
        invalid(),              // 0001
        cond_compare(),         // 0010
        invalid(),              // 0011
        cond_select(),          // 0100
        invalid(),              // 0101
        one_two_source(),       // 0110
        invalid(),              // 0111
        three_source(0),        // 1000
        three_source(1),        // 1001
        three_source(2),        // 1010
        invalid(),              // 1011
        invalid(),              // 1100
        three_source(5),        // 1101
        three_source(6),        // 1110
        invalid(),              // 1111
    ])
}

fn add_sub_carry() -> Decoder {
    let form = |op, set_flags, is64| {
        let mut m = vec![gpreg(is64, 0), gpreg(is64, 5), gpreg(is64, 16)];
        if set_flags { m.push(Mutator::SetFlags); }
        instr(op, m)
    };
    mask(29, 3, vec![
        form(Opcode::ADC, false, false),
        form(Opcode::ADC, true,  false),
        form(Opcode::SBC, false, false),
        form(Opcode::SBC, true,  false),
        form(Opcode::ADC, false, true),
        form(Opcode::ADC, true,  true),
        form(Opcode::SBC, false, true),
        form(Opcode::SBC, true,  true),
    ])
}

fn cond_compare() -> Decoder {
    let form = |op, is64: bool| {
        let reg = instr(op, vec![
            gpreg(is64, 5),
            gpreg(is64, 16),
            Mutator::U(bf(0, 4), PrimitiveType::Byte, 0),
            Mutator::C(bf(12, 4)),
        ]);
        let imm = instr(op, vec![
            gpreg(is64, 5),
            Mutator::U(bf(16, 5), imm_type(is64), 0),
            Mutator::U(bf(0, 4), PrimitiveType::Byte, 0),
            Mutator::C(bf(12, 4)),
        ]);
        mask(11, 1, vec![reg, imm])
    };
    mask(29, 3, vec![
        invalid(),
        form(Opcode::CCMN, false),
        invalid(),
        form(Opcode::CCMP, false),
        invalid(),
        form(Opcode::CCMN, true),
        invalid(),
        form(Opcode::CCMP, true),
    ])
}

fn cond_select() -> Decoder {
    let form = |op, is64| instr(op, vec![
        gpreg(is64, 0),
        gpreg(is64, 5),
        gpreg(is64, 16),
        Mutator::C(bf(12, 4)),
    ]);
    let tree = fields_mask(vec![bf(31, 1), bf(30, 1), bf(10, 2)], vec![
        form(Opcode::CSEL,  false), form(Opcode::CSINC, false), invalid(), invalid(),
        form(Opcode::CSINV, false), form(Opcode::CSNEG, false), invalid(), invalid(),
        form(Opcode::CSEL,  true),  form(Opcode::CSINC, true),  invalid(), invalid(),
        form(Opcode::CSINV, true),  form(Opcode::CSNEG, true),  invalid(), invalid(),
    ]);
    select(vec![bf(29, 1)], is_zero, tree, invalid())
}

fn one_two_source() -> Decoder {
    mask(30, 1, vec![two_source(), one_source()])
}

fn two_source() -> Decoder {
    let form = |is64: bool| {
        let bin = |op| instr(op, vec![gpreg(is64, 0), gpreg(is64, 5), gpreg(is64, 16)]);
        sparse(10, 6, nyi("data processing 2-source"), vec![
            ( 2, bin(Opcode::UDIV)),
            ( 3, bin(Opcode::SDIV)),
            ( 8, bin(Opcode::LSL)),
            ( 9, bin(Opcode::LSR)),
            (10, bin(Opcode::ASR)),
            (11, bin(Opcode::ROR)),
        ])
    };
    mask(31, 1, vec![form(false), form(true)])
}

fn one_source() -> Decoder {
    let un32 = |op| instr(op, vec![gpreg(false, 0), gpreg(false, 5)]);
    let un64 = |op| instr(op, vec![gpreg(true, 0), gpreg(true, 5)]);
    let w = sparse(10, 6, invalid(), vec![
        (0, un32(Opcode::RBIT)),
        (1, un32(Opcode::REV16)),
        (2, un32(Opcode::REV)),
        (4, un32(Opcode::CLZ)),
        (5, un32(Opcode::CLS)),
    ]);
    let x = sparse(10, 6, invalid(), vec![
        (0, un64(Opcode::RBIT)),
        (1, un64(Opcode::REV16)),
        (2, un64(Opcode::REV32)),
        (3, un64(Opcode::REV)),
        (4, un64(Opcode::CLZ)),
        (5, un64(Opcode::CLS)),
    ]);
    select(vec![bf(16, 5)], is_zero, mask(31, 1, vec![w, x]), invalid())
}

fn three_source(op31: u32) -> Decoder {
    match op31 {
        0 => {
            let form = |op, is64| instr(op, vec![
                gpreg(is64, 0),
                gpreg(is64, 5),
                gpreg(is64, 16),
                gpreg(is64, 10),
            ]);
            mask(15, 1, vec![
                mask(31, 1, vec![form(Opcode::MADD, false), form(Opcode::MADD, true)]),
                mask(31, 1, vec![form(Opcode::MSUB, false), form(Opcode::MSUB, true)]),
            ])
        }
        1 | 5 => {
            // Widening multiplies are 64-bit only.
            let (add, sub) = if op31 == 1 {
                (Opcode::SMADDL, Opcode::SMSUBL)
            } else {
                (Opcode::UMADDL, Opcode::UMSUBL)
            };
            let form = |op| instr(op, vec![
                gpreg(true, 0),
                gpreg(false, 5),
                gpreg(false, 16),
                gpreg(true, 10),
            ]);
            let tree = mask(15, 1, vec![form(add), form(sub)]);
            select(vec![bf(31, 1)], |n| n == 1, tree, invalid())
        }
        2 | 6 => {
            let op = if op31 == 2 { Opcode::SMULH } else { Opcode::UMULH };
            let leaf = instr(op, vec![gpreg(true, 0), gpreg(true, 5), gpreg(true, 16)]);
            let tree = mask(15, 1, vec![leaf, invalid()]);
            select(vec![bf(31, 1)], |n| n == 1, tree, invalid())
        }
        _ => invalid(),
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
