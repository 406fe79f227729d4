// License below.
//! Implements the A64 branches, exceptions and system class.
#![cfg_attr(feature="clippy", warn(result_unwrap_used, option_unwrap_used, print_stdout))]
#![cfg_attr(feature="clippy", warn(single_match_else, string_add, string_add_assign))]
#![cfg_attr(feature="clippy", warn(wrong_pub_self_convention))]
#![warn(missing_docs)]

use super::super::bits::bf;
use super::super::decoder::{instr, invalid, mask, nyi, select, sparse, Decoder};
use super::super::mutators::Mutator;
use super::super::opcode::Opcode;
use super::super::operand::PrimitiveType;
use super::{gpreg, is_zero};

/// The branches, exceptions and system class, bits 25..28 = `101x`.
pub fn build() -> Decoder {
    mask(29, 3, vec![
        instr(Opcode::B,  vec![Mutator::J(bf(0, 26))]),
        compare_and_test_branch(false),
        cond_branch(),
        invalid(),
        instr(Opcode::BL, vec![Mutator::J(bf(0, 26))]),
        compare_and_test_branch(true),
        system_and_register_branch(),
        invalid(),
    ])
}

fn compare_and_test_branch(is64: bool) -> Decoder {
    let cb = |op| instr(op, vec![
        gpreg(is64, 0),
        Mutator::J(bf(5, 19)),
    ]);
    // The tested bit index of tbz spills into bit 31 for the upper
    // 32 bit positions.
    let bit_index = if is64 {
        Mutator::Uf(vec![bf(31, 1), bf(19, 5)], PrimitiveType::Byte, 0)
    } else {
        Mutator::Uf(vec![bf(19, 5)], PrimitiveType::Byte, 0)
    };
    let tb = |op| instr(op, vec![
        gpreg(is64, 0),
        bit_index.clone(),
        Mutator::J(bf(5, 14)),
    ]);
    mask(24, 2, vec![
        cb(Opcode::CBZ),
        cb(Opcode::CBNZ),
        tb(Opcode::TBZ),
        tb(Opcode::TBNZ),
    ])
}

fn cond_branch() -> Decoder {
    let bcond = instr(Opcode::B, vec![
        Mutator::CondField(bf(0, 4)),
        Mutator::J(bf(5, 19)),
    ]);
    mask(24, 1, vec![
        select(vec![bf(4, 1)], is_zero, bcond, invalid()),
        invalid(),
    ])
}

fn system_and_register_branch() -> Decoder {
    mask(24, 2, vec![
        exceptions(),
        system(),
        register_branch(),
        register_branch(),
    ])
}

fn exceptions() -> Decoder {
    let exc = |op| instr(op, vec![Mutator::U(bf(5, 16), PrimitiveType::Word, 0)]);
    let guarded = |d| select(vec![bf(2, 3)], is_zero, d, invalid());
    mask(21, 3, vec![
        guarded(sparse(0, 2, invalid(), vec![
            (1, exc(Opcode::SVC)),
            (2, exc(Opcode::HVC)),
            (3, exc(Opcode::SMC)),
        ])),
        guarded(sparse(0, 2, invalid(), vec![(0, exc(Opcode::BRK))])),
        guarded(sparse(0, 2, invalid(), vec![(0, exc(Opcode::HLT))])),
        invalid(),
        invalid(),
        guarded(sparse(0, 2, invalid(), vec![
            (1, exc(Opcode::DCPS1)),
            (2, exc(Opcode::DCPS2)),
            (3, exc(Opcode::DCPS3)),
        ])),
        invalid(),
        invalid(),
    ])
}

fn system() -> Decoder {
    mask(21, 1, vec![
        mask(19, 2, vec![
            // op0 = 00: hints and barriers, keyed on op1:CRn.
            sparse(12, 7, nyi("system instruction"), vec![
                (0x32, hints()),
                (0x33, barriers()),
            ]),
            nyi("sys/sysl"),
            nyi("msr (register)"),
            nyi("msr (register)"),
        ]),
        nyi("mrs"),
    ])
}

fn hints() -> Decoder {
    let hint = |op| instr(op, vec![]);
    sparse(5, 7, nyi("hint"), vec![
        (0, hint(Opcode::NOP)),
        (1, hint(Opcode::YIELD)),
        (2, hint(Opcode::WFE)),
        (3, hint(Opcode::WFI)),
        (4, hint(Opcode::SEV)),
        (5, hint(Opcode::SEVL)),
    ])
}

fn barriers() -> Decoder {
    let barrier = |op| instr(op, vec![Mutator::BarrierOp(bf(8, 4))]);
    mask(5, 3, vec![
        invalid(),
        invalid(),
        instr(Opcode::CLREX, vec![Mutator::U(bf(8, 4), PrimitiveType::Byte, 0)]),
        invalid(),
        barrier(Opcode::DSB),
        barrier(Opcode::DMB),
        barrier(Opcode::ISB),
        invalid(),
    ])
}

fn register_branch() -> Decoder {
    let to_reg = |op| instr(op, vec![Mutator::X(bf(5, 5))]);
    let bare = |op| instr(op, vec![]);
    mask(21, 4, vec![
        to_reg(Opcode::BR),
        to_reg(Opcode::BLR),
        to_reg(Opcode::RET),
        invalid(),
        bare(Opcode::ERET),
        bare(Opcode::DRPS),
        invalid(), invalid(), invalid(), invalid(),
        invalid(), invalid(), invalid(), invalid(),
        invalid(), invalid(),
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
