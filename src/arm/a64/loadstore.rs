// License below.
//! Implements the A64 loads and stores class.
//!
//! The class covers the GP and SIMD register forms alike; the `V`
//! bit at 26 selects the SIMD banks. All immediate offsets scale by
//! the size of the transferred data type except the "unscaled"
//! `stur`/`ldur` family, which is the whole point of that family.
#![cfg_attr(feature="clippy", warn(result_unwrap_used, option_unwrap_used, print_stdout))]
#![cfg_attr(feature="clippy", warn(single_match_else, string_add, string_add_assign))]
#![cfg_attr(feature="clippy", warn(wrong_pub_self_convention))]
#![warn(missing_docs)]

use super::super::bits::{bf, Bitfield};
use super::super::decoder::{instr, invalid, mask, nyi, select, fields_mask, Decoder};
use super::super::mutators::Mutator;
use super::super::opcode::Opcode;
use super::super::operand::PrimitiveType;
use super::is_zero;

/// The loads and stores class, bits 25..28 = `x1x0`.
pub fn build() -> Decoder {
    mask(27, 3, vec![
        invalid(),
        select(vec![bf(26, 1)], is_zero,
               nyi("load/store exclusive"),
               nyi("simd load/store multiple structures")),
        invalid(),
        literal(),
        invalid(),
        pairs(),
        invalid(),
        register_forms(),
    ])
}

fn literal() -> Decoder {
    let lit = |op, reg, dt| instr(op, vec![reg, Mutator::Mlit(dt)]);
    let tree = fields_mask(vec![bf(30, 2), bf(26, 1)], vec![
        lit(Opcode::LDR,   Mutator::W(bf(0, 5)), PrimitiveType::Word),
        lit(Opcode::LDR,   Mutator::S(bf(0, 5)), PrimitiveType::Real32),
        lit(Opcode::LDR,   Mutator::X(bf(0, 5)), PrimitiveType::DoubleWord),
        lit(Opcode::LDR,   Mutator::D(bf(0, 5)), PrimitiveType::Real64),
        lit(Opcode::LDRSW, Mutator::X(bf(0, 5)), PrimitiveType::SWord),
        lit(Opcode::LDR,   Mutator::Q(bf(0, 5)), PrimitiveType::QuadWord),
        nyi("prfm (literal)"),
        invalid(),
    ]);
    mask(24, 2, vec![tree, invalid(), invalid(), invalid()])
}

fn pairs() -> Decoder {
    mask(23, 2, vec![
        pair_variant(true,  Mutator::MpairOff),
        pair_variant(false, Mutator::MpairPost),
        pair_variant(false, Mutator::MpairOff),
        pair_variant(false, Mutator::MpairPre),
    ])
}

fn pair_variant(no_alloc: bool, mem: fn(PrimitiveType) -> Mutator) -> Decoder {
    let (st, ld) = if no_alloc {
        (Opcode::STNP, Opcode::LDNP)
    } else {
        (Opcode::STP, Opcode::LDP)
    };
    let gp = |op, is64: bool, dt| {
        let r = |pos| if is64 { Mutator::X(bf(pos, 5)) } else { Mutator::W(bf(pos, 5)) };
        instr(op, vec![r(0), r(10), mem(dt)])
    };
    let fp = |op, reg: fn(Bitfield) -> Mutator, dt| {
        instr(op, vec![reg(bf(0, 5)), reg(bf(10, 5)), mem(dt)])
    };
    let ldpsw = if no_alloc {
        invalid()
    } else {
        instr(Opcode::LDPSW, vec![
            Mutator::X(bf(0, 5)),
            Mutator::X(bf(10, 5)),
            mem(PrimitiveType::SWord),
        ])
    };
    fields_mask(vec![bf(30, 2), bf(26, 1), bf(22, 1)], vec![
        gp(st, false, PrimitiveType::Word),
        gp(ld, false, PrimitiveType::Word),
        fp(st, Mutator::S, PrimitiveType::Real32),
        fp(ld, Mutator::S, PrimitiveType::Real32),
        invalid(),
        ldpsw,
        fp(st, Mutator::D, PrimitiveType::Real64),
        fp(ld, Mutator::D, PrimitiveType::Real64),
        gp(st, true, PrimitiveType::DoubleWord),
        gp(ld, true, PrimitiveType::DoubleWord),
        fp(st, Mutator::Q, PrimitiveType::QuadWord),
        fp(ld, Mutator::Q, PrimitiveType::QuadWord),
        invalid(), invalid(), invalid(), invalid(),
    ])
}

fn register_forms() -> Decoder {
    mask(24, 2, vec![
        imm9_family(),
        single_variant(true, Mutator::Mo),
        invalid(),
        invalid(),
    ])
}

fn imm9_family() -> Decoder {
    mask(21, 1, vec![
        mask(10, 2, vec![
            single_variant(false, Mutator::Mu),
            single_variant(true, Mutator::Mpost),
            nyi("load/store unprivileged"),
            single_variant(true, Mutator::Mpre),
        ]),
        mask(10, 2, vec![
            invalid(),
            invalid(),
            single_variant(true, Mutator::Mr),
            invalid(),
        ]),
    ])
}

/// One `size:V:opc` dispatch over the single-register load/store
/// space, 32 slots. `scaled` picks the `str`/`ldr` mnemonics, the
/// unscaled family gets `stur`/`ldur`.
fn single_variant(scaled: bool, mem: fn(PrimitiveType) -> Mutator) -> Decoder {
    use super::super::opcode::Opcode::*;
    let (st, ld, stb, ldb, sth, ldh, ldsb, ldsh, ldsw) = if scaled {
        (STR, LDR, STRB, LDRB, STRH, LDRH, LDRSB, LDRSH, LDRSW)
    } else {
        (STUR, LDUR, STURB, LDURB, STURH, LDURH, LDURSB, LDURSH, LDURSW)
    };
    let gp = |op, is64: bool, dt| {
        let r = if is64 { Mutator::X(bf(0, 5)) } else { Mutator::W(bf(0, 5)) };
        instr(op, vec![r, mem(dt)])
    };
    let fp = |op, reg: Mutator, dt| instr(op, vec![reg, mem(dt)]);
    let prfm = if scaled { nyi("prfm") } else { invalid() };
    fields_mask(vec![bf(30, 2), bf(26, 1), bf(22, 2)], vec![
        // size = 00
        gp(stb,  false, PrimitiveType::Byte),
        gp(ldb,  false, PrimitiveType::Byte),
        gp(ldsb, true,  PrimitiveType::SByte),
        gp(ldsb, false, PrimitiveType::SByte),
        fp(st, Mutator::B(bf(0, 5)), PrimitiveType::Byte),
        fp(ld, Mutator::B(bf(0, 5)), PrimitiveType::Byte),
        fp(st, Mutator::Q(bf(0, 5)), PrimitiveType::QuadWord),
        fp(ld, Mutator::Q(bf(0, 5)), PrimitiveType::QuadWord),
        // size = 01
        gp(sth,  false, PrimitiveType::HalfWord),
        gp(ldh,  false, PrimitiveType::HalfWord),
        gp(ldsh, true,  PrimitiveType::SHalfWord),
        gp(ldsh, false, PrimitiveType::SHalfWord),
        fp(st, Mutator::H(bf(0, 5)), PrimitiveType::Real16),
        fp(ld, Mutator::H(bf(0, 5)), PrimitiveType::Real16),
        invalid(),
        invalid(),
        // size = 10
        gp(st,   false, PrimitiveType::Word),
        gp(ld,   false, PrimitiveType::Word),
        gp(ldsw, true,  PrimitiveType::SWord),
        invalid(),
        fp(st, Mutator::S(bf(0, 5)), PrimitiveType::Real32),
        fp(ld, Mutator::S(bf(0, 5)), PrimitiveType::Real32),
        invalid(),
        invalid(),
        // size = 11
        gp(st, true, PrimitiveType::DoubleWord),
        gp(ld, true, PrimitiveType::DoubleWord),
        prfm,
        invalid(),
        fp(st, Mutator::D(bf(0, 5)), PrimitiveType::Real64),
        fp(ld, Mutator::D(bf(0, 5)), PrimitiveType::Real64),
        invalid(),
        invalid(),
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
