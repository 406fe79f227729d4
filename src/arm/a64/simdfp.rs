// License below.
//! Implements the A64 scalar floating point and AdvSIMD class.
//!
//! Scalar FP is covered for all three precisions; of the vector
//! space, the modified-immediate group is decoded and the rest is
//! flagged not-yet-implemented.
#![cfg_attr(feature="clippy", warn(result_unwrap_used, option_unwrap_used, print_stdout))]
#![cfg_attr(feature="clippy", warn(single_match_else, string_add, string_add_assign))]
#![cfg_attr(feature="clippy", warn(wrong_pub_self_convention))]
#![warn(missing_docs)]

use super::super::bits::bf;
use super::super::decoder::{instr, invalid, mask, nyi, select, sparse, fields_mask, Decoder};
use super::super::mutators::Mutator;
use super::super::opcode::Opcode;
use super::super::operand::{PrimitiveType, VectorKind};
use super::{gpreg, is_zero};

/// The SIMD and FP class, bits 25..28 = `x111`.
pub fn build() -> Decoder {
    mask(28, 1, vec![vector(), scalar_fp()])
}

fn vector() -> Decoder {
    let tree = mask(24, 1, vec![
        nyi("simd data processing"),
        sparse(19, 5, nyi("simd shift by immediate"), vec![
            (0, modified_immediate()),
        ]),
    ]);
    select(vec![bf(31, 1)], is_zero, tree, nyi("simd upper-half encodings"))
}

fn modified_immediate() -> Decoder {
    let mi = |op, kind| instr(op, vec![
        Mutator::UseQ(bf(30, 1)),
        Mutator::V(bf(0, 5)),
        Mutator::SimdImm,
        Mutator::Vd(kind),
    ]);
    fields_mask(vec![bf(29, 1), bf(12, 4)], vec![
        // op = 0
        mi(Opcode::MOVI, VectorKind::I32), mi(Opcode::ORR,  VectorKind::I32),
        mi(Opcode::MOVI, VectorKind::I32), mi(Opcode::ORR,  VectorKind::I32),
        mi(Opcode::MOVI, VectorKind::I32), mi(Opcode::ORR,  VectorKind::I32),
        mi(Opcode::MOVI, VectorKind::I32), mi(Opcode::ORR,  VectorKind::I32),
        mi(Opcode::MOVI, VectorKind::I16), mi(Opcode::ORR,  VectorKind::I16),
        mi(Opcode::MOVI, VectorKind::I16), mi(Opcode::ORR,  VectorKind::I16),
        mi(Opcode::MOVI, VectorKind::I32), mi(Opcode::MOVI, VectorKind::I32),
        mi(Opcode::MOVI, VectorKind::I8),  mi(Opcode::FMOV, VectorKind::F32),
        // op = 1
        mi(Opcode::MVNI, VectorKind::I32), mi(Opcode::BIC,  VectorKind::I32),
        mi(Opcode::MVNI, VectorKind::I32), mi(Opcode::BIC,  VectorKind::I32),
        mi(Opcode::MVNI, VectorKind::I32), mi(Opcode::BIC,  VectorKind::I32),
        mi(Opcode::MVNI, VectorKind::I32), mi(Opcode::BIC,  VectorKind::I32),
        mi(Opcode::MVNI, VectorKind::I16), mi(Opcode::BIC,  VectorKind::I16),
        mi(Opcode::MVNI, VectorKind::I16), mi(Opcode::BIC,  VectorKind::I16),
        mi(Opcode::MVNI, VectorKind::I32), mi(Opcode::MVNI, VectorKind::I32),
        mi(Opcode::MOVI, VectorKind::I64),
        // cmode = 1111, op = 1 stays undecoded on purpose.
        invalid(),
    ])
}

fn scalar_fp() -> Decoder {
    let typed = mask(22, 2, vec![
        fp_type(PrimitiveType::Real32),
        fp_type(PrimitiveType::Real64),
        invalid(),
        fp_type(PrimitiveType::Real16),
    ]);
    let body = mask(21, 1, vec![nyi("fp/int fixed-point conversion"), typed]);
    let main = mask(24, 1, vec![body, nyi("fp data processing 3-source")]);
    select(vec![bf(29, 3)], is_zero, main, nyi("advanced simd scalar"))
}

fn freg(ty: PrimitiveType, pos: u8) -> Mutator {
    match ty {
        PrimitiveType::Real16 => Mutator::H(bf(pos, 5)),
        PrimitiveType::Real64 => Mutator::D(bf(pos, 5)),
        _                     => Mutator::S(bf(pos, 5)),
    }
}

fn fp_type(ty: PrimitiveType) -> Decoder {
    mask(10, 2, vec![
        mask(12, 3, vec![
            int_conversions(ty),
            fp_immediate(ty),
            compare(ty),
            fp_immediate(ty),
            one_source(ty),
            fp_immediate(ty),
            invalid(),
            fp_immediate(ty),
        ]),
        cond_compare(ty),
        two_source(ty),
        cond_select(ty),
    ])
}

fn int_conversions(ty: PrimitiveType) -> Decoder {
    let conv = |sf: bool| {
        let mut entries = vec![
            (0b00010, instr(Opcode::SCVTF,  vec![freg(ty, 0), gpreg(sf, 5)])),
            (0b00011, instr(Opcode::UCVTF,  vec![freg(ty, 0), gpreg(sf, 5)])),
            (0b11000, instr(Opcode::FCVTZS, vec![gpreg(sf, 0), freg(ty, 5)])),
            (0b11001, instr(Opcode::FCVTZU, vec![gpreg(sf, 0), freg(ty, 5)])),
        ];
        // fmov between the banks only exists at matching widths;
        // half precision pairs with either GP width.
        let fmov_ok = match ty {
            PrimitiveType::Real16 => true,
            PrimitiveType::Real64 => sf,
            _                     => !sf,
        };
        if fmov_ok {
            entries.push((0b00110, instr(Opcode::FMOV, vec![gpreg(sf, 0), freg(ty, 5)])));
            entries.push((0b00111, instr(Opcode::FMOV, vec![freg(ty, 0), gpreg(sf, 5)])));
        }
        sparse(16, 5, nyi("fp/int conversion"), entries)
    };
    mask(31, 1, vec![conv(false), conv(true)])
}

fn fp_immediate(ty: PrimitiveType) -> Decoder {
    let imm = match ty {
        PrimitiveType::Real16 => Mutator::Fp16(bf(13, 8)),
        PrimitiveType::Real64 => Mutator::Fp64(bf(13, 8)),
        _                     => Mutator::Fp32(bf(13, 8)),
    };
    let leaf = instr(Opcode::FMOV, vec![freg(ty, 0), imm]);
    select(vec![bf(5, 5)], is_zero, leaf, invalid())
}

fn compare(ty: PrimitiveType) -> Decoder {
    let with_reg = |op| instr(op, vec![freg(ty, 5), freg(ty, 16)]);
    let with_zero = |op| instr(op, vec![freg(ty, 5), Mutator::UFixed(0, ty)]);
    let tree = fields_mask(vec![bf(3, 2)], vec![
        with_reg(Opcode::FCMP),
        with_zero(Opcode::FCMP),
        with_reg(Opcode::FCMPE),
        with_zero(Opcode::FCMPE),
    ]);
    select(vec![bf(0, 3)], is_zero, tree, invalid())
}

fn one_source(ty: PrimitiveType) -> Decoder {
    let un = |op| instr(op, vec![freg(ty, 0), freg(ty, 5)]);
    let cvt = |dst: PrimitiveType| {
        if dst == ty {
            invalid()
        } else {
            instr(Opcode::FCVT, vec![freg(dst, 0), freg(ty, 5)])
        }
    };
    sparse(15, 6, nyi("fp data processing 1-source"), vec![
        (0, un(Opcode::FMOV)),
        (1, un(Opcode::FABS)),
        (2, un(Opcode::FNEG)),
        (3, un(Opcode::FSQRT)),
        (4, cvt(PrimitiveType::Real32)),
        (5, cvt(PrimitiveType::Real64)),
        (7, cvt(PrimitiveType::Real16)),
    ])
}

fn cond_compare(ty: PrimitiveType) -> Decoder {
    let fccmp = instr(Opcode::FCCMP, vec![
        freg(ty, 5),
        freg(ty, 16),
        Mutator::U(bf(0, 4), PrimitiveType::Byte, 0),
        Mutator::C(bf(12, 4)),
    ]);
    mask(4, 1, vec![fccmp, nyi("fccmpe")])
}

fn two_source(ty: PrimitiveType) -> Decoder {
    let bin = |op| instr(op, vec![freg(ty, 0), freg(ty, 5), freg(ty, 16)]);
    mask(12, 4, vec![
        bin(Opcode::FMUL),
        bin(Opcode::FDIV),
        bin(Opcode::FADD),
        bin(Opcode::FSUB),
        bin(Opcode::FMAX),
        bin(Opcode::FMIN),
        bin(Opcode::FMAXNM),
        bin(Opcode::FMINNM),
        bin(Opcode::FNMUL),
        invalid(), invalid(), invalid(),
        invalid(), invalid(), invalid(), invalid(),
    ])
}

fn cond_select(ty: PrimitiveType) -> Decoder {
    instr(Opcode::FCSEL, vec![
        freg(ty, 0),
        freg(ty, 5),
        freg(ty, 16),
        Mutator::C(bf(12, 4)),
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
