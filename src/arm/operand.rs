// License below.
//! Implements the typed operand model of decoded instructions.
//!
//! Every operand of a decoded instruction is one value of the
//! [`Operand`](./enum.Operand.html) sum. Immediates carry a primitive
//! type tag so a consumer knows how wide the value is and whether it
//! is signed; memory operands bundle everything an ARM addressing
//! mode can express, from a plain `[Rn]` up to
//! `[Rn, Rm, sxtw #2]` with write-back.
#![cfg_attr(feature="clippy", warn(result_unwrap_used, option_unwrap_used, print_stdout))]
#![cfg_attr(feature="clippy", warn(single_match_else, string_add, string_add_assign))]
#![cfg_attr(feature="clippy", warn(wrong_pub_self_convention))]
#![warn(missing_docs)]

use super::condition::ArmCondition;
use super::opcode::Opcode;
use super::registers::RegisterId;

/// The width and interpretation of a primitive value.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PrimitiveType {
    #[doc = "Unsigned 8-bit value."]    Byte,
    #[doc = "Unsigned 16-bit value."]   HalfWord,
    #[doc = "Unsigned 32-bit value."]   Word,
    #[doc = "Unsigned 64-bit value."]   DoubleWord,
    #[doc = "Unsigned 128-bit value."]  QuadWord,
    #[doc = "Signed 8-bit value."]      SByte,
    #[doc = "Signed 16-bit value."]     SHalfWord,
    #[doc = "Signed 32-bit value."]     SWord,
    #[doc = "Signed 64-bit value."]     SDoubleWord,
    #[doc = "16-bit IEEE 754 value."]   Real16,
    #[doc = "32-bit IEEE 754 value."]   Real32,
    #[doc = "64-bit IEEE 754 value."]   Real64,
}

impl PrimitiveType {
    /// The size of a value of this type, in bytes.
    pub fn size(self) -> u32 {
        match self {
            PrimitiveType::Byte        |
            PrimitiveType::SByte       => 1,
            PrimitiveType::HalfWord    |
            PrimitiveType::SHalfWord   |
            PrimitiveType::Real16      => 2,
            PrimitiveType::Word        |
            PrimitiveType::SWord       |
            PrimitiveType::Real32      => 4,
            PrimitiveType::DoubleWord  |
            PrimitiveType::SDoubleWord |
            PrimitiveType::Real64      => 8,
            PrimitiveType::QuadWord    => 16,
        }
    }

    /// `log2` of the size in bytes, i.e. the scaling shift applied
    /// to immediate offsets addressing a value of this type.
    pub fn log2_size(self) -> u32 {
        match self.size() {
            1  => 0,
            2  => 1,
            4  => 2,
            8  => 3,
            16 => 4,
            _  => unreachable!(),
        }
    }
}

/// A SIMD lane arrangement or element conversion.
///
/// Plain kinds like `I32` describe the element layout of a vector
/// operation. Paired kinds like `F32S32` describe a conversion and
/// read "to float32 from signed32".
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[allow(missing_docs)]
pub enum VectorKind {
    Invalid,
    I8, I16, I32, I64,
    S8, S16, S32, S64,
    U8, U16, U32, U64,
    F16, F32, F64,
    F16S16, F16S32, F32S32, F64S64,
    F16U16, F16U32, F32U32, F64U64,
    S16F16, S32F32, S64F64,
    U16F16, U32F32, U64F64,
}

/// The option operand of a barrier instruction, i.e. `dmb ish`.
///
/// The names mirror the four bit `CRm` encodings; option values the
/// architecture leaves reserved are preserved numerically.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BarrierOption {
    #[doc = "Outer shareable, loads only."]  OSHLD,
    #[doc = "Outer shareable, stores only."] OSHST,
    #[doc = "Outer shareable."]              OSH,
    #[doc = "Non-shareable, loads only."]    NSHLD,
    #[doc = "Non-shareable, stores only."]   NSHST,
    #[doc = "Non-shareable."]                NSH,
    #[doc = "Inner shareable, loads only."]  ISHLD,
    #[doc = "Inner shareable, stores only."] ISHST,
    #[doc = "Inner shareable."]              ISH,
    #[doc = "Full system, loads only."]      LD,
    #[doc = "Full system, stores only."]     ST,
    #[doc = "Full system."]                  SY,
    #[doc = "A reserved option value."]      Reserved(u8),
}

impl BarrierOption {
    /// Decodes the 4-bit `CRm` option field of a barrier instruction.
    pub fn from_bits(bits: u32) -> BarrierOption {
        match bits & 0b1111 {
            0b0001 => BarrierOption::OSHLD,
            0b0010 => BarrierOption::OSHST,
            0b0011 => BarrierOption::OSH,
            0b0101 => BarrierOption::NSHLD,
            0b0110 => BarrierOption::NSHST,
            0b0111 => BarrierOption::NSH,
            0b1001 => BarrierOption::ISHLD,
            0b1010 => BarrierOption::ISHST,
            0b1011 => BarrierOption::ISH,
            0b1101 => BarrierOption::LD,
            0b1110 => BarrierOption::ST,
            0b1111 => BarrierOption::SY,
            x      => BarrierOption::Reserved(x as u8),
        }
    }
}

/// A typed immediate value.
///
/// The value is stored as raw 64-bit data. For the signed primitive
/// types it holds the sign-extended two's complement value, for the
/// real types the IEEE 754 bit pattern, zero-extended.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ImmValue {
    /// The raw value bits.
    pub value: i64,
    /// How to interpret the value bits.
    pub ty: PrimitiveType,
}

impl ImmValue {
    /// Creates a typed immediate from raw value bits.
    pub fn new(value: i64, ty: PrimitiveType) -> ImmValue {
        ImmValue { value: value, ty: ty }
    }
}

/// A memory reference operand.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct MemoryOperand {
    /// The base register.
    pub base: RegisterId,
    /// An immediate offset from the base, if any.
    pub offset: Option<ImmValue>,
    /// An index register, if any.
    pub index: Option<RegisterId>,
    /// How the index register is extended before use, e.g.
    /// [`Opcode::SXTW`](./enum.Opcode.html). `Opcode::Invalid` when
    /// the index is used as-is.
    pub index_extend: Opcode,
    /// Left-shift applied to the index register.
    pub index_shift: u8,
    /// Offset applied before the access, with write-back.
    pub pre_index: bool,
    /// Offset applied after the access, with write-back.
    pub post_index: bool,
    /// The type of the value being addressed.
    pub data_type: PrimitiveType,
}

impl MemoryOperand {
    /// A plain `[base]` reference of the given data type.
    ///
    /// The decoder's operand extractors start from this and fill in
    /// whatever the addressing mode provides.
    pub fn base(base: RegisterId, data_type: PrimitiveType) -> MemoryOperand {
        MemoryOperand {
            base: base,
            offset: None,
            index: None,
            index_extend: Opcode::Invalid,
            index_shift: 0,
            pre_index: false,
            post_index: false,
            data_type: data_type,
        }
    }
}

/// One operand of a decoded instruction.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Operand {
    #[doc = "A register from the catalog."]            Register(RegisterId),
    #[doc = "A typed immediate value."]                Immediate(ImmValue),
    #[doc = "An absolute code or data address."]       Address(u64),
    #[doc = "A memory reference."]                     Memory(MemoryOperand),
    #[doc = "A condition code operand, e.g. `csel`."]  Condition(ArmCondition),
    #[doc = "A barrier option, e.g. `dmb ish`."]       Barrier(BarrierOption),
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
