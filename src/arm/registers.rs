// License below.
//! Implements the static register catalog.
//!
//! Registers are identified by a `(family, index)` pair. The catalog
//! is a set of flat, read-only tables built into the binary; decoded
//! instructions reference catalog entries by value.
//!
//! A64 register index 31 is context dependent: depending on the
//! instruction form it names either the stack pointer or the zero
//! register. The catalog stores the raw index 31 and leaves that
//! distinction to the consumer, which knows the opcode it is looking
//! at.
#![cfg_attr(feature="clippy", warn(result_unwrap_used, option_unwrap_used, print_stdout))]
#![cfg_attr(feature="clippy", warn(single_match_else, string_add, string_add_assign))]
#![cfg_attr(feature="clippy", warn(wrong_pub_self_convention))]
#![warn(missing_docs)]

/// A register family within the catalog.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RegisterFamily {
    #[doc = "32-bit general purpose registers. A32/T32 `r0`-`r15`, A64 `w0`-`w31`."] GpW,
    #[doc = "64-bit general purpose registers, A64 `x0`-`x31`."]                     GpX,
    #[doc = "8-bit SIMD scalars, `b0`-`b31`."]                                       SimdB,
    #[doc = "16-bit SIMD scalars, `h0`-`h31`."]                                      SimdH,
    #[doc = "32-bit SIMD scalars, `s0`-`s31`."]                                      SimdS,
    #[doc = "64-bit SIMD scalars, `d0`-`d31`."]                                      SimdD,
    #[doc = "128-bit SIMD registers, `q0`-`q31`."]                                   SimdQ,
    #[doc = "Special registers: program status and friends."]                        Special,
}

/// One entry of the register catalog.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct RegisterId {
    /// The family this register belongs to.
    pub family: RegisterFamily,
    /// The index within the family.
    pub index: u8,
}

impl RegisterId {
    /// Creates a register identifier.
    pub const fn new(family: RegisterFamily, index: u8) -> RegisterId {
        RegisterId { family: family, index: index }
    }
}

macro_rules! register_bank {
    ($family:expr) => ([
        RegisterId::new($family,  0), RegisterId::new($family,  1),
        RegisterId::new($family,  2), RegisterId::new($family,  3),
        RegisterId::new($family,  4), RegisterId::new($family,  5),
        RegisterId::new($family,  6), RegisterId::new($family,  7),
        RegisterId::new($family,  8), RegisterId::new($family,  9),
        RegisterId::new($family, 10), RegisterId::new($family, 11),
        RegisterId::new($family, 12), RegisterId::new($family, 13),
        RegisterId::new($family, 14), RegisterId::new($family, 15),
        RegisterId::new($family, 16), RegisterId::new($family, 17),
        RegisterId::new($family, 18), RegisterId::new($family, 19),
        RegisterId::new($family, 20), RegisterId::new($family, 21),
        RegisterId::new($family, 22), RegisterId::new($family, 23),
        RegisterId::new($family, 24), RegisterId::new($family, 25),
        RegisterId::new($family, 26), RegisterId::new($family, 27),
        RegisterId::new($family, 28), RegisterId::new($family, 29),
        RegisterId::new($family, 30), RegisterId::new($family, 31),
    ])
}

/// The 32-bit general purpose registers.
pub static GP_REGS32: [RegisterId; 32] = register_bank!(RegisterFamily::GpW);

/// The 64-bit general purpose registers.
pub static GP_REGS64: [RegisterId; 32] = register_bank!(RegisterFamily::GpX);

/// The 8-bit SIMD scalar registers.
pub static SIMD_REGS8: [RegisterId; 32] = register_bank!(RegisterFamily::SimdB);

/// The 16-bit SIMD scalar registers.
pub static SIMD_REGS16: [RegisterId; 32] = register_bank!(RegisterFamily::SimdH);

/// The 32-bit SIMD scalar registers.
pub static SIMD_REGS32: [RegisterId; 32] = register_bank!(RegisterFamily::SimdS);

/// The 64-bit SIMD scalar registers.
pub static SIMD_REGS64: [RegisterId; 32] = register_bank!(RegisterFamily::SimdD);

/// The 128-bit SIMD registers.
pub static SIMD_REGS128: [RegisterId; 32] = register_bank!(RegisterFamily::SimdQ);

/// The A32/T32 stack pointer, `r13`.
pub const SP: RegisterId = RegisterId::new(RegisterFamily::GpW, 13);

/// The A32/T32 link register, `r14`.
pub const LR: RegisterId = RegisterId::new(RegisterFamily::GpW, 14);

/// The A32/T32 program counter, `r15`.
pub const PC: RegisterId = RegisterId::new(RegisterFamily::GpW, 15);

/// The current program status register.
pub const CPSR: RegisterId = RegisterId::new(RegisterFamily::Special, 0);

/// The banked saved program status register.
pub const SPSR: RegisterId = RegisterId::new(RegisterFamily::Special, 1);




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
