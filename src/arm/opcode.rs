// License below.
//! Implements the opcode enumeration shared by both instruction sets.
#![cfg_attr(feature="clippy", warn(result_unwrap_used, option_unwrap_used, print_stdout))]
#![cfg_attr(feature="clippy", warn(single_match_else, string_add, string_add_assign))]
#![cfg_attr(feature="clippy", warn(wrong_pub_self_convention))]
#![warn(missing_docs)]

/// Every opcode the disassembler can emit.
///
/// Variant names are the ARM mnemonics. Where T32 and A64 share a
/// mnemonic they share the variant, the operand list tells them
/// apart. Flag-setting forms are not separate opcodes: the
/// instruction record carries an `update_flags` flag instead, so a
/// formatter appends the `s` suffix itself.
///
/// The shift and extension operators at the end double as the
/// `shift_type` and `index_extend` context values of an instruction
/// record; they are never emitted as an instruction's own opcode.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[allow(missing_docs)]
pub enum Opcode {
    /// An undefined or malformed encoding.
    Invalid,

    // Data processing.
    ADC, ADD, ADDW, ADR, ADRP, AND, ASR, BFC, BFI, BFM, BIC, CLS, CLZ,
    CMN, CMP, EON, EOR, EXTR, LSL, LSR, MADD, MLA, MLS, MOV, MOVK,
    MOVN, MOVT, MOVW, MOVZ, MSUB, MUL, MVN, ORN, ORR, RBIT, REV,
    REV16, REV32, REVSH, ROR, RRX, RSB, SBC, SBFM, SBFX, SDIV,
    SMADDL, SMLAL, SMSUBL, SMULH, SMULL, SUB, SUBW, SXTB, SXTH, TEQ, TST,
    UBFM, UBFX, UDIV, UMADDL, UMLAL, UMSUBL, UMULH, UMULL, UXTB,
    UXTH,
    // Conditional data processing.
    CCMN, CCMP, CSEL, CSINC, CSINV, CSNEG,
    // Branches and exception generation.
    B, BKPT, BL, BLR, BLX, BR, BRK, BX, CBNZ, CBZ, DCPS1, DCPS2,
    DCPS3, DRPS, ERET, HLT, HVC, RET, SMC, SVC, TBB, TBH, TBNZ, TBZ,
    UDF,
    // Hints, system and barriers.
    CLREX, DMB, DSB, ISB, IT, MRS, MSR, NOP, SEV, SEVL, WFE, WFI,
    YIELD,
    // Loads and stores.
    LDM, LDMDB, LDNP, LDP, LDPSW, LDR, LDRB, LDRD, LDRH, LDRSB,
    LDRSH, LDRSW, LDUR, LDURB, LDURH, LDURSB, LDURSH, LDURSW, POP,
    PRFM, PUSH, STM, STMDB, STNP, STP, STR, STRB, STRD, STRH, STUR,
    STURB, STURH,
    // Floating point and SIMD.
    FABS, FADD, FCCMP, FCMP, FCMPE, FCSEL, FCVT, FCVTZS, FCVTZU,
    FDIV, FMAX, FMAXNM, FMIN, FMINNM, FMOV, FMUL, FNEG, FNMUL,
    FSQRT, FSUB, MOVI, MVNI, SCVTF, UCVTF,
    // Register extension operators, used as `index_extend` context.
    UXTW, UXTX, SXTW, SXTX,
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
