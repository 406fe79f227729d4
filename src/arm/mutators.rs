// License below.
//! Implements the operand extractors of the decoder leaves.
//!
//! A mutator is one step of a leaf decoder: given the raw
//! instruction word and the in-progress decode state, it either
//! appends operands, or tweaks context fields such as the pending
//! shift, or fails the decode. Leaves list their mutators in operand
//! order, so the operand list of the finished record reads exactly
//! like the assembly line would.
//!
//! Mutators are data, not closures: each variant carries the
//! bitfield positions it reads. That keeps the decoder trees free of
//! allocation-per-decode and lets the tables be checked when they
//! are built.
#![cfg_attr(feature="clippy", warn(result_unwrap_used, option_unwrap_used, print_stdout))]
#![cfg_attr(feature="clippy", warn(single_match_else, string_add, string_add_assign))]
#![cfg_attr(feature="clippy", warn(wrong_pub_self_convention))]
#![warn(missing_docs)]

use super::bits::{read_fields, read_signed_fields, Bitfield};
use super::condition::ArmCondition;
use super::decoder::DasmState;
use super::immediates::{fp_imm16, fp_imm32, fp_imm64, logical_immediate,
                        modified_immediate, simd_modified_immediate};
use super::opcode::Opcode;
use super::operand::{BarrierOption, ImmValue, MemoryOperand, Operand,
                     PrimitiveType, VectorKind};
use super::registers::{RegisterFamily, RegisterId, SP};

/// One operand extraction or context update step of a leaf decoder.
#[derive(Debug, Clone)]
pub enum Mutator {
    // ---- Register operands. ---------------------------------------
    #[doc = "32-bit GP register from one bitfield."]                  W(Bitfield),
    #[doc = "32-bit GP register from concatenated bitfields."]        Wf(Vec<Bitfield>),
    #[doc = "64-bit GP register from one bitfield."]                  X(Bitfield),
    #[doc = "8-bit SIMD register."]                                   B(Bitfield),
    #[doc = "16-bit SIMD register."]                                  H(Bitfield),
    #[doc = "32-bit SIMD register."]                                  S(Bitfield),
    #[doc = "64-bit SIMD register."]                                  D(Bitfield),
    #[doc = "128-bit SIMD register."]                                 Q(Bitfield),
    #[doc = "SIMD register, 64 or 128 bits wide per the Q context."]  V(Bitfield),
    #[doc = "A fixed register, e.g. the T32 stack pointer."]          Reg(RegisterId),
    #[doc = "One 32-bit GP register operand per set bit."]            RegList(Bitfield),
    #[doc = "Register list plus one high register behind a flag."]    RegListHigh(Bitfield, Bitfield, RegisterId),

    // ---- Immediate operands. --------------------------------------
    #[doc = "Unsigned immediate from one field, scaled, typed."]      U(Bitfield, PrimitiveType, u8),
    #[doc = "Unsigned immediate from concatenated fields."]           Uf(Vec<Bitfield>, PrimitiveType, u8),
    #[doc = "Unsigned immediate plus one, e.g. bitfield widths."]     UPlus1(Bitfield, PrimitiveType),
    #[doc = "A fixed immediate, e.g. the zero of T32 `rsb`."]         UFixed(i64, PrimitiveType),
    #[doc = "Sign-extended immediate from concatenated fields."]      I(Vec<Bitfield>, PrimitiveType, u8),
    #[doc = "A64 logical immediate from `N:immr:imms`."]              LogicalImm {
        #[doc = "Decode for a 64-bit operation, `N=1` allowed."]      is64: bool,
    },
    #[doc = "A64 `immr`/`imms` rotate/width pair, `N` validated."]    Bm {
        #[doc = "Expect the 64-bit form of `N`."]                     is64: bool,
    },
    #[doc = "T32 modified immediate from `i:imm3:imm8`."]             ModImm,
    #[doc = "AdvSIMD modified immediate from `op:cmode:abcdefgh`."]   SimdImm,
    #[doc = "Packed 8-bit float expanded to an IEEE half."]           Fp16(Bitfield),
    #[doc = "Packed 8-bit float expanded to an IEEE single."]         Fp32(Bitfield),
    #[doc = "Packed 8-bit float expanded to an IEEE double."]         Fp64(Bitfield),

    // ---- Address operands. ----------------------------------------
    #[doc = "A64 PC-relative address, page-aligned for `adrp`."]      PcRel {
        #[doc = "Displacement fields, high part first."]              fields: Vec<Bitfield>,
        #[doc = "Scaling shift applied to the displacement."]         shift: u8,
        #[doc = "Zero the low 12 address bits first (`adrp`)."]       page: bool,
    },
    #[doc = "A64 branch target: address plus signed field times 4."]  J(Bitfield),
    #[doc = "T32 branch target, signed, based on address plus 4."]    Jt(Vec<Bitfield>, u8),
    #[doc = "T32 branch target, unsigned (`cbz` never goes back)."]   JtU(Vec<Bitfield>, u8),
    #[doc = "T32 word-aligned PC-relative address (`adr`)."]          Pt(Vec<Bitfield>, u8),
    #[doc = "T32 24-bit branch target of `b.w`/`bl` (T4 layout)."]    Jt24,
    #[doc = "T32 `blx` target, word-aligned, imm10H:imm10L."]         JtBlx,

    // ---- A64 memory operands. -------------------------------------
    #[doc = "`[Xn, #imm12]`, offset scaled by the data size."]        Mo(PrimitiveType),
    #[doc = "`[Xn, #simm9]`, unscaled."]                              Mu(PrimitiveType),
    #[doc = "`[Xn, #simm9]!`, pre-indexed with write-back."]          Mpre(PrimitiveType),
    #[doc = "`[Xn], #simm9`, post-indexed with write-back."]          Mpost(PrimitiveType),
    #[doc = "`[Xn, #simm7]` for register pairs, scaled."]             MpairOff(PrimitiveType),
    #[doc = "`[Xn, #simm7]!` for register pairs."]                    MpairPre(PrimitiveType),
    #[doc = "`[Xn], #simm7` for register pairs."]                     MpairPost(PrimitiveType),
    #[doc = "Literal pool address: address plus simm19 times 4."]     Mlit(PrimitiveType),
    #[doc = "`[Xn, Rm, extend #amount]` register offset."]            Mr(PrimitiveType),

    // ---- T32 memory operands. -------------------------------------
    #[doc = "16-bit `[Rn, #imm5]`, scaled by the data size."]         MtImm(PrimitiveType, Bitfield, Bitfield),
    #[doc = "16-bit `[sp, #imm8*4]`."]                                MtSp(PrimitiveType),
    #[doc = "16-bit `[Rn, Rm]`."]                                     MtReg(PrimitiveType),
    #[doc = "32-bit `[Rn, #imm12]`."]                                 MtImm12(PrimitiveType),
    #[doc = "32-bit `[Rn, #imm8]` with P/U/W addressing bits."]       MtImm8(PrimitiveType),
    #[doc = "32-bit `[Rn, Rm, lsl #imm2]`."]                          MtRegShift(PrimitiveType),
    #[doc = "32-bit literal: word-aligned PC plus/minus imm12."]      MtLit(PrimitiveType),
    #[doc = "32-bit `[Rn, #imm8*4]` of `ldrd`/`strd`, P/U/W."]        MtDual(PrimitiveType),
    #[doc = "Table branch `[Rn, Rm, lsl #shift]`."]                   MtTable(u8),

    // ---- Context updates, no operand appended. --------------------
    #[doc = "Condition-code operand (`csel`, `ccmp`)."]               C(Bitfield),
    #[doc = "Condition field of the record (`b<cond>`)."]             CondField(Bitfield),
    #[doc = "A64 shift context from type and amount fields."]         ShiftI(Bitfield, Vec<Bitfield>),
    #[doc = "T32 shift context with the `DecodeImmShift` rules."]     ShiftT(Bitfield, Vec<Bitfield>),
    #[doc = "LSL context by field value times a constant."]           ShiftAmt(Bitfield, u8),
    #[doc = "ROR context by field value times a constant."]           RorAmt(Bitfield, u8),
    #[doc = "Extended-register context, `uxtb` .. `sxtx`."]           Ex(Bitfield, Bitfield),
    #[doc = "A64 extended Rm operand plus its extend context."]       RmExt {
        #[doc = "The operation is 64 bits wide."]                     is64: bool,
    },
    #[doc = "The instruction always updates the flags."]              SetFlags,
    #[doc = "The instruction updates the flags if the bit is set."]   SetFlagsBit(Bitfield),
    #[doc = "The instruction always writes back."]                    Wback,
    #[doc = "The instruction writes back if the bit is set."]         WbackBit(Bitfield),
    #[doc = "T16 `ldm` write-back: base absent from the list."]       WbackBaseNotInList(Bitfield, Bitfield),
    #[doc = "Latches the Q bit for later `V(..)` mutators."]          UseQ(Bitfield),
    #[doc = "Integer lane arrangement from a 2-bit size field."]      Arr(Bitfield),
    #[doc = "A fixed vector arrangement or conversion."]              Vd(VectorKind),
    #[doc = "Barrier option operand from the `CRm` field."]           BarrierOp(Bitfield),
    #[doc = "The T32 `it` instruction: condition plus mask."]         It,
}

fn gp32(index: u32) -> RegisterId {
    RegisterId::new(RegisterFamily::GpW, index as u8)
}

fn gp64(index: u32) -> RegisterId {
    RegisterId::new(RegisterFamily::GpX, index as u8)
}

fn simd(family: RegisterFamily, index: u32) -> RegisterId {
    RegisterId::new(family, index as u8)
}

fn push_imm(st: &mut DasmState, value: i64, ty: PrimitiveType) {
    st.operands.push(Operand::Immediate(ImmValue::new(value, ty)));
}

/// The A64 register-offset extension table: only four of the eight
/// option values are architecturally valid.
fn index_extend(option: u32) -> Option<(Opcode, bool)> {
    match option {
        0b010 => Some((Opcode::UXTW, false)),
        0b011 => Some((Opcode::LSL,  true)),
        0b110 => Some((Opcode::SXTW, false)),
        0b111 => Some((Opcode::SXTX, true)),
        _     => None,
    }
}

fn extend_opcode(option: u32) -> Opcode {
    match option & 0b111 {
        0b000 => Opcode::UXTB,
        0b001 => Opcode::UXTH,
        0b010 => Opcode::UXTW,
        0b011 => Opcode::UXTX,
        0b100 => Opcode::SXTB,
        0b101 => Opcode::SXTH,
        0b110 => Opcode::SXTW,
        _     => Opcode::SXTX,
    }
}

impl Mutator {
    /// Runs this mutator against an instruction word.
    ///
    /// # Returns
    /// - `true`: The state was updated.
    /// - `false`: The word violates a constraint of this operand;
    ///   the instruction must decode as `Invalid`.
    pub fn apply(&self, word: u32, st: &mut DasmState) -> bool {
        match *self {
            // ---- Registers. ---------------------------------------
            Mutator::W(f) => {
                st.operands.push(Operand::Register(gp32(f.read(word))));
                true
            }
            Mutator::Wf(ref fields) => {
                st.operands.push(Operand::Register(gp32(read_fields(fields, word))));
                true
            }
            Mutator::X(f) => {
                st.operands.push(Operand::Register(gp64(f.read(word))));
                true
            }
            Mutator::B(f) => {
                st.operands.push(Operand::Register(simd(RegisterFamily::SimdB, f.read(word))));
                true
            }
            Mutator::H(f) => {
                st.operands.push(Operand::Register(simd(RegisterFamily::SimdH, f.read(word))));
                true
            }
            Mutator::S(f) => {
                st.operands.push(Operand::Register(simd(RegisterFamily::SimdS, f.read(word))));
                true
            }
            Mutator::D(f) => {
                st.operands.push(Operand::Register(simd(RegisterFamily::SimdD, f.read(word))));
                true
            }
            Mutator::Q(f) => {
                st.operands.push(Operand::Register(simd(RegisterFamily::SimdQ, f.read(word))));
                true
            }
            Mutator::V(f) => {
                let family = if st.use_q { RegisterFamily::SimdQ } else { RegisterFamily::SimdD };
                st.operands.push(Operand::Register(simd(family, f.read(word))));
                true
            }
            Mutator::Reg(reg) => {
                st.operands.push(Operand::Register(reg));
                true
            }
            Mutator::RegList(f) => {
                let list = f.read(word);
                if list == 0 { return false; }
                for i in 0 .. f.length as u32 {
                    if list & (1 << i) != 0 {
                        st.operands.push(Operand::Register(gp32(i)));
                    }
                }
                true
            }
            Mutator::RegListHigh(f, flag, high) => {
                let list = f.read(word);
                if list == 0 && flag.read(word) == 0 { return false; }
                for i in 0 .. f.length as u32 {
                    if list & (1 << i) != 0 {
                        st.operands.push(Operand::Register(gp32(i)));
                    }
                }
                if flag.read(word) != 0 {
                    st.operands.push(Operand::Register(high));
                }
                true
            }

            // ---- Immediates. --------------------------------------
            Mutator::U(f, ty, shift) => {
                push_imm(st, (f.read(word) as i64) << shift, ty);
                true
            }
            Mutator::Uf(ref fields, ty, shift) => {
                push_imm(st, (read_fields(fields, word) as i64) << shift, ty);
                true
            }
            Mutator::UPlus1(f, ty) => {
                push_imm(st, f.read(word) as i64 + 1, ty);
                true
            }
            Mutator::UFixed(value, ty) => {
                push_imm(st, value, ty);
                true
            }
            Mutator::I(ref fields, ty, shift) => {
                push_imm(st, read_signed_fields(fields, word, shift), ty);
                true
            }
            Mutator::LogicalImm { is64 } => {
                let n    = (word >> 22) & 1;
                let immr = (word >> 16) & 0x3F;
                let imms = (word >> 10) & 0x3F;
                let width = if is64 { 64 } else { 32 };
                match logical_immediate(n, immr, imms, width) {
                    Some(x) => {
                        let ty = if is64 { PrimitiveType::DoubleWord } else { PrimitiveType::Word };
                        push_imm(st, x as i64, ty);
                        true
                    }
                    None => false,
                }
            }
            Mutator::Bm { is64 } => {
                let n    = (word >> 22) & 1;
                let immr = (word >> 16) & 0x3F;
                let imms = (word >> 10) & 0x3F;
                if is64 != (n == 1) { return false; }
                if !is64 && (immr >= 32 || imms >= 32) { return false; }
                push_imm(st, immr as i64, PrimitiveType::Word);
                push_imm(st, imms as i64, PrimitiveType::Word);
                true
            }
            Mutator::ModImm => {
                let imm12 = (((word >> 26) & 1) << 11)
                          | (((word >> 12) & 0b111) << 8)
                          | (word & 0xFF);
                push_imm(st, modified_immediate(imm12) as i64, PrimitiveType::Word);
                true
            }
            Mutator::SimdImm => {
                let op    = (word >> 29) & 1;
                let cmode = (word >> 12) & 0xF;
                let imm8  = (((word >> 16) & 0b111) << 5) | ((word >> 5) & 0x1F);
                match simd_modified_immediate(op, cmode, imm8) {
                    Some(x) => {
                        push_imm(st, x as i64, PrimitiveType::DoubleWord);
                        true
                    }
                    None => false,
                }
            }
            Mutator::Fp16(f) => {
                push_imm(st, fp_imm16(f.read(word)) as i64, PrimitiveType::Real16);
                true
            }
            Mutator::Fp32(f) => {
                push_imm(st, fp_imm32(f.read(word)) as i64, PrimitiveType::Real32);
                true
            }
            Mutator::Fp64(f) => {
                push_imm(st, fp_imm64(f.read(word)) as i64, PrimitiveType::Real64);
                true
            }

            // ---- Addresses. ---------------------------------------
            Mutator::PcRel { ref fields, shift, page } => {
                let disp = read_signed_fields(fields, word, shift);
                let base = if page { st.addr & !0xFFF } else { st.addr };
                st.operands.push(Operand::Address(base.wrapping_add(disp as u64)));
                true
            }
            Mutator::J(f) => {
                let disp = (f.read_signed(word) as i64) << 2;
                st.operands.push(Operand::Address(st.addr.wrapping_add(disp as u64)));
                true
            }
            Mutator::Jt(ref fields, shift) => {
                let disp = read_signed_fields(fields, word, shift);
                st.operands.push(Operand::Address((st.addr + 4).wrapping_add(disp as u64)));
                true
            }
            Mutator::JtU(ref fields, shift) => {
                let disp = (read_fields(fields, word) as u64) << shift;
                st.operands.push(Operand::Address(st.addr.wrapping_add(4 + disp)));
                true
            }
            Mutator::Pt(ref fields, shift) => {
                let disp = (read_fields(fields, word) as u64) << shift;
                st.operands.push(Operand::Address(((st.addr + 4) & !0b11).wrapping_add(disp)));
                true
            }
            Mutator::Jt24 => {
                // S:I1:I2:imm10:imm11:'0' with I1 = NOT(J1 EOR S),
                // I2 = NOT(J2 EOR S).
                let s     = (word >> 26) & 1;
                let j1    = (word >> 13) & 1;
                let j2    = (word >> 11) & 1;
                let i1    = !(j1 ^ s) & 1;
                let i2    = !(j2 ^ s) & 1;
                let imm10 = (word >> 16) & 0x3FF;
                let imm11 = word & 0x7FF;
                let raw = (s << 24) | (i1 << 23) | (i2 << 22) | (imm10 << 12) | (imm11 << 1);
                let disp = ((raw << 7) as i32 as i64) >> 7;
                st.operands.push(Operand::Address((st.addr + 4).wrapping_add(disp as u64)));
                true
            }
            Mutator::JtBlx => {
                if word & 1 != 0 { return false; }
                // S:I1:I2:imm10H:imm10L:'0', one bit narrower than the
                // BL field: imm10L only spans 10 bits.
                let s      = (word >> 26) & 1;
                let j1     = (word >> 13) & 1;
                let j2     = (word >> 11) & 1;
                let i1     = !(j1 ^ s) & 1;
                let i2     = !(j2 ^ s) & 1;
                let imm10h = (word >> 16) & 0x3FF;
                let imm10l = (word >> 1) & 0x3FF;
                let raw = (s << 23) | (i1 << 22) | (i2 << 21) | (imm10h << 11) | (imm10l << 1);
                let disp = ((raw << 8) as i32 as i64) >> 8;
                let base = (st.addr + 4) & !0b11;
                st.operands.push(Operand::Address(base.wrapping_add(disp as u64)));
                true
            }

            // ---- A64 memory. --------------------------------------
            Mutator::Mo(dt) => {
                let mut mem = MemoryOperand::base(gp64((word >> 5) & 0x1F), dt);
                let offset = (((word >> 10) & 0xFFF) as i64) << dt.log2_size();
                if offset != 0 {
                    mem.offset = Some(ImmValue::new(offset, PrimitiveType::Word));
                }
                st.operands.push(Operand::Memory(mem));
                true
            }
            Mutator::Mu(dt) => {
                let mut mem = MemoryOperand::base(gp64((word >> 5) & 0x1F), dt);
                let offset = Bitfield { offset: 12, length: 9 }.read_signed(word) as i64;
                if offset != 0 {
                    mem.offset = Some(ImmValue::new(offset, PrimitiveType::SWord));
                }
                st.operands.push(Operand::Memory(mem));
                true
            }
            Mutator::Mpre(dt) => {
                let mut mem = MemoryOperand::base(gp64((word >> 5) & 0x1F), dt);
                let offset = Bitfield { offset: 12, length: 9 }.read_signed(word) as i64;
                mem.offset = Some(ImmValue::new(offset, PrimitiveType::SWord));
                mem.pre_index = true;
                st.writeback = true;
                st.operands.push(Operand::Memory(mem));
                true
            }
            Mutator::Mpost(dt) => {
                let mut mem = MemoryOperand::base(gp64((word >> 5) & 0x1F), dt);
                let offset = Bitfield { offset: 12, length: 9 }.read_signed(word) as i64;
                mem.offset = Some(ImmValue::new(offset, PrimitiveType::SWord));
                mem.post_index = true;
                st.writeback = true;
                st.operands.push(Operand::Memory(mem));
                true
            }
            Mutator::MpairOff(dt) => {
                let mut mem = MemoryOperand::base(gp64((word >> 5) & 0x1F), dt);
                let offset = (Bitfield { offset: 15, length: 7 }.read_signed(word) as i64)
                             << dt.log2_size();
                if offset != 0 {
                    mem.offset = Some(ImmValue::new(offset, PrimitiveType::SWord));
                }
                st.operands.push(Operand::Memory(mem));
                true
            }
            Mutator::MpairPre(dt) => {
                let mut mem = MemoryOperand::base(gp64((word >> 5) & 0x1F), dt);
                let offset = (Bitfield { offset: 15, length: 7 }.read_signed(word) as i64)
                             << dt.log2_size();
                mem.offset = Some(ImmValue::new(offset, PrimitiveType::SWord));
                mem.pre_index = true;
                st.writeback = true;
                st.operands.push(Operand::Memory(mem));
                true
            }
            Mutator::MpairPost(dt) => {
                let mut mem = MemoryOperand::base(gp64((word >> 5) & 0x1F), dt);
                let offset = (Bitfield { offset: 15, length: 7 }.read_signed(word) as i64)
                             << dt.log2_size();
                mem.offset = Some(ImmValue::new(offset, PrimitiveType::SWord));
                mem.post_index = true;
                st.writeback = true;
                st.operands.push(Operand::Memory(mem));
                true
            }
            Mutator::Mlit(_) => {
                let disp = (Bitfield { offset: 5, length: 19 }.read_signed(word) as i64) << 2;
                st.operands.push(Operand::Address(st.addr.wrapping_add(disp as u64)));
                true
            }
            Mutator::Mr(dt) => {
                let option = (word >> 13) & 0b111;
                let (extend, index_is64) = match index_extend(option) {
                    Some(x) => x,
                    None => return false,
                };
                let mut mem = MemoryOperand::base(gp64((word >> 5) & 0x1F), dt);
                let rm = (word >> 16) & 0x1F;
                mem.index = Some(if index_is64 { gp64(rm) } else { gp32(rm) });
                mem.index_extend = extend;
                if (word >> 12) & 1 != 0 {
                    mem.index_shift = dt.log2_size() as u8;
                }
                st.operands.push(Operand::Memory(mem));
                true
            }

            // ---- T32 memory. --------------------------------------
            Mutator::MtImm(dt, base, off) => {
                let mut mem = MemoryOperand::base(gp32(base.read(word)), dt);
                let offset = (off.read(word) as i64) << dt.log2_size();
                if offset != 0 {
                    mem.offset = Some(ImmValue::new(offset, PrimitiveType::Word));
                }
                st.operands.push(Operand::Memory(mem));
                true
            }
            Mutator::MtSp(dt) => {
                let mut mem = MemoryOperand::base(SP, dt);
                let offset = ((word & 0xFF) as i64) << 2;
                if offset != 0 {
                    mem.offset = Some(ImmValue::new(offset, PrimitiveType::Word));
                }
                st.operands.push(Operand::Memory(mem));
                true
            }
            Mutator::MtReg(dt) => {
                let mut mem = MemoryOperand::base(gp32((word >> 3) & 0b111), dt);
                mem.index = Some(gp32((word >> 6) & 0b111));
                st.operands.push(Operand::Memory(mem));
                true
            }
            Mutator::MtImm12(dt) => {
                let mut mem = MemoryOperand::base(gp32((word >> 16) & 0xF), dt);
                let offset = (word & 0xFFF) as i64;
                if offset != 0 {
                    mem.offset = Some(ImmValue::new(offset, PrimitiveType::Word));
                }
                st.operands.push(Operand::Memory(mem));
                true
            }
            Mutator::MtImm8(dt) => {
                let p = (word >> 10) & 1;
                let u = (word >>  9) & 1;
                let w = (word >>  8) & 1;
                if p == 0 && w == 0 { return false; }
                if p == 1 && u == 1 && w == 0 { return false; } // unprivileged form
                let mut mem = MemoryOperand::base(gp32((word >> 16) & 0xF), dt);
                let mut offset = (word & 0xFF) as i64;
                if u == 0 { offset = -offset; }
                if w == 1 {
                    mem.offset = Some(ImmValue::new(offset, PrimitiveType::SWord));
                    if p == 1 { mem.pre_index = true; } else { mem.post_index = true; }
                    st.writeback = true;
                } else if offset != 0 {
                    mem.offset = Some(ImmValue::new(offset, PrimitiveType::SWord));
                }
                st.operands.push(Operand::Memory(mem));
                true
            }
            Mutator::MtRegShift(dt) => {
                let mut mem = MemoryOperand::base(gp32((word >> 16) & 0xF), dt);
                mem.index = Some(gp32(word & 0xF));
                mem.index_shift = ((word >> 4) & 0b11) as u8;
                if mem.index_shift != 0 {
                    mem.index_extend = Opcode::LSL;
                }
                st.operands.push(Operand::Memory(mem));
                true
            }
            Mutator::MtLit(_) => {
                let base = (st.addr + 4) & !0b11;
                let offset = (word & 0xFFF) as u64;
                let target = if (word >> 23) & 1 != 0 {
                    base.wrapping_add(offset)
                } else {
                    base.wrapping_sub(offset)
                };
                st.operands.push(Operand::Address(target));
                true
            }
            Mutator::MtDual(dt) => {
                let p = (word >> 24) & 1;
                let u = (word >> 23) & 1;
                let w = (word >> 21) & 1;
                if p == 0 && w == 0 { return false; }
                let mut mem = MemoryOperand::base(gp32((word >> 16) & 0xF), dt);
                let mut offset = ((word & 0xFF) as i64) << 2;
                if u == 0 { offset = -offset; }
                if w == 1 {
                    mem.offset = Some(ImmValue::new(offset, PrimitiveType::SWord));
                    if p == 1 { mem.pre_index = true; } else { mem.post_index = true; }
                    st.writeback = true;
                } else if offset != 0 {
                    mem.offset = Some(ImmValue::new(offset, PrimitiveType::SWord));
                }
                st.operands.push(Operand::Memory(mem));
                true
            }
            Mutator::MtTable(shift) => {
                let dt = if shift == 0 { PrimitiveType::Byte } else { PrimitiveType::HalfWord };
                let mut mem = MemoryOperand::base(gp32((word >> 16) & 0xF), dt);
                mem.index = Some(gp32(word & 0xF));
                mem.index_shift = shift;
                if shift != 0 {
                    mem.index_extend = Opcode::LSL;
                }
                st.operands.push(Operand::Memory(mem));
                true
            }

            // ---- Context updates. ---------------------------------
            Mutator::C(f) => {
                st.operands.push(Operand::Condition(ArmCondition::from_bits(f.read(word))));
                true
            }
            Mutator::CondField(f) => {
                st.condition = ArmCondition::from_bits(f.read(word));
                true
            }
            Mutator::ShiftI(ty, ref amt) => {
                let amount = read_fields(amt, word);
                let shift = match ty.read(word) {
                    0 => Opcode::LSL,
                    1 => Opcode::LSR,
                    2 => Opcode::ASR,
                    _ => Opcode::ROR,
                };
                if shift == Opcode::LSL && amount == 0 { return true; }
                st.shift_type = shift;
                st.shift_value = Some(Operand::Immediate(
                    ImmValue::new(amount as i64, PrimitiveType::Byte)));
                true
            }
            Mutator::ShiftT(ty, ref amt) => {
                // DecodeImmShift: a zero amount means "no shift" for
                // LSL, 32 for LSR/ASR and RRX for ROR.
                let amount = read_fields(amt, word);
                let (shift, amount) = match (ty.read(word), amount) {
                    (0, 0) => return true,
                    (0, n) => (Opcode::LSL, n),
                    (1, 0) => (Opcode::LSR, 32),
                    (1, n) => (Opcode::LSR, n),
                    (2, 0) => (Opcode::ASR, 32),
                    (2, n) => (Opcode::ASR, n),
                    (_, 0) => {
                        st.shift_type = Opcode::RRX;
                        return true;
                    }
                    (_, n) => (Opcode::ROR, n),
                };
                st.shift_type = shift;
                st.shift_value = Some(Operand::Immediate(
                    ImmValue::new(amount as i64, PrimitiveType::Byte)));
                true
            }
            Mutator::ShiftAmt(f, mul) => {
                let amount = f.read(word) * mul as u32;
                if amount != 0 {
                    st.shift_type = Opcode::LSL;
                    st.shift_value = Some(Operand::Immediate(
                        ImmValue::new(amount as i64, PrimitiveType::Byte)));
                }
                true
            }
            Mutator::RorAmt(f, mul) => {
                let amount = f.read(word) * mul as u32;
                if amount != 0 {
                    st.shift_type = Opcode::ROR;
                    st.shift_value = Some(Operand::Immediate(
                        ImmValue::new(amount as i64, PrimitiveType::Byte)));
                }
                true
            }
            Mutator::Ex(option, amt) => {
                st.shift_type = extend_opcode(option.read(word));
                st.shift_value = Some(Operand::Immediate(
                    ImmValue::new(amt.read(word) as i64, PrimitiveType::Byte)));
                true
            }
            Mutator::RmExt { is64 } => {
                let option = (word >> 13) & 0b111;
                let amount = (word >> 10) & 0b111;
                if amount > 4 { return false; }
                let rm = (word >> 16) & 0x1F;
                let rm_is64 = is64 && option & 0b011 == 0b011;
                st.operands.push(Operand::Register(
                    if rm_is64 { gp64(rm) } else { gp32(rm) }));
                st.shift_type = extend_opcode(option);
                st.shift_value = Some(Operand::Immediate(
                    ImmValue::new(amount as i64, PrimitiveType::Byte)));
                true
            }
            Mutator::SetFlags => {
                st.update_flags = true;
                true
            }
            Mutator::SetFlagsBit(f) => {
                if f.read(word) != 0 { st.update_flags = true; }
                true
            }
            Mutator::Wback => {
                st.writeback = true;
                true
            }
            Mutator::WbackBit(f) => {
                if f.read(word) != 0 { st.writeback = true; }
                true
            }
            Mutator::WbackBaseNotInList(base, list) => {
                if list.read(word) & (1 << base.read(word)) == 0 {
                    st.writeback = true;
                }
                true
            }
            Mutator::UseQ(f) => {
                st.use_q = f.read(word) != 0;
                true
            }
            Mutator::Arr(f) => {
                st.vector_data = match f.read(word) {
                    0 => VectorKind::I8,
                    1 => VectorKind::I16,
                    2 => VectorKind::I32,
                    _ => VectorKind::I64,
                };
                true
            }
            Mutator::Vd(kind) => {
                st.vector_data = kind;
                true
            }
            Mutator::BarrierOp(f) => {
                st.operands.push(Operand::Barrier(BarrierOption::from_bits(f.read(word))));
                true
            }
            Mutator::It => {
                let cond = ArmCondition::from_bits((word >> 4) & 0xF);
                let mask = word & 0xF;
                if mask == 0 { return false; }
                st.operands.push(Operand::Condition(cond));
                st.it_block = Some((cond, mask));
                true
            }
        }
    }
}


#[cfg(test)]
mod test {
    #![allow(missing_docs)]

    use super::*;
    use super::super::bits::bf;
    use super::super::decoder::DasmState;
    use super::super::registers::GP_REGS32;

    fn run(m: Mutator, word: u32) -> DasmState {
        let mut st = DasmState::new(0x1000, 4);
        assert!(m.apply(word, &mut st));
        st
    }

    #[test]
    pub fn register_mutators_pick_banks() {
        let st = run(Mutator::X(bf(0, 5)), 30);
        assert_eq!(st.operands, vec![Operand::Register(
            RegisterId::new(RegisterFamily::GpX, 30))]);

        let mut st = DasmState::new(0, 4);
        st.use_q = true;
        assert!(Mutator::V(bf(0, 5)).apply(7, &mut st));
        assert_eq!(st.operands, vec![Operand::Register(
            RegisterId::new(RegisterFamily::SimdQ, 7))]);
    }

    #[test]
    pub fn split_register_field() {
        // T32 high-register destination: bit 7 and bits 0..2.
        let st = run(Mutator::Wf(vec![bf(7, 1), bf(0, 3)]), 0b1000_0010);
        assert_eq!(st.operands, vec![Operand::Register(GP_REGS32[0b1010])]);
    }

    #[test]
    pub fn register_lists_expand_set_bits() {
        let st = run(Mutator::RegList(bf(0, 8)), 0b0100_0101);
        assert_eq!(st.operands, vec![
            Operand::Register(GP_REGS32[0]),
            Operand::Register(GP_REGS32[2]),
            Operand::Register(GP_REGS32[6]),
        ]);
        // The empty list is unpredictable and decodes as invalid.
        let mut st = DasmState::new(0, 2);
        assert!(!Mutator::RegList(bf(0, 8)).apply(0, &mut st));
    }

    #[test]
    pub fn scaled_immediates() {
        let st = run(Mutator::U(bf(10, 12), PrimitiveType::Word, 0), 1 << 10);
        assert_eq!(st.operands, vec![Operand::Immediate(
            ImmValue::new(1, PrimitiveType::Word))]);

        let st = run(Mutator::I(vec![bf(0, 8)], PrimitiveType::SWord, 2), 0xFF);
        assert_eq!(st.operands, vec![Operand::Immediate(
            ImmValue::new(-4, PrimitiveType::SWord))]);
    }

    #[test]
    pub fn pc_relative_operands() {
        // A64 adr with displacement -4: immhi:immlo = -1.
        let word = (0x7FFFF << 5) | (0b11 << 29);
        let st = run(Mutator::PcRel {
            fields: vec![bf(5, 19), bf(29, 2)],
            shift: 0,
            page: false,
        }, word);
        assert_eq!(st.operands, vec![Operand::Address(0x1000 - 4)]);

        // adrp masks the page offset of the address.
        let mut st = DasmState::new(0x1234, 4);
        assert!(Mutator::PcRel {
            fields: vec![bf(5, 19), bf(29, 2)],
            shift: 12,
            page: true,
        }.apply(1 << 5, &mut st));
        assert_eq!(st.operands, vec![Operand::Address(0x1000 + (1 << 14))]);

        // T32 branches add the pipeline offset of 4.
        let st = run(Mutator::Jt(vec![bf(0, 8)], 1), 0xFE);
        assert_eq!(st.operands, vec![Operand::Address(0x1000 + 4 - 4)]);
    }

    #[test]
    pub fn bl_target_inverts_j_bits() {
        // bl with S=0 requires J1=J2=1 for a small positive offset.
        // 0xF000F800 encodes `bl .+4`... with imm10=0, imm11=0.
        let word = 0xF000_F800 | (1 << 13) | (1 << 11);
        let st = run(Mutator::Jt24, word);
        assert_eq!(st.operands, vec![Operand::Address(0x1000 + 4)]);
    }

    #[test]
    pub fn a64_memory_scaling() {
        // ldr x0, [x1, #16]: imm12 = 2, scaled by 8.
        let word = (2 << 10) | (1 << 5);
        let st = run(Mutator::Mo(PrimitiveType::DoubleWord), word);
        match st.operands[0] {
            Operand::Memory(ref mem) => {
                assert_eq!(mem.base, RegisterId::new(RegisterFamily::GpX, 1));
                assert_eq!(mem.offset, Some(ImmValue::new(16, PrimitiveType::Word)));
                assert!(!mem.pre_index && !mem.post_index);
            }
            ref other => panic!("expected memory operand, got {:?}", other),
        }
    }

    #[test]
    pub fn a64_register_offset_option_table() {
        // option=011 is LSL with a 64-bit index, S scales by the size.
        let word = (0b011 << 13) | (1 << 12) | (2 << 16) | (1 << 5);
        let st = run(Mutator::Mr(PrimitiveType::DoubleWord), word);
        match st.operands[0] {
            Operand::Memory(ref mem) => {
                assert_eq!(mem.index, Some(RegisterId::new(RegisterFamily::GpX, 2)));
                assert_eq!(mem.index_extend, Opcode::LSL);
                assert_eq!(mem.index_shift, 3);
            }
            ref other => panic!("expected memory operand, got {:?}", other),
        }
        // option=000 is architecturally invalid.
        let mut st = DasmState::new(0, 4);
        assert!(!Mutator::Mr(PrimitiveType::DoubleWord).apply(0, &mut st));
    }

    #[test]
    pub fn pre_and_post_indexing_set_writeback() {
        let word = (0x1FF << 12) | (3 << 5); // simm9 = -1
        let st = run(Mutator::Mpre(PrimitiveType::DoubleWord), word);
        assert!(st.writeback);
        match st.operands[0] {
            Operand::Memory(ref mem) => {
                assert!(mem.pre_index && !mem.post_index);
                assert_eq!(mem.offset, Some(ImmValue::new(-1, PrimitiveType::SWord)));
            }
            ref other => panic!("expected memory operand, got {:?}", other),
        }
    }

    #[test]
    pub fn t32_shift_decoding_rules() {
        // LSL #0 leaves the shift context empty.
        let mut st = DasmState::new(0, 4);
        assert!(Mutator::ShiftT(bf(4, 2), vec![bf(12, 3), bf(6, 2)]).apply(0, &mut st));
        assert_eq!(st.shift_type, Opcode::Invalid);
        // ASR #0 means ASR #32.
        let mut st = DasmState::new(0, 4);
        assert!(Mutator::ShiftT(bf(4, 2), vec![bf(12, 3), bf(6, 2)]).apply(2 << 4, &mut st));
        assert_eq!(st.shift_type, Opcode::ASR);
        assert_eq!(st.shift_value, Some(Operand::Immediate(
            ImmValue::new(32, PrimitiveType::Byte))));
        // ROR #0 means RRX.
        let mut st = DasmState::new(0, 4);
        assert!(Mutator::ShiftT(bf(4, 2), vec![bf(12, 3), bf(6, 2)]).apply(3 << 4, &mut st));
        assert_eq!(st.shift_type, Opcode::RRX);
        assert_eq!(st.shift_value, None);
    }

    #[test]
    pub fn extend_and_arrangement_context() {
        // option = 101 is sxth, the amount rides along.
        let mut st = DasmState::new(0, 4);
        assert!(Mutator::Ex(bf(13, 3), bf(10, 3)).apply((0b101 << 13) | (2 << 10), &mut st));
        assert_eq!(st.shift_type, Opcode::SXTH);
        assert_eq!(st.shift_value, Some(Operand::Immediate(
            ImmValue::new(2, PrimitiveType::Byte))));

        let mut st = DasmState::new(0, 4);
        assert!(Mutator::Arr(bf(22, 2)).apply(2 << 22, &mut st));
        assert_eq!(st.vector_data, VectorKind::I32);
    }

    #[test]
    pub fn it_mutator_captures_block_state() {
        let st = run(Mutator::It, 0xBF18);
        assert_eq!(st.operands, vec![Operand::Condition(ArmCondition::NE)]);
        assert_eq!(st.it_block, Some((ArmCondition::NE, 0b1000)));
        // An empty mask is not an IT instruction.
        let mut st = DasmState::new(0, 2);
        assert!(!Mutator::It.apply(0xBF10, &mut st));
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
