// License below.
//! Implements the 4-bit ARM condition codes.
//!
//! Condition codes show up in three places in a decoded record: as
//! the record's own `condition` field (conditional branches, and any
//! T32 instruction inside an IT block), as an explicit operand of
//! instructions like `csel` and `ccmp`, and as the base condition an
//! `it` instruction hands to the IT state machine.
//!
//! The encoding is fixed by the architecture: fifteen predicates
//! over the N/Z/C/V flags plus the reserved value `0b1111`. Each
//! code at an even encoding pairs with its logical opposite one
//! above it, which is what makes the single-bit
//! [`invert`](./enum.ArmCondition.html#method.invert) work.
#![cfg_attr(feature="clippy", warn(result_unwrap_used, option_unwrap_used, print_stdout))]
#![cfg_attr(feature="clippy", warn(single_match_else, string_add, string_add_assign))]
#![cfg_attr(feature="clippy", warn(wrong_pub_self_convention))]
#![warn(missing_docs)]

use std::mem;

/// The condition field of an ARM instruction.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[repr(u8)]
pub enum ArmCondition {
    #[doc = "Equal; Z == 1."]                                        EQ = 0b0000,
    #[doc = "Not equal; Z == 0."]                                    NE = 0b0001,
    #[doc = "Unsigned higher or same (carry set); C == 1."]          HS = 0b0010,
    #[doc = "Unsigned lower (carry clear); C == 0."]                 LO = 0b0011,
    #[doc = "Negative result; N == 1."]                              MI = 0b0100,
    #[doc = "Positive or zero result; N == 0."]                      PL = 0b0101,
    #[doc = "Signed overflow; V == 1."]                              VS = 0b0110,
    #[doc = "No signed overflow; V == 0."]                           VC = 0b0111,
    #[doc = "Unsigned higher; C == 1 and Z == 0."]                   HI = 0b1000,
    #[doc = "Unsigned lower or same; C == 0 or Z == 1."]             LS = 0b1001,
    #[doc = "Signed greater or equal; N == V."]                      GE = 0b1010,
    #[doc = "Signed less than; N != V."]                             LT = 0b1011,
    #[doc = "Signed greater than; Z == 0 and N == V."]               GT = 0b1100,
    #[doc = "Signed less or equal; Z == 1 or N != V."]               LE = 0b1101,
    #[doc = "Always; the unconditional default of every record."]    AL = 0b1110,
    #[doc = "The reserved sixteenth encoding."]                      NV = 0b1111,
}

impl ArmCondition {
    /// Decodes a raw 4-bit condition field.
    pub fn from_bits(bits: u32) -> ArmCondition {
        unsafe { mem::transmute((bits & 0b1111) as u8) }
    }

    /// The opposite condition, i.e. `EQ` becomes `NE`.
    ///
    /// The IT state machine uses this for the "else" slots of a
    /// block. Opposites differ only in the lowest encoding bit;
    /// `AL` and `NV` have no opposite and come back unchanged.
    pub fn invert(self) -> ArmCondition {
        match self {
            ArmCondition::AL | ArmCondition::NV => self,
            _ => ArmCondition::from_bits(self as u32 ^ 1),
        }
    }
}


#[cfg(test)]
mod test {
    #![allow(missing_docs)]

    use super::ArmCondition;

    #[test]
    pub fn from_bits_covers_all_16_values() {
        for bits in 0 .. 16 {
            assert_eq!(ArmCondition::from_bits(bits) as u32, bits);
        }
    }

    #[test]
    pub fn inversion_pairs() {
        assert_eq!(ArmCondition::EQ.invert(), ArmCondition::NE);
        assert_eq!(ArmCondition::NE.invert(), ArmCondition::EQ);
        assert_eq!(ArmCondition::GE.invert(), ArmCondition::LT);
        assert_eq!(ArmCondition::AL.invert(), ArmCondition::AL);
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
