// License below.
//! Implements the A64 (AArch64) decoder tree.
//!
//! The tree mirrors the "Top-level Encodings of the A64 Instruction
//! Set" tables of the ARM Architecture Reference Manual. The root
//! dispatches on bits 25..28:
//!
//! ```text
//!     .... ....  .... ....  .... ....  .... ....
//!     ...1 00x.  .... ....  .... ....  .... .... | Data processing, immediate
//!     ...1 01x.  .... ....  .... ....  .... .... | Branches, exceptions, system
//!     ...x 1x0.  .... ....  .... ....  .... .... | Loads and stores
//!     ...x 101.  .... ....  .... ....  .... .... | Data processing, register
//!     ...x 111.  .... ....  .... ....  .... .... | Data processing, SIMD and FP
//!     ...0 0xx.  .... ....  .... ....  .... .... | Unallocated
//! ```
//!
//! The four dispatch bits sit at 28..25, reading left to right.
//!
//! Every instruction is exactly four bytes; register fields are five
//! bits wide and index 31 doubles as zero register or stack pointer
//! depending on the instruction form.
#![cfg_attr(feature="clippy", warn(result_unwrap_used, option_unwrap_used, print_stdout))]
#![cfg_attr(feature="clippy", warn(single_match_else, string_add, string_add_assign))]
#![cfg_attr(feature="clippy", warn(wrong_pub_self_convention))]
#![warn(missing_docs)]

use super::bits::bf;
use super::decoder::{invalid, mask, Decoder};
use super::mutators::Mutator;

mod branch;
mod dataproc;
mod loadstore;
mod simdfp;

#[cfg(test)]
mod test;

lazy_static! {
    static ref ROOT: Decoder = build_decoder();
}

/// The shared A64 decoder tree, built on first use.
pub fn decoder() -> &'static Decoder {
    &ROOT
}

/// Builds the A64 decoder tree from scratch.
///
/// Prefer [`decoder`](./fn.decoder.html); this is public so tests
/// can rebuild the tree and exercise its shape assertions.
pub fn build_decoder() -> Decoder {
    mask(25, 4, vec![
        invalid(),              // 0000
        invalid(),              // 0001
        invalid(),              // 0010
        invalid(),              // 0011
        loadstore::build(),     // 0100
        dataproc::register(),   // 0101
        loadstore::build(),     // 0110
        simdfp::build(),        // 0111
        dataproc::immediate(),  // 1000
        dataproc::immediate(),  // 1001
        branch::build(),        // 1010
        branch::build(),        // 1011
        loadstore::build(),     // 1100
        dataproc::register(),   // 1101
        loadstore::build(),     // 1110
        simdfp::build(),        // 1111
    ])
}

/// A general purpose register operand mutator of the requested width.
///
/// Most A64 instructions come in a 32- and a 64-bit form told apart
/// by the `sf` bit; the table builders thread that flag through here.
fn gpreg(is64: bool, pos: u8) -> Mutator {
    if is64 {
        Mutator::X(bf(pos, 5))
    } else {
        Mutator::W(bf(pos, 5))
    }
}

fn is_zero(n: u32) -> bool {
    n == 0
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
