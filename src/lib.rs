// License below.
//! DisARMs is a table-driven disassembler library for the ARM
//! T32 (Thumb-2) and A64 (AArch64) instruction encodings.
//!
//! The library turns raw machine-code bytes into structured
//! [`ArmInstruction`](./arm/struct.ArmInstruction.html) records. It
//! does not execute instructions, it does not assemble them, and it
//! does not render text. A separate formatter consumes the records.
//!
//! The heart of the crate is a pair of static decoder trees, one per
//! instruction set, hand-mirrored from the ARM Architecture Reference
//! Manual. They are built once on first use and shared by all
//! disassembler instances afterwards.
//!
//! ```
//! use disarms::{ArmVariant, Disassembler, ImageReader};
//!
//! let code = [0x20, 0x04, 0x00, 0x11]; // add w0, w1, #1
//! let reader = ImageReader::new(&code, 0x1000);
//! let mut dasm = Disassembler::new(ArmVariant::A64, reader);
//! let inst = dasm.disassemble_one().unwrap();
//! assert_eq!(inst.length, 4);
//! ```
#![cfg_attr(feature="clippy", feature(plugin))]
#![cfg_attr(feature="clippy", plugin(clippy))]
#![warn(missing_docs)]

#[macro_use]
extern crate log;
#[macro_use]
extern crate lazy_static;
extern crate byteorder;

pub use self::arm::*;

pub mod arm;


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
