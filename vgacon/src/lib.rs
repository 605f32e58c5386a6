//! Text-mode console for the legacy 80x25 VGA window.
//!
//! Meant as the output channel of last resort when the serial line is not
//! usable. The driver core is generic over two capabilities, one for the
//! memory window and one for the CRTC index/data port pair, so it runs
//! unchanged against real hardware and against in-memory fakes.

#![cfg_attr(not(test), no_std)]

#![warn(unused_import_braces,unused_qualifications)]
#![deny(keyword_idents,unused_extern_crates)]

#[cfg(target_arch = "x86_64")]
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate static_assertions;
#[macro_use]
extern crate log;

#[macro_use]
pub mod bindriver;

pub use crate::bindriver::vga_buffer::buffer::{
  cell_offset, ByteOffset, CellPos, ScreenChar, VideoBuffer, VideoMemory,
};
pub use crate::bindriver::vga_buffer::cursor::{CursorRegister, RegisterPorts};
pub use crate::bindriver::vga_buffer::{Console, ConsoleError};
