//! Hardware cursor held in the CRTC cursor-location registers.
//!
//! The registers are reached through the usual index/data pair: a selector
//! byte goes to the control port, then the data port reads or writes the
//! selected register. The cursor is kept as a cell index; everything above
//! this module works in byte offsets.

#[cfg(target_arch = "x86_64")]
use x86_64::instructions::port::Port;

use super::buffer::{ByteOffset, CELL_BYTES, GRID_BYTES};

pub const VGA_CTRL_REGISTER: u16 = 0x3d4;
pub const VGA_DATA_REGISTER: u16 = 0x3d5;
pub const VGA_OFFSET_HIGH: u8 = 0x0e;
pub const VGA_OFFSET_LOW: u8 = 0x0f;

// the past-the-end cursor has to survive a round trip through 16 bits
const_assert!(GRID_BYTES / CELL_BYTES <= 0xffff);

/// An index/data register port pair.
pub trait RegisterPorts {
  fn select(&mut self, register: u8);
  fn read_data(&mut self) -> u8;
  fn write_data(&mut self, value: u8);
}

pub struct CursorRegister<P> {
  pub(super) ports: P,
}

impl<P: RegisterPorts> CursorRegister<P> {
  pub fn new(ports: P) -> Self {
    CursorRegister { ports }
  }

  /// Current cursor as a byte offset. High byte is read first.
  pub fn get(&mut self) -> ByteOffset {
    self.ports.select(VGA_OFFSET_HIGH);
    let high = u16::from(self.ports.read_data());
    self.ports.select(VGA_OFFSET_LOW);
    let low = u16::from(self.ports.read_data());
    ByteOffset::from((high << 8) | low) * CELL_BYTES
  }

  /// Moves the hardware cursor to `offset`. High byte is written first.
  pub fn set(&mut self, offset: ByteOffset) {
    let index = offset / CELL_BYTES;
    self.ports.select(VGA_OFFSET_HIGH);
    self.ports.write_data((index >> 8) as u8);
    self.ports.select(VGA_OFFSET_LOW);
    self.ports.write_data((index & 0xff) as u8);
  }
}

/// The CRTC control/data ports of a colour VGA adapter.
#[cfg(target_arch = "x86_64")]
pub struct CrtcPorts {
  control: Port<u8>,
  data: Port<u8>,
}

#[cfg(target_arch = "x86_64")]
impl CrtcPorts {
  /// # Safety
  ///
  /// The caller must own `0x3d4`/`0x3d5` exclusively; nothing else may drive
  /// the CRTC index register while this value is alive.
  pub const unsafe fn new() -> CrtcPorts {
    CrtcPorts {
      control: Port::new(VGA_CTRL_REGISTER),
      data: Port::new(VGA_DATA_REGISTER),
    }
  }
}

#[cfg(target_arch = "x86_64")]
impl RegisterPorts for CrtcPorts {
  fn select(&mut self, register: u8) {
    unsafe { self.control.write(register) }
  }

  fn read_data(&mut self) -> u8 {
    unsafe { self.data.read() }
  }

  fn write_data(&mut self, value: u8) {
    unsafe { self.data.write(value) }
  }
}
