//! Addressing and raw cell writes for the 80x25 text grid.
//!
//! The grid is a linear, row-major window of `(character, attribute)`
//! byte pairs. Positions are handled as byte offsets into that window:
//!
//! ```text
//!   offset -> (col, row):  col = (offset / 2) % MAX_COLS
//!                          row = (offset / 2) / MAX_COLS
//!   (col, row) -> offset:  offset = 2 * (row * MAX_COLS + col)
//! ```

use core::convert::TryFrom;

#[cfg(target_arch = "x86_64")]
use volatile::Volatile;

pub const MAX_COLS: u32 = 80;
pub const MAX_ROWS: u32 = 25;
pub const CELL_BYTES: ByteOffset = 2;
pub const ROW_BYTES: ByteOffset = MAX_COLS * CELL_BYTES;
pub const GRID_BYTES: ByteOffset = MAX_ROWS * ROW_BYTES;

pub const VIDEO_ADDRESS: usize = 0xb8000;
/// White on black.
pub const COLOR: u8 = 0x0f;
pub const BLANK: u8 = b' ';

const_assert_eq!(ROW_BYTES, 160);
const_assert_eq!(GRID_BYTES, 4000);

/// Byte position inside the video window. Always cell aligned (even).
pub type ByteOffset = u32;

/// Offset of the cell at `col`, `row`.
///
/// Unchecked: the caller keeps `col` in `0..80` and `row` in `0..25`. The
/// one-past-the-end position (`row == 25` or `col == 80`) is accepted so a
/// newline on the last row can park the cursor just past the grid.
#[inline]
pub fn cell_offset(col: u32, row: u32) -> ByteOffset {
  debug_assert!(col <= MAX_COLS && row <= MAX_ROWS, "cell ({}, {}) outside grid", col, row);
  CELL_BYTES * (row * MAX_COLS + col)
}

/// A validated grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPos {
  pub col: u8,
  pub row: u8,
}

impl CellPos {
  pub fn new(col: u8, row: u8) -> Option<CellPos> {
    if u32::from(col) < MAX_COLS && u32::from(row) < MAX_ROWS {
      Some(CellPos { col, row })
    } else {
      None
    }
  }

  /// Decodes a cursor offset. The transient past-the-end offset decodes
  /// to column 0 of row 25, so the result is not necessarily `new`-valid.
  /// A stale hardware cursor further out saturates the row at `u8::MAX`.
  pub fn from_offset(offset: ByteOffset) -> CellPos {
    let index = offset / CELL_BYTES;
    CellPos {
      col: (index % MAX_COLS) as u8,
      row: u8::try_from(index / MAX_COLS).unwrap_or(u8::MAX),
    }
  }

  pub fn offset(self) -> ByteOffset {
    cell_offset(self.col.into(), self.row.into())
  }
}

/// One cell as read back from the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenChar {
  pub ascii_character: u8,
  pub color_code: u8,
}

impl ScreenChar {
  pub const fn blank() -> ScreenChar {
    ScreenChar {
      ascii_character: BLANK,
      color_code: COLOR,
    }
  }
}

/// Byte access to the backing window of the grid.
pub trait VideoMemory {
  fn read_byte(&self, offset: ByteOffset) -> u8;
  fn write_byte(&mut self, offset: ByteOffset, value: u8);

  /// Moves `len` bytes from `src` to `dst`. Only called with `dst <= src`,
  /// where a forward copy is correct even for overlapping ranges.
  fn copy_within(&mut self, src: ByteOffset, dst: ByteOffset, len: u32) {
    for i in 0..len {
      let byte = self.read_byte(src + i);
      self.write_byte(dst + i, byte);
    }
  }
}

pub struct VideoBuffer<M> {
  pub(super) memory: M,
}

impl<M: VideoMemory> VideoBuffer<M> {
  pub fn new(memory: M) -> Self {
    VideoBuffer { memory }
  }

  /// Writes `c` with the fixed attribute at `offset`. Both bytes are
  /// always stored, nothing is read back first.
  pub fn write_cell(&mut self, c: u8, offset: ByteOffset) {
    self.memory.write_byte(offset, c);
    self.memory.write_byte(offset + 1, COLOR);
  }

  pub fn read_cell(&self, offset: ByteOffset) -> ScreenChar {
    ScreenChar {
      ascii_character: self.memory.read_byte(offset),
      color_code: self.memory.read_byte(offset + 1),
    }
  }

  /// Blanks every cell from `from` up to, not including, `to`.
  pub fn blank_range(&mut self, from: ByteOffset, to: ByteOffset) {
    for offset in (from..to).step_by(CELL_BYTES as usize) {
      self.write_cell(BLANK, offset);
    }
  }
}

#[cfg(target_arch = "x86_64")]
#[repr(transparent)]
pub struct Buffer {
  bytes: [Volatile<u8>; GRID_BYTES as usize],
}

/// The real text-mode window at `VIDEO_ADDRESS`.
#[cfg(target_arch = "x86_64")]
pub struct VgaWindow {
  buffer: &'static mut Buffer,
}

#[cfg(target_arch = "x86_64")]
impl VgaWindow {
  /// # Safety
  ///
  /// `VIDEO_ADDRESS` must be identity mapped and the returned window must
  /// be the only handle onto it.
  pub unsafe fn new() -> VgaWindow {
    VgaWindow {
      buffer: &mut *(VIDEO_ADDRESS as *mut Buffer),
    }
  }
}

#[cfg(target_arch = "x86_64")]
impl VideoMemory for VgaWindow {
  fn read_byte(&self, offset: ByteOffset) -> u8 {
    self.buffer.bytes[offset as usize].read()
  }

  fn write_byte(&mut self, offset: ByteOffset, value: u8) {
    self.buffer.bytes[offset as usize].write(value)
  }
}
