pub mod buffer;
pub mod cursor;
pub mod scroll;

use core::fmt;

use self::buffer::{
  cell_offset, ByteOffset, CellPos, VideoBuffer, VideoMemory, BLANK, CELL_BYTES, GRID_BYTES,
  MAX_COLS, MAX_ROWS, ROW_BYTES,
};
use self::cursor::{CursorRegister, RegisterPorts};

pub const TAB_WIDTH: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleError {
  ColumnOutOfRange(u8),
  RowOutOfRange(u8),
}

impl fmt::Display for ConsoleError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      ConsoleError::ColumnOutOfRange(col) => write!(f, "column {} outside 0..{}", col, MAX_COLS),
      ConsoleError::RowOutOfRange(row) => write!(f, "row {} outside 0..{}", row, MAX_ROWS),
    }
  }
}

/// How a single byte is handled by `put_char`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Control {
  Newline,
  CarriageReturn,
  Tab,
  Glyph(u8),
}

impl From<u8> for Control {
  fn from(c: u8) -> Control {
    match c {
      b'\n' => Control::Newline,
      b'\r' => Control::CarriageReturn,
      b'\t' => Control::Tab,
      c => Control::Glyph(c),
    }
  }
}

/// Text console over a cursor port pair and a video memory window.
///
/// The write position lives only in the hardware cursor. Every call reads
/// it back first and stores it again last, so nothing here can drift from
/// what the adapter shows. No locking is done; callers that share one
/// console between contexts serialize access themselves.
pub struct Console<P, M> {
  cursor: CursorRegister<P>,
  video: VideoBuffer<M>,
}

impl<P: RegisterPorts, M: VideoMemory> Console<P, M> {
  pub fn new(ports: P, memory: M) -> Self {
    Console {
      cursor: CursorRegister::new(ports),
      video: VideoBuffer::new(memory),
    }
  }

  /// Draws or interprets one byte at the cursor and moves the cursor on.
  ///
  /// A cursor left past the last cell by the previous call triggers the
  /// scroll here, before anything is written.
  pub fn put_char(&mut self, c: u8) {
    let mut offset = self.cursor.get();
    if offset >= GRID_BYTES {
      offset = self.video.scroll();
    }

    let offset = match Control::from(c) {
      Control::Newline => Self::newline(offset),
      Control::CarriageReturn => Self::carriage_return(offset),
      Control::Tab => self.tab(offset),
      Control::Glyph(c) => {
        self.video.write_cell(c, offset);
        offset + CELL_BYTES
      }
    };

    self.cursor.set(offset);
  }

  // unix newline: column 0 of the next row
  fn newline(offset: ByteOffset) -> ByteOffset {
    let row = offset / ROW_BYTES;
    cell_offset(0, row + 1)
  }

  fn carriage_return(offset: ByteOffset) -> ByteOffset {
    let row = offset / ROW_BYTES;
    cell_offset(0, row)
  }

  /// Blanks up to the next tab stop. An already aligned column still gets a
  /// full stop of blanks.
  fn tab(&mut self, mut offset: ByteOffset) -> ByteOffset {
    let col = (offset % ROW_BYTES) / CELL_BYTES;
    for _ in (col % TAB_WIDTH)..TAB_WIDTH {
      self.video.write_cell(BLANK, offset);
      offset += CELL_BYTES;
      if offset >= GRID_BYTES {
        offset = self.video.scroll();
      }
    }
    offset
  }

  /// Blanks the whole grid and homes the cursor.
  pub fn clear(&mut self) {
    debug!("clearing vga console");
    self.video.blank_range(0, GRID_BYTES);
    self.cursor.set(cell_offset(0, 0));
  }

  /// Feeds every byte to `put_char`, control bytes included.
  pub fn write_bytes(&mut self, bytes: &[u8]) {
    for &byte in bytes {
      self.put_char(byte);
    }
  }

  pub fn position(&mut self) -> CellPos {
    CellPos::from_offset(self.cursor.get())
  }

  /// Places the cursor at `col`, `row`. Out of range positions are
  /// rejected and leave the cursor where it was.
  pub fn move_to(&mut self, col: u8, row: u8) -> Result<(), ConsoleError> {
    if u32::from(col) >= MAX_COLS {
      warn!("rejected cursor move to column {}", col);
      return Err(ConsoleError::ColumnOutOfRange(col));
    }
    if u32::from(row) >= MAX_ROWS {
      warn!("rejected cursor move to row {}", row);
      return Err(ConsoleError::RowOutOfRange(row));
    }
    self.cursor.set(cell_offset(col.into(), row.into()));
    Ok(())
  }
}

impl<P: RegisterPorts, M: VideoMemory> fmt::Write for Console<P, M> {
  fn write_str(&mut self, s: &str) -> fmt::Result {
    self.write_bytes(s.as_bytes());
    Ok(())
  }
}

#[cfg(target_arch = "x86_64")]
pub type HardwareConsole = Console<cursor::CrtcPorts, buffer::VgaWindow>;

#[cfg(target_arch = "x86_64")]
use spin::Mutex;

#[cfg(target_arch = "x86_64")]
lazy_static! {
  pub static ref CONSOLE: Mutex<HardwareConsole> = Mutex::new(unsafe {
    Console::new(cursor::CrtcPorts::new(), buffer::VgaWindow::new())
  });
}

#[cfg(target_arch = "x86_64")]
pub fn print(args: fmt::Arguments) {
  use core::fmt::Write;
  CONSOLE.lock().write_fmt(args).expect("could not write to vga console");
}
