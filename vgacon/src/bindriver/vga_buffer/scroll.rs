use super::buffer::{cell_offset, ByteOffset, VideoBuffer, VideoMemory, MAX_COLS, MAX_ROWS, ROW_BYTES};

impl<M: VideoMemory> VideoBuffer<M> {
  /// Shifts rows 1..25 up by one and blanks the last row.
  ///
  /// Returns the start of the last row, where output resumes.
  pub fn scroll(&mut self) -> ByteOffset {
    trace!("scrolling console up one row");

    self.memory.copy_within(
      cell_offset(0, 1),
      cell_offset(0, 0),
      ROW_BYTES * (MAX_ROWS - 1),
    );

    let last_row = cell_offset(0, MAX_ROWS - 1);
    self.blank_range(last_row, cell_offset(MAX_COLS, MAX_ROWS - 1));

    last_row
  }
}
