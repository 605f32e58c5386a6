#[macro_use]
pub mod cio;
pub mod vga_buffer;

/// Brings the hardware console into a known state: blank grid, cursor home.
#[cfg(target_arch = "x86_64")]
pub fn init() {
  use self::vga_buffer::buffer::{MAX_COLS, MAX_ROWS, VIDEO_ADDRESS};

  vga_buffer::CONSOLE.lock().clear();
  debug!("vga console ready, {}x{} cells at {:#x}", MAX_COLS, MAX_ROWS, VIDEO_ADDRESS);
}
