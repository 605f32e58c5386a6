/// Formats into the global VGA console.
///
/// Every byte of the formatted output reaches `put_char`, control bytes
/// included, so `\r` and `\t` behave as they do on the console itself.
#[macro_export]
macro_rules! vga_print {
    ($($arg:tt)*) => {
      $crate::bindriver::vga_buffer::print(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! vga_println {
    () => ($crate::vga_print!("\n"));
    ($fmt:expr) => ($crate::vga_print!(concat!($fmt, "\n")));
    ($fmt:expr, $($arg:tt)*) => ($crate::vga_print!(concat!($fmt, "\n"), $($arg)*));
}
