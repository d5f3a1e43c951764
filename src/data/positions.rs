use std::{
    fs,
    io::{self, Write},
    path::Path,
};

/// Reads the whole file at `path` and strips leading and trailing ASCII
/// whitespace, including the final newline most editors append.
///
/// ## Errors
///
/// Any I/O error raised while opening or reading the file.
pub fn read_trimmed<P: AsRef<Path>>(path: P) -> io::Result<Vec<u8>> {
    let mut bytes = fs::read(path)?;
    let end = bytes.trim_ascii_end().len();
    bytes.truncate(end);
    let start = bytes.len() - bytes.trim_ascii_start().len();
    bytes.drain(..start);
    Ok(bytes)
}

/// Writes each 0-based match position as a 1-based integer on its own line.
/// Positions are written in ascending order regardless of the input order.
///
/// ## Errors
///
/// Any I/O error raised by `writer`.
pub fn write_positions<W: Write>(mut writer: W, positions: &[usize]) -> io::Result<()> {
    let mut buffer = itoa::Buffer::new();

    let mut sorted;
    let positions = if positions.is_sorted() {
        positions
    } else {
        sorted = positions.to_vec();
        sorted.sort_unstable();
        sorted.as_slice()
    };

    for &p in positions {
        writer.write_all(buffer.format(p + 1).as_bytes())?;
        writer.write_all(b"\n")?;
    }

    writer.flush()
}
