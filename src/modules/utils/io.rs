use std::io::{self, BufRead, Write};

/// Helper function to read a line from stdin
pub fn read_line() -> io::Result<String> {
    read_line_from(&mut io::stdin().lock())
}

/// Read one trimmed line from `reader`. End of input is an `UnexpectedEof` error.
pub fn read_line_from<R: BufRead>(reader: &mut R) -> io::Result<String> {
    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    Ok(input.trim().to_string())
}

/// Print a prompt without a trailing newline
pub fn prompt(text: &str) -> io::Result<()> {
    print!("{}: ", text);
    io::stdout().flush()
}
