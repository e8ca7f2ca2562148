use std::{fs, io, path::Path};

/// Reads the entire contents of a UTF-8 text file into a string.
///
/// # Parameters
/// - `path`: Path of the file to read.
///
/// # Returns
/// The file contents.
///
/// # Errors
/// Returns an `io::Error` if the path does not exist
/// (`io::ErrorKind::NotFound`), the file cannot be opened, or its contents
/// are not valid UTF-8.
pub fn read_from_file<P: AsRef<Path>>(path: P) -> io::Result<String> {
    fs::read_to_string(path)
}

/// Writes text content to a file, creating it if it does not exist and
/// truncating it otherwise.
///
/// # Parameters
/// - `path`: Path of the file to write.
/// - `content`: The text to write.
///
/// # Errors
/// Returns an `io::Error` if the file cannot be created or written.
pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> io::Result<()> {
    fs::write(path, content)
}
