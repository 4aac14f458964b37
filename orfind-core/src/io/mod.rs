//! Reading raw sequence text from files.

use crate::error::{OrfError, OrfResult};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Concatenate every line of `reader`, each trimmed of surrounding whitespace.
pub fn read_sequence<R: BufRead>(mut reader: R) -> io::Result<String> {
    let mut sequence = String::new();
    let mut buf_line = String::new();
    loop {
        buf_line.clear();
        if reader.read_line(&mut buf_line)? == 0 {
            break;
        }
        sequence.push_str(buf_line.trim());
    }
    Ok(sequence)
}

/// Read the sequence stored at `path`.
///
/// A missing path, a directory, and any other I/O failure map to
/// [`OrfError::PathNotFound`], [`OrfError::PathIsDirectory`] and
/// [`OrfError::Io`] respectively. The text is not validated here.
pub fn read_sequence_from_path<P: AsRef<Path>>(path: P) -> OrfResult<String> {
    let path = path.as_ref();
    let io_err = |source: io::Error| match source.kind() {
        io::ErrorKind::NotFound => OrfError::PathNotFound {
            path: path.to_path_buf(),
        },
        _ => OrfError::Io {
            path: path.to_path_buf(),
            source,
        },
    };

    if path.is_dir() {
        return Err(OrfError::PathIsDirectory {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(io_err)?;
    let sequence = read_sequence(BufReader::new(file)).map_err(io_err)?;
    debug!(path = %path.display(), len = sequence.len(), "read sequence");
    Ok(sequence)
}
