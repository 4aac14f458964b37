use pyo3::exceptions::{PyFileNotFoundError, PyIOError, PyIsADirectoryError, PyValueError};
use pyo3::PyErr;

use orfind_core::OrfError;

/// Map a core error onto the closest builtin Python exception.
pub fn to_py_err(err: OrfError) -> PyErr {
    match err {
        OrfError::PathNotFound { .. } => PyFileNotFoundError::new_err(err.to_string()),
        OrfError::PathIsDirectory { .. } => PyIsADirectoryError::new_err(err.to_string()),
        OrfError::Io { .. } => PyIOError::new_err(err.to_string()),
        other => PyValueError::new_err(other.to_string()),
    }
}
