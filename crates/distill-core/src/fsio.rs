//! Small file IO helpers shared by the pipeline stages.

use std::{fs, path::Path};

use crate::error::{Error, Result};

/// Read a file to a string, mapping a missing file to `Error::NotFound`.
pub(crate) fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => Error::NotFound(path.display().to_string()),
        _ => Error::io(path, &err),
    })
}

/// Write a string to a file.
pub(crate) fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|err| Error::io(path, &err))
}
