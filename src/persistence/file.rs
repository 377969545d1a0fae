//! Whole-file read and replace helpers shared by the serializers.

use crate::error::PersistenceError;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

pub(crate) fn open_for_read(path: &Path) -> Result<BufReader<File>, PersistenceError> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(PersistenceError::NotFound(path.to_path_buf()))
        }
        Err(e) => Err(PersistenceError::io(path, e)),
    }
}

/// Write into a sibling temp file, then rename it over `path`.
pub(crate) fn replace_with<F>(path: &Path, write: F) -> Result<(), PersistenceError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), PersistenceError>,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| PersistenceError::io(parent, e))?;
        }
    }

    let temp_path = temp_path_for(path);
    let file = File::create(&temp_path).map_err(|e| PersistenceError::io(&temp_path, e))?;
    let mut writer = BufWriter::new(file);

    let written = write(&mut writer).and_then(|_| {
        writer
            .flush()
            .map_err(|e| PersistenceError::io(&temp_path, e))
    });
    drop(writer);

    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        PersistenceError::io(path, e)
    })
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
