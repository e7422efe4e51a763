use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::{debug, error};
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Copy `source` to `destination`.
///
/// A directory source requires `recursive`. With `exclusive` set the copy
/// fails if anything already sits at the destination; otherwise the source
/// tree is merged in, overwriting same-named files and leaving unrelated
/// entries alone. Missing parent directories are created.
pub fn copy(source: &Path, destination: &Path, recursive: bool, exclusive: bool) -> Result<()> {
    debug!(
        "copying {:?} to {:?} (recursive={}, exclusive={})",
        source, destination, recursive, exclusive
    );

    if !source.exists() {
        error!("{:?} not found", source);
        return Err(Error::NotFound {
            path: source.to_path_buf(),
        });
    }

    if source.is_dir() {
        if !recursive {
            return Err(Error::Io {
                path: source.to_path_buf(),
                source: io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "source is a directory, recursive copy required",
                ),
            });
        }
        copy_tree(source, destination, exclusive)
    } else {
        copy_file(source, destination, exclusive)
    }
}

fn copy_file(source: &Path, destination: &Path, exclusive: bool) -> Result<()> {
    if exclusive && destination.exists() {
        return Err(Error::AlreadyExists {
            path: destination.to_path_buf(),
        });
    }

    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
    }

    fs::copy(source, destination).map_err(|e| io_error(destination, e))?;
    Ok(())
}

fn copy_tree(source: &Path, destination: &Path, exclusive: bool) -> Result<()> {
    if exclusive && occupied(destination)? {
        return Err(Error::AlreadyExists {
            path: destination.to_path_buf(),
        });
    }

    for entry in WalkDir::new(source) {
        let entry = entry.map_err(|e| Error::Io {
            path: source.to_path_buf(),
            source: io::Error::from(e),
        })?;

        // Entries are yielded under `source`, so the prefix always strips.
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|_| io_error(entry.path(), io::ErrorKind::InvalidData.into()))?;
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| io_error(&target, e))?;
        } else {
            if exclusive && target.exists() {
                return Err(Error::AlreadyExists { path: target });
            }
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
            }
            fs::copy(entry.path(), &target).map_err(|e| io_error(&target, e))?;
        }
    }

    Ok(())
}

/// Whether an exclusive tree copy would clobber `destination`: an existing
/// file, or a directory with at least one entry. An empty pre-existing
/// directory is not a conflict.
fn occupied(destination: &Path) -> Result<bool> {
    if destination.is_file() {
        return Ok(true);
    }
    if destination.is_dir() {
        let mut entries = fs::read_dir(destination).map_err(|e| io_error(destination, e))?;
        return Ok(entries.next().is_some());
    }
    Ok(false)
}

/// Move `source` to `destination`, falling back to copy+delete when a plain
/// rename fails (e.g. crossing filesystems).
pub fn move_entry(source: &Path, destination: &Path) -> Result<()> {
    debug!("moving {:?} to {:?}", source, destination);

    if !source.exists() {
        error!("{:?} not found", source);
        return Err(Error::NotFound {
            path: source.to_path_buf(),
        });
    }

    if fs::rename(source, destination).is_ok() {
        return Ok(());
    }

    let recursive = source.is_dir();
    copy(source, destination, recursive, false)?;
    remove(source, recursive)
}

/// Delete `target`. Missing targets are a silent no-op so cleanup phases can
/// be re-run safely.
pub fn remove(target: &Path, recursive: bool) -> Result<()> {
    debug!("removing {:?} (recursive={})", target, recursive);

    if !target.exists() {
        debug!("{:?} not found, nothing to remove", target);
        return Ok(());
    }

    if recursive {
        fs::remove_dir_all(target).map_err(|e| io_error(target, e))
    } else {
        fs::remove_file(target).map_err(|e| io_error(target, e))
    }
}

/// Move `target` aside to a timestamped sibling (`<target>.bak.<stamp>`) and
/// return the backup path.
///
/// Returns `Ok(None)` when there is nothing to back up. That case runs on
/// every first-time install, so it must not be an error.
pub fn backup(target: &Path) -> Result<Option<PathBuf>> {
    if !target.exists() {
        debug!("{:?} not found, nothing to back up", target);
        return Ok(None);
    }

    let backup_path = backup_destination(target);
    debug!("backing up {:?} to {:?}", target, backup_path);
    move_entry(target, &backup_path)?;
    Ok(Some(backup_path))
}

/// Compute a free `<target>.bak.<stamp>` sibling path.
///
/// The stamp is a millisecond-resolution UTC token whose lexicographic order
/// matches chronological order. If two backups land on the same millisecond
/// a numeric counter disambiguates.
fn backup_destination(target: &Path) -> PathBuf {
    let stamp = Utc::now().format("%Y%m%d%H%M%S%3f").to_string();

    let candidate = bak_sibling(target, &stamp);
    if !candidate.exists() {
        return candidate;
    }

    let mut counter = 1u32;
    loop {
        let candidate = bak_sibling(target, &format!("{stamp}.{counter}"));
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

fn bak_sibling(target: &Path, stamp: &str) -> PathBuf {
    let mut name = target
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("backup"));
    name.push(format!(".bak.{stamp}"));
    target.with_file_name(name)
}

fn io_error(path: &Path, source: io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source,
    }
}
