use std::collections::{BTreeMap, HashSet};
use std::fs::{self, create_dir_all};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tempfile::NamedTempFile;

/// The file operations certificate materialization needs.
pub trait FileSystem {
    fn temp_dir(&self) -> PathBuf;

    /// Replaces the whole file at `path` with `contents`.
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    fn remove(&self, path: &Path) -> io::Result<()>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn temp_dir(&self) -> PathBuf {
        (**self).temp_dir()
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        (**self).write(path, contents)
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        (**self).remove(path)
    }
}

/// Real disk. The temp directory is `std::env::temp_dir()` unless overridden.
#[derive(Debug, Clone, Default)]
pub struct OsFileSystem {
    temp_dir: Option<PathBuf>,
}

impl OsFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_temp_dir<P: AsRef<Path>>(temp_dir: P) -> Self {
        Self {
            temp_dir: Some(temp_dir.as_ref().to_path_buf()),
        }
    }
}

impl FileSystem for OsFileSystem {
    fn temp_dir(&self) -> PathBuf {
        self.temp_dir.clone().unwrap_or_else(std::env::temp_dir)
    }

    // Written to a sibling temp file and renamed over the target, so readers
    // never observe a half-written PEM.
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        create_dir_all(dir)?;

        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(contents)?;
        file.as_file().sync_all()?;
        file.persist(path).map_err(|e| e.error)?;
        Ok(())
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }
}

/// Keeps files in memory. Paths are taken literally, nothing touches disk.
#[derive(Debug)]
pub struct MemoryFileSystem {
    temp_dir: PathBuf,
    files: Mutex<BTreeMap<PathBuf, Vec<u8>>>,
    writes: Mutex<Vec<PathBuf>>,
    failing: Mutex<HashSet<PathBuf>>,
}

impl MemoryFileSystem {
    pub fn new<P: AsRef<Path>>(temp_dir: P) -> Self {
        Self {
            temp_dir: temp_dir.as_ref().to_path_buf(),
            files: Mutex::default(),
            writes: Mutex::default(),
            failing: Mutex::default(),
        }
    }

    /// Makes every later write to `path` fail with `PermissionDenied`.
    pub fn fail_writes_to<P: AsRef<Path>>(&self, path: P) {
        lock(&self.failing).insert(path.as_ref().to_path_buf());
    }

    pub fn read(&self, path: &Path) -> Option<Vec<u8>> {
        lock(&self.files).get(path).cloned()
    }

    pub fn read_to_string(&self, path: &Path) -> Option<String> {
        self.read(path)
            .and_then(|bytes| String::from_utf8(bytes).ok())
    }

    pub fn exists(&self, path: &Path) -> bool {
        lock(&self.files).contains_key(path)
    }

    pub fn file_count(&self) -> usize {
        lock(&self.files).len()
    }

    /// Every successful write, in order, including overwrites.
    pub fn write_log(&self) -> Vec<PathBuf> {
        lock(&self.writes).clone()
    }
}

impl FileSystem for MemoryFileSystem {
    fn temp_dir(&self) -> PathBuf {
        self.temp_dir.clone()
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        if lock(&self.failing).contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("write to {} refused", path.display()),
            ));
        }
        lock(&self.files).insert(path.to_path_buf(), contents.to_vec());
        lock(&self.writes).push(path.to_path_buf());
        Ok(())
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        match lock(&self.files).remove(path) {
            Some(_) => Ok(()),
            None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            )),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
