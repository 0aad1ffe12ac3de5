// src/fs/mock.rs

use super::{EntryKind, FileSystem};
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub enum MockEntry {
    File(Vec<u8>),
    Dir,
    Symlink(PathBuf),
}

/// In-memory filesystem for tests.
///
/// Relative paths are interpreted against a fixed working directory
/// (`/work` unless set with [`MockFileSystem::with_cwd`]).
#[derive(Debug, Clone)]
pub struct MockFileSystem {
    cwd: PathBuf,
    entries: Arc<Mutex<HashMap<PathBuf, MockEntry>>>,
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::with_cwd("/work")
    }

    pub fn with_cwd(cwd: impl Into<PathBuf>) -> Self {
        let fs = Self {
            cwd: cwd.into(),
            entries: Arc::new(Mutex::new(HashMap::new())),
        };
        let cwd = fs.cwd.clone();
        fs.add_dir(&cwd);
        fs
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        let path = self.join_cwd(path.as_ref());
        let mut entries = self.entries.lock().unwrap();
        if let Some(parent) = path.parent() {
            Self::ensure_dirs(&mut entries, parent);
        }
        entries.insert(path, MockEntry::File(content.into()));
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = self.join_cwd(path.as_ref());
        let mut entries = self.entries.lock().unwrap();
        Self::ensure_dirs(&mut entries, &path);
    }

    /// Create a symlink at `link` pointing to the absolute path `target`.
    pub fn add_symlink(&self, link: impl AsRef<Path>, target: impl AsRef<Path>) {
        let link = self.join_cwd(link.as_ref());
        let target = self.join_cwd(target.as_ref());
        let mut entries = self.entries.lock().unwrap();
        if let Some(parent) = link.parent() {
            Self::ensure_dirs(&mut entries, parent);
        }
        entries.insert(link, MockEntry::Symlink(target));
    }

    fn ensure_dirs(entries: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            entries
                .entry(ancestor.to_path_buf())
                .or_insert(MockEntry::Dir);
        }
    }

    fn join_cwd(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }

    /// Walk `path` component by component, following symlinks, and return
    /// the resolved path if every component exists.
    fn resolve(&self, path: &Path) -> io::Result<PathBuf> {
        if path.as_os_str().is_empty() {
            return Err(io::Error::new(io::ErrorKind::NotFound, "empty path"));
        }
        let entries = self.entries.lock().unwrap();
        let mut resolved = PathBuf::new();
        for component in self.join_cwd(path).components() {
            match component {
                Component::RootDir | Component::Prefix(_) => resolved.push(component),
                Component::CurDir => {}
                Component::ParentDir => {
                    resolved.pop();
                }
                Component::Normal(name) => {
                    resolved.push(name);
                    // Bounded so a symlink loop cannot hang a test.
                    let mut hops = 0;
                    while let Some(MockEntry::Symlink(target)) = entries.get(&resolved) {
                        hops += 1;
                        if hops > 32 {
                            return Err(io::Error::other("too many levels of symbolic links"));
                        }
                        resolved = target.clone();
                    }
                    if !entries.contains_key(&resolved) {
                        return Err(io::Error::new(
                            io::ErrorKind::NotFound,
                            format!("not found: {:?}", path),
                        ));
                    }
                }
            }
        }
        Ok(resolved)
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        let resolved = self.resolve(path).map_err(|e| anyhow!("{e}"))?;
        let entries = self.entries.lock().unwrap();
        match entries.get(&resolved) {
            Some(MockEntry::File(content)) => {
                String::from_utf8(content.clone()).map_err(|e| anyhow!("Invalid UTF-8: {}", e))
            }
            Some(_) => Err(anyhow!("Is a directory: {:?}", path)),
            None => Err(anyhow!("File not found: {:?}", path)),
        }
    }

    fn stat(&self, path: &Path) -> io::Result<EntryKind> {
        let resolved = self.resolve(path)?;
        let entries = self.entries.lock().unwrap();
        match entries.get(&resolved) {
            Some(MockEntry::Dir) => Ok(EntryKind::Dir),
            Some(_) => Ok(EntryKind::File),
            None => Err(io::Error::new(io::ErrorKind::NotFound, "not found")),
        }
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        self.resolve(path)
    }

    fn absolute(&self, path: &Path) -> io::Result<PathBuf> {
        if path.as_os_str().is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "cannot make an empty path absolute",
            ));
        }
        let mut out = if path.is_absolute() {
            PathBuf::new()
        } else {
            self.cwd.clone()
        };
        out.extend(
            path.components()
                .filter(|c| !matches!(c, Component::CurDir)),
        );
        Ok(out)
    }
}
