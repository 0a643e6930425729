//! Filesystem primitives consumed by the passes.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;

use metadata::MetadataError;

use super::comparison::FileSnapshot;

/// Kind of a directory entry as seen by the walker.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    /// Regular file, or a symbolic link that does not resolve to a directory.
    File,
    /// Directory, or a symbolic link resolving to one.
    Directory,
    /// Anything else (FIFOs, sockets, device nodes). Ignored by every pass.
    Other,
}

/// One child of a listed directory.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DirEntryInfo {
    name: OsString,
    kind: EntryKind,
}

impl DirEntryInfo {
    /// Creates an entry description.
    pub fn new(name: impl Into<OsString>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Returns the file name of the entry.
    #[must_use]
    pub fn name(&self) -> &std::ffi::OsStr {
        &self.name
    }

    /// Returns the entry kind.
    #[must_use]
    pub const fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Consumes the entry and returns its file name.
    #[must_use]
    pub fn into_name(self) -> OsString {
        self.name
    }
}

/// Filesystem operations the passes rely on.
///
/// Every pass talks to the disk only through this trait, so a wrapping
/// implementation can inject failures for chosen paths.
pub trait FileSystem {
    /// Lists the immediate children of `dir`, sorted by name.
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<DirEntryInfo>>;

    /// Reports whether `path` is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Reports whether `path` is an existing regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Creates a single directory; the parent must exist.
    fn create_dir(&self, path: &Path) -> io::Result<()>;

    /// Removes a file.
    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Removes a directory and everything below it.
    fn remove_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Copies file content from `source` to `target`, overwriting it, and
    /// returns the number of bytes written.
    fn copy_file(&self, source: &Path, target: &Path) -> io::Result<u64>;

    /// Carries creation time, timestamps and permissions from `source` over
    /// to `target`.
    fn copy_attributes(&self, source: &Path, target: &Path) -> Result<(), MetadataError>;

    /// Reads the size, modification time and read-only flag of a file.
    fn snapshot(&self, path: &Path) -> io::Result<FileSnapshot>;

    /// Makes `path` writable. Returns `false` when it already was.
    fn clear_read_only(&self, path: &Path) -> io::Result<bool>;
}

/// [`FileSystem`] backed by `std::fs` and the `metadata` crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    /// Creates a local filesystem that preserves every supported attribute.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn classify(path: &Path, file_type: fs::FileType) -> EntryKind {
    if file_type.is_dir() {
        return EntryKind::Directory;
    }
    if file_type.is_file() {
        return EntryKind::File;
    }
    if file_type.is_symlink() {
        return match fs::metadata(path) {
            Ok(target) if target.is_dir() => EntryKind::Directory,
            Ok(target) if !target.is_file() => EntryKind::Other,
            _ => EntryKind::File,
        };
    }
    EntryKind::Other
}

impl FileSystem for LocalFileSystem {
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<DirEntryInfo>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let kind = classify(&entry.path(), entry.file_type()?);
            entries.push(DirEntryInfo::new(entry.file_name(), kind));
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        fs::create_dir(path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::remove_dir_all(path)
    }

    fn copy_file(&self, source: &Path, target: &Path) -> io::Result<u64> {
        fs::copy(source, target)
    }

    fn copy_attributes(&self, source: &Path, target: &Path) -> Result<(), MetadataError> {
        metadata::copy_file_metadata(source, target)
    }

    fn snapshot(&self, path: &Path) -> io::Result<FileSnapshot> {
        let metadata = fs::metadata(path)?;
        Ok(FileSnapshot::new(
            metadata.len(),
            metadata.modified()?,
            metadata::is_read_only(&metadata),
        ))
    }

    fn clear_read_only(&self, path: &Path) -> io::Result<bool> {
        metadata::clear_read_only(path).map_err(io::Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn read_dir_sorts_and_classifies() {
        let temp = tempdir().expect("tempdir");
        fs::write(temp.path().join("b.txt"), b"b").expect("write");
        fs::write(temp.path().join("a.txt"), b"a").expect("write");
        fs::create_dir(temp.path().join("c")).expect("mkdir");

        let entries = LocalFileSystem::new()
            .read_dir(temp.path())
            .expect("listing");

        assert_eq!(
            entries,
            vec![
                DirEntryInfo::new("a.txt", EntryKind::File),
                DirEntryInfo::new("b.txt", EntryKind::File),
                DirEntryInfo::new("c", EntryKind::Directory),
            ]
        );
    }

    #[test]
    fn read_dir_of_missing_directory_fails() {
        let temp = tempdir().expect("tempdir");
        let error = LocalFileSystem::new()
            .read_dir(&temp.path().join("absent"))
            .expect_err("missing");
        assert_eq!(error.kind(), io::ErrorKind::NotFound);
    }

    #[cfg(unix)]
    #[test]
    fn symlinks_are_classified_by_their_target() {
        use std::os::unix::fs::symlink;

        let temp = tempdir().expect("tempdir");
        fs::create_dir(temp.path().join("dir")).expect("mkdir");
        fs::write(temp.path().join("file"), b"x").expect("write");
        symlink(temp.path().join("dir"), temp.path().join("to_dir")).expect("link");
        symlink(temp.path().join("file"), temp.path().join("to_file")).expect("link");
        symlink(temp.path().join("gone"), temp.path().join("dangling")).expect("link");

        let entries = LocalFileSystem::new()
            .read_dir(temp.path())
            .expect("listing");
        let kind_of = |name: &str| {
            entries
                .iter()
                .find(|entry| entry.name() == name)
                .map(DirEntryInfo::kind)
        };

        assert_eq!(kind_of("to_dir"), Some(EntryKind::Directory));
        assert_eq!(kind_of("to_file"), Some(EntryKind::File));
        assert_eq!(kind_of("dangling"), Some(EntryKind::File));
    }

    #[test]
    fn copy_and_snapshot_agree_on_size() {
        let temp = tempdir().expect("tempdir");
        let source = temp.path().join("s");
        let target = temp.path().join("t");
        fs::write(&source, b"12345").expect("write");

        let fs_impl = LocalFileSystem::new();
        assert_eq!(fs_impl.copy_file(&source, &target).expect("copy"), 5);
        fs_impl.copy_attributes(&source, &target).expect("attributes");

        let source_snapshot = fs_impl.snapshot(&source).expect("snapshot");
        let target_snapshot = fs_impl.snapshot(&target).expect("snapshot");
        assert_eq!(source_snapshot.len(), target_snapshot.len());
        assert_eq!(source_snapshot.modified(), target_snapshot.modified());
    }
}
