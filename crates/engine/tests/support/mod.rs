//! Shared fixtures for the engine integration tests.
//!
//! [`FaultyFs`] wraps the local filesystem and fails chosen operations on
//! chosen paths; [`Recorder`] keeps an owned copy of every event.

#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use engine::sync::{
    DirEntryInfo, FileSnapshot, FileSystem, ItemKind, LocalFileSystem, PassKind, SkipReason,
    SyncEvent, SyncObserver,
};
use metadata::MetadataError;

/// Filesystem operation a [`FaultyFs`] can be told to fail.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Fault {
    ReadDir,
    CreateDir,
    RemoveFile,
    RemoveDir,
    CopyFile,
    CopyAttributes,
    Snapshot,
    ClearReadOnly,
}

/// Local filesystem that fails the configured operations with
/// `PermissionDenied`.
#[derive(Default)]
pub struct FaultyFs {
    inner: LocalFileSystem,
    faults: Vec<(Fault, PathBuf)>,
    calls: RefCell<Vec<(Fault, PathBuf)>>,
}

impl FaultyFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail(mut self, fault: Fault, path: impl Into<PathBuf>) -> Self {
        self.faults.push((fault, path.into()));
        self
    }

    /// Returns how often `fault`'s operation was invoked on `path`.
    pub fn calls(&self, fault: Fault, path: &Path) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|(kind, called)| *kind == fault && called == path)
            .count()
    }

    fn check(&self, fault: Fault, path: &Path) -> io::Result<()> {
        self.calls.borrow_mut().push((fault, path.to_path_buf()));
        if self
            .faults
            .iter()
            .any(|(kind, failing)| *kind == fault && failing == path)
        {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("injected {fault:?} failure"),
            ));
        }
        Ok(())
    }
}

impl FileSystem for FaultyFs {
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<DirEntryInfo>> {
        self.check(Fault::ReadDir, dir)?;
        self.inner.read_dir(dir)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner.is_dir(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.inner.is_file(path)
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        self.check(Fault::CreateDir, path)?;
        self.inner.create_dir(path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        self.check(Fault::RemoveFile, path)?;
        self.inner.remove_file(path)
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        self.check(Fault::RemoveDir, path)?;
        self.inner.remove_dir_all(path)
    }

    fn copy_file(&self, source: &Path, target: &Path) -> io::Result<u64> {
        self.check(Fault::CopyFile, target)?;
        self.inner.copy_file(source, target)
    }

    fn copy_attributes(&self, source: &Path, target: &Path) -> Result<(), MetadataError> {
        self.check(Fault::CopyAttributes, target)
            .map_err(|error| MetadataError::new("apply attributes", target, error))?;
        self.inner.copy_attributes(source, target)
    }

    fn snapshot(&self, path: &Path) -> io::Result<FileSnapshot> {
        self.check(Fault::Snapshot, path)?;
        self.inner.snapshot(path)
    }

    fn clear_read_only(&self, path: &Path) -> io::Result<bool> {
        self.check(Fault::ClearReadOnly, path)?;
        self.inner.clear_read_only(path)
    }
}

/// Owned copy of a [`SyncEvent`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Record {
    PassStarted(PassKind),
    PassFinished(PassKind, bool),
    Entered(PathBuf, usize),
    Left(PathBuf, usize, bool),
    SourceMissing(PathBuf, usize),
    Excluded(PathBuf, usize),
    ListingFailed(PathBuf),
    Started(ItemKind, PathBuf),
    Succeeded(ItemKind, PathBuf, u64),
    Failed(ItemKind, PathBuf),
    Skipped(PathBuf, SkipReason),
    Checked(PathBuf, bool),
    AttributesNotApplied(PathBuf),
}

/// Observer storing every event as a [`Record`].
#[derive(Debug, Default)]
pub struct Recorder {
    pub records: Vec<Record>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failures(&self) -> Vec<(ItemKind, PathBuf)> {
        self.records
            .iter()
            .filter_map(|record| match record {
                Record::Failed(kind, path) => Some((*kind, path.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn succeeded(&self, kind: ItemKind) -> Vec<PathBuf> {
        self.records
            .iter()
            .filter_map(|record| match record {
                Record::Succeeded(recorded, path, _) if *recorded == kind => Some(path.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn contains(&self, record: &Record) -> bool {
        self.records.contains(record)
    }
}

impl SyncObserver for Recorder {
    fn on_event(&mut self, event: &SyncEvent<'_>) {
        let record = match *event {
            SyncEvent::PassStarted { pass, .. } => Record::PassStarted(pass),
            SyncEvent::PassFinished {
                pass, succeeded, ..
            } => Record::PassFinished(pass, succeeded),
            SyncEvent::DirectoryEntered { target, depth, .. } => {
                Record::Entered(target.to_path_buf(), depth)
            }
            SyncEvent::DirectoryLeft {
                target,
                depth,
                succeeded,
                ..
            } => Record::Left(target.to_path_buf(), depth, succeeded),
            SyncEvent::SourceMissing { source, depth } => {
                Record::SourceMissing(source.to_path_buf(), depth)
            }
            SyncEvent::DirectorySkipped { target, depth, .. } => {
                Record::Excluded(target.to_path_buf(), depth)
            }
            SyncEvent::ListingFailed { directory, .. } => {
                Record::ListingFailed(directory.to_path_buf())
            }
            SyncEvent::ItemStarted { item } => {
                Record::Started(item.kind, item.affected_path().to_path_buf())
            }
            SyncEvent::ItemSucceeded { item, bytes } => {
                Record::Succeeded(item.kind, item.affected_path().to_path_buf(), bytes)
            }
            SyncEvent::ItemFailed { item, .. } => {
                Record::Failed(item.kind, item.affected_path().to_path_buf())
            }
            SyncEvent::ItemSkipped { item, reason } => {
                Record::Skipped(item.affected_path().to_path_buf(), reason)
            }
            SyncEvent::CheckCompleted { item, needs_update } => {
                Record::Checked(item.source.to_path_buf(), needs_update)
            }
            SyncEvent::AttributesNotApplied { item, .. } => {
                Record::AttributesNotApplied(item.target.to_path_buf())
            }
        };
        self.records.push(record);
    }
}

/// Source and target roots inside a temporary directory.
pub struct Roots {
    _temp: tempfile::TempDir,
    pub source: PathBuf,
    pub target: PathBuf,
}

impl Roots {
    /// Creates both roots as empty directories.
    pub fn new() -> Self {
        let temp = tempfile::tempdir().expect("tempdir");
        let source = temp.path().join("source");
        let target = temp.path().join("target");
        fs::create_dir(&source).expect("create source root");
        fs::create_dir(&target).expect("create target root");
        Self {
            _temp: temp,
            source,
            target,
        }
    }

    /// Creates the source root only.
    pub fn source_only() -> Self {
        let roots = Self::new();
        fs::remove_dir(&roots.target).expect("remove target root");
        roots
    }
}

/// Writes `contents` to `root/relative`, creating parent directories.
pub fn write(root: &Path, relative: &str, contents: &[u8]) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent directories");
    }
    fs::write(&path, contents).expect("write file");
    path
}

/// Sets the modification time of `path` to `secs` after the epoch.
pub fn set_mtime(path: &Path, secs: u64) {
    let time = SystemTime::UNIX_EPOCH + Duration::from_secs(secs);
    filetime::set_file_mtime(path, filetime::FileTime::from_system_time(time))
        .expect("set modification time");
}
