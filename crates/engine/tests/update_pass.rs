// Tests for the update pass.
//
// These tests verify:
// 1. Only files whose size or modification time differ are rewritten
// 2. The two-second modification window is honoured on real files
// 3. Comparison, attribute and read-only failures are reported and isolated
// 4. Missing target files and directories are left to the create pass

mod support;

use std::fs;

use engine::sync::{FileSystem, ItemKind, SkipReason, UpdatePass, Walker};
use filters::{Exclusion, ExclusionSet};
use support::{Fault, FaultyFs, Record, Recorder, Roots, set_mtime, write};

const EPOCH: u64 = 1_700_000_000;

fn update(fs: &dyn FileSystem, exclusions: &ExclusionSet, roots: &Roots) -> (bool, Recorder) {
    let mut recorder = Recorder::new();
    let mut pass = UpdatePass::new(Walker::new(fs, exclusions, &mut recorder));
    let status = pass.synchronize(&roots.source, &roots.target);
    assert_eq!(pass.depth(), 0, "depth must be restored after the pass");
    drop(pass);
    (status, recorder)
}

fn pair(roots: &Roots, relative: &str, source: &[u8], target: &[u8], offset: u64) {
    let source_path = write(&roots.source, relative, source);
    let target_path = write(&roots.target, relative, target);
    set_mtime(&source_path, EPOCH + offset);
    set_mtime(&target_path, EPOCH);
}

// ==================== Change Detection ====================

#[test]
fn rewrites_only_files_that_differ() {
    let roots = Roots::new();
    pair(&roots, "changed.txt", b"hello", b"abc", 0);
    pair(&roots, "same.txt", b"same", b"same", 0);
    write(&roots.source, "new.txt", b"new");

    let (status, recorder) = update(&FaultyFs::new(), &ExclusionSet::default(), &roots);

    assert!(status);
    assert_eq!(
        fs::read(roots.target.join("changed.txt")).expect("read"),
        b"hello"
    );
    assert_eq!(
        recorder.succeeded(ItemKind::CopyFile),
        [roots.target.join("changed.txt")]
    );
    assert!(recorder.contains(&Record::Skipped(
        roots.target.join("same.txt"),
        SkipReason::UpToDate
    )));
    assert!(recorder.contains(&Record::Skipped(
        roots.target.join("new.txt"),
        SkipReason::MissingFromTarget
    )));
    assert!(!roots.target.join("new.txt").exists());
}

#[test]
fn modification_window_is_two_seconds() {
    let roots = Roots::new();
    pair(&roots, "within.txt", b"data", b"data", 2);
    pair(&roots, "beyond.txt", b"data", b"DATA", 3);

    let (status, recorder) = update(&FaultyFs::new(), &ExclusionSet::default(), &roots);

    assert!(status);
    assert!(recorder.contains(&Record::Checked(roots.source.join("within.txt"), false)));
    assert!(recorder.contains(&Record::Checked(roots.source.join("beyond.txt"), true)));
    assert_eq!(
        fs::read(roots.target.join("within.txt")).expect("read"),
        b"data"
    );
    assert_eq!(
        fs::read(roots.target.join("beyond.txt")).expect("read"),
        b"data"
    );
}

#[test]
fn updated_file_carries_the_source_modification_time() {
    let roots = Roots::new();
    pair(&roots, "file.txt", b"longer", b"short", 100);

    let (status, _) = update(&FaultyFs::new(), &ExclusionSet::default(), &roots);

    assert!(status);
    let source = fs::metadata(roots.source.join("file.txt")).expect("metadata");
    let target = fs::metadata(roots.target.join("file.txt")).expect("metadata");
    assert_eq!(
        source.modified().expect("mtime"),
        target.modified().expect("mtime")
    );
}

// ==================== Failures ====================

#[test]
fn failed_comparison_still_attempts_the_copy() {
    let roots = Roots::new();
    pair(&roots, "file.txt", b"new content", b"old", 0);
    let faulty = FaultyFs::new().fail(Fault::Snapshot, roots.target.join("file.txt"));

    let (status, recorder) = update(&faulty, &ExclusionSet::default(), &roots);

    assert!(!status);
    assert_eq!(
        recorder.failures(),
        [(ItemKind::CheckFile, roots.source.join("file.txt"))]
    );
    assert_eq!(
        fs::read(roots.target.join("file.txt")).expect("read"),
        b"new content"
    );
}

#[test]
fn attribute_failure_is_reported_but_keeps_the_pass_successful() {
    let roots = Roots::new();
    pair(&roots, "file.txt", b"new content", b"old", 0);
    let target = roots.target.join("file.txt");
    let faulty = FaultyFs::new().fail(Fault::CopyAttributes, &target);

    let (status, recorder) = update(&faulty, &ExclusionSet::default(), &roots);

    assert!(status);
    assert!(recorder.contains(&Record::AttributesNotApplied(target.clone())));
    assert_eq!(recorder.succeeded(ItemKind::CopyFile), [target.clone()]);
    assert_eq!(fs::read(&target).expect("read"), b"new content");
}

#[test]
fn failed_copy_does_not_stop_siblings() {
    let roots = Roots::new();
    pair(&roots, "a.txt", b"aaaa", b"a", 0);
    pair(&roots, "b.txt", b"bbbb", b"b", 0);
    pair(&roots, "c.txt", b"cccc", b"c", 0);
    let faulty = FaultyFs::new().fail(Fault::CopyFile, roots.target.join("b.txt"));

    let (status, recorder) = update(&faulty, &ExclusionSet::default(), &roots);

    assert!(!status);
    assert_eq!(
        recorder.succeeded(ItemKind::CopyFile),
        [roots.target.join("a.txt"), roots.target.join("c.txt")]
    );
    assert_eq!(fs::read(roots.target.join("b.txt")).expect("read"), b"b");
}

#[cfg(unix)]
#[test]
fn read_only_target_is_made_writable_before_the_copy() {
    use std::os::unix::fs::PermissionsExt;

    let roots = Roots::new();
    pair(&roots, "locked.txt", b"fresh data", b"old", 0);
    let target = roots.target.join("locked.txt");
    fs::set_permissions(&target, fs::Permissions::from_mode(0o444)).expect("chmod");

    let (status, recorder) = update(&FaultyFs::new(), &ExclusionSet::default(), &roots);

    assert!(status);
    assert!(recorder.contains(&Record::Succeeded(ItemKind::ClearReadOnly, target.clone(), 0)));
    assert_eq!(fs::read(&target).expect("read"), b"fresh data");
}

#[cfg(unix)]
#[test]
fn read_only_clear_failure_does_not_decide_the_outcome() {
    use std::os::unix::fs::PermissionsExt;

    let roots = Roots::new();
    pair(&roots, "locked.txt", b"fresh data", b"old", 0);
    let target = roots.target.join("locked.txt");
    fs::set_permissions(&target, fs::Permissions::from_mode(0o444)).expect("chmod");
    let faulty = FaultyFs::new().fail(Fault::ClearReadOnly, &target);

    let (status, recorder) = update(&faulty, &ExclusionSet::default(), &roots);

    assert!(recorder.contains(&Record::Failed(ItemKind::ClearReadOnly, target.clone())));
    assert_eq!(faulty.calls(Fault::CopyFile, &target), 1, "copy is still attempted");
    let copied = !recorder.succeeded(ItemKind::CopyFile).is_empty();
    assert_eq!(status, copied);

    let mut permissions = fs::metadata(&target).expect("metadata").permissions();
    permissions.set_mode(0o644);
    fs::set_permissions(&target, permissions).expect("restore permissions");
}

// ==================== Missing Content ====================

#[test]
fn missing_target_root_is_a_silent_success() {
    let roots = Roots::source_only();
    write(&roots.source, "file.txt", b"x");

    let (status, recorder) = update(&FaultyFs::new(), &ExclusionSet::default(), &roots);

    assert!(status);
    assert!(recorder.records.is_empty());
    assert!(!roots.target.exists());
}

#[test]
fn missing_target_subdirectory_is_not_created() {
    let roots = Roots::new();
    write(&roots.source, "sub/file.txt", b"x");

    let (status, _) = update(&FaultyFs::new(), &ExclusionSet::default(), &roots);

    assert!(status);
    assert!(!roots.target.join("sub").exists());
}

#[test]
fn excluded_subdirectory_is_not_updated() {
    let roots = Roots::new();
    pair(&roots, "vendor/lib.txt", b"new version", b"old", 0);
    let exclusions = ExclusionSet::new([Exclusion::any_depth("vendor")]);

    let (status, recorder) = update(&FaultyFs::new(), &exclusions, &roots);

    assert!(status);
    assert!(recorder.contains(&Record::Excluded(roots.target.join("vendor"), 0)));
    assert_eq!(
        fs::read(roots.target.join("vendor/lib.txt")).expect("read"),
        b"old"
    );
}
