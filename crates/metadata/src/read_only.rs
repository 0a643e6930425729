use crate::error::MetadataError;
use std::fs;
use std::path::Path;

/// Reports whether `metadata` describes a file that cannot be written.
///
/// On Unix this means no write bit is set; elsewhere it is the read-only
/// attribute.
#[must_use]
pub fn is_read_only(metadata: &fs::Metadata) -> bool {
    metadata.permissions().readonly()
}

/// Makes `path` writable by its owner.
///
/// Returns `Ok(false)` when the file was already writable and nothing changed.
pub fn clear_read_only(path: &Path) -> Result<bool, MetadataError> {
    let metadata = fs::metadata(path)
        .map_err(|error| MetadataError::new("inspect permissions", path, error))?;
    if !is_read_only(&metadata) {
        return Ok(false);
    }

    let mut permissions = metadata.permissions();

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        permissions.set_mode(permissions.mode() | 0o200);
    }

    #[cfg(not(unix))]
    #[allow(clippy::permissions_set_readonly_false)]
    {
        permissions.set_readonly(false);
    }

    fs::set_permissions(path, permissions)
        .map_err(|error| MetadataError::new("clear read-only flag", path, error))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn writable_file_is_left_alone() {
        let temp = tempdir().expect("tempdir");
        let file = temp.path().join("plain.txt");
        fs::write(&file, b"x").expect("write");

        assert!(!clear_read_only(&file).expect("inspect"));
    }

    #[test]
    fn read_only_file_becomes_writable() {
        let temp = tempdir().expect("tempdir");
        let file = temp.path().join("locked.txt");
        fs::write(&file, b"x").expect("write");
        let mut permissions = fs::metadata(&file).expect("metadata").permissions();
        permissions.set_readonly(true);
        fs::set_permissions(&file, permissions).expect("lock");
        assert!(is_read_only(&fs::metadata(&file).expect("metadata")));

        assert!(clear_read_only(&file).expect("clear"));
        assert!(!is_read_only(&fs::metadata(&file).expect("metadata")));
        fs::write(&file, b"rewritten").expect("file is writable again");
    }

    #[test]
    fn missing_file_is_an_error() {
        let temp = tempdir().expect("tempdir");
        let error = clear_read_only(&temp.path().join("absent")).expect_err("missing");
        assert_eq!(error.kind(), std::io::ErrorKind::NotFound);
    }
}
