use crate::error::MetadataError;
#[cfg(not(windows))]
use filetime::{FileTime, set_file_times};
use std::fs;
use std::path::Path;

/// Copies the attributes of `source` onto `destination`.
///
/// Timestamps are written before permissions so a read-only source does not
/// lock the destination against the timestamp update.
pub fn copy_file_metadata(source: &Path, destination: &Path) -> Result<(), MetadataError> {
    let metadata = fs::metadata(source)
        .map_err(|error| MetadataError::new("inspect source attributes", source, error))?;
    set_times_like(&metadata, destination)?;
    set_permissions_like(&metadata, destination)
}

fn set_permissions_like(metadata: &fs::Metadata, destination: &Path) -> Result<(), MetadataError> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let mode = metadata.permissions().mode();
        fs::set_permissions(destination, PermissionsExt::from_mode(mode))
            .map_err(|error| MetadataError::new("preserve permissions", destination, error))?;
    }

    #[cfg(not(unix))]
    {
        let readonly = metadata.permissions().readonly();
        let mut destination_permissions = fs::metadata(destination)
            .map_err(|error| {
                MetadataError::new("inspect destination permissions", destination, error)
            })?
            .permissions();
        destination_permissions.set_readonly(readonly);
        fs::set_permissions(destination, destination_permissions)
            .map_err(|error| MetadataError::new("preserve permissions", destination, error))?;
    }

    Ok(())
}

#[cfg(not(windows))]
fn set_times_like(metadata: &fs::Metadata, destination: &Path) -> Result<(), MetadataError> {
    let accessed = FileTime::from_last_access_time(metadata);
    let modified = FileTime::from_last_modification_time(metadata);

    set_file_times(destination, accessed, modified)
        .map_err(|error| MetadataError::new("preserve timestamps", destination, error))
}

/// The copy may already carry the read-only attribute, so the handle asks for
/// attribute access only.
#[cfg(windows)]
fn set_times_like(metadata: &fs::Metadata, destination: &Path) -> Result<(), MetadataError> {
    use std::fs::{FileTimes, OpenOptions};
    use std::os::windows::fs::{FileTimesExt, OpenOptionsExt};
    use windows::Win32::Storage::FileSystem::FILE_WRITE_ATTRIBUTES;

    let preserve = |error| MetadataError::new("preserve timestamps", destination, error);
    let mut times = FileTimes::new()
        .set_accessed(metadata.accessed().map_err(preserve)?)
        .set_modified(metadata.modified().map_err(preserve)?);
    if let Ok(created) = metadata.created() {
        times = times.set_created(created);
    }

    let file = OpenOptions::new()
        .access_mode(FILE_WRITE_ATTRIBUTES.0)
        .open(destination)
        .map_err(preserve)?;
    file.set_times(times).map_err(preserve)
}
