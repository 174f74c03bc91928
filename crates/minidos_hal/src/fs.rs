//! Filesystem probing for MiniDOS
//!
//! Thin views over `std::fs`. Nothing here caches: every call re-queries the
//! filesystem, so a listing reflects the directory as it was when it ran.

use std::fs;
use std::io;
use std::path::Path;

/// What a path refers to once symlinks are followed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Sockets, FIFOs, device nodes.
    Other,
}

impl EntryKind {
    fn of(file_type: &fs::FileType) -> Self {
        if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }
}

/// Look up `path`, following symlinks.
///
/// Returns `Ok(None)` when nothing exists there (a dangling link counts as
/// nothing). Any other failure, permission refusals included, is returned.
pub fn probe(path: &Path) -> io::Result<Option<EntryKind>> {
    match fs::metadata(path) {
        Ok(meta) => Ok(Some(EntryKind::of(&meta.file_type()))),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}

/// `true` when `path` is a directory with no entries.
pub fn is_empty_dir(path: &Path) -> io::Result<bool> {
    Ok(fs::read_dir(path)?.next().is_none())
}

/// `true` when both paths reach the same file, hard links included.
pub fn same_file(a: &Path, b: &Path) -> io::Result<bool> {
    let (left, right) = (fs::metadata(a)?, fs::metadata(b)?);
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        Ok(left.dev() == right.dev() && left.ino() == right.ino())
    }
    #[cfg(not(unix))]
    {
        let _ = (left, right);
        Ok(a.canonicalize()? == b.canonicalize()?)
    }
}

/// A file seen during a listing. The size is looked up separately from the
/// enumeration, so it can fail on its own.
#[derive(Debug)]
pub struct FileEntry {
    pub name: String,
    pub size: io::Result<u64>,
}

/// Snapshot of one directory, split by kind and sorted by name.
#[derive(Debug, Default)]
pub struct Listing {
    pub directories: Vec<String>,
    pub files: Vec<FileEntry>,
    /// Entries enumerated, including ones of neither kind.
    pub total: usize,
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Enumerate `dir`.
///
/// A failure to open or read the directory itself is returned and nothing is
/// listed. An entry whose kind cannot be determined is kept as a file with an
/// unavailable size rather than failing the listing.
pub fn list(dir: &Path) -> io::Result<Listing> {
    let mut listing = Listing::default();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        listing.total += 1;
        let name = entry.file_name().to_string_lossy().into_owned();
        let path = entry.path();

        let kind = entry.file_type().and_then(|ft| {
            if ft.is_symlink() {
                fs::metadata(&path).map(|meta| EntryKind::of(&meta.file_type()))
            } else {
                Ok(EntryKind::of(&ft))
            }
        });

        match kind {
            Ok(EntryKind::Directory) => listing.directories.push(name),
            Ok(EntryKind::File) => {
                let size = fs::metadata(&path).map(|meta| meta.len());
                listing.files.push(FileEntry { name, size });
            }
            Ok(EntryKind::Other) => {
                tracing::debug!(entry = %name, "skipping special file in listing");
            }
            Err(err) => {
                tracing::debug!(entry = %name, error = %err, "could not classify entry");
                listing.files.push(FileEntry { name, size: Err(err) });
            }
        }
    }

    listing.directories.sort();
    listing.files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(listing)
}
