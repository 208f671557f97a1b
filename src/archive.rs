use crate::context::Context;
use crate::error::Error;
use crate::manifest::Manifest;
use crate::result::Result;
use crate::utils;
use std::fs::File;
use std::io::{Seek, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use time::OffsetDateTime;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Receives build events in the order entries are written
pub trait Progress {
    fn on_entry_added(&mut self, name: &str, bytes: u64);

    fn on_complete(&mut self, _report: &BuildReport) {}
}

/// Outcome of a successful build
#[derive(Debug, Default)]
pub struct BuildReport {
    pub archive_path: PathBuf,
    pub manifest_path: PathBuf,
    /// Entry names in write order
    pub entries: Vec<String>,
    /// Total uncompressed bytes
    pub bytes: u64,
    /// A previous output file was deleted
    pub replaced: bool,
}

/// Package the skill directory into a fresh archive at `ctx.output_path`.
///
/// The manifest gate runs before any filesystem change. A stale output is
/// deleted, not replaced atomically, so an interrupted build leaves no archive.
pub fn build(ctx: &Context, progress: &mut dyn Progress) -> Result<BuildReport> {
    let manifest = Manifest::locate(ctx)?;

    let replaced = utils::remove_stale(&ctx.output_path)?;
    utils::ensure_parent_dir(&ctx.output_path)?;

    let file = File::create(&ctx.output_path)?;
    let own_path = ctx.output_path.canonicalize()?;
    let mut report = write_archive(file, &ctx.source_dir, &ctx.source_name, &own_path, progress)?;
    report.archive_path = ctx.output_path.clone();
    report.manifest_path = manifest.path;
    report.replaced = replaced;

    progress.on_complete(&report);
    Ok(report)
}

/// Walk `source_dir` and write every regular file under it into a zip on `writer`.
///
/// `own_path` is the canonical path of the archive being written; it is never
/// added to itself when the output lives inside the source tree. On error the
/// writer is dropped, which releases the underlying handle.
fn write_archive<W: Write + Seek>(
    writer: W,
    source_dir: &Path,
    source_name: &str,
    own_path: &Path,
    progress: &mut dyn Progress,
) -> Result<BuildReport> {
    let mut zip = ZipWriter::new(writer);
    let mut report = BuildReport::default();

    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let walkdir = WalkDir::new(source_dir).sort_by_file_name();
    for entry in walkdir {
        let entry = entry?;
        let path = entry.path();

        // follows file symlinks, not directory ones
        if !path.is_file() || path.canonicalize()? == own_path {
            continue;
        }

        let relative = path
            .strip_prefix(source_dir)
            .map_err(|_| Error::InvalidSource(path.display().to_string()))?;
        let name = utils::entry_name(source_name, relative)?;

        let metadata = std::fs::metadata(path)?;
        let mut options = options;
        if let Some(modified) = metadata.modified().ok().and_then(zip_time) {
            options = options.last_modified_time(modified);
        }
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            options = options.unix_permissions(metadata.permissions().mode() & 0o777);
        }

        zip.start_file(name.as_str(), options)?;
        let mut f = File::open(path)?;
        let bytes = std::io::copy(&mut f, &mut zip)?;

        progress.on_entry_added(&name, bytes);
        report.bytes += bytes;
        report.entries.push(name);
    }

    zip.finish()?;
    Ok(report)
}

/// Zip timestamps cover 1980..=2107; anything outside keeps the format default
fn zip_time(modified: SystemTime) -> Option<DateTime> {
    DateTime::try_from(OffsetDateTime::from(modified)).ok()
}
