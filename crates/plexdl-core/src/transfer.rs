//! The copy loop: resolve each playlist item to a local path, copy it flat
//! into the destination directory, stop on the first failure.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::path_map::PathMappingPolicy;
use crate::plex::PlaylistSource;

/// What a completed run copied. The driver logs the count; there is no
/// partial-success reporting beyond the per-file progress lines.
#[derive(Debug)]
pub struct CopyReport {
    pub copied: usize,
}

/// Copy every file in the named playlist into `dest_dir`, in playlist order.
///
/// Each item's first stored location is resolved through `policy` and copied
/// with its base name into `dest_dir`, overwriting any same-named file
/// already there. The first lookup, resolution, or copy failure aborts the
/// remaining items and propagates.
pub fn copy_playlist(
    source: &dyn PlaylistSource,
    playlist_name: &str,
    dest_dir: &Path,
    policy: &PathMappingPolicy,
) -> Result<CopyReport> {
    let playlist = source
        .playlist(playlist_name)
        .with_context(|| format!("fetch playlist {playlist_name:?}"))?;

    let sources = resolve_sources(&playlist.items, policy)?;

    println!("Destination directory {}", dest_dir.display());
    let mut copied = 0usize;
    for src in &sources {
        let name = src
            .file_name()
            .with_context(|| format!("source path {} has no file name", src.display()))?;
        println!("Copying {}", name.to_string_lossy());
        fs::copy(src, dest_dir.join(name))
            .with_context(|| format!("copy {} to {}", src.display(), dest_dir.display()))?;
        copied += 1;
    }

    Ok(CopyReport { copied })
}

/// First stored location of each item, mapped through the policy.
fn resolve_sources(
    items: &[crate::plex::PlaylistItem],
    policy: &PathMappingPolicy,
) -> Result<Vec<PathBuf>> {
    let mut sources = Vec::with_capacity(items.len());
    for item in items {
        let location = item
            .locations
            .first()
            .with_context(|| format!("playlist item {:?} has no stored location", item.title))?;
        if matches!(policy, PathMappingPolicy::Identity) {
            println!(
                "Assuming the server directory and the local directory are the same, \
                 since --plex-dir and/or --local-dir are not set"
            );
        }
        sources.push(PathBuf::from(policy.resolve(location)));
    }
    Ok(sources)
}
