//! CLI for plexdl.
//!
//! Single flat command: the tool does one thing, so there are no subcommands.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

use plexdl_core::path_map::PathMappingPolicy;
use plexdl_core::plex;
use plexdl_core::transfer;

/// Copy the media files of a named Plex playlist to a local directory.
///
/// Assumes this machine mounts the same network share as the Plex server (or
/// that --plex-dir/--local-dir translate between the two layouts). Consider
/// clearing your shell history afterwards; the password is passed on the
/// command line.
#[derive(Debug, Parser)]
#[command(name = "plexdl")]
#[command(about = "Copy a Plex playlist's media files to a local directory", long_about = None)]
pub struct Cli {
    /// Exact playlist name. Quote names containing spaces.
    pub playlist_name: String,

    /// Existing local directory where the files land, e.g. /media/account/usb-drive.
    pub dest_path: PathBuf,

    /// Plex account username. Required together with --password and --server.
    #[arg(long)]
    pub username: Option<String>,

    /// Plex account password. Required together with --username and --server.
    #[arg(long)]
    pub password: Option<String>,

    /// Name of the Plex server resource to connect to.
    #[arg(long)]
    pub server: Option<String>,

    /// Directory the source files are mounted under on the Plex server,
    /// e.g. /data. Replaced by --local-dir in every item path.
    #[arg(long)]
    pub plex_dir: Option<String>,

    /// Directory the source files are mounted under locally, e.g.
    /// /home/username/net. Replaces --plex-dir.
    #[arg(long)]
    pub local_dir: Option<String>,
}

/// The validated credential trio.
#[derive(Debug)]
struct Credentials {
    username: String,
    password: String,
    server: String,
}

/// Presence-only group check: all three must be given and non-empty. Runs
/// before any network call so a bad invocation never touches plex.tv.
fn verify_credentials(
    username: Option<&str>,
    password: Option<&str>,
    server: Option<&str>,
) -> Result<Credentials> {
    match (username, password, server) {
        (Some(u), Some(p), Some(s)) if !u.is_empty() && !p.is_empty() && !s.is_empty() => {
            Ok(Credentials {
                username: u.to_string(),
                password: p.to_string(),
                server: s.to_string(),
            })
        }
        _ => bail!("cannot proceed without --username, --password, and --server; see \"--help\""),
    }
}

pub fn run_from_args() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}

impl Cli {
    fn run(self) -> Result<()> {
        let creds = verify_credentials(
            self.username.as_deref(),
            self.password.as_deref(),
            self.server.as_deref(),
        )?;

        println!(
            "Download \"{}\" to \"{}\"",
            self.playlist_name,
            self.dest_path.display()
        );

        let token = plex::sign_in(&creds.username, &creds.password)?;
        let server = plex::connect(&token, &creds.server)?;

        let policy = PathMappingPolicy::from_options(self.plex_dir, self.local_dir);
        let report =
            transfer::copy_playlist(&server, &self.playlist_name, &self.dest_path, &policy)?;
        tracing::info!(
            "copied {} file(s) from {:?} to {}",
            report.copied,
            self.playlist_name,
            self.dest_path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests;
