//! CLI parse and credential-check tests.

use std::path::Path;

use clap::Parser;

use super::{verify_credentials, Cli};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_minimal() {
    let cli = parse(&["plexdl", "Road Trip", "/media/usb"]);
    assert_eq!(cli.playlist_name, "Road Trip");
    assert_eq!(cli.dest_path, Path::new("/media/usb"));
    assert!(cli.username.is_none());
    assert!(cli.plex_dir.is_none());
    assert!(cli.local_dir.is_none());
}

#[test]
fn cli_parse_full() {
    let cli = parse(&[
        "plexdl",
        "Road Trip",
        "/media/usb",
        "--username",
        "someone",
        "--password",
        "hunter2",
        "--server",
        "sunplex",
        "--plex-dir",
        "/data",
        "--local-dir",
        "/home/user/net",
    ]);
    assert_eq!(cli.username.as_deref(), Some("someone"));
    assert_eq!(cli.password.as_deref(), Some("hunter2"));
    assert_eq!(cli.server.as_deref(), Some("sunplex"));
    assert_eq!(cli.plex_dir.as_deref(), Some("/data"));
    assert_eq!(cli.local_dir.as_deref(), Some("/home/user/net"));
}

#[test]
fn cli_parse_requires_positionals() {
    assert!(Cli::try_parse_from(["plexdl"]).is_err());
    assert!(Cli::try_parse_from(["plexdl", "Road Trip"]).is_err());
}

#[test]
fn credentials_all_present() {
    let creds = verify_credentials(Some("u"), Some("p"), Some("s")).unwrap();
    assert_eq!(creds.username, "u");
    assert_eq!(creds.password, "p");
    assert_eq!(creds.server, "s");
}

#[test]
fn credentials_any_missing_rejected() {
    assert!(verify_credentials(None, Some("p"), Some("s")).is_err());
    assert!(verify_credentials(Some("u"), None, Some("s")).is_err());
    assert!(verify_credentials(Some("u"), Some("p"), None).is_err());
    assert!(verify_credentials(None, None, None).is_err());
}

#[test]
fn credentials_empty_counts_as_missing() {
    assert!(verify_credentials(Some(""), Some("p"), Some("s")).is_err());
    assert!(verify_credentials(Some("u"), Some(""), Some("s")).is_err());
    assert!(verify_credentials(Some("u"), Some("p"), Some("")).is_err());
}

#[test]
fn credentials_error_mentions_help() {
    let err = verify_credentials(None, None, None).unwrap_err();
    assert!(err.to_string().contains("--help"));
}
