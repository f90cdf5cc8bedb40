//! Blocking HTTP helpers over libcurl (the `curl` crate).
//!
//! The Plex endpoints this tool touches are plain request/response: a form
//! POST for sign-in and a handful of GETs. Each call builds a fresh `Easy`
//! handle with conservative timeouts, follows redirects, and collects the
//! response body into memory.

use std::time::Duration;

use curl::easy::{Easy, List};

use crate::plex::PlexError;

fn new_easy(url: &str, headers: &[(String, String)]) -> Result<Easy, PlexError> {
    let mut easy = Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.connect_timeout(Duration::from_secs(15))?;
    easy.timeout(Duration::from_secs(30))?;

    let mut list = List::new();
    for (k, v) in headers {
        list.append(&format!("{}: {}", k.trim(), v.trim()))?;
    }
    if !headers.is_empty() {
        easy.http_headers(list)?;
    }
    Ok(easy)
}

/// Runs the transfer and returns the body, or `PlexError::Status` on non-2xx.
fn perform(mut easy: Easy, url: &str) -> Result<Vec<u8>, PlexError> {
    let mut body: Vec<u8> = Vec::new();
    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(PlexError::Status {
            code,
            url: url.to_string(),
        });
    }
    Ok(body)
}

/// GET `url` with the given headers, returning the response body.
pub fn get(url: &str, headers: &[(String, String)]) -> Result<Vec<u8>, PlexError> {
    let easy = new_easy(url, headers)?;
    perform(easy, url)
}

/// POST an `application/x-www-form-urlencoded` body to `url`.
///
/// `body` must already be form-encoded (see `url::form_urlencoded`).
pub fn post_form(url: &str, body: &str, headers: &[(String, String)]) -> Result<Vec<u8>, PlexError> {
    let mut easy = new_easy(url, headers)?;
    easy.post(true)?;
    easy.post_fields_copy(body.as_bytes())?;
    perform(easy, url)
}
