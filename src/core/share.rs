//! Share links: the whole project list, base64-encoded into a URL
//! query parameter. The receiving side decodes and, on confirmation,
//! replaces its local project list with the shared one.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as B64;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::Project;

#[derive(Debug, Serialize, Deserialize)]
pub struct SharePayload {
    pub projects: Vec<Project>,
    #[serde(rename = "sharedDate")]
    pub shared_date: String,
}

/// Encode the project list into a `?share=<blob>` URL.
pub fn make_link(base_url: &str, projects: &[Project]) -> AppResult<String> {
    let payload = SharePayload {
        projects: projects.to_vec(),
        shared_date: chrono::Local::now().to_rfc3339(),
    };
    let json = serde_json::to_string(&payload)?;
    Ok(format!(
        "{}?share={}",
        base_url.trim_end_matches('/'),
        B64.encode(json)
    ))
}

/// Decode a share link. Accepts a full URL containing `share=` or the
/// bare base64 blob.
pub fn decode_link(input: &str) -> AppResult<SharePayload> {
    let blob = match input.split_once("share=") {
        Some((_, rest)) => rest.split('&').next().unwrap_or(rest),
        None => input.trim(),
    };

    let bytes = B64
        .decode(blob)
        .map_err(|e| AppError::Share(format!("not valid base64: {}", e)))?;
    let json = String::from_utf8(bytes)
        .map_err(|e| AppError::Share(format!("not valid UTF-8: {}", e)))?;
    serde_json::from_str(&json).map_err(|e| AppError::Share(format!("not a project payload: {}", e)))
}
