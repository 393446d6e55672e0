//! Stored file name derivation.

use std::path::{Component, Path, PathBuf};

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;

pub const ALLOWED_EXTENSIONS: [&str; 2] = ["csv", "xlsx"];

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));
static DISALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9_-]").expect("valid charset regex"));

/// Trim, collapse whitespace runs to `_`, then drop anything outside `[A-Za-z0-9_-]`.
pub fn sanitize(name: &str) -> String {
    let underscored = WHITESPACE.replace_all(name.trim(), "_");
    DISALLOWED.replace_all(&underscored, "").into_owned()
}

/// Text after the last `.`, lowercased. A leading dot does not start an extension.
pub fn extension(file_name: &str) -> Option<String> {
    match file_name.rfind('.') {
        Some(idx) if idx > 0 => Some(file_name[idx + 1..].to_lowercase()),
        _ => None,
    }
}

pub fn is_allowed(ext: &str) -> bool { ALLOWED_EXTENSIONS.contains(&ext) }

/// `{user}_{account}_{yyyyMMddHHmmss}.{ext}`
pub fn stored_file_name(user_name: &str, account_name: &str, at: NaiveDateTime, ext: &str) -> String {
    format!("{}_{}_{}.{}", sanitize(user_name), sanitize(account_name), at.format("%Y%m%d%H%M%S"), ext)
}

/// Absolute form of `dir` with `.` and `..` folded away lexically.
pub fn absolute_dir(dir: &Path) -> std::io::Result<PathBuf> {
    let joined = if dir.is_absolute() { dir.to_path_buf() } else { std::env::current_dir()?.join(dir) };
    let mut out = PathBuf::new();
    for comp in joined.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    Ok(out)
}
