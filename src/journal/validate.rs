//! Entry Validation Module
//!
//! Structural and content checks applied before an entry enters the
//! store. Every violated rule is collected; validation never fails fast.

use url::Url;

// == Field Bounds ==
/// Minimum topic length in characters
pub const TOPIC_MIN_LEN: usize = 3;

/// Maximum topic length in characters
pub const TOPIC_MAX_LEN: usize = 200;

/// Minimum content length in characters
pub const CONTENT_MIN_LEN: usize = 10;

/// Maximum content length in characters
pub const CONTENT_MAX_LEN: usize = 10_000;

// == Validate Entry ==
/// Checks candidate entry fields and returns every violation found.
///
/// An empty vector means the data is valid. Checks per field:
/// - `topic`: required, 3-200 characters
/// - `content`: required, 10-10000 characters
/// - `link` / `image_url`: when present, an absolute URL with an
///   `http` or `https` scheme
pub fn validate_entry(
    topic: &str,
    content: &str,
    link: Option<&str>,
    image_url: Option<&str>,
) -> Vec<String> {
    let mut errors = Vec::new();

    check_length(
        &mut errors,
        "Topic",
        topic,
        TOPIC_MIN_LEN,
        TOPIC_MAX_LEN,
    );
    check_length(
        &mut errors,
        "Content",
        content,
        CONTENT_MIN_LEN,
        CONTENT_MAX_LEN,
    );

    if let Some(value) = link {
        check_url(&mut errors, "Link", value);
    }
    if let Some(value) = image_url {
        check_url(&mut errors, "Image URL", value);
    }

    errors
}

// == Length Check ==
/// Validates required presence and character-count bounds for a field.
fn check_length(errors: &mut Vec<String>, field: &str, value: &str, min: usize, max: usize) {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        errors.push(format!("{field} is required"));
        return;
    }

    let chars = trimmed.chars().count();
    if chars < min {
        errors.push(format!("{field} must be at least {min} characters"));
    } else if chars > max {
        errors.push(format!("{field} must be at most {max} characters"));
    }
}

// == URL Check ==
/// Validates that a value parses as an absolute http(s) URL.
fn check_url(errors: &mut Vec<String>, field: &str, value: &str) {
    match Url::parse(value.trim()) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => {
            errors.push(format!(
                "{field} must use http or https, not {}",
                url.scheme()
            ));
        }
        Err(_) => {
            errors.push(format!("{field} must be an absolute URL"));
        }
    }
}
