//! Output-context escaping for user-supplied portfolio fields.

/// Escapes text for HTML element content and quoted attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto", "tel"];

/// Prepares a user-supplied URL for an `href` attribute.
///
/// Relative URLs and the schemes in `ALLOWED_SCHEMES` pass through
/// (attribute-escaped); anything else, e.g. `javascript:`, becomes `#`.
pub fn escape_url(raw: &str) -> String {
    let url = raw.trim();
    if let Some(scheme) = url_scheme(url) {
        if !ALLOWED_SCHEMES
            .iter()
            .any(|allowed| scheme.eq_ignore_ascii_case(allowed))
        {
            return "#".to_string();
        }
    }
    escape_html(url)
}

const IMAGE_SCHEMES: &[&str] = &["http", "https"];

/// Prepares a user-supplied URL for an `<img src>` attribute.
///
/// Accepts relative URLs, `http`/`https` and inline `data:image/...`
/// payloads; anything else becomes `#`.
pub fn escape_image_url(raw: &str) -> String {
    let url = raw.trim();
    match url_scheme(url) {
        None => escape_html(url),
        Some(scheme) if scheme.eq_ignore_ascii_case("data") => {
            if is_inline_image(url) {
                escape_html(url)
            } else {
                "#".to_string()
            }
        }
        Some(scheme)
            if IMAGE_SCHEMES
                .iter()
                .any(|allowed| scheme.eq_ignore_ascii_case(allowed)) =>
        {
            escape_html(url)
        }
        Some(_) => "#".to_string(),
    }
}

fn is_inline_image(url: &str) -> bool {
    url.get(..11)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("data:image/"))
}

/// Builds a `tel:` target from a phone number with all whitespace removed.
pub fn tel_href(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    escape_url(&format!("tel:{digits}"))
}

/// Builds a `mailto:` target.
pub fn mailto_href(email: &str) -> String {
    escape_url(&format!("mailto:{}", email.trim()))
}

/// Builds a map search link with the location percent-encoded as a path segment.
pub fn map_search_href(location: &str) -> String {
    format!(
        "https://www.google.com/maps/search/{}",
        urlencoding::encode(location)
    )
}

/// Returns the scheme of an absolute URL, or `None` for relative ones.
///
/// Control characters and whitespace are ignored while scanning, matching
/// how browsers read `java\tscript:` as `javascript:`.
fn url_scheme(url: &str) -> Option<String> {
    let colon = url.find(':')?;
    let head = &url[..colon];
    // A '/', '?' or '#' before the first ':' makes the URL relative.
    if head.contains(['/', '?', '#']) {
        return None;
    }
    let scheme: String = head
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .collect();
    Some(scheme)
}
