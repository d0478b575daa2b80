/// Normalize an email address for use as the record key
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Check that an email has a standard `local@domain.tld` shape
///
/// Mirrors the permissive shape check the frontend applies: one `@`, a
/// non-empty local part, and a domain containing a dot with non-empty
/// segments. No whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.chars().any(char::is_whitespace) {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Extract a version label from a download filename
///
/// Matches "digits.digits" with an optional `v` prefix, e.g.
/// "DeskPilot_v2.0.dmg" -> "2.0". No match yields None, which is not an
/// error: not every artifact name carries a version.
pub fn extract_version(filename: &str) -> Option<String> {
    let bytes = filename.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }

        if i < bytes.len() && bytes[i] == b'.' {
            let dot = i;
            i += 1;
            let frac_start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            if i > frac_start {
                return Some(filename[start..i].to_string());
            }
            // digits followed by a dot but no trailing digits; keep scanning
            i = dot + 1;
        }
    }
    None
}
