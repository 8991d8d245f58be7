// Location handling - the `?view=<id>` query contract shared by the
// location bar, history entries and deep links.

/// Extract the `view` query parameter from a location string.
///
/// Accepts a bare query (`?view=blog`), a full URL, or a location with no
/// query at all (returns `None`).
pub fn view_param(location: &str) -> Option<String> {
    let query = match location.find('?') {
        Some(idx) => &location[idx + 1..],
        None => return None,
    };
    // Anything after a fragment marker is not part of the query
    let query = query.split('#').next().unwrap_or("");

    for pair in query.split('&') {
        let mut parts = pair.splitn(2, '=');
        let key = parts.next().unwrap_or("");
        if key == "view" {
            let raw = parts.next().unwrap_or("");
            let decoded = decode(raw);
            if decoded.is_empty() {
                return None;
            }
            return Some(decoded);
        }
    }
    None
}

/// Format the location for a view id.
pub fn for_view(view_id: &str) -> String {
    format!("?view={}", encode(view_id))
}

fn encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

fn decode(value: &str) -> String {
    let mut out = Vec::with_capacity(value.len());
    let bytes = value.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let hex = bytes.get(i + 1..i + 3).and_then(|h| {
                    std::str::from_utf8(h)
                        .ok()
                        .and_then(|s| u8::from_str_radix(s, 16).ok())
                });
                match hex {
                    Some(b) => {
                        out.push(b);
                        i += 3;
                    }
                    None => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}
