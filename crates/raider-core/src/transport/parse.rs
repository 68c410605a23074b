//! Parse raw response header lines collected from libcurl.

/// Header lines → `(name, value)` pairs of the final response.
///
/// libcurl reports every response it reads (e.g. a proxy's `CONNECT` reply
/// before the real one); each status line starts a new block and only the
/// last block is kept.
pub(crate) fn parse_headers(lines: &[String]) -> Vec<(String, String)> {
    let mut headers = Vec::new();
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            headers.clear();
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.push((name.trim().to_string(), value.trim().to_string()));
        }
    }
    headers
}
