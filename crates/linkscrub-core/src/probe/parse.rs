//! Extract the fields we report from raw response header lines.

/// Content-Type of the final response.
///
/// With redirects followed, curl hands us the header block of every hop; a
/// status line starts a new block, so only the last hop's value survives.
pub(crate) fn content_type(lines: &[String]) -> Option<String> {
    let mut content_type = None;
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            content_type = None;
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-type") {
                let value = value.trim();
                if !value.is_empty() {
                    content_type = Some(value.to_string());
                }
            }
        }
    }
    content_type
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn single_response() {
        let h = lines(&["HTTP/1.1 200 OK", "Content-Type: text/html; charset=utf-8", ""]);
        assert_eq!(content_type(&h).as_deref(), Some("text/html; charset=utf-8"));
    }

    #[test]
    fn last_hop_wins() {
        let h = lines(&[
            "HTTP/1.1 301 Moved Permanently",
            "Location: /new",
            "Content-Type: text/plain",
            "",
            "HTTP/1.1 200 OK",
            "content-type: image/png",
        ]);
        assert_eq!(content_type(&h).as_deref(), Some("image/png"));
    }

    #[test]
    fn redirect_type_not_carried_over() {
        let h = lines(&[
            "HTTP/1.1 302 Found",
            "Content-Type: text/html",
            "",
            "HTTP/2 200",
            "Content-Length: 10",
        ]);
        assert_eq!(content_type(&h), None);
    }
}
