use axum::http::{
    header::{HOST, TRANSFER_ENCODING},
    request::Parts,
    HeaderMap, HeaderName,
};

pub const DELIMITER: &[u8] = b"---";

/// `x-aio-key` -> `X-Aio-Key`.
pub fn canonical_header_name(name: &str) -> String {
    let mut upper = true;
    name.chars()
        .map(|c| {
            let out = if upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            };
            upper = c == '-';
            out
        })
        .collect()
}

fn is_chunked(headers: &HeaderMap) -> bool {
    headers
        .get_all(TRANSFER_ENCODING)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .last()
        .is_some_and(|coding| coding.trim().eq_ignore_ascii_case("chunked"))
}

/// Renders a request as wire-style bytes: start line, `Host`, the remaining
/// headers ordered by name, a blank line, then the body exactly as received.
///
/// The server hands over a de-chunked body, so a chunked request gets its
/// body re-encoded as a single chunk to match its `Transfer-Encoding` header.
pub fn render_request(parts: &Parts, body: &[u8]) -> Vec<u8> {
    let target = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let mut dump = format!("{} {} {:?}\r\n", parts.method, target, parts.version).into_bytes();

    match parts.headers.get(HOST) {
        Some(host) => push_header(&mut dump, "Host", host.as_bytes()),
        None => {
            if let Some(authority) = parts.uri.authority() {
                push_header(&mut dump, "Host", authority.as_str().as_bytes());
            }
        }
    }

    let mut names: Vec<(String, &HeaderName)> = parts
        .headers
        .keys()
        .filter(|name| **name != HOST)
        .map(|name| (canonical_header_name(name.as_str()), name))
        .collect();
    names.sort_by(|a, b| a.0.cmp(&b.0));

    for (canonical, name) in names {
        for value in parts.headers.get_all(name) {
            push_header(&mut dump, &canonical, value.as_bytes());
        }
    }

    dump.extend_from_slice(b"\r\n");
    if is_chunked(&parts.headers) {
        if !body.is_empty() {
            dump.extend_from_slice(format!("{:x}\r\n", body.len()).as_bytes());
            dump.extend_from_slice(body);
            dump.extend_from_slice(b"\r\n");
        }
        dump.extend_from_slice(b"0\r\n\r\n");
    } else {
        dump.extend_from_slice(body);
    }
    dump
}

fn push_header(dump: &mut Vec<u8>, name: &str, value: &[u8]) {
    dump.extend_from_slice(name.as_bytes());
    dump.extend_from_slice(b": ");
    dump.extend_from_slice(value);
    dump.extend_from_slice(b"\r\n");
}

/// Wraps a dump in `---` delimiter lines.
pub fn frame(dump: &[u8]) -> Vec<u8> {
    let mut framed = Vec::with_capacity(dump.len() + 2 * DELIMITER.len() + 3);
    framed.extend_from_slice(DELIMITER);
    framed.push(b'\n');
    framed.extend_from_slice(dump);
    if !dump.ends_with(b"\n") {
        framed.push(b'\n');
    }
    framed.extend_from_slice(DELIMITER);
    framed.push(b'\n');
    framed
}
