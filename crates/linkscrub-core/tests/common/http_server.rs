//! Minimal HTTP/1.1 server for probe tests.
//!
//! Routes:
//! - `/ok` – 200, `text/html`
//! - `/image.png` – 200, `image/png`
//! - `/old` – 302 to `/ok`
//! - `/loop` – 302 to itself
//! - anything else – 404

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread;
use std::time::Duration;

/// Starts the server on a background thread and returns its base URL
/// without a trailing slash (e.g. "http://127.0.0.1:12345").
pub fn start() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            thread::spawn(move || handle(stream));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

/// A base URL on which nothing is listening.
pub fn closed_port() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: TcpStream) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let Ok(request) = std::str::from_utf8(&buf[..n]) else {
        return;
    };
    let (method, path) = request_line(request);

    let (status, extra) = match path {
        "/ok" => ("200 OK", "Content-Type: text/html; charset=utf-8\r\n".to_string()),
        "/image.png" => ("200 OK", "Content-Type: image/png\r\n".to_string()),
        "/old" => ("302 Found", "Location: /ok\r\nContent-Type: text/plain\r\n".to_string()),
        "/loop" => ("302 Found", "Location: /loop\r\n".to_string()),
        _ => ("404 Not Found", "Content-Type: text/plain\r\n".to_string()),
    };
    let body: &[u8] = if method.eq_ignore_ascii_case("HEAD") {
        b""
    } else {
        b"linkscrub test body"
    };
    let response = format!(
        "HTTP/1.1 {}\r\n{}Content-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        extra,
        if method.eq_ignore_ascii_case("HEAD") { 0 } else { body.len() }
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body);
}

fn request_line(request: &str) -> (&str, &str) {
    let mut parts = request.lines().next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("");
    let target = parts.next().unwrap_or("/");
    let path = target.split('?').next().unwrap_or("/");
    (method, path)
}
