//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a fixed set of paths with 200, `/redirect/<path>` with a 302 to
//! `/<path>`, and everything else with 404. Counts every request so tests can
//! assert that skipped downloads never hit the network.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

pub struct FileServer {
    base: String,
    hits: Arc<AtomicUsize>,
    paths: Arc<Mutex<Vec<String>>>,
}

impl FileServer {
    /// Starts a server in a background thread serving `files` (path → body).
    /// Paths are given without the leading slash. Runs until the process exits.
    pub fn start(files: &[(&str, &[u8])]) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        let files: Arc<HashMap<String, Vec<u8>>> = Arc::new(
            files
                .iter()
                .map(|(p, b)| (format!("/{}", p), b.to_vec()))
                .collect(),
        );
        let hits = Arc::new(AtomicUsize::new(0));
        let paths = Arc::new(Mutex::new(Vec::new()));
        let (h, p) = (Arc::clone(&hits), Arc::clone(&paths));
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let files = Arc::clone(&files);
                let hits = Arc::clone(&h);
                let paths = Arc::clone(&p);
                thread::spawn(move || handle(stream, &files, &hits, &paths));
            }
        });
        FileServer {
            base: format!("http://127.0.0.1:{}", port),
            hits,
            paths,
        }
    }

    /// Absolute URL for `path` (no leading slash).
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Request paths in arrival order.
    pub fn requested(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

fn handle(
    mut stream: std::net::TcpStream,
    files: &HashMap<String, Vec<u8>>,
    hits: &AtomicUsize,
    paths: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let mut parts = request.lines().next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("");
    let target = parts.next().unwrap_or("/");
    let path = target.split('?').next().unwrap_or("/").to_string();
    hits.fetch_add(1, Ordering::SeqCst);
    paths.lock().unwrap().push(path.clone());

    if !method.eq_ignore_ascii_case("GET") {
        let _ = stream.write_all(
            b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        return;
    }
    if let Some(rest) = path.strip_prefix("/redirect/") {
        let response = format!(
            "HTTP/1.1 302 Found\r\nLocation: /{}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            rest
        );
        let _ = stream.write_all(response.as_bytes());
        return;
    }
    match files.get(&path) {
        Some(body) => {
            let head = format!(
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nContent-Type: application/java-archive\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = stream.write_all(head.as_bytes());
            let _ = stream.write_all(body);
        }
        None => {
            let body = b"not found";
            let head = format!(
                "HTTP/1.1 404 Not Found\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = stream.write_all(head.as_bytes());
            let _ = stream.write_all(body);
        }
    }
}
