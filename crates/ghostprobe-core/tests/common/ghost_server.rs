//! Minimal HTTP/1.1 server for probe integration tests.
//!
//! Each request is answered according to a routing closure: a plain status,
//! a redirect, or a stall that holds the connection open until the client
//! goes away. Every request line is reported on `requests`; a stalled
//! connection closed by the client is reported on `closed`.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Reply {
    /// Respond with this status and an empty body.
    Status(u16),
    /// 301 to the given absolute URL.
    Redirect(String),
    /// Never respond; wait for the client to close the connection.
    Stall,
}

/// (method, path) of a received request.
pub type RequestLine = (String, String);

pub struct GhostServer {
    /// Base URL without trailing slash, e.g. "http://127.0.0.1:12345".
    pub base: String,
    pub requests: Receiver<RequestLine>,
    pub closed: Receiver<()>,
}

impl GhostServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }
}

/// Starts a server in a background thread. Runs until the process exits.
pub fn start<F>(route: F) -> GhostServer
where
    F: Fn(&str, &str) -> Reply + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let route = Arc::new(route);
    let (req_tx, req_rx) = mpsc::channel();
    let (closed_tx, closed_rx) = mpsc::channel();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let route = Arc::clone(&route);
            let req_tx = req_tx.clone();
            let closed_tx = closed_tx.clone();
            thread::spawn(move || handle(stream, route.as_ref(), &req_tx, &closed_tx));
        }
    });
    GhostServer {
        base: format!("http://127.0.0.1:{}", port),
        requests: req_rx,
        closed: closed_rx,
    }
}

/// A port on 127.0.0.1 with nothing listening.
pub fn unused_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    listener.local_addr().unwrap().port()
}

fn handle<F>(mut stream: TcpStream, route: &F, requests: &Sender<RequestLine>, closed: &Sender<()>)
where
    F: Fn(&str, &str) -> Reply,
{
    let _ = stream.set_read_timeout(Some(Duration::from_secs(10)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let (method, path) = parse_request_line(request);
    let _ = requests.send((method.to_string(), path.to_string()));

    match route(method, path) {
        Reply::Status(code) => write_response(&mut stream, code, None),
        Reply::Redirect(location) => write_response(&mut stream, 301, Some(&location)),
        Reply::Stall => loop {
            match stream.read(&mut buf) {
                Ok(0) => {
                    let _ = closed.send(());
                    return;
                }
                Ok(_) => continue,
                Err(e) if e.kind() == std::io::ErrorKind::ConnectionReset => {
                    let _ = closed.send(());
                    return;
                }
                Err(_) => return,
            }
        },
    }
}

fn write_response(stream: &mut TcpStream, code: u16, location: Option<&str>) {
    let location = location
        .map(|l| format!("Location: {}\r\n", l))
        .unwrap_or_default();
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: 0\r\nConnection: close\r\nX-Test-Server: ghost\r\n{}\r\n",
        code,
        reason(code),
        location
    );
    let _ = stream.write_all(response.as_bytes());
}

fn reason(code: u16) -> &'static str {
    match code {
        200 => "OK",
        204 => "No Content",
        301 => "Moved Permanently",
        304 => "Not Modified",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

fn parse_request_line(request: &str) -> (&str, &str) {
    let line = request.lines().next().unwrap_or("");
    let mut parts = line.split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("");
    (method, path)
}
