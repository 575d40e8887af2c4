//! Minimal HTTP/1.1 transport for the device service.
//!
//! The device is a single plain-HTTP peer on the local network, so this
//! stays deliberately small: one request per connection, `Connection:
//! close`, Content-Length bodies, no TLS and no redirects.

use std::io::{self, Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use serde_json::Value;

use bellboard_types::error::{BoardError, Result};

use crate::service::DeviceService;

/// Maximum response body size (1 MB -- the device sends small JSON).
const MAX_BODY_SIZE: usize = 1024 * 1024;

/// TCP connect timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// TCP read timeout.
const READ_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP client for one device service.
pub struct HttpDeviceClient {
    host: String,
    port: u16,
}

impl HttpDeviceClient {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Perform one request and parse the response.
    fn request(&self, method: &str, path: &str, body: Option<&Value>) -> Result<HttpResponse> {
        log::debug!("{method} {path} -> {}:{}", self.host, self.port);
        let mut stream = tcp_connect(&self.host, self.port).inspect_err(|err| {
            log::warn!("connect to {}:{} failed: {err}", self.host, self.port);
        })?;
        send_request(&mut stream, method, &self.host, self.port, path, body)?;
        let raw = read_response(&mut stream).inspect_err(|err| {
            log::warn!("response from {}:{} not read: {err}", self.host, self.port);
        })?;
        parse_response(&raw)
    }
}

impl DeviceService for HttpDeviceClient {
    fn get(&mut self, path: &str) -> Result<Value> {
        let resp = self.request("GET", path, None)?;
        if !is_success(resp.status_code) {
            return Err(BoardError::HttpStatus(resp.status_code));
        }
        Ok(serde_json::from_slice(&resp.body)?)
    }

    fn post(&mut self, path: &str, body: Option<&Value>) -> Result<()> {
        let resp = self.request("POST", path, body)?;
        if !is_success(resp.status_code) {
            return Err(BoardError::HttpStatus(resp.status_code));
        }
        Ok(())
    }
}

/// A raw parsed HTTP response.
#[derive(Debug)]
pub struct HttpResponse {
    pub status_code: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Open a TCP connection with a connect timeout.
fn tcp_connect(host: &str, port: u16) -> Result<TcpStream> {
    let addr = format!("{host}:{port}")
        .to_socket_addrs()
        .map_err(|e| BoardError::Service(format!("DNS resolution failed: {e}")))?
        .next()
        .ok_or_else(|| BoardError::Service(format!("no addresses for {host}:{port}")))?;

    let stream = TcpStream::connect_timeout(&addr, CONNECT_TIMEOUT)
        .map_err(|e| BoardError::Service(format!("TCP connect failed: {e}")))?;

    stream
        .set_read_timeout(Some(READ_TIMEOUT))
        .map_err(|e| BoardError::Service(format!("set read timeout: {e}")))?;

    Ok(stream)
}

/// Send an HTTP/1.1 request, with a JSON body when given.
fn send_request(
    stream: &mut impl Write,
    method: &str,
    host: &str,
    port: u16,
    path: &str,
    body: Option<&Value>,
) -> Result<()> {
    let encoded = body.map(Value::to_string);

    let mut request = format!(
        "{method} {path} HTTP/1.1\r\n\
         Host: {host}:{port}\r\n\
         User-Agent: bellboard/0.1\r\n\
         Accept: application/json\r\n\
         Connection: close\r\n"
    );
    match &encoded {
        Some(json) => {
            request.push_str("Content-Type: application/json\r\n");
            request.push_str(&format!("Content-Length: {}\r\n\r\n", json.len()));
            request.push_str(json);
        },
        None => request.push_str("\r\n"),
    }

    stream
        .write_all(request.as_bytes())
        .map_err(|e| BoardError::Service(format!("send request: {e}")))?;

    Ok(())
}

/// Read the entire response until EOF or until the read timeout fires.
fn read_response(stream: &mut impl Read) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(4096);
    let mut chunk = [0u8; 4096];
    loop {
        match stream.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => {
                if buf.len() + n > MAX_BODY_SIZE + 4096 {
                    return Err(BoardError::Service("response too large".to_string()));
                }
                buf.extend_from_slice(&chunk[..n]);
            },
            Err(e)
                if e.kind() == io::ErrorKind::WouldBlock || e.kind() == io::ErrorKind::TimedOut =>
            {
                break;
            },
            Err(e) => {
                return Err(BoardError::Service(format!("read response: {e}")));
            },
        }
    }
    Ok(buf)
}

/// Parse raw bytes into status code, headers, and body.
pub fn parse_response(data: &[u8]) -> Result<HttpResponse> {
    let header_end = find_subsequence(data, b"\r\n\r\n").ok_or_else(|| {
        BoardError::Service("malformed HTTP response: no header terminator".to_string())
    })?;

    let header_str = std::str::from_utf8(&data[..header_end])
        .map_err(|_| BoardError::Service("non-UTF-8 headers".to_string()))?;
    let body_start = header_end + 4;

    let mut lines = header_str.split("\r\n");

    let status_line = lines
        .next()
        .ok_or_else(|| BoardError::Service("empty response".to_string()))?;
    let status_code = parse_status_line(status_line)?;

    let mut headers = Vec::new();
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            headers.push((name.trim().to_lowercase(), value.trim().to_string()));
        }
    }

    // Trim the body to Content-Length when present; Connection: close means
    // whatever arrived before EOF is otherwise the whole body.
    let raw_body = &data[body_start..];
    let body = if let Some(cl) = find_header(&headers, "content-length") {
        let len: usize = cl
            .parse()
            .map_err(|_| BoardError::Service("bad Content-Length".to_string()))?;
        if len > MAX_BODY_SIZE {
            return Err(BoardError::Service("response body too large".to_string()));
        }
        raw_body[..raw_body.len().min(len)].to_vec()
    } else {
        raw_body.to_vec()
    };

    Ok(HttpResponse {
        status_code,
        headers,
        body,
    })
}

/// Parse the HTTP status code from the status line.
fn parse_status_line(line: &str) -> Result<u16> {
    // Expected: "HTTP/1.x NNN ..."
    let parts: Vec<&str> = line.splitn(3, ' ').collect();
    if parts.len() < 2 {
        return Err(BoardError::Service(format!("bad status line: {line}")));
    }
    parts[1]
        .parse()
        .map_err(|_| BoardError::Service(format!("bad status code in: {line}")))
}

/// Case-insensitive header lookup.
fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    let name_lower = name.to_lowercase();
    headers
        .iter()
        .find(|(k, _)| k == &name_lower)
        .map(|(_, v)| v.as_str())
}

/// Find the position of a byte subsequence in a slice.
fn find_subsequence(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}
