//! In-process HTTP responder for transport tests
//!
//! Serves one canned response per accepted connection, in order, and hands
//! back the raw requests it received.

#![allow(dead_code)]

use groupctl::config::Config;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

pub const TEST_API_KEY: &str = "test-key";

pub struct CannedResponse {
    pub status: u16,
    pub body: String,
}

impl CannedResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// A raw request as seen on the wire
#[derive(Debug)]
pub struct CapturedRequest {
    pub request_line: String,
    pub headers: String,
    pub body: String,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<String> {
        let prefix = format!("{}:", name.to_lowercase());
        self.headers.lines().find_map(|line| {
            let lower = line.to_lowercase();
            lower
                .starts_with(&prefix)
                .then(|| line[prefix.len()..].trim().to_string())
        })
    }
}

pub struct CannedServer {
    pub base_url: String,
    handle: JoinHandle<Vec<CapturedRequest>>,
}

impl CannedServer {
    pub async fn start(responses: Vec<CannedResponse>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let mut captured = Vec::new();
            for response in responses {
                let (mut stream, _) = listener.accept().await.unwrap();
                captured.push(read_request(&mut stream).await);
                write_response(&mut stream, &response).await;
            }
            captured
        });

        Self { base_url, handle }
    }

    pub fn config(&self) -> Config {
        Config::new(&self.base_url, TEST_API_KEY.to_string(), 5000, false).unwrap()
    }

    /// Waits for every canned response to be served
    pub async fn requests(self) -> Vec<CapturedRequest> {
        self.handle.await.unwrap()
    }
}

async fn read_request(stream: &mut TcpStream) -> CapturedRequest {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut chunk).await.unwrap();
        assert!(n > 0, "connection closed before headers were complete");
        buf.extend_from_slice(&chunk[..n]);
        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break end;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).into_owned();
    let content_length = head
        .lines()
        .find_map(|line| {
            let lower = line.to_lowercase();
            lower
                .strip_prefix("content-length:")
                .and_then(|value| value.trim().parse::<usize>().ok())
        })
        .unwrap_or(0);

    let body_start = header_end + 4;
    while buf.len() < body_start + content_length {
        let n = stream.read(&mut chunk).await.unwrap();
        assert!(n > 0, "connection closed before body was complete");
        buf.extend_from_slice(&chunk[..n]);
    }

    let (request_line, headers) = head.split_once("\r\n").unwrap_or((head.as_str(), ""));
    CapturedRequest {
        request_line: request_line.to_string(),
        headers: headers.to_string(),
        body: String::from_utf8_lossy(&buf[body_start..body_start + content_length]).into_owned(),
    }
}

async fn write_response(stream: &mut TcpStream, response: &CannedResponse) {
    let raw = format!(
        "HTTP/1.1 {} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.status,
        response.body.len(),
        response.body
    );
    stream.write_all(raw.as_bytes()).await.unwrap();
    stream.shutdown().await.unwrap();
}

pub fn groups_json() -> String {
    serde_json::json!([
        {
            "id": 1,
            "name": "Finance",
            "modified_date": "2024-03-01T09:30:00Z",
            "targets": [
                {"email": "ann@example.com", "first_name": "Ann", "last_name": "Lee", "position": "CFO"},
                {"email": "ann@example.com", "first_name": "Ann", "last_name": "Lee", "position": "CFO"},
                {"email": "bo@example.com", "first_name": "Bo", "last_name": "Park", "position": ""}
            ]
        },
        {
            "id": 2,
            "name": "Engineering",
            "modified_date": "2024-03-02T11:00:00Z",
            "targets": [
                {"email": "ann@example.com", "first_name": "Ann", "last_name": "Lee", "position": "CFO"}
            ]
        }
    ])
    .to_string()
}
