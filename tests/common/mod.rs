#![allow(dead_code)]

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use koreax::core::config::ExchangeConfig;
use koreax::core::kernel::AuthPayload;
use koreax::ExchangeType;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

pub const ACCESS_KEY: &str = "test-access-key";
pub const SECRET_KEY: &str = "test-secret-key";

/// Config with test credentials pointed at a local server
pub fn test_config(exchange_type: ExchangeType, server_url: &str) -> ExchangeConfig {
    ExchangeConfig::new(
        exchange_type,
        ACCESS_KEY.to_string(),
        SECRET_KEY.to_string(),
    )
    .server_url(server_url)
}

pub fn decode_token(token: &str) -> AuthPayload {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.required_spec_claims.clear();
    validation.validate_exp = false;
    decode::<AuthPayload>(
        token,
        &DecodingKey::from_secret(SECRET_KEY.as_bytes()),
        &validation,
    )
    .expect("token should verify with the test secret")
    .claims
}

/// Claims carried by the bearer token in an `Authorization` header value
pub fn claims_from_header(value: &str) -> AuthPayload {
    let token = value
        .strip_prefix("Bearer ")
        .expect("authorization header should be a bearer token");
    decode_token(token)
}

/// One HTTP request as it arrived on the socket
#[derive(Debug)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub query: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

fn parse_request(raw: &str) -> CapturedRequest {
    let (head, body) = raw.split_once("\r\n\r\n").unwrap_or((raw, ""));
    let mut lines = head.lines();
    let request_line = lines.next().unwrap_or_default();
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let target = parts.next().unwrap_or_default();
    let (path, query) = target.split_once('?').unwrap_or((target, ""));

    let headers = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect();

    CapturedRequest {
        method,
        path: path.to_string(),
        query: query.to_string(),
        headers,
        body: body.to_string(),
    }
}

fn content_length(head: &str) -> usize {
    head.lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(key, _)| key.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(0)
}

/// Serve exactly one request with `response_body` and hand back the raw
/// request bytes, parsed.
pub async fn capture_one(response_body: &'static str) -> (String, oneshot::Receiver<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 4096];

        loop {
            let read = stream.read(&mut chunk).await.unwrap();
            if read == 0 {
                break;
            }
            buffer.extend_from_slice(&chunk[..read]);

            let text = String::from_utf8_lossy(&buffer);
            if let Some(end) = text.find("\r\n\r\n") {
                if buffer.len() >= end + 4 + content_length(&text[..end]) {
                    break;
                }
            }
        }

        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            response_body.len(),
            response_body
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.flush().await.unwrap();

        let _ = tx.send(parse_request(&String::from_utf8_lossy(&buffer)));
    });

    (url, rx)
}
