use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::radar_pipeline::common::error::{CoverageError, Result};
use crate::radar_pipeline::source::reader::RadarImageSource;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Single blocking GET against a fixed URL. No retries.
pub struct HttpRadarSource {
    client: Client,
    url: String,
}

impl HttpRadarSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| CoverageError::Network(e.to_string()))?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl RadarImageSource for HttpRadarSource {
    fn fetch(&self) -> Result<Vec<u8>> {
        debug!(url = %self.url, "Requesting radar image");

        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| CoverageError::Network(format!("{}: {}", self.url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoverageError::Network(format!("{}: HTTP {}", self.url, status)));
        }

        let body = response
            .bytes()
            .map_err(|e| CoverageError::Network(format!("{}: {}", self.url, e)))?;

        debug!(bytes = body.len(), "Radar image received");
        Ok(body.to_vec())
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    use super::*;
    use crate::radar_pipeline::source::decode::decode_radar_image;

    /// Serves `response` to exactly one connection on a loopback port.
    fn serve_once(response: Vec<u8>) -> (String, JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/radar.jpg", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            stream.write_all(&response).unwrap();
        });
        (url, handle)
    }

    fn response(status: &str, body: &[u8]) -> Vec<u8> {
        let mut out = format!(
            "HTTP/1.1 {status}\r\nContent-Type: image/jpeg\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        )
        .into_bytes();
        out.extend_from_slice(body);
        out
    }

    fn source(url: &str) -> HttpRadarSource {
        HttpRadarSource::new(url, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_fetch_returns_body() {
        let (url, server) = serve_once(response("200 OK", b"radar bytes"));
        let source = source(&url);

        assert_eq!(source.fetch().unwrap(), b"radar bytes");
        assert_eq!(source.describe(), url);
        server.join().unwrap();
    }

    #[test]
    fn test_error_status_is_network_error() {
        let (url, server) = serve_once(response("503 Service Unavailable", b"busy"));

        match source(&url).fetch().unwrap_err() {
            CoverageError::Network(msg) => assert!(msg.contains("503"), "{msg}"),
            other => panic!("unexpected error: {other:?}"),
        }
        server.join().unwrap();
    }

    #[test]
    fn test_empty_body_fails_to_decode() {
        let (url, server) = serve_once(response("200 OK", b""));

        let body = source(&url).fetch().unwrap();
        assert!(body.is_empty());
        assert!(matches!(
            decode_radar_image(&body).unwrap_err(),
            CoverageError::Decode(_)
        ));
        server.join().unwrap();
    }

    #[test]
    fn test_connection_refused_is_network_error() {
        let url = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            format!("http://{}/radar.jpg", listener.local_addr().unwrap())
        };

        assert!(matches!(
            source(&url).fetch().unwrap_err(),
            CoverageError::Network(_)
        ));
    }
}
