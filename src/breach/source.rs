//! Range lookup transports.

use async_trait::async_trait;

use super::config::BreachConfig;
use crate::error::BreachError;

const USER_AGENT: &str = concat!("pwd-forge/", env!("CARGO_PKG_VERSION"));

/// Fetches every breach record sharing a hash prefix.
///
/// Implementations receive only the 5-character prefix and return the
/// raw `SUFFIX:COUNT` body.
#[async_trait]
pub trait RangeSource: Send + Sync {
    async fn fetch_range(&self, prefix: &str) -> Result<String, BreachError>;
}

/// HTTP transport for the Pwned Passwords range API.
#[derive(Debug, Clone)]
pub struct HttpRangeSource {
    client: reqwest::Client,
    config: BreachConfig,
}

impl HttpRangeSource {
    pub fn new(config: BreachConfig) -> Result<Self, BreachError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl RangeSource for HttpRangeSource {
    async fn fetch_range(&self, prefix: &str) -> Result<String, BreachError> {
        let url = self.config.range_url(prefix);
        #[cfg(feature = "tracing")]
        tracing::info!(prefix = %prefix, "breach range request");

        let mut request = self.client.get(url);
        if self.config.padding {
            request = request.header("Add-Padding", "true");
        }
        let res = request.send().await?;

        #[cfg(feature = "tracing")]
        tracing::debug!(status = %res.status(), "breach range response status");

        let status = res.status();
        if !status.is_success() {
            return Err(BreachError::Status(status.as_u16()));
        }
        Ok(res.text().await?)
    }
}

#[cfg(test)]
pub(crate) mod stub_server {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serves one canned HTTP response on a random local port.
    ///
    /// The handle resolves to the raw request head.
    pub async fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut head = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&head).into_owned()
        });

        (format!("http://{}/range", addr), handle)
    }
}
