//! Downstream AI service probe.

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tokio::time;

use crate::config::AiServiceConfig;
use crate::health::state::DownstreamStatus;
use crate::http::client::HttpClient;

/// Result of a single probe, with the failure cause kept apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Downstream answered 200.
    Healthy,
    /// Downstream answered, but not with 200.
    UnexpectedStatus(StatusCode),
    /// Connect or protocol failure.
    ConnectionError(String),
    /// No answer within the probe timeout.
    Timeout,
    /// The configured host/port do not form a valid URI.
    InvalidTarget(String),
}

impl ProbeOutcome {
    /// Collapse the outcome into the status reported to callers.
    pub fn status(&self) -> DownstreamStatus {
        match self {
            ProbeOutcome::Healthy => DownstreamStatus::Healthy,
            _ => DownstreamStatus::Unavailable,
        }
    }
}

/// Probes `http://{host}:{port}/ai/health` with a fixed timeout.
#[derive(Clone)]
pub struct AiServiceProbe {
    client: HttpClient,
    url: String,
    timeout: Duration,
}

impl AiServiceProbe {
    pub fn new(client: HttpClient, config: &AiServiceConfig) -> Self {
        Self {
            client,
            url: config.health_url(),
            timeout: config.health_timeout(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issue one GET and classify the result.
    pub async fn check(&self) -> ProbeOutcome {
        let request = match Request::builder()
            .method("GET")
            .uri(self.url.as_str())
            .header("user-agent", "knowledge-gateway-health-check")
            .body(Body::empty())
        {
            Ok(req) => req,
            Err(e) => {
                tracing::warn!(url = %self.url, error = %e, "Health probe target is not a valid URI");
                return ProbeOutcome::InvalidTarget(e.to_string());
            }
        };

        match time::timeout(self.timeout, self.client.request(request)).await {
            Ok(Ok(response)) if response.status() == StatusCode::OK => ProbeOutcome::Healthy,
            Ok(Ok(response)) => {
                tracing::warn!(url = %self.url, status = %response.status(), "Health probe failed: non-200 status");
                ProbeOutcome::UnexpectedStatus(response.status())
            }
            Ok(Err(e)) => {
                tracing::warn!(url = %self.url, error = %e, "Health probe failed: connection error");
                ProbeOutcome::ConnectionError(e.to_string())
            }
            Err(_) => {
                tracing::warn!(url = %self.url, timeout = ?self.timeout, "Health probe failed: timeout");
                ProbeOutcome::Timeout
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::client::build_client;
    use tokio::io::AsyncWriteExt;
    use tokio::net::TcpListener;

    fn config_for(port: u16, timeout_secs: u64) -> AiServiceConfig {
        AiServiceConfig {
            host: "127.0.0.1".to_string(),
            port,
            health_timeout_secs: timeout_secs,
            ..AiServiceConfig::default()
        }
    }

    async fn respond_once(status_line: &'static str) -> u16 {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let response = format!("HTTP/1.1 {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n", status_line);
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });
        port
    }

    #[test]
    fn test_only_healthy_maps_to_healthy() {
        assert_eq!(ProbeOutcome::Healthy.status(), DownstreamStatus::Healthy);
        assert_eq!(ProbeOutcome::Timeout.status(), DownstreamStatus::Unavailable);
        assert_eq!(
            ProbeOutcome::UnexpectedStatus(StatusCode::NO_CONTENT).status(),
            DownstreamStatus::Unavailable
        );
        assert_eq!(
            ProbeOutcome::ConnectionError("refused".into()).status(),
            DownstreamStatus::Unavailable
        );
    }

    #[test]
    fn test_probe_url() {
        let probe = AiServiceProbe::new(build_client(), &config_for(8001, 5));
        assert_eq!(probe.url(), "http://127.0.0.1:8001/ai/health");
    }

    #[tokio::test]
    async fn test_probe_healthy() {
        let port = respond_once("200 OK").await;
        let probe = AiServiceProbe::new(build_client(), &config_for(port, 5));
        assert_eq!(probe.check().await, ProbeOutcome::Healthy);
    }

    #[tokio::test]
    async fn test_probe_non_200() {
        let port = respond_once("503 Service Unavailable").await;
        let probe = AiServiceProbe::new(build_client(), &config_for(port, 5));
        assert_eq!(
            probe.check().await,
            ProbeOutcome::UnexpectedStatus(StatusCode::SERVICE_UNAVAILABLE)
        );
    }

    #[tokio::test]
    async fn test_probe_connection_refused() {
        // Bind then drop to get a port with nothing listening.
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            listener.local_addr().unwrap().port()
        };
        let probe = AiServiceProbe::new(build_client(), &config_for(port, 5));
        assert!(matches!(probe.check().await, ProbeOutcome::ConnectionError(_)));
    }

    #[tokio::test]
    async fn test_probe_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        // Accept and hold the socket open without answering.
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let probe = AiServiceProbe::new(build_client(), &config_for(port, 1));
        let started = std::time::Instant::now();
        assert_eq!(probe.check().await, ProbeOutcome::Timeout);
        assert!(started.elapsed() < Duration::from_secs(3));
    }
}
