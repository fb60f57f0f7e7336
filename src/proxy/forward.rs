//! Request forwarding to the AI service.

use std::net::SocketAddr;

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{header, Request, StatusCode, Uri},
    response::Response,
};
use hyper::body::Incoming;

use crate::http::client::HttpClient;
use crate::http::response::json_error;
use crate::proxy::headers::{append_forwarded_for, strip_hop_by_hop};

/// Relay `request` to `target` and stream the downstream answer back.
///
/// The query string of the inbound request is carried over. A downstream
/// connection failure becomes a 502.
pub async fn forward(client: &HttpClient, target: &str, request: Request<Body>) -> Response {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();
    let client_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip());

    let (parts, body) = request.into_parts();

    let target = match parts.uri.query() {
        Some(query) => format!("{}?{}", target, query),
        None => target.to_string(),
    };
    let uri: Uri = match target.parse() {
        Ok(uri) => uri,
        Err(e) => {
            tracing::error!(request_id = %request_id, target = %target, error = %e, "Invalid AI service URI");
            return json_error(StatusCode::BAD_GATEWAY, "AI service address is invalid");
        }
    };

    let mut builder = Request::builder().method(parts.method.clone()).uri(uri);
    if let Some(headers) = builder.headers_mut() {
        for (name, value) in parts.headers.iter() {
            if name == header::HOST {
                continue;
            }
            headers.append(name.clone(), value.clone());
        }
        strip_hop_by_hop(headers);
        if let Some(ip) = client_addr {
            append_forwarded_for(headers, ip);
        }
    }

    let outbound = match builder.body(body) {
        Ok(req) => req,
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "Failed to build AI service request");
            return json_error(StatusCode::BAD_GATEWAY, "AI service request could not be built");
        }
    };

    tracing::debug!(
        request_id = %request_id,
        method = %parts.method,
        target = %target,
        "Forwarding to AI service"
    );

    match client.request(outbound).await {
        Ok(response) => {
            let (mut parts, body): (_, Incoming) = response.into_parts();
            strip_hop_by_hop(&mut parts.headers);
            tracing::debug!(request_id = %request_id, status = %parts.status, "AI service responded");
            Response::from_parts(parts, Body::new(body))
        }
        Err(e) => {
            tracing::error!(request_id = %request_id, target = %target, error = %e, "AI service request failed");
            json_error(StatusCode::BAD_GATEWAY, "AI service request failed")
        }
    }
}
