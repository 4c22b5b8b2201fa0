//! Gateway Responses
//!
//! CORS 响应头与三种响应体（预检、成功、错误）

use serde::Serialize;
use std::collections::BTreeMap;

use super::event::GatewayResponse;
use crate::domain::counter::CountValue;

pub const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
pub const ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
pub const ALLOW_METHODS: &str = "Access-Control-Allow-Methods";
pub const CONTENT_TYPE: &str = "Content-Type";

const ANY_ORIGIN: &str = "*";
const ALLOWED_HEADERS: &str = "Content-Type";
const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";
const APPLICATION_JSON: &str = "application/json";

/// 预检响应体
#[derive(Debug, Serialize)]
pub struct PreflightBody {
    pub message: &'static str,
}

/// 成功响应体
#[derive(Debug, Serialize)]
pub struct SuccessBody {
    pub visitor_count: CountValue,
    pub timestamp: String,
    pub status: &'static str,
}

fn cors_headers() -> BTreeMap<String, String> {
    BTreeMap::from([
        (ALLOW_ORIGIN.to_string(), ANY_ORIGIN.to_string()),
        (ALLOW_HEADERS.to_string(), ALLOWED_HEADERS.to_string()),
        (ALLOW_METHODS.to_string(), ALLOWED_METHODS.to_string()),
    ])
}

/// 预检响应：200，仅 CORS 头
pub fn preflight() -> Result<GatewayResponse, serde_json::Error> {
    Ok(GatewayResponse {
        status_code: 200,
        headers: cors_headers(),
        body: serde_json::to_string(&PreflightBody {
            message: "CORS preflight",
        })?,
    })
}

/// 成功响应：200，CORS 头 + JSON
pub fn success(visitor_count: CountValue, timestamp: String) -> Result<GatewayResponse, serde_json::Error> {
    let body = serde_json::to_string(&SuccessBody {
        visitor_count,
        timestamp,
        status: "success",
    })?;

    let mut headers = cors_headers();
    headers.insert(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string());

    Ok(GatewayResponse {
        status_code: 200,
        headers,
        body,
    })
}

/// 错误响应：500，只带 Allow-Origin 与 Content-Type
pub fn error(message: impl Into<String>) -> GatewayResponse {
    let message: String = message.into();
    let body = serde_json::json!({
        "error": "Internal server error",
        "message": message,
        "status": "error",
    });

    GatewayResponse {
        status_code: 500,
        headers: BTreeMap::from([
            (ALLOW_ORIGIN.to_string(), ANY_ORIGIN.to_string()),
            (CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string()),
        ]),
        body: body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_preflight_response() {
        let response = preflight().unwrap();
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, r#"{"message":"CORS preflight"}"#);
        assert_eq!(response.headers[ALLOW_METHODS], "GET, POST, OPTIONS");
        assert!(!response.headers.contains_key(CONTENT_TYPE));
    }

    #[test]
    fn test_error_response() {
        let response = error("boom");
        assert_eq!(response.status_code, 500);
        assert_eq!(response.headers[ALLOW_ORIGIN], "*");
        assert!(!response.headers.contains_key(ALLOW_METHODS));

        let body: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["error"], "Internal server error");
        assert_eq!(body["message"], "boom");
        assert_eq!(body["status"], "error");
    }
}
