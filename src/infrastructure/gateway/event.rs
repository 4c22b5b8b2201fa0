//! Gateway Invocation Envelope
//!
//! 网关调用事件与响应信封

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// 网关调用事件
///
/// 只解析用到的字段，其余字段忽略
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayEvent {
    #[serde(default)]
    pub http_method: Option<String>,

    #[serde(default)]
    pub path: Option<String>,

    #[serde(default)]
    pub headers: Option<HashMap<String, String>>,

    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,

    #[serde(default)]
    pub body: Option<String>,

    #[serde(default)]
    pub is_base64_encoded: bool,
}

impl GatewayEvent {
    pub fn with_method(method: impl Into<String>) -> Self {
        Self {
            http_method: Some(method.into()),
            ..Default::default()
        }
    }

    /// CORS 预检请求
    pub fn is_preflight(&self) -> bool {
        self.http_method.as_deref() == Some("OPTIONS")
    }
}

/// 网关响应信封
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    /// JSON 编码的响应体
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gateway_event() {
        let event: GatewayEvent = serde_json::from_str(
            r#"{
                "resource": "/count",
                "httpMethod": "GET",
                "path": "/count",
                "headers": {"Origin": "https://example.com"},
                "queryStringParameters": null,
                "requestContext": {"stage": "prod"},
                "body": null,
                "isBase64Encoded": false
            }"#,
        )
        .unwrap();

        assert_eq!(event.http_method.as_deref(), Some("GET"));
        assert_eq!(event.path.as_deref(), Some("/count"));
        assert!(event.query_string_parameters.is_none());
        assert!(!event.is_preflight());
    }

    #[test]
    fn test_missing_method_is_not_preflight() {
        let event: GatewayEvent = serde_json::from_str("{}").unwrap();
        assert!(event.http_method.is_none());
        assert!(!event.is_preflight());
        assert!(GatewayEvent::with_method("OPTIONS").is_preflight());
        assert!(!GatewayEvent::with_method("options").is_preflight());
    }

    #[test]
    fn test_response_envelope_keys() {
        let response = GatewayResponse {
            status_code: 200,
            headers: BTreeMap::from([("Content-Type".to_string(), "application/json".to_string())]),
            body: "{}".to_string(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["statusCode"], 200);
        assert_eq!(value["headers"]["Content-Type"], "application/json");
        assert_eq!(value["body"], "{}");
    }
}
