//! Counter Handlers
//!
//! HTTP 请求与网关调用信封之间的转换

use axum::{
    body::{Body, Bytes},
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri};
use std::collections::HashMap;
use std::sync::Arc;

use crate::infrastructure::gateway::{GatewayEvent, GatewayResponse};
use crate::infrastructure::http::state::AppState;

/// 网关代理 - 任意方法
pub async fn visitor_count(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> GatewayResponse {
    let event = GatewayEvent {
        http_method: Some(method.as_str().to_string()),
        path: Some(uri.path().to_string()),
        headers: Some(header_map(&headers)),
        query_string_parameters: (!query.is_empty()).then_some(query),
        body: (!body.is_empty()).then(|| String::from_utf8_lossy(&body).into_owned()),
        is_base64_encoded: false,
    };

    state.counter_handler.handle(&event).await
}

/// 直接调用 - 请求体即调用事件
pub async fn invoke(
    State(state): State<Arc<AppState>>,
    Json(event): Json<GatewayEvent>,
) -> Json<GatewayResponse> {
    Json(state.counter_handler.handle(&event).await)
}

fn header_map(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_string(), v.to_string()))
        })
        .collect()
}

impl IntoResponse for GatewayResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = status;

        let headers = response.headers_mut();
        for (name, value) in self.headers {
            match (HeaderName::try_from(name.as_str()), HeaderValue::try_from(value.as_str())) {
                (Ok(name), Ok(value)) => {
                    headers.insert(name, value);
                }
                _ => tracing::warn!(header = %name, "Dropping invalid response header"),
            }
        }

        response
    }
}
