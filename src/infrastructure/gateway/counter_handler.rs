//! Counter Handler
//!
//! 网关事件入口：CORS 预检短路，其余请求执行计数加一。
//! 任一步骤失败都在此处统一转换为 500 响应。

use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;

use super::event::{GatewayEvent, GatewayResponse};
use super::response;
use crate::application::{
    ApplicationError, CounterStorePort, IncrementVisitorCount, IncrementVisitorCountHandler,
};
use crate::domain::counter::CounterId;
use crate::domain::format_iso8601;

/// 处理边界上的错误
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error(transparent)]
    Application(#[from] ApplicationError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

/// 计数器网关处理器
///
/// 存储在启动时注入，所有调用复用同一个实例。
/// 计数记录 key 固定为 `visitor_count`。
pub struct CounterHandler {
    counter_id: CounterId,
    increment_handler: IncrementVisitorCountHandler,
}

impl CounterHandler {
    pub fn new(store: Arc<dyn CounterStorePort>) -> Self {
        Self {
            counter_id: CounterId::default(),
            increment_handler: IncrementVisitorCountHandler::new(store),
        }
    }

    pub fn counter_id(&self) -> &CounterId {
        &self.counter_id
    }

    /// 处理一次调用，总是返回响应信封
    pub async fn handle(&self, event: &GatewayEvent) -> GatewayResponse {
        match self.try_handle(event).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, "Error: {}", e);
                response::error(e.to_string())
            }
        }
    }

    async fn try_handle(&self, event: &GatewayEvent) -> Result<GatewayResponse, GatewayError> {
        if event.is_preflight() {
            return Ok(response::preflight()?);
        }

        let result = self
            .increment_handler
            .handle(IncrementVisitorCount {
                counter_id: self.counter_id.clone(),
            })
            .await?;

        // 响应时间独立于已持久化的时间单独获取
        let timestamp = format_iso8601(&Utc::now());

        Ok(response::success(result.visitor_count, timestamp)?)
    }
}
