//! Application State

use std::sync::Arc;

use crate::application::CounterStorePort;
use crate::infrastructure::gateway::CounterHandler;

/// 应用状态
///
/// 存储连接在启动时创建一次，随 CounterHandler 在所有请求间复用
pub struct AppState {
    pub counter_handler: CounterHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(store: Arc<dyn CounterStorePort>) -> Self {
        Self {
            counter_handler: CounterHandler::new(store),
        }
    }
}
