//! Counter Context - Value Objects

use serde::{Deserialize, Serialize};

use super::CounterError;

/// 默认计数器记录 key
pub const DEFAULT_COUNTER_ID: &str = "visitor_count";

/// 计数器记录标识
///
/// 单例记录的固定 key，不是集合
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CounterId(String);

impl CounterId {
    pub fn new(id: impl Into<String>) -> Result<Self, CounterError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CounterError::InvalidId);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CounterId {
    fn default() -> Self {
        Self(DEFAULT_COUNTER_ID.to_string())
    }
}

impl std::fmt::Display for CounterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 存储层的十进制数
///
/// 与存储中的数字表示一致：任意精度的十进制文本（如 `5`、`5.0`、`5.5`）
///
/// 不变量:
/// - 形如 `[+-]digits[.digits]`，至少包含一个数字，不接受指数记法
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecimalNumber(String);

impl DecimalNumber {
    pub fn parse(text: impl Into<String>) -> Result<Self, CounterError> {
        let text = text.into();
        let trimmed = text.trim();
        let unsigned = trimmed.strip_prefix(&['+', '-'][..]).unwrap_or(trimmed);
        let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if int_part.len() + frac_part.len() == 0 || !all_digits(int_part) || !all_digits(frac_part) {
            return Err(CounterError::InvalidDecimal(text));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// (是否为负, 整数部分, 小数部分)
    fn parts(&self) -> (bool, &str, &str) {
        let negative = self.0.starts_with('-');
        let unsigned = self.0.strip_prefix(&['+', '-'][..]).unwrap_or(self.0.as_str());
        let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        (negative, int_part, frac_part)
    }

    /// 小数部分全为 0
    pub fn is_integral(&self) -> bool {
        let (_, _, frac_part) = self.parts();
        frac_part.chars().all(|c| c == '0')
    }

    /// 向零截断为整数，精确计算，超出 i64 范围时报错
    pub fn truncate(&self) -> Result<i64, CounterError> {
        let (negative, int_part, _) = self.parts();
        let digits = int_part.trim_start_matches('0');
        if digits.is_empty() {
            return Ok(0);
        }

        let signed = if negative {
            format!("-{}", digits)
        } else {
            digits.to_string()
        };
        signed
            .parse::<i64>()
            .map_err(|_| CounterError::OutOfRange(self.0.clone()))
    }
}

impl From<i64> for DecimalNumber {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for DecimalNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 输出用的计数值
///
/// 十进制数在序列化边界上的显式解码：整数值解码为 `Integer`（精确），
/// 小数值解码为 `Float`。JSON 序列化时不带标签，分别输出为整数和浮点数。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CountValue {
    Integer(i64),
    Float(f64),
}

impl CountValue {
    pub fn from_decimal(decimal: &DecimalNumber) -> Result<Self, CounterError> {
        if decimal.is_integral() {
            return decimal.truncate().map(Self::Integer);
        }

        decimal
            .as_str()
            .parse::<f64>()
            .map(Self::Float)
            .map_err(|_| CounterError::InvalidDecimal(decimal.to_string()))
    }
}

impl std::fmt::Display for CountValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{}", n),
            Self::Float(v) => write!(f, "{}", v),
        }
    }
}
