//! Counter Context - Aggregate Root

use super::{CounterError, CounterId, DecimalNumber};

/// 访问计数聚合根
///
/// 不变量:
/// - 记录不存在时计数从 0 开始
/// - 计数始终为整数，存储中的小数按向零截断读取
/// - 每次递增恰好加一，溢出报错而不回绕
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitorCounter {
    id: CounterId,
    count: i64,
}

impl VisitorCounter {
    /// 记录尚不存在时的初始计数器
    pub fn fresh(id: CounterId) -> Self {
        Self { id, count: 0 }
    }

    /// 从存储的十进制计数恢复
    pub fn restore(id: CounterId, stored: &DecimalNumber) -> Result<Self, CounterError> {
        Ok(Self {
            id,
            count: stored.truncate()?,
        })
    }

    /// 递增并返回新计数
    pub fn increment(&mut self) -> Result<i64, CounterError> {
        self.count = self
            .count
            .checked_add(1)
            .ok_or(CounterError::Overflow(self.count))?;
        Ok(self.count)
    }

    // Getters
    pub fn id(&self) -> &CounterId {
        &self.id
    }

    pub fn count(&self) -> i64 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_counter_starts_at_zero() {
        let mut counter = VisitorCounter::fresh(CounterId::default());
        assert_eq!(counter.count(), 0);
        assert_eq!(counter.increment().unwrap(), 1);
    }

    #[test]
    fn test_restore_and_increment() {
        let stored = DecimalNumber::parse("41").unwrap();
        let mut counter = VisitorCounter::restore(CounterId::default(), &stored).unwrap();
        assert_eq!(counter.increment().unwrap(), 42);
        assert_eq!(counter.count(), 42);
    }

    #[test]
    fn test_fractional_count_truncates_before_increment() {
        let stored = DecimalNumber::parse("5.5").unwrap();
        let mut counter = VisitorCounter::restore(CounterId::default(), &stored).unwrap();
        assert_eq!(counter.increment().unwrap(), 6);
    }

    #[test]
    fn test_increment_overflow() {
        let stored = DecimalNumber::from(i64::MAX);
        let mut counter = VisitorCounter::restore(CounterId::default(), &stored).unwrap();
        assert!(matches!(counter.increment(), Err(CounterError::Overflow(_))));
        assert_eq!(counter.count(), i64::MAX);
    }
}
