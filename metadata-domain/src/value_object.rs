//! 值对象（Value Object）
//!
//! 无标识、以值相等为准的对象，用于封装不可变的概念性值与校验逻辑。
//!

use std::fmt;

use chrono::{DateTime, Utc};
use metadata_macros::value_object;

use crate::error::{DomainError, DomainResult};

/// 值对象抽象
pub trait ValueObject {
    /// 业务校验失败时的错误类型
    type Error;

    /// 创建值对象时进行验证
    fn validate(&self) -> Result<(), Self::Error>;
}

/// 出现次数约束：每个实体上某属性类型的有效属性数量下限与上限
///
/// `max_occurs` 为 `None` 表示无上限。
///
/// # 示例
///
/// ```
/// use metadata_domain::value_object::{Occurrence, ValueObject};
///
/// let single = Occurrence::new(0, Some(1));
/// assert!(single.is_single_valued());
/// assert!(single.validate().is_ok());
///
/// let many = Occurrence::unbounded(1);
/// assert!(!many.is_single_valued());
/// assert_eq!(many.to_string(), "[1..*]");
/// ```
#[value_object]
#[derive(Copy, Hash)]
pub struct Occurrence {
    min_occurs: u32,
    max_occurs: Option<u32>,
}

impl Occurrence {
    pub const fn new(min_occurs: u32, max_occurs: Option<u32>) -> Self {
        Self {
            min_occurs,
            max_occurs,
        }
    }

    /// 无上限的出现次数
    pub const fn unbounded(min_occurs: u32) -> Self {
        Self::new(min_occurs, None)
    }

    pub const fn min_occurs(&self) -> u32 {
        self.min_occurs
    }

    pub const fn max_occurs(&self) -> Option<u32> {
        self.max_occurs
    }

    /// 是否为单值：上限恰为 1
    pub fn is_single_valued(&self) -> bool {
        self.max_occurs == Some(1)
    }
}

impl ValueObject for Occurrence {
    type Error = DomainError;

    fn validate(&self) -> DomainResult<()> {
        match self.max_occurs {
            Some(0) => Err(DomainError::invalid_value("max_occurs must be at least 1")),
            Some(max) if max < self.min_occurs => Err(DomainError::invalid_value(format!(
                "max_occurs ({max}) must not be less than min_occurs ({})",
                self.min_occurs
            ))),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max_occurs {
            Some(max) => write!(f, "[{}..{}]", self.min_occurs, max),
            None => write!(f, "[{}..*]", self.min_occurs),
        }
    }
}

/// 停用状态（元数据的软删除）
#[value_object]
pub struct Retirement {
    retired: bool,
    date_retired: Option<DateTime<Utc>>,
    reason: Option<String>,
}

impl Retirement {
    /// 在给定时间以给定原因停用
    pub fn retire(reason: &str, at: DateTime<Utc>) -> DomainResult<Self> {
        let retirement = Self {
            retired: true,
            date_retired: Some(at),
            reason: Some(reason.trim().to_string()),
        };
        retirement.validate()?;
        Ok(retirement)
    }

    pub fn is_retired(&self) -> bool {
        self.retired
    }

    pub fn date_retired(&self) -> Option<DateTime<Utc>> {
        self.date_retired
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}

impl ValueObject for Retirement {
    type Error = DomainError;

    fn validate(&self) -> DomainResult<()> {
        let has_reason = self.reason.as_deref().is_some_and(|r| !r.trim().is_empty());
        match (self.retired, has_reason, self.date_retired.is_some()) {
            (true, false, _) => Err(DomainError::invalid_value("retire reason is required")),
            (true, true, false) => Err(DomainError::invalid_value("retire date is required")),
            (false, true, _) | (false, _, true) => Err(DomainError::invalid_value(
                "active metadata cannot carry retire details",
            )),
            _ => Ok(()),
        }
    }
}
