//! 领域层统一错误定义
//!
//! 聚焦出现次数约束、取值校验与解析/序列化等最小必要集合，
//! 便于调用方统一转换为 `DomainError`。
//!
use thiserror::Error;

/// 出现次数约束违例
///
/// 单值属性的设置入口仅支持 `min_occurs <= 1` 且 `max_occurs` 为空或等于 1 的属性类型；
/// 这类错误代表属性类型配置有误，属于编程/配置错误，不应重试。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintViolation {
    #[error("Minimum occurrences cannot be greater than 1 (min_occurs={min_occurs})")]
    MinOccursAboveOne { min_occurs: u32 },
    #[error("Maximum occurrences must be equal to 1 (max_occurs={max_occurs})")]
    MaxOccursNotOne { max_occurs: u32 },
}

/// 统一错误类型（基础库最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 领域规则 ---
    #[error("constraint violation: {0}")]
    ConstraintViolation(#[from] ConstraintViolation),
    #[error("invalid value: {reason}")]
    InvalidValue { reason: String },
    /// 新属性的 UUID 已被集合中的另一条记录占用
    #[error("duplicate attribute: uuid={uuid}, attribute_type={attribute_type}")]
    DuplicateAttribute {
        uuid: uuid::Uuid,
        attribute_type: String,
    },

    // --- 解析/序列化 ---
    #[error("serialization error: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },
    #[error("parse error: {reason}")]
    Parse { reason: String },
}

impl DomainError {
    pub(crate) fn invalid_value(reason: impl Into<String>) -> Self {
        DomainError::InvalidValue {
            reason: reason.into(),
        }
    }
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;

// 允许在标识解析等场景直接使用 `?` 将错误转换为 DomainError

impl From<uuid::Error> for DomainError {
    fn from(err: uuid::Error) -> Self {
        DomainError::Parse {
            reason: err.to_string(),
        }
    }
}

impl From<std::num::ParseIntError> for DomainError {
    fn from(err: std::num::ParseIntError) -> Self {
        DomainError::Parse {
            reason: err.to_string(),
        }
    }
}
