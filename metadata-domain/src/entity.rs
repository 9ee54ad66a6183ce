//! 实体（Entity）基础抽象
//!
//! 为元数据与属性提供统一的标识能力：持久化主键（仅在持久化之后存在）与稳定的 UUID。
//!
use std::{fmt::Display, str::FromStr};
use uuid::Uuid;

/// 具备唯一标识的实体抽象
pub trait Entity {
    /// 持久化主键类型，要求可解析、可显示与可克隆
    type Id: FromStr + Clone + Display;

    /// 获取持久化主键；未持久化时为 `None`
    fn id(&self) -> Option<&Self::Id>;

    /// 获取稳定标识（创建时分配，集合内去重依据）
    fn uuid(&self) -> Uuid;

    /// 是否已持久化
    fn is_persisted(&self) -> bool {
        self.id().is_some()
    }
}
