//! 可定制元数据领域库（metadata-domain）
//!
//! 为"元数据"实体（如地点类型、就诊类型）提供可插拔的用户自定义属性：
//! - 实体（`entity`）与元数据（`metadata`）基础抽象，含停用（retire）语义
//! - 属性类型（`attribute_type`）描述出现次数约束（min/max occurs）
//! - 属性（`attribute`）以作废（void）实现软删除
//! - 可定制实体（`customizable`）持有属性集合，并通过 `reconciler`
//!   在设置单值属性时按出现次数约束作废/移除旧属性
//! - 值对象（`value_object`）与统一错误（`error`）
//!
//! 本 crate 不包含持久化与校验框架，仅负责内存中的领域状态变更；
//! 持久化由外部协作方在之后完成。
//!
//! 典型用法：
//! 1. 使用 `#[metadata(id = .., attribute = ..)]` 定义可定制元数据；
//! 2. 构造 `AttributeType` 并声明出现次数；
//! 3. 调用 `Customizable::set_attribute` 设置单值属性。
//!
pub mod attribute;
pub mod attribute_type;
pub mod customizable;
pub mod entity;
pub mod error;
pub mod metadata;
pub mod reconciler;
pub mod value_object;

pub use chrono;
pub use metadata_macros::{entity_id, metadata, value_object};
pub use uuid;

// 允许在本 crate 内部通过 ::metadata_domain 进行自引用，
// 以便过程宏生成的路径在本 crate 内同样可以解析。
extern crate self as metadata_domain;
