//! 属性（Attribute）
//!
//! 附着在可定制实体上的一条自定义取值。属性通过作废（void）实现软删除：
//! 已持久化的属性永不物理删除，以保留审计历史。
//!
use std::fmt;

use bon::Builder;
use chrono::{DateTime, Utc};
use metadata_macros::entity_id;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::attribute_type::{AttributeDescriptor, AttributeType};
use crate::entity::Entity;

/// 属性抽象：暴露类型、取值、作废标记、持久化标识与所属实体的反向引用
pub trait Attribute: Entity {
    /// 属性所声明的类型
    type Descriptor: AttributeDescriptor;
    /// 属性取值；相等性用于判定重复设置
    type Value: PartialEq + fmt::Debug;

    fn attribute_type(&self) -> &Self::Descriptor;

    fn value(&self) -> &Self::Value;

    fn is_voided(&self) -> bool;

    /// 作废（软删除），记录作废时间与原因
    fn void(&mut self, reason: &str);

    /// 所属实体的 UUID（非拥有引用，仅用于回溯）
    fn owner(&self) -> Option<Uuid>;

    fn set_owner(&mut self, owner: Uuid);
}

#[entity_id]
#[derive(Copy, PartialOrd, Ord)]
pub struct AttributeId(i64);

/// 默认的属性实现，取值类型 `V` 由调用方决定
///
/// # 示例
///
/// ```
/// use metadata_domain::attribute::{Attribute, AttributeId, CustomAttribute};
/// use metadata_domain::attribute_type::AttributeType;
/// use metadata_domain::entity::Entity;
///
/// let code = AttributeType::builder()
///     .name("Code")
///     .datatype("free-text")
///     .max_occurs(1)
///     .build();
/// let stored = CustomAttribute::builder()
///     .id(AttributeId::new(1))
///     .attribute_type(code)
///     .value("X".to_string())
///     .build();
/// assert!(stored.is_persisted());
/// assert!(!stored.is_voided());
/// ```
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
pub struct CustomAttribute<V> {
    id: Option<AttributeId>,
    #[builder(default = Uuid::new_v4())]
    uuid: Uuid,
    attribute_type: AttributeType,
    value: V,
    #[builder(skip)]
    owner: Option<Uuid>,
    #[builder(default)]
    voided: bool,
    date_voided: Option<DateTime<Utc>>,
    void_reason: Option<String>,
}

impl<V> CustomAttribute<V> {
    /// 创建尚未持久化的属性
    pub fn new(attribute_type: AttributeType, value: V) -> Self {
        Self {
            id: None,
            uuid: Uuid::new_v4(),
            attribute_type,
            value,
            owner: None,
            voided: false,
            date_voided: None,
            void_reason: None,
        }
    }

    /// 由持久化协作方在保存后回填主键
    pub fn mark_persisted(&mut self, id: AttributeId) {
        self.id = Some(id);
    }

    pub fn date_voided(&self) -> Option<DateTime<Utc>> {
        self.date_voided
    }

    pub fn void_reason(&self) -> Option<&str> {
        self.void_reason.as_deref()
    }
}

impl<V> Entity for CustomAttribute<V> {
    type Id = AttributeId;

    fn id(&self) -> Option<&Self::Id> {
        self.id.as_ref()
    }

    fn uuid(&self) -> Uuid {
        self.uuid
    }
}

impl<V: PartialEq + fmt::Debug> Attribute for CustomAttribute<V> {
    type Descriptor = AttributeType;
    type Value = V;

    fn attribute_type(&self) -> &AttributeType {
        &self.attribute_type
    }

    fn value(&self) -> &V {
        &self.value
    }

    fn is_voided(&self) -> bool {
        self.voided
    }

    fn void(&mut self, reason: &str) {
        self.voided = true;
        self.date_voided = Some(Utc::now());
        self.void_reason = Some(reason.to_string());
    }

    fn owner(&self) -> Option<Uuid> {
        self.owner
    }

    fn set_owner(&mut self, owner: Uuid) {
        self.owner = Some(owner);
    }
}
