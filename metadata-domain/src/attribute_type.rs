//! 属性类型（Attribute Type）
//!
//! 描述一类用户自定义属性：名称、数据类型以及每个实体上允许的出现次数。
//!
use std::fmt;

use bon::Builder;
use metadata_macros::{entity_id, metadata};
use uuid::Uuid;

use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};
use crate::value_object::{Occurrence, Retirement, ValueObject};

/// 属性描述符：属性所声明的类型需暴露出现次数约束
///
/// 相等性即描述符身份：`active_attributes_of` 与协调逻辑都依赖它判断"同一类型"。
pub trait AttributeDescriptor: PartialEq + fmt::Debug {
    fn name(&self) -> &str;

    /// 最少出现次数（≥ 0）
    fn min_occurs(&self) -> u32;

    /// 最多出现次数；`None` 表示无上限
    fn max_occurs(&self) -> Option<u32>;

    fn occurrence(&self) -> Occurrence {
        Occurrence::new(self.min_occurs(), self.max_occurs())
    }
}

#[entity_id]
#[derive(Copy, PartialOrd, Ord)]
pub struct AttributeTypeId(i64);

/// 默认的属性类型实现
///
/// 通过 `builder()` 构造；`name` 与 `datatype` 必填，其余字段有默认值
/// （未持久化、随机 UUID、未停用、`min_occurs = 0`、无上限）。
///
/// # 示例
///
/// ```
/// use metadata_domain::attribute_type::{AttributeDescriptor, AttributeType};
///
/// let phone = AttributeType::builder()
///     .name("Phone number")
///     .datatype("free-text")
///     .max_occurs(1)
///     .build();
/// assert!(phone.validate().is_ok());
/// assert!(phone.occurrence().is_single_valued());
/// ```
#[metadata(id = AttributeTypeId)]
#[derive(Builder)]
pub struct AttributeType {
    id: Option<AttributeTypeId>,
    #[builder(default = Uuid::new_v4())]
    uuid: Uuid,
    #[builder(into)]
    name: String,
    #[builder(into)]
    description: Option<String>,
    #[builder(default)]
    retirement: Retirement,
    /// 数据类型名称（例如 `free-text`、`date`、`concept`）
    #[builder(into)]
    datatype: String,
    #[builder(into)]
    datatype_config: Option<String>,
    #[builder(default)]
    min_occurs: u32,
    max_occurs: Option<u32>,
}

impl AttributeType {
    pub fn datatype(&self) -> &str {
        &self.datatype
    }

    pub fn datatype_config(&self) -> Option<&str> {
        self.datatype_config.as_deref()
    }

    /// 校验属性类型自身的配置：名称、数据类型与出现次数
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::invalid_value("attribute type name is required"));
        }
        if self.datatype.trim().is_empty() {
            return Err(DomainError::invalid_value(format!(
                "attribute type '{}' has no datatype",
                self.name
            )));
        }
        self.occurrence().validate()
    }
}

impl AttributeDescriptor for AttributeType {
    fn name(&self) -> &str {
        &self.name
    }

    fn min_occurs(&self) -> u32 {
        self.min_occurs
    }

    fn max_occurs(&self) -> Option<u32> {
        self.max_occurs
    }
}

impl PartialEq for AttributeType {
    fn eq(&self, other: &Self) -> bool {
        self.uuid() == other.uuid()
    }
}

impl Eq for AttributeType {}
