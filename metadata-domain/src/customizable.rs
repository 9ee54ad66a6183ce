//! 可定制实体（Customizable）
//!
//! 支持用户自定义属性的元数据：实体独占其属性集合（实体 → 属性，单向拥有），
//! 属性仅以 UUID 反向引用所属实体。
//!
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::attribute::Attribute;
use crate::entity::Entity;
use crate::error::DomainResult;
use crate::metadata::Metadata;
use crate::reconciler::{self, Reconciliation};

/// 属性集合：保持插入顺序，按属性 UUID 去重
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeSet<A> {
    items: Vec<A>,
}

impl<A> Default for AttributeSet<A> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<A> AttributeSet<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, A> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, A> {
        self.items.iter_mut()
    }
}

impl<A: Attribute> AttributeSet<A> {
    pub fn contains(&self, uuid: &Uuid) -> bool {
        self.items.iter().any(|a| a.uuid() == *uuid)
    }

    /// 插入属性；UUID 已存在时不做任何修改并返回 `false`
    pub fn insert(&mut self, attribute: A) -> bool {
        if self.contains(&attribute.uuid()) {
            return false;
        }
        self.items.push(attribute);
        true
    }

    pub fn get(&self, uuid: &Uuid) -> Option<&A> {
        self.items.iter().find(|a| a.uuid() == *uuid)
    }

    pub fn get_mut(&mut self, uuid: &Uuid) -> Option<&mut A> {
        self.items.iter_mut().find(|a| a.uuid() == *uuid)
    }

    /// 从集合中物理移除属性，保持其余元素顺序
    pub fn remove(&mut self, uuid: &Uuid) -> Option<A> {
        let index = self.items.iter().position(|a| a.uuid() == *uuid)?;
        Some(self.items.remove(index))
    }

    /// 未作废的属性（按集合顺序）
    pub fn active(&self) -> impl Iterator<Item = &A> {
        self.items.iter().filter(|a| !a.is_voided())
    }

    /// 指定类型的未作废属性（类型以描述符相等判定）
    pub fn active_of<'a>(&'a self, ty: &A::Descriptor) -> impl Iterator<Item = &'a A> {
        self.active().filter(move |a| a.attribute_type() == ty)
    }
}

impl<A: Attribute> FromIterator<A> for AttributeSet<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        let mut set = Self::new();
        for attribute in iter {
            set.insert(attribute);
        }
        set
    }
}

impl<'a, A> IntoIterator for &'a AttributeSet<A> {
    type Item = &'a A;
    type IntoIter = std::slice::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A> IntoIterator for AttributeSet<A> {
    type Item = A;
    type IntoIter = std::vec::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// 支持自定义属性的元数据
///
/// 属性集合为 `None` 表示尚未初始化（例如延迟加载前）。
pub trait Customizable: Metadata {
    type Attribute: Attribute;

    fn attributes(&self) -> Option<&AttributeSet<Self::Attribute>>;

    fn attributes_mut(&mut self) -> Option<&mut AttributeSet<Self::Attribute>>;

    fn set_attributes(&mut self, attributes: Option<AttributeSet<Self::Attribute>>);

    /// 所有未作废的属性，按集合顺序
    fn active_attributes(&self) -> Vec<&Self::Attribute> {
        self.attributes()
            .map(|set| set.active().collect())
            .unwrap_or_default()
    }

    /// 指定类型的未作废属性，按集合顺序
    fn active_attributes_of(
        &self,
        ty: &<Self::Attribute as Attribute>::Descriptor,
    ) -> Vec<&Self::Attribute> {
        self.attributes()
            .map(|set| set.active_of(ty).collect())
            .unwrap_or_default()
    }

    /// 直接加入属性并设置其所属实体；集合未初始化时先创建
    fn add_attribute(&mut self, mut attribute: Self::Attribute) {
        attribute.set_owner(self.uuid());
        if let Some(set) = self.attributes_mut() {
            set.insert(attribute);
            return;
        }
        let mut set = AttributeSet::new();
        set.insert(attribute);
        self.set_attributes(Some(set));
    }

    /// 设置单值属性：按出现次数约束作废或移除同类型的旧属性后加入新属性
    ///
    /// 集合未初始化时退化为 `add_attribute`。
    /// 属性类型 `min_occurs > 1` 或 `max_occurs` 不为 1 时返回
    /// [`DomainError::ConstraintViolation`](crate::error::DomainError::ConstraintViolation)；
    /// 新属性的 UUID 已在集合中时返回
    /// [`DomainError::DuplicateAttribute`](crate::error::DomainError::DuplicateAttribute)。
    /// 两种情况下集合都保持不变。
    fn set_attribute(&mut self, attribute: Self::Attribute) -> DomainResult<Reconciliation> {
        let owner = self.uuid();
        if let Some(set) = self.attributes_mut() {
            return reconciler::set_single_valued(set, owner, attribute);
        }
        self.add_attribute(attribute);
        Ok(Reconciliation::Inserted)
    }
}
