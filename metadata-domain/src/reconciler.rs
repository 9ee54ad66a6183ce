//! 单值属性协调
//!
//! 设置一个新属性时，按其类型的出现次数约束决定同类型的哪些有效属性需要退役：
//! - 已持久化的属性作废（保留在集合中，留存审计历史）；
//! - 从未持久化的属性直接从集合中移除。
//!
//! 出现次数校验与 UUID 冲突检查都在任何修改之前完成，失败时集合保持不变。
//!
use tracing::{debug, trace, warn};
use uuid::Uuid;

use crate::attribute::Attribute;
use crate::attribute_type::AttributeDescriptor;
use crate::customizable::AttributeSet;
use crate::entity::Entity;
use crate::error::{ConstraintViolation, DomainError, DomainResult};

/// 旧属性被新值取代时记录的作废原因
pub const REPLACED_REASON: &str = "replaced by a new value";

/// 一次设置操作的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconciliation {
    /// 新属性直接加入，没有旧属性退役
    Inserted,
    /// 已存在取值相同的有效属性，集合未修改
    Unchanged,
    /// 旧属性退役后加入新属性
    Replaced {
        /// 被作废（仍在集合中）的已持久化属性
        voided: Vec<Uuid>,
        /// 被移除的未持久化属性
        removed: Vec<Uuid>,
    },
}

impl Reconciliation {
    /// 集合是否被修改
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Reconciliation::Unchanged)
    }
}

/// 单值设置仅支持 `min_occurs <= 1` 且 `max_occurs` 为空或等于 1 的类型
pub fn ensure_single_valued<D: AttributeDescriptor>(descriptor: &D) -> DomainResult<()> {
    let min_occurs = descriptor.min_occurs();
    if min_occurs > 1 {
        return Err(ConstraintViolation::MinOccursAboveOne { min_occurs }.into());
    }
    match descriptor.max_occurs() {
        Some(max_occurs) if max_occurs != 1 => {
            Err(ConstraintViolation::MaxOccursNotOne { max_occurs }.into())
        }
        _ => Ok(()),
    }
}

/// 在已初始化的集合上设置单值属性
///
/// 1. 恰有一个同类型有效属性且取值相同：不做修改；
/// 2. 恰有一个且取值不同：退役旧属性后加入新属性；
/// 3. 没有或多于一个：退役全部同类型有效属性后加入新属性。
///
/// 新属性加入时将 `owner` 设为所属实体的 UUID。
/// 新属性的 UUID 已存在于集合中（且不属于情形 1）时返回
/// [`DomainError::DuplicateAttribute`]，集合保持不变。
pub fn set_single_valued<A: Attribute>(
    set: &mut AttributeSet<A>,
    owner: Uuid,
    mut attribute: A,
) -> DomainResult<Reconciliation> {
    ensure_single_valued(attribute.attribute_type())?;

    let type_name = attribute.attribute_type().name().to_string();
    let active: Vec<Uuid> = set
        .active_of(attribute.attribute_type())
        .map(|existing| existing.uuid())
        .collect();

    if let [only] = active.as_slice() {
        let same_value = set
            .get(only)
            .is_some_and(|existing| existing.value() == attribute.value());
        if same_value {
            trace!(attribute_type = %type_name, "attribute value unchanged");
            return Ok(Reconciliation::Unchanged);
        }
    } else if active.len() > 1 {
        // 正常流程下不应出现：多个有效的单值属性意味着上游数据不一致，这里全部退役且不比较取值
        warn!(
            attribute_type = %type_name,
            active = active.len(),
            "multiple active attributes for a single-valued type"
        );
    }

    let uuid = attribute.uuid();
    if set.contains(&uuid) {
        debug!(attribute_type = %type_name, %uuid, "attribute uuid already in set");
        return Err(DomainError::DuplicateAttribute {
            uuid,
            attribute_type: type_name,
        });
    }

    let mut voided = Vec::new();
    let mut removed = Vec::new();
    for retiring in active {
        let persisted = set.get(&retiring).is_some_and(|existing| existing.is_persisted());
        if persisted {
            if let Some(existing) = set.get_mut(&retiring) {
                existing.void(REPLACED_REASON);
                voided.push(retiring);
            }
        } else if set.remove(&retiring).is_some() {
            removed.push(retiring);
        }
    }

    attribute.set_owner(owner);
    let inserted = set.insert(attribute);
    debug_assert!(inserted, "uuid collision is rejected before retirement");

    if voided.is_empty() && removed.is_empty() {
        trace!(attribute_type = %type_name, %uuid, "attribute inserted");
        return Ok(Reconciliation::Inserted);
    }

    debug!(
        attribute_type = %type_name,
        %uuid,
        voided = voided.len(),
        removed = removed.len(),
        "attribute replaced"
    );
    Ok(Reconciliation::Replaced { voided, removed })
}
