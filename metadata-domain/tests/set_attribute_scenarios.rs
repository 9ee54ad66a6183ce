use anyhow::Result as AnyResult;
use metadata_domain::attribute::{Attribute, AttributeId, CustomAttribute};
use metadata_domain::attribute_type::AttributeType;
use metadata_domain::customizable::Customizable;
use metadata_domain::entity::Entity;
use metadata_domain::error::{ConstraintViolation, DomainError};
use metadata_domain::reconciler::Reconciliation;
use metadata_domain::{entity_id, metadata};

#[entity_id]
#[derive(Copy)]
struct LocationTypeId(i64);

#[metadata(id = LocationTypeId, attribute = CustomAttribute<String>)]
struct LocationType {}

fn free_text(name: &str, min_occurs: u32, max_occurs: Option<u32>) -> AttributeType {
    AttributeType::builder()
        .name(name)
        .datatype("free-text")
        .min_occurs(min_occurs)
        .maybe_max_occurs(max_occurs)
        .build()
}

fn code_type() -> AttributeType {
    free_text("Code", 0, Some(1))
}

/// 实体上已有一个已持久化的有效属性（id=1, value="X"）
fn ward_with_persisted_code(code: &AttributeType) -> LocationType {
    let mut ward = LocationType::new("Ward");
    ward.id = Some(LocationTypeId::new(10));
    ward.add_attribute(
        CustomAttribute::builder()
            .id(AttributeId::new(1))
            .attribute_type(code.clone())
            .value("X".to_string())
            .build(),
    );
    ward
}

#[test]
fn replacing_persisted_value_voids_the_old_row() -> AnyResult<()> {
    let code = code_type();
    let mut ward = ward_with_persisted_code(&code);

    let outcome = ward.set_attribute(CustomAttribute::new(code.clone(), "Y".to_string()))?;
    assert!(matches!(outcome, Reconciliation::Replaced { .. }));

    let set = ward.attributes().expect("initialized");
    assert_eq!(set.len(), 2);

    let old = set
        .iter()
        .find(|a| a.id() == Some(&AttributeId::new(1)))
        .expect("persisted attribute stays in the set");
    assert!(old.is_voided());

    let active = ward.active_attributes_of(&code);
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].value(), "Y");
    assert!(active[0].id().is_none());
    assert_eq!(active[0].owner(), Some(ward.uuid()));
    Ok(())
}

#[test]
fn setting_the_same_value_changes_nothing() -> AnyResult<()> {
    let code = code_type();
    let mut ward = ward_with_persisted_code(&code);

    let outcome = ward.set_attribute(CustomAttribute::new(code.clone(), "X".to_string()))?;
    assert_eq!(outcome, Reconciliation::Unchanged);

    let set = ward.attributes().expect("initialized");
    assert_eq!(set.len(), 1);
    assert!(set.iter().all(|a| !a.is_voided()));
    Ok(())
}

#[test]
fn repeated_identical_calls_are_idempotent() -> AnyResult<()> {
    let code = code_type();
    let mut ward = LocationType::new("Ward");

    ward.set_attribute(CustomAttribute::new(code.clone(), "A".to_string()))?;
    let snapshot: Vec<(bool, String)> = ward
        .attributes()
        .expect("initialized")
        .iter()
        .map(|a| (a.is_voided(), a.value().clone()))
        .collect();

    let outcome = ward.set_attribute(CustomAttribute::new(code.clone(), "A".to_string()))?;
    assert_eq!(outcome, Reconciliation::Unchanged);

    let after: Vec<(bool, String)> = ward
        .attributes()
        .expect("initialized")
        .iter()
        .map(|a| (a.is_voided(), a.value().clone()))
        .collect();
    assert_eq!(snapshot, after);
    assert_eq!(ward.active_attributes_of(&code).len(), 1);
    Ok(())
}

#[test]
fn replacing_unpersisted_value_removes_it() -> AnyResult<()> {
    let code = code_type();
    let mut ward = LocationType::new("Ward");

    ward.set_attribute(CustomAttribute::new(code.clone(), "A".to_string()))?;
    ward.set_attribute(CustomAttribute::new(code.clone(), "B".to_string()))?;

    let set = ward.attributes().expect("initialized");
    assert_eq!(set.len(), 1);
    assert_eq!(set.iter().next().map(|a| a.value().as_str()), Some("B"));
    Ok(())
}

#[test]
fn min_occurs_above_one_is_rejected_without_mutation() {
    let code = code_type();
    let mut ward = ward_with_persisted_code(&code);
    let required_pair = free_text("Pair", 2, None);

    let err = ward
        .set_attribute(CustomAttribute::new(required_pair, "Z".to_string()))
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::ConstraintViolation(ConstraintViolation::MinOccursAboveOne { min_occurs: 2 })
    ));

    let set = ward.attributes().expect("initialized");
    assert_eq!(set.len(), 1);
    assert!(set.iter().all(|a| !a.is_voided()));
}

#[test]
fn max_occurs_other_than_one_is_rejected_without_mutation() {
    let code = code_type();
    let mut ward = ward_with_persisted_code(&code);
    let up_to_three = free_text("Aliases", 0, Some(3));

    let err = ward
        .set_attribute(CustomAttribute::new(up_to_three, "Z".to_string()))
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::ConstraintViolation(ConstraintViolation::MaxOccursNotOne { max_occurs: 3 })
    ));
    assert_eq!(ward.attributes().expect("initialized").len(), 1);
}

#[test]
fn uninitialized_set_degrades_to_plain_insert() -> AnyResult<()> {
    let mut ward = LocationType::new("Ward");
    ward.set_attributes(None);

    // 未初始化的集合不做出现次数校验
    let multi = free_text("Aliases", 0, Some(3));
    let outcome = ward.set_attribute(CustomAttribute::new(multi.clone(), "Z".to_string()))?;

    assert_eq!(outcome, Reconciliation::Inserted);
    let active = ward.active_attributes_of(&multi);
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].owner(), Some(ward.uuid()));
    Ok(())
}

#[test]
fn customizable_metadata_serializes_with_attributes() -> AnyResult<()> {
    let code = code_type();
    let mut ward = ward_with_persisted_code(&code);
    ward.set_attribute(CustomAttribute::new(code.clone(), "Y".to_string()))?;

    let json = serde_json::to_string(&ward)?;
    let restored: LocationType = serde_json::from_str(&json)?;

    assert_eq!(restored.uuid(), ward.uuid());
    assert_eq!(restored.attributes().map(|s| s.len()), Some(2));
    assert_eq!(restored.active_attributes_of(&code).len(), 1);
    Ok(())
}

#[test]
fn reusing_a_stored_uuid_for_a_new_value_keeps_the_stored_row() {
    let code = code_type();
    let mut ward = ward_with_persisted_code(&code);
    let stored_uuid = ward.active_attributes_of(&code)[0].uuid();

    let err = ward
        .set_attribute(
            CustomAttribute::builder()
                .uuid(stored_uuid)
                .attribute_type(code.clone())
                .value("Y".to_string())
                .build(),
        )
        .unwrap_err();
    assert!(matches!(err, DomainError::DuplicateAttribute { uuid, .. } if uuid == stored_uuid));

    let active = ward.active_attributes_of(&code);
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].value(), "X");
    assert_eq!(ward.attributes().expect("initialized").len(), 1);
}
