use anyhow::Result;
use metadata_domain::attribute::{Attribute, AttributeId, CustomAttribute};
use metadata_domain::attribute_type::AttributeType;
use metadata_domain::customizable::Customizable;
use metadata_domain::entity::Entity;
use metadata_domain::error::DomainError;
use metadata_domain::metadata::Metadata;
use metadata_domain::{entity_id, metadata};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[entity_id]
#[derive(Copy)]
struct LocationTypeId(i64);

type LocationTypeAttribute = CustomAttribute<String>;

#[metadata(id = LocationTypeId, attribute = LocationTypeAttribute)]
struct LocationType {
    tag: Option<String>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn print_attributes(location_type: &LocationType) {
    let Some(set) = location_type.attributes() else {
        return;
    };
    for attribute in set {
        println!(
            "  {} = {:?} (id={:?}, voided={})",
            attribute.attribute_type().name(),
            attribute.value(),
            attribute.id().map(|id| id.to_string()),
            attribute.is_voided()
        );
    }
}

fn main() -> Result<()> {
    init_tracing();

    let ward_code = AttributeType::builder()
        .name("Ward code")
        .datatype("free-text")
        .max_occurs(1)
        .build();
    ward_code.validate()?;

    let aliases = AttributeType::builder()
        .name("Alias")
        .description("alternative names shown on signage")
        .datatype("free-text")
        .build();
    aliases.validate()?;

    let mut ward = LocationType::new("Inpatient ward");
    ward.id = Some(LocationTypeId::new(1));
    ward.tag = Some("inpatient".into());

    // 模拟从存储加载：已持久化的属性
    ward.add_attribute(
        CustomAttribute::builder()
            .id(AttributeId::new(100))
            .attribute_type(ward_code.clone())
            .value("W-1".to_string())
            .build(),
    );

    println!("loaded {}:", Metadata::name(&ward));
    print_attributes(&ward);

    let outcome = ward.set_attribute(CustomAttribute::new(ward_code.clone(), "W-1".into()))?;
    info!(?outcome, "same value");

    let outcome = ward.set_attribute(CustomAttribute::new(ward_code.clone(), "W-2".into()))?;
    info!(?outcome, "new value");

    let outcome = ward.set_attribute(CustomAttribute::new(ward_code.clone(), "W-3".into()))?;
    info!(?outcome, "replaced draft");

    match ward.set_attribute(CustomAttribute::new(aliases.clone(), "Ward A".into())) {
        Err(DomainError::ConstraintViolation(violation)) => {
            warn!(%violation, "multi-valued type rejected by single-value setter");
            ward.add_attribute(CustomAttribute::new(aliases.clone(), "Ward A".into()));
        }
        Ok(outcome) => info!(?outcome, "alias set"),
        Err(err) => return Err(err.into()),
    }

    println!("after updates:");
    print_attributes(&ward);
    println!(
        "active {}: {}",
        ward_code.name(),
        ward.active_attributes_of(&ward_code).len()
    );

    println!("{}", serde_json::to_string_pretty(&ward)?);
    Ok(())
}
