use metadata_domain::attribute::CustomAttribute;
use metadata_domain::attribute_type::AttributeType;
use metadata_domain::customizable::Customizable;
use metadata_macros::{entity_id, metadata};

#[entity_id]
#[derive(Copy)]
struct LocationTagId(i64);

#[metadata(id = LocationTagId, attribute = CustomAttribute<String>)]
struct LocationTag {}

fn main() {
    let code = AttributeType::builder()
        .name("Code")
        .datatype("free-text")
        .max_occurs(1)
        .build();
    let mut tag = LocationTag::new("Admission ward");
    assert!(tag.attributes().is_some());

    tag.set_attribute(CustomAttribute::new(code.clone(), "ADM".to_string()))
        .unwrap();
    tag.set_attribute(CustomAttribute::new(code.clone(), "ADM-2".to_string()))
        .unwrap();

    assert_eq!(tag.active_attributes_of(&code).len(), 1);
}
