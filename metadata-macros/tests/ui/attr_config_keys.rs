use metadata_domain::attribute::CustomAttribute;
use metadata_domain::customizable::Customizable;
use metadata_macros::{entity_id, metadata, value_object};

// 键的顺序任意，允许末尾逗号
#[value_object(debug = true,)]
struct Strength(u32);

#[entity_id(debug = false,)]
#[derive(Copy)]
struct OrderTypeId(i64);

impl std::fmt::Debug for OrderTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OrderTypeId({})", self.value())
    }
}

#[metadata(debug = false, attribute = CustomAttribute<i64>, id = OrderTypeId,)]
struct OrderType {}

impl std::fmt::Debug for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderType").field("name", &self.name).finish()
    }
}

fn main() {
    let _ = format!("{:?}", Strength(5));
    assert_eq!(format!("{:?}", OrderTypeId::new(3)), "OrderTypeId(3)");

    let order_type = OrderType::new("Lab");
    assert!(order_type.attributes().is_some());
    assert_eq!(format!("{:?}", order_type), "OrderType { name: \"Lab\" }");
}
