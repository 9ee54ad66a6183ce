use metadata_macros::entity_id;
use uuid::Uuid;

#[entity_id]
#[derive(Copy)]
struct LocationTypeId(i64);

#[entity_id(debug = false)]
struct ProviderId(Uuid);

impl std::fmt::Debug for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ProviderId(..)")
    }
}

fn main() {
    let id = LocationTypeId::new(7);
    assert_eq!(id.to_string(), "7");
    assert_eq!(*id.value(), 7);
    let parsed: LocationTypeId = "7".parse().unwrap();
    assert_eq!(parsed, id);
    let raw: i64 = id.into();
    assert_eq!(raw, 7);

    let pid = ProviderId::new(Uuid::new_v4());
    let _ = format!("{:?}", pid); // 使用手写 Debug，实现可编译则说明未自动派生 Debug
}
