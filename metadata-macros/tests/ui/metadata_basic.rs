use metadata_domain::entity::Entity;
use metadata_domain::metadata::Metadata;
use metadata_macros::metadata;

#[metadata]
struct EncounterRole {
    clinical: bool,
}

#[metadata(id = String, debug = false)]
struct VisitType {}

impl std::fmt::Debug for VisitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "VisitType({})", self.name)
    }
}

fn main() {
    let mut role = EncounterRole::new("Clinician");
    role.clinical = true;
    assert_eq!(role.name(), "Clinician");
    assert!(role.id().is_none());
    assert!(!role.uuid().is_nil());
    assert!(!role.is_retired());

    role.id = Some(3);
    assert!(role.is_persisted());

    let visit = VisitType::new("Outpatient");
    let _ = format!("{:?}", visit);
    assert_serialize(&visit);
}

fn assert_serialize<T: serde::Serialize>(_: &T) {}
