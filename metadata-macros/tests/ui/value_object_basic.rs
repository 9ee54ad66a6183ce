use metadata_macros::value_object;

#[value_object]
struct Dosage {
    amount: i64,
    unit: String,
}

#[value_object(debug = false)]
struct NonDebugVO(i32);

#[value_object]
enum Severity {
    #[default]
    Mild,
    Severe,
}

fn main() {
    // Debug 默认开启，应可格式化
    let _ = format!("{:?}", Dosage::default());

    let a = Dosage {
        amount: 5,
        unit: "mg".into(),
    };
    let _b = a.clone();
    let _eq = a == Dosage::default();

    let _ = NonDebugVO(1);

    let _lv: Severity = Default::default();
}
