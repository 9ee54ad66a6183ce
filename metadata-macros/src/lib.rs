//! 元数据领域过程宏（metadata-macros）
//!
//! - `#[metadata]`：为元数据结构体追加标识/名称/停用字段，并实现
//!   `Entity`、`Metadata`，可选实现 `Customizable`
//! - `#[entity_id]`：为单字段 tuple struct 生成标识类型的常用实现
//! - `#[value_object]`：为值对象合并标准派生
//!
use proc_macro::TokenStream;

mod attr_config;
mod derive_utils;
mod entity_id;
mod field_utils;
mod metadata;
mod value_object;

/// 元数据宏
/// - 追加字段：`id: Option<IdType>`, `uuid`, `name`, `description`, `retirement` 并置于字段最前
/// - 指定 `attribute = AttrType` 时追加 `attributes: Option<AttributeSet<AttrType>>`
/// - 自动实现 `::metadata_domain::entity::Entity`、`::metadata_domain::metadata::Metadata`，
///   以及（可选）`::metadata_domain::customizable::Customizable`
/// - 支持参数：`#[metadata(id = IdType, attribute = AttrType, debug = true|false)]`，`id` 默认 `i64`
#[proc_macro_attribute]
pub fn metadata(attr: TokenStream, item: TokenStream) -> TokenStream {
    metadata::expand(attr, item)
}

/// 实体 ID 宏
/// 用于为 `tuple struct` 形式的 ID 类型（例如 `struct AttributeId(i64);`、`struct LocationTypeId(Uuid);`）
/// 自动实现 `Display`、`FromStr`、`AsRef`、`From` 等。
/// 仅支持单字段的 `tuple struct`。
#[proc_macro_attribute]
pub fn entity_id(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity_id::expand(attr, item)
}

/// 值对象宏
/// 合并派生：Debug（可通过 `debug = false` 关闭）、Default、Clone、Serialize、Deserialize、PartialEq、Eq
#[proc_macro_attribute]
pub fn value_object(attr: TokenStream, item: TokenStream) -> TokenStream {
    value_object::expand(attr, item)
}
