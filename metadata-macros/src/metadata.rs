use crate::attr_config::{parse_bool_value, set_once};
use crate::derive_utils::{apply_derives, with_debug};
use crate::field_utils::{append_field_if_missing, prepend_required_fields};
use proc_macro::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{
    Item, ItemStruct, Result, Token, Type, parse::Parse, parse::ParseStream, parse_macro_input,
};

/// #[metadata] 宏实现
/// - 若缺失则追加字段：`id: Option<IdType>`, `uuid`, `name`, `description`, `retirement`，并置于字段最前
/// - `attribute = AttrType` 时在末尾追加 `attributes: Option<AttributeSet<AttrType>>`
/// - 自动实现 `::metadata_domain::entity::Entity`（id/uuid）与 `::metadata_domain::metadata::Metadata`
/// - `attribute` 存在时额外实现 `::metadata_domain::customizable::Customizable`
/// - 生成 `new(name)`：分配 v4 UUID；可定制实体的属性集合初始化为空集合
/// - 支持参数：`#[metadata(id = IdType, attribute = AttrType, debug = true|false)]`；
///   - `id` 默认 `i64`
///   - `debug` 默认 `true`（派生 Debug）。当为 `false` 时不派生 Debug，便于用户自定义实现。
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as MetadataAttrConfig);
    let input = parse_macro_input!(item as Item);

    let mut st = match input {
        Item::Struct(s) => s,
        other => {
            return syn::Error::new(other.span(), "#[metadata] only on struct")
                .to_compile_error()
                .into();
        }
    };

    // 仅支持具名字段结构体
    let fields_named = match &mut st.fields {
        syn::Fields::Named(f) => f,
        _ => {
            return syn::Error::new(st.span(), "only supports named-field struct")
                .to_compile_error()
                .into();
        }
    };

    let id_type = cfg.id_ty.unwrap_or_else(|| syn::parse_quote! { i64 });

    let identity_fields: Vec<(&str, Type)> = vec![
        ("id", syn::parse_quote! { ::core::option::Option<#id_type> }),
        ("uuid", syn::parse_quote! { ::metadata_domain::uuid::Uuid }),
        ("name", syn::parse_quote! { ::std::string::String }),
        (
            "description",
            syn::parse_quote! { ::core::option::Option<::std::string::String> },
        ),
        (
            "retirement",
            syn::parse_quote! { ::metadata_domain::value_object::Retirement },
        ),
    ];
    prepend_required_fields(fields_named, &identity_fields);

    if let Some(attr_ty) = cfg.attribute_ty.as_ref() {
        let set_ty: Type = syn::parse_quote! {
            ::core::option::Option<::metadata_domain::customizable::AttributeSet<#attr_ty>>
        };
        append_field_if_missing(fields_named, "attributes", &set_ty);
    }

    // 合并/规范 derive：默认添加 Debug（可通过 debug=false 关闭）、Default、Clone、Serialize、Deserialize
    let required = with_debug(
        vec![
            syn::parse_quote!(Default),
            syn::parse_quote!(Clone),
            syn::parse_quote!(serde::Serialize),
            syn::parse_quote!(serde::Deserialize),
        ],
        cfg.derive_debug,
    );
    apply_derives(&mut st.attrs, required);

    let out_struct = ItemStruct { ..st };

    let ident = &out_struct.ident;
    let generics = out_struct.generics.clone();
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let init_attributes = if cfg.attribute_ty.is_some() {
        quote! {
            attributes: ::core::option::Option::Some(
                ::metadata_domain::customizable::AttributeSet::new()
            ),
        }
    } else {
        quote! {}
    };

    let customizable_impl = match cfg.attribute_ty.as_ref() {
        Some(attr_ty) => quote! {
            impl #impl_generics ::metadata_domain::customizable::Customizable for #ident #ty_generics #where_clause {
                type Attribute = #attr_ty;

                fn attributes(&self) -> ::core::option::Option<&::metadata_domain::customizable::AttributeSet<Self::Attribute>> {
                    self.attributes.as_ref()
                }

                fn attributes_mut(&mut self) -> ::core::option::Option<&mut ::metadata_domain::customizable::AttributeSet<Self::Attribute>> {
                    self.attributes.as_mut()
                }

                fn set_attributes(&mut self, attributes: ::core::option::Option<::metadata_domain::customizable::AttributeSet<Self::Attribute>>) {
                    self.attributes = attributes;
                }
            }
        },
        None => quote! {},
    };

    let expanded = quote! {
        #out_struct

        impl #impl_generics #ident #ty_generics #where_clause {
            /// 以给定名称创建尚未持久化的元数据
            pub fn new(name: impl ::core::convert::Into<::std::string::String>) -> Self {
                Self {
                    uuid: ::metadata_domain::uuid::Uuid::new_v4(),
                    name: name.into(),
                    #init_attributes
                    ..::core::default::Default::default()
                }
            }
        }

        impl #impl_generics ::metadata_domain::entity::Entity for #ident #ty_generics #where_clause {
            type Id = #id_type;

            fn id(&self) -> ::core::option::Option<&Self::Id> { self.id.as_ref() }

            fn uuid(&self) -> ::metadata_domain::uuid::Uuid { self.uuid }
        }

        impl #impl_generics ::metadata_domain::metadata::Metadata for #ident #ty_generics #where_clause {
            fn name(&self) -> &str { &self.name }

            fn description(&self) -> ::core::option::Option<&str> { self.description.as_deref() }

            fn retirement(&self) -> &::metadata_domain::value_object::Retirement { &self.retirement }

            fn retirement_mut(&mut self) -> &mut ::metadata_domain::value_object::Retirement {
                &mut self.retirement
            }
        }

        #customizable_impl
    };

    TokenStream::from(expanded)
}

// -------- parsing --------

struct MetadataAttrConfig {
    id_ty: Option<Type>,
    attribute_ty: Option<Type>,
    derive_debug: Option<bool>,
}

impl Parse for MetadataAttrConfig {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut cfg = Self {
            id_ty: None,
            attribute_ty: None,
            derive_debug: None,
        };

        while !input.is_empty() {
            let key: syn::Ident = input.parse()?;
            if key == "id" {
                let _eq: Token![=] = input.parse()?;
                let ty: Type = input.parse()?;
                set_once(&mut cfg.id_ty, ty, "id", key.span())?;
            } else if key == "attribute" {
                let _eq: Token![=] = input.parse()?;
                let ty: Type = input.parse()?;
                set_once(&mut cfg.attribute_ty, ty, "attribute", key.span())?;
            } else if key == "debug" {
                let value = parse_bool_value(input, "debug")?;
                set_once(&mut cfg.derive_debug, value, "debug", key.span())?;
            } else {
                return Err(syn::Error::new(
                    key.span(),
                    "unknown key in attribute; expected 'id', 'attribute' or 'debug'",
                ));
            }

            if input.is_empty() {
                break;
            }
            let _comma: Token![,] = input.parse()?;
        }

        Ok(cfg)
    }
}
