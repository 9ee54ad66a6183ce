//! 宏参数解析的共用部分
//!
//! `#[value_object]` 与 `#[entity_id]` 只接受 `debug = bool`；
//! `#[metadata]` 在此基础上增加 `id`、`attribute`，并复用同一布尔参数解析。
//!
use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::{Result, Token, parse::Parse, parse::ParseStream};

/// 解析 `= <bool literal>`，`key` 仅用于错误信息
pub(crate) fn parse_bool_value(input: ParseStream, key: &str) -> Result<bool> {
    let _eq: Token![=] = input.parse()?;
    let expr: syn::Expr = input.parse()?;
    match expr {
        syn::Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Bool(b),
            ..
        }) => Ok(b.value()),
        other => Err(syn::Error::new(
            other.span(),
            format!("expected boolean literal for '{key}'"),
        )),
    }
}

/// 同一键出现两次时报错
pub(crate) fn set_once<T>(slot: &mut Option<T>, value: T, key: &str, span: Span) -> Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new(
            span,
            format!("duplicate key '{key}' in attribute"),
        ));
    }
    *slot = Some(value);
    Ok(())
}

/// 仅含 `debug = bool` 键的宏参数
pub(crate) struct DebugAttrConfig {
    pub(crate) derive_debug: Option<bool>,
}

impl Parse for DebugAttrConfig {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut derive_debug = None;
        while !input.is_empty() {
            let key: syn::Ident = input.parse()?;
            if key != "debug" {
                return Err(syn::Error::new(
                    key.span(),
                    "unknown key in attribute; expected 'debug'",
                ));
            }
            let value = parse_bool_value(input, "debug")?;
            set_once(&mut derive_debug, value, "debug", key.span())?;
            if input.is_empty() {
                break;
            }
            let _comma: Token![,] = input.parse()?;
        }
        Ok(Self { derive_debug })
    }
}
