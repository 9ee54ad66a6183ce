use proc_macro2::Span;
use syn::{Field, FieldsNamed, Ident, Token, Type, punctuated::Punctuated};

fn is_named(field: &Field, name: &str) -> bool {
    field.ident.as_ref().map(|i| i == name).unwrap_or(false)
}

/// 确保具名字段结构体包含所需字段，并按给定顺序置于最前
/// - 已存在的同名字段复用原定义（保留用户的属性与类型）
/// - 其余字段保持原始相对顺序
pub(crate) fn prepend_required_fields(fields_named: &mut FieldsNamed, required: &[(&str, Type)]) {
    let old_named = fields_named.named.clone();
    let mut new_named: Punctuated<Field, Token![,]> = Punctuated::new();

    for (name, ty) in required.iter() {
        match old_named.iter().find(|f| is_named(f, name)) {
            Some(existing) => new_named.push(existing.clone()),
            None => {
                let ident = Ident::new(name, Span::call_site());
                new_named.push(syn::parse_quote! { #ident: #ty });
            }
        }
    }

    for f in old_named.into_iter() {
        if !required.iter().any(|(n, _)| is_named(&f, n)) {
            new_named.push(f);
        }
    }

    fields_named.named = new_named;
}

/// 若缺失则在末尾追加字段；已存在时保持用户定义不变
pub(crate) fn append_field_if_missing(fields_named: &mut FieldsNamed, name: &str, ty: &Type) {
    if fields_named.named.iter().any(|f| is_named(f, name)) {
        return;
    }
    let ident = Ident::new(name, Span::call_site());
    fields_named.named.push(syn::parse_quote! { #ident: #ty });
}
