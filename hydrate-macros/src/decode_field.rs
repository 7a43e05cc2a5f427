use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Expr, Field, Ident, LitStr, Type, parse::ParseBuffer};

pub(crate) struct FieldMetadata {
    pub(crate) ident: Ident,
    pub(crate) ty: Type,
    /// Field identifier without the raw prefix.
    pub(crate) name: String,
    pub(crate) column: Option<String>,
    pub(crate) markers: Vec<TokenStream>,
}

pub fn decode_field(field: &Field) -> FieldMetadata {
    let ident = field
        .ident
        .clone()
        .expect("Field is expected to have a name");
    let name = ident.to_string();
    let name = name.strip_prefix("r#").unwrap_or(&name).to_string();
    let mut metadata = FieldMetadata {
        ident,
        ty: field.ty.clone(),
        name,
        column: None,
        markers: Vec::new(),
    };
    for attr in &field.attrs {
        let meta = &attr.meta;
        if !meta.path().is_ident("hydrate") {
            continue;
        }
        let Ok(list) = meta.require_list() else {
            panic!("Error while parsing `hydrate`, use it like: `#[hydrate(attribute = value, ...)]`");
        };
        let _ = list.parse_nested_meta(|arg| {
            if arg.path.is_ident("column") {
                let Ok(v) = arg.value().and_then(ParseBuffer::parse::<LitStr>) else {
                    panic!("Error while parsing `column`, use it like: `#[hydrate(column = \"my_column\")]`");
                };
                metadata.column = Some(v.value());
            } else if arg.path.is_ident("contingent") {
                let Err(..) = arg.value() else {
                    // value() is Err for Meta::Path
                    panic!("Error while parsing `contingent`, use it like: `#[hydrate(contingent)]`");
                };
                metadata.markers.push(quote!(::hydrate::Marker::Contingent));
            } else if arg.path.is_ident("format") {
                let Ok(v) = arg.value().and_then(ParseBuffer::parse::<LitStr>) else {
                    panic!(
                        "Error while parsing `format`, use it like: `#[hydrate(format = \"[year]-[month]-[day]\")]`"
                    );
                };
                metadata.markers.push(quote! {
                    ::hydrate::Marker::DateTimeFormat(::std::borrow::Cow::Borrowed(#v))
                });
            } else if arg.path.is_ident("tag") {
                let parsed = arg.parse_nested_meta(|tag| {
                    let Some(kind) = tag.path.get_ident().map(ToString::to_string) else {
                        panic!("Tag kind must be a plain identifier, use it like: `#[hydrate(tag(kind = value))]`");
                    };
                    let Ok(value) = tag.value().and_then(ParseBuffer::parse::<Expr>) else {
                        panic!("Error while parsing `tag`, use it like: `#[hydrate(tag({kind} = value))]`");
                    };
                    metadata.markers.push(quote! {
                        ::hydrate::Marker::Tagged(#kind, ::hydrate::Value::from(#value))
                    });
                    Ok(())
                });
                if parsed.is_err() {
                    panic!("Error while parsing `tag`, use it like: `#[hydrate(tag(kind = value))]`");
                }
            } else {
                panic!(
                    "Unknown attribute `{}` inside hydrate macro",
                    arg.path.to_token_stream()
                );
            }
            Ok(())
        });
    }
    metadata
}
