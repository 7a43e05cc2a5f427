mod backed_enum;
mod decode_entity;
mod decode_field;

use backed_enum::backed_enum;
use decode_entity::decode_entity;
use proc_macro::TokenStream;
use quote::quote;
use syn::{ItemEnum, ItemStruct, parse_macro_input};

#[proc_macro_derive(Entity, attributes(hydrate))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    let entity = decode_entity(parse_macro_input!(input as ItemStruct));
    let name = &entity.item.ident;
    let name_str = name.to_string();
    let table = &entity.table;
    let field_defs = entity.fields.iter().map(|field| {
        let name = &field.name;
        let ty = &field.ty;
        let column = match &field.column {
            Some(column) => quote!(Some(#column)),
            None => quote!(None),
        };
        let markers = &field.markers;
        quote! {
            ::hydrate::FieldDef {
                name: #name,
                declared_type: Some(<#ty as ::hydrate::AsValue>::declared_type()),
                nullable: <#ty as ::hydrate::AsValue>::nullable(),
                column: #column,
                markers: ::std::vec![#(#markers),*].into_boxed_slice(),
            }
        }
    });
    let construct = entity.fields.iter().map(|field| {
        let ident = &field.ident;
        let ty = &field.ty;
        quote!(#ident: args.take::<#ty>()?)
    });
    let values = entity.fields.iter().map(|field| {
        let ident = &field.ident;
        quote!(::hydrate::AsValue::as_value(::std::clone::Clone::clone(&self.#ident)))
    });
    let getters = entity.fields.iter().map(|field| {
        let ident = &field.ident;
        let name = &field.name;
        quote! {
            #name => Some(
                (|entity: &Self| ::hydrate::AsValue::as_value(::std::clone::Clone::clone(&entity.#ident)))
                    as fn(&Self) -> ::hydrate::Value,
            )
        }
    });
    quote! {
        impl ::hydrate::Entity for #name {
            fn shape() -> &'static ::hydrate::EntityShape {
                static SHAPE: ::std::sync::LazyLock<::hydrate::EntityShape> =
                    ::std::sync::LazyLock::new(|| ::hydrate::EntityShape {
                        name: ::std::concat!(::std::module_path!(), "::", #name_str),
                        table: #table,
                        fields: Some(::std::vec![#(#field_defs),*].into_boxed_slice()),
                    });
                &SHAPE
            }

            fn construct(args: &mut ::hydrate::Arguments) -> ::hydrate::Result<Self> {
                Ok(Self {
                    #(#construct,)*
                })
            }

            fn values(&self) -> ::std::vec::Vec<::hydrate::Value> {
                ::std::vec![#(#values),*]
            }

            fn getter(name: &str) -> Option<fn(&Self) -> ::hydrate::Value> {
                match name {
                    #(#getters,)*
                    _ => None,
                }
            }
        }
    }
    .into()
}

#[proc_macro_derive(BackedEnum, attributes(hydrate))]
pub fn derive_backed_enum(input: TokenStream) -> TokenStream {
    backed_enum(parse_macro_input!(input as ItemEnum)).into()
}
