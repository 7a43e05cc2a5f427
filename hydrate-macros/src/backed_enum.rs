use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Expr, ExprLit, ExprUnary, Fields, ItemEnum, Lit, UnOp, parse::ParseBuffer};

enum Code {
    Integer(i64),
    Varchar(String),
}

impl Code {
    fn from_lit(lit: &Lit) -> Option<Code> {
        match lit {
            Lit::Str(v) => Some(Code::Varchar(v.value())),
            Lit::Int(v) => v.base10_parse::<i64>().ok().map(Code::Integer),
            _ => None,
        }
    }

    fn from_discriminant(expr: &Expr) -> Option<Code> {
        match expr {
            Expr::Lit(ExprLit { lit, .. }) => Code::from_lit(lit),
            Expr::Unary(ExprUnary {
                op: UnOp::Neg(..),
                expr,
                ..
            }) => match Code::from_discriminant(expr)? {
                Code::Integer(v) => Some(Code::Integer(-v)),
                Code::Varchar(..) => None,
            },
            _ => None,
        }
    }

    fn is_integer(&self) -> bool {
        matches!(self, Code::Integer(..))
    }
}

impl ToTokens for Code {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.extend(match self {
            Code::Integer(v) => quote!(::hydrate::EnumCode::Integer(#v)),
            Code::Varchar(v) => quote!(::hydrate::EnumCode::Varchar(#v)),
        });
    }
}

pub fn backed_enum(item: ItemEnum) -> TokenStream {
    let name = &item.ident;
    let name_str = name.to_string();
    if !item.generics.params.is_empty() {
        panic!("Backed enum `{name}` cannot be generic");
    }
    let variants: Vec<_> = item
        .variants
        .iter()
        .map(|variant| {
            let Fields::Unit = variant.fields else {
                panic!(
                    "Variant `{}` of backed enum `{name}` must not carry data",
                    variant.ident
                );
            };
            let mut code = variant
                .discriminant
                .as_ref()
                .map(|(_, expr)| {
                    Code::from_discriminant(expr).unwrap_or_else(|| {
                        panic!(
                            "Discriminant of `{}` must be an integer literal to be used as its code",
                            variant.ident
                        )
                    })
                })
                .unwrap_or_else(|| Code::Varchar(variant.ident.to_string()));
            for attr in &variant.attrs {
                let meta = &attr.meta;
                if !meta.path().is_ident("hydrate") {
                    continue;
                }
                let Ok(list) = meta.require_list() else {
                    panic!("Error while parsing `hydrate`, use it like: `#[hydrate(code = \"VALUE\")]`");
                };
                let _ = list.parse_nested_meta(|arg| {
                    if arg.path.is_ident("code") {
                        let Some(value) = arg
                            .value()
                            .and_then(ParseBuffer::parse::<Lit>)
                            .ok()
                            .as_ref()
                            .and_then(Code::from_lit)
                        else {
                            panic!(
                                "Error while parsing `code`, use it like: `#[hydrate(code = \"VALUE\")]` or `#[hydrate(code = 1)]`"
                            );
                        };
                        code = value;
                    } else {
                        panic!(
                            "Unknown attribute `{}` inside hydrate macro",
                            arg.path.to_token_stream()
                        );
                    }
                    Ok(())
                });
            }
            (variant.ident.clone(), code)
        })
        .collect();
    if variants.is_empty() {
        panic!("Backed enum `{name}` must have at least one variant");
    }
    let integers = variants.iter().filter(|(_, v)| v.is_integer()).count();
    if integers != 0 && integers != variants.len() {
        panic!("Codes of backed enum `{name}` must be either all integers or all strings");
    }
    let codes = variants.iter().map(|(_, code)| code);
    let to_code = variants
        .iter()
        .map(|(variant, code)| quote!(Self::#variant => #code));
    let from_code = variants
        .iter()
        .map(|(variant, code)| quote!(#code => Some(Self::#variant)));
    quote! {
        impl ::hydrate::BackedEnum for #name {
            fn enum_def() -> &'static ::hydrate::EnumDef {
                static DEF: ::hydrate::EnumDef = ::hydrate::EnumDef {
                    name: ::std::concat!(::std::module_path!(), "::", #name_str),
                    codes: &[#(#codes),*],
                };
                &DEF
            }

            fn code(&self) -> ::hydrate::EnumCode {
                match self {
                    #(#to_code,)*
                }
            }

            fn from_code(code: &::hydrate::EnumCode) -> Option<Self> {
                match code {
                    #(#from_code,)*
                    _ => None,
                }
            }
        }

        impl ::hydrate::AsValue for #name {
            fn declared_type() -> ::hydrate::DeclaredType {
                ::hydrate::DeclaredType::Enum(<Self as ::hydrate::BackedEnum>::enum_def())
            }

            fn as_empty_value() -> ::hydrate::Value {
                ::hydrate::Value::Enum(None)
            }

            fn as_value(self) -> ::hydrate::Value {
                ::hydrate::Value::Enum(Some(::hydrate::BackedEnum::code(&self)))
            }

            fn try_from_value(value: ::hydrate::Value) -> ::hydrate::Result<Self> {
                ::hydrate::enum_from_value(value)
            }
        }
    }
}
