use crate::decode_field::{FieldMetadata, decode_field};
use hydrate_core::to_column_name;
use quote::ToTokens;
use syn::{Fields, ItemStruct, LitStr, parse::ParseBuffer};

pub(crate) struct EntityMetadata {
    pub(crate) item: ItemStruct,
    pub(crate) table: String,
    pub(crate) fields: Vec<FieldMetadata>,
}

pub fn decode_entity(item: ItemStruct) -> EntityMetadata {
    if !item.generics.params.is_empty() {
        panic!(
            "Entity `{}` cannot be generic, derive it on a concrete struct",
            item.ident
        );
    }
    let Fields::Named(..) = &item.fields else {
        panic!(
            "Entity `{}` must be a struct with named fields",
            item.ident
        );
    };
    let fields = item.fields.iter().map(decode_field).collect();
    let mut table = to_column_name(&item.ident.to_string());
    if table.starts_with('_') {
        table.remove(0);
    }
    for attr in &item.attrs {
        let meta = &attr.meta;
        if !meta.path().is_ident("hydrate") {
            continue;
        }
        let Ok(list) = meta.require_list() else {
            panic!("Error while parsing `hydrate`, use it like: `#[hydrate(attribute = value, ..)]`");
        };
        let _ = list.parse_nested_meta(|arg| {
            if arg.path.is_ident("table") {
                let Ok(value) = arg.value().and_then(ParseBuffer::parse::<LitStr>) else {
                    panic!("Error while parsing `table`, use it like: `#[hydrate(table = \"my_table\")]`");
                };
                table = value.value();
            } else {
                panic!(
                    "Unknown attribute `{}` inside hydrate macro",
                    arg.path.to_token_stream()
                );
            }
            Ok(())
        });
    }
    EntityMetadata {
        item,
        table,
        fields,
    }
}
