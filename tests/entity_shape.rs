#[cfg(test)]
mod tests {
    use hydrate::{DeclaredType, Entity, Hydrator, Marker, Value};
    use hydrate_tests::{DateEntity, Invoice, MultipleAttributes, NumericPropertyName, User};
    use std::borrow::Cow;

    #[derive(Debug, Clone, PartialEq, Entity)]
    struct _Prefixed {
        r#type: String,
    }

    #[test]
    fn user_shape() {
        let shape = User::shape();
        assert_eq!(shape.name, "hydrate_tests::user::User");
        assert_eq!(shape.table, "user_123");
        let fields = shape.fields.as_deref().expect("User is instantiable");
        assert_eq!(
            fields.iter().map(|v| v.name).collect::<Vec<_>>(),
            [
                "id",
                "username",
                "password",
                "is_subscriber",
                "average_order_price",
                "registered_at",
                "user_type",
                "config",
            ]
        );
        assert_eq!(
            fields.iter().map(|v| v.nullable).collect::<Vec<_>>(),
            [true, true, false, false, false, false, false, false]
        );
        assert_eq!(fields[0].declared_type, Some(DeclaredType::Integer));
        assert_eq!(fields[0].markers.as_ref(), [Marker::Contingent]);
        assert_eq!(fields[4].declared_type, Some(DeclaredType::Float));
        assert_eq!(fields[5].declared_type, Some(DeclaredType::Timestamp));
        assert!(matches!(
            fields[6].declared_type,
            Some(DeclaredType::Enum(def)) if def.name == "hydrate_tests::user::UserType"
        ));
        assert!(fields.iter().all(|v| v.column.is_none()));
    }

    #[test]
    fn markers_in_declaration_order() {
        let fields = DateEntity::shape()
            .fields
            .as_deref()
            .expect("DateEntity is instantiable");
        assert_eq!(
            fields[1].markers.as_ref(),
            [
                Marker::DateTimeFormat(Cow::Borrowed("[day]/[month]/[year]")),
                Marker::DateTimeFormat(Cow::Borrowed("[year]-[month]-[day]")),
            ]
        );
        let fields = MultipleAttributes::shape()
            .fields
            .as_deref()
            .expect("MultipleAttributes is instantiable");
        assert!(fields[0].markers.is_empty());
        assert_eq!(fields[1].markers.len(), 4);
        assert_eq!(
            fields[1].markers[3],
            Marker::Tagged("test", Value::Int64(Some(4)))
        );
    }

    #[test]
    fn column_override() {
        let shape = Invoice::shape();
        assert_eq!(shape.table, "invoices");
        let fields = shape.fields.as_deref().expect("Invoice is instantiable");
        assert_eq!(fields[1].name, "number");
        assert_eq!(fields[1].column, Some("invoice_number"));
        let schema = Hydrator::new()
            .schema::<Invoice>()
            .expect("The schema must be built");
        assert_eq!(
            schema.columns.as_ref(),
            ["id", "invoice_number", "total", "issued_on", "status", "note"]
        );
        let note = schema.field("note").expect("The note field exists");
        assert!(note.nullable);
        assert!(!note.contingent);
        assert_eq!(note.declared_type, DeclaredType::Varchar);
    }

    #[test]
    fn default_names() {
        assert_eq!(NumericPropertyName::shape().table, "numeric_property_name");
        let shape = _Prefixed::shape();
        assert_eq!(shape.table, "prefixed");
        let fields = shape.fields.as_deref().expect("Prefixed is instantiable");
        assert_eq!(fields[0].name, "type");
        let schema = Hydrator::new()
            .schema::<NumericPropertyName>()
            .expect("The schema must be built");
        assert_eq!(
            schema.columns.as_ref(),
            [
                "total_consumption_90_days",
                "some_01929_numeric_9182_prop_000_name_192",
            ]
        );
    }

    #[test]
    fn getters() {
        let user = User::john();
        let username = User::getter("username").expect("Every field has a getter");
        assert_eq!(username(&user), Value::Varchar(Some("John Doe".into())));
        let id = User::getter("id").expect("Every field has a getter");
        assert_eq!(id(&user), Value::Int64(Some(1)));
        assert!(User::getter("getUsername").is_none());
        assert_eq!(user.values().len(), 8);
    }

    #[test]
    fn schema_cache() {
        let hydrator = Hydrator::new();
        let first = hydrator.schema::<User>().expect("The schema must be built");
        let second = hydrator.schema::<User>().expect("The schema must be built");
        assert!(std::sync::Arc::ptr_eq(&first, &second));
        assert!(first.fields[0].contingent);
        assert_eq!(first.entity, "hydrate_tests::user::User");
    }
}
