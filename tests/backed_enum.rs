#[cfg(test)]
mod tests {
    use hydrate::{AsValue, BackedEnum, DeclaredType, EnumCode, Value};
    use hydrate_tests::{InvoiceStatus, UserType};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, BackedEnum)]
    enum Direction {
        North,
        #[hydrate(code = "S")]
        South,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, BackedEnum)]
    enum Priority {
        #[hydrate(code = 10)]
        Low,
        #[hydrate(code = 20)]
        High,
    }

    #[test]
    fn string_codes() {
        let def = UserType::enum_def();
        assert_eq!(def.name, "hydrate_tests::user::UserType");
        assert_eq!(
            def.codes,
            [EnumCode::Varchar("REGULAR"), EnumCode::Varchar("PREMIUM")]
        );
        assert_eq!(UserType::Premium.code(), EnumCode::Varchar("PREMIUM"));
        assert_eq!(
            UserType::from_code(&EnumCode::Varchar("REGULAR")),
            Some(UserType::Regular)
        );
        assert_eq!(UserType::from_code(&EnumCode::Varchar("regular")), None);
        assert_eq!(UserType::declared_type(), DeclaredType::Enum(def));
    }

    #[test]
    fn integer_codes() {
        let def = InvoiceStatus::enum_def();
        assert_eq!(
            def.codes,
            [
                EnumCode::Integer(0),
                EnumCode::Integer(1),
                EnumCode::Integer(2),
                EnumCode::Integer(-1),
            ]
        );
        assert_eq!(InvoiceStatus::Cancelled.code(), EnumCode::Integer(-1));
        assert_eq!(Priority::High.code(), EnumCode::Integer(20));
        assert_eq!(Priority::from_code(&EnumCode::Integer(10)), Some(Priority::Low));
    }

    #[test]
    fn variant_name_as_code() {
        assert_eq!(Direction::North.code(), EnumCode::Varchar("North"));
        assert_eq!(Direction::South.code(), EnumCode::Varchar("S"));
    }

    #[test]
    fn from_value() {
        assert_eq!(
            InvoiceStatus::try_from_value(Value::Int64(Some(2))).ok(),
            Some(InvoiceStatus::Paid)
        );
        assert_eq!(
            InvoiceStatus::try_from_value(Value::Varchar(Some(" 1 ".into()))).ok(),
            Some(InvoiceStatus::Issued)
        );
        assert_eq!(
            UserType::try_from_value(Value::Varchar(Some("PREMIUM".into()))).ok(),
            Some(UserType::Premium)
        );
        assert!(InvoiceStatus::try_from_value(Value::Int64(Some(3))).is_err());
        assert!(UserType::try_from_value(Value::Int64(Some(1))).is_err());
        let error = UserType::try_from_value(Value::Varchar(Some("GOLD".into())))
            .expect_err("GOLD is not a user type");
        assert!(error.to_string().contains("is not a valid backing value"));
    }

    #[test]
    fn as_value() {
        assert_eq!(
            UserType::Regular.as_value(),
            Value::Enum(Some(EnumCode::Varchar("REGULAR")))
        );
        assert_eq!(
            Some(InvoiceStatus::Draft).as_value(),
            Value::Enum(Some(EnumCode::Integer(0)))
        );
        assert_eq!(None::<InvoiceStatus>.as_value(), Value::Enum(None));
        assert!(<Option<UserType> as AsValue>::nullable());
    }
}
