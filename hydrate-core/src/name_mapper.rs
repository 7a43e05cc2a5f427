/// Derives the storage column name from a field (or type) identifier.
///
/// Every run of uppercase letters and every run of digits is lower-cased and
/// prefixed with an underscore, unless the run opens the identifier or already
/// follows an underscore. Existing underscores are kept, so snake_case input comes
/// back unchanged.
///
/// ```rust
/// use hydrate_core::to_column_name;
/// assert_eq!(to_column_name("userId"), "user_id");
/// assert_eq!(to_column_name("html5Parser"), "html_5_parser");
/// assert_eq!(to_column_name("registered_at"), "registered_at");
/// ```
pub fn to_column_name(identifier: &str) -> String {
    let identifier = identifier.strip_prefix("r#").unwrap_or(identifier);
    let mut result = String::with_capacity(identifier.len() + 4);
    let mut previous: Option<char> = None;
    for c in identifier.chars() {
        let starts_run = match previous {
            None => false,
            Some('_') => false,
            Some(p) if c.is_ascii_uppercase() => !p.is_ascii_uppercase(),
            Some(p) if c.is_ascii_digit() => !p.is_ascii_digit(),
            Some(..) => false,
        };
        if starts_run {
            result.push('_');
        }
        result.push(c.to_ascii_lowercase());
        previous = Some(c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::to_column_name;

    #[test]
    fn camel_case() {
        assert_eq!(to_column_name("id"), "id");
        assert_eq!(to_column_name("userId"), "user_id");
        assert_eq!(to_column_name("isSubscriber"), "is_subscriber");
        assert_eq!(to_column_name("averageOrderPrice"), "average_order_price");
        assert_eq!(to_column_name("UserEntity"), "user_entity");
    }

    #[test]
    fn uppercase_runs() {
        assert_eq!(to_column_name("userID"), "user_id");
        assert_eq!(to_column_name("HTMLParser"), "htmlparser");
        assert_eq!(to_column_name("parseHTML"), "parse_html");
    }

    #[test]
    fn digit_runs() {
        assert_eq!(to_column_name("html5Parser"), "html_5_parser");
        assert_eq!(
            to_column_name("totalConsumption90Days"),
            "total_consumption_90_days"
        );
        assert_eq!(
            to_column_name("some01929Numeric9182Prop000Name192"),
            "some_01929_numeric_9182_prop_000_name_192"
        );
        assert_eq!(to_column_name("sha256"), "sha_256");
    }

    #[test]
    fn snake_case_is_untouched() {
        assert_eq!(to_column_name("registered_at"), "registered_at");
        assert_eq!(to_column_name("total_consumption_90_days"), "total_consumption_90_days");
        assert_eq!(to_column_name("_hidden"), "_hidden");
        assert_eq!(to_column_name("r#type"), "type");
        let once = to_column_name("someFieldName42");
        assert_eq!(to_column_name(&once), once);
    }
}
