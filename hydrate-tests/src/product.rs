use hydrate::Entity;

#[derive(Debug, Clone, PartialEq, Entity)]
#[hydrate(table = "product")]
pub struct Product {
    pub id: i32,
    pub is_purchasable: bool,
    pub config: String,
}

/// Repeatable markers, read back by converters asking for the `test` kind.
#[derive(Debug, Clone, PartialEq, Entity)]
#[hydrate(table = "multiple_attributes")]
pub struct MultipleAttributes {
    pub last_name: String,
    #[hydrate(tag(test = 1), tag(test = 2))]
    #[hydrate(tag(test = 3), tag(test = 4))]
    pub product_count: i32,
}

/// Field names with digit runs, written the way a camel case schema would.
#[derive(Debug, Clone, PartialEq, Entity)]
#[allow(non_snake_case)]
pub struct NumericPropertyName {
    pub totalConsumption90Days: String,
    pub some01929Numeric9182Prop000Name192: String,
}
