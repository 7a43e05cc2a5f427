use hydrate::{BackedEnum, Entity, RowLabeled, Value, row};
use time::{PrimitiveDateTime, macros::datetime};

#[derive(Debug, Clone, Copy, PartialEq, Eq, BackedEnum)]
pub enum UserType {
    #[hydrate(code = "REGULAR")]
    Regular,
    #[hydrate(code = "PREMIUM")]
    Premium,
}

#[derive(Debug, Clone, PartialEq, Entity)]
#[hydrate(table = "user_123")]
pub struct User {
    #[hydrate(contingent)]
    pub id: Option<i64>,
    pub username: Option<String>,
    pub password: String,
    pub is_subscriber: bool,
    pub average_order_price: f64,
    #[hydrate(format = "[year]-[month]-[day] [hour]:[minute]:[second]")]
    pub registered_at: PrimitiveDateTime,
    pub user_type: UserType,
    pub config: String,
}

impl User {
    pub fn john() -> Self {
        Self {
            id: Some(1),
            username: Some("John Doe".into()),
            password: "$gjh@Dadasdcs".into(),
            is_subscriber: true,
            average_order_price: 1267.209,
            registered_at: datetime!(2022-01-01 12:12:12),
            user_type: UserType::Regular,
            config: "{test: true}".into(),
        }
    }
}

/// Row a driver would return for [`User::john`].
pub fn john_row() -> RowLabeled {
    row! {
        "id" => 1,
        "username" => "John Doe",
        "password" => "$gjh@Dadasdcs",
        "is_subscriber" => 1,
        "average_order_price" => 1267.209,
        "registered_at" => "2022-01-01 12:12:12",
        "user_type" => "REGULAR",
        "config" => "{test: true}",
    }
}

/// Complete user row, `username` and `id` vary.
pub fn user_row(id: i64, username: Option<&str>) -> RowLabeled {
    row! {
        "id" => id,
        "username" => username.map(String::from),
        "password" => "secret",
        "is_subscriber" => 0,
        "average_order_price" => Value::Float64(Some(0.0)),
        "registered_at" => "2023-06-30 08:00:00",
        "user_type" => "PREMIUM",
        "config" => "{}",
    }
}
