use hydrate::Entity;
use time::PrimitiveDateTime;

#[derive(Debug, Clone, PartialEq, Entity)]
pub struct NullableProperties {
    pub age: Option<i32>,
    pub name: Option<String>,
    #[hydrate(format = "[year]-[month]-[day] [hour]:[minute]:[second]")]
    pub next_birthday: Option<PrimitiveDateTime>,
}
