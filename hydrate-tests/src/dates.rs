use hydrate::Entity;
use time::{Date, PrimitiveDateTime};

#[derive(Debug, Clone, PartialEq, Entity)]
pub struct DateEntity {
    #[hydrate(format = "[year]-[month]-[day]")]
    pub date: Date,
    #[hydrate(format = "[day]/[month]/[year]")]
    #[hydrate(format = "[year]-[month]-[day]")]
    pub european_date: Date,
    #[hydrate(format = "[year]-[month]-[day] [hour]:[minute]:[second]")]
    pub date_time: PrimitiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Entity)]
pub struct MissingDateFormat {
    pub id: i32,
    pub date: PrimitiveDateTime,
    pub name: String,
}
