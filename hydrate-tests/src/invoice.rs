use hydrate::{BackedEnum, Entity};
use rust_decimal::Decimal;
use time::Date;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, BackedEnum)]
pub enum InvoiceStatus {
    Draft = 0,
    Issued = 1,
    Paid = 2,
    Cancelled = -1,
}

#[derive(Debug, Clone, PartialEq, Entity)]
#[hydrate(table = "invoices")]
pub struct Invoice {
    pub id: Uuid,
    #[hydrate(column = "invoice_number")]
    pub number: u32,
    pub total: Decimal,
    #[hydrate(format = "[year]-[month]-[day]")]
    pub issued_on: Date,
    pub status: InvoiceStatus,
    pub note: Option<String>,
}
