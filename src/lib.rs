//! Typed entities out of database rows.
//!
//! ```rust
//! use hydrate::{BackedEnum, Entity, Hydrator, RowsResult, row};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, BackedEnum)]
//! enum Kind {
//!     Regular,
//!     Premium,
//! }
//!
//! #[derive(Entity)]
//! struct Account {
//!     id: i64,
//!     display_name: Option<String>,
//!     kind: Kind,
//! }
//!
//! let hydrator = Hydrator::new();
//! let mut result = RowsResult::new([
//!     row! { "id" => 1, "display_name" => "John", "kind" => "Premium" },
//! ]);
//! let account: Account = hydrator
//!     .create_one(&mut result)
//!     .expect("The row must produce an account")
//!     .expect("There is exactly one row");
//! assert_eq!(account.id, 1);
//! assert_eq!(account.display_name.as_deref(), Some("John"));
//! assert_eq!(account.kind, Kind::Premium);
//! ```
pub use ::hydrate_core::*;
pub use ::hydrate_macros::*;
