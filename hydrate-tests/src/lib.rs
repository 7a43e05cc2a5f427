mod dates;
mod invoice;
mod nullable;
mod product;
mod user;

pub use dates::*;
pub use invoice::*;
pub use nullable::*;
pub use product::*;
pub use user::*;

use log::LevelFilter;
use std::env;

pub fn init_logs() {
    let mut logger = env_logger::builder();
    logger
        .is_test(true)
        .format_file(true)
        .format_line_number(true);
    if env::var("RUST_LOG").is_err() {
        logger.filter_level(LevelFilter::Warn);
    }
    let _ = logger.try_init();
}
