#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod memory;
pub mod record;
