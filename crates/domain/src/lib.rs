#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use std::slice::Iter;

pub mod catalog;
mod error;
mod exercise;
mod generator;
mod plan;
mod profile;
mod service;
mod template;

pub use error::*;
pub use exercise::*;
pub use generator::*;
pub use plan::*;
pub use profile::*;
pub use service::*;
pub use template::*;

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}
