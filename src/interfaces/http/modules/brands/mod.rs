pub mod dto;
pub mod handlers;

pub use dto::{BrandDto, BrandRequest};
