pub mod dto;
pub mod handlers;

pub use dto::{ProductDto, ProductRequest};
