//! Data transfer objects handed from the server to the rendered pages.

pub mod audit;
pub mod guild;
pub mod item;
pub mod member;
