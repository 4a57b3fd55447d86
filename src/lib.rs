#![allow(non_snake_case)]

pub mod model;
pub mod server;
pub mod view;
