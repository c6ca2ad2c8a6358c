pub mod controller;
pub mod dtos;
pub mod enums;
pub mod errors;
pub mod models;
pub mod service;
pub mod util;


pub static CURRENCY: &str = "EUR";
