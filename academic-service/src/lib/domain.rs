pub mod auth;
pub mod employee;
pub mod shared;
