pub mod application;
pub mod domain;
pub mod interfaces;
pub mod smoke;
