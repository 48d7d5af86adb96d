pub mod client;
pub mod registrar;
pub mod services;
