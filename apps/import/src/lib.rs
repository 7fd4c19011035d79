pub mod errors;
pub mod extract;
pub mod models;
pub mod parser;
pub mod populate;
