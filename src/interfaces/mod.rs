pub mod csv;
pub mod http;
