pub mod api;
pub mod conf;
