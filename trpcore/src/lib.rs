pub mod article;
pub mod error;
pub mod listing;
pub mod review;
pub mod video;
