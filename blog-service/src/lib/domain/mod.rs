pub mod account;
pub mod post;
