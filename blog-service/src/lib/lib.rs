pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::account;
pub use domain::post;
pub use outbound::bootstrap;
pub use outbound::repositories;
