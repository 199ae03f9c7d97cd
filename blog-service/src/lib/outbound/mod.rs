pub mod bootstrap;
pub mod repositories;
