pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::subject;
pub use outbound::repositories;
