pub mod coerce;
pub mod handlers;
pub mod middleware;
pub mod router;
