pub mod query;
pub mod response;
pub mod router;
pub mod server;
