pub mod coindcx;
pub mod coinswitch;
pub mod http;
