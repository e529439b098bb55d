pub mod bootstrap;
pub mod config;
pub mod contract;
pub mod error;
pub mod handlers;
pub mod host;
pub mod invocation;
pub mod response;

pub use contract::AssetTrackingContract;
pub use invocation::Invocation;
pub use response::Response;
