pub mod http_server;
pub mod service_manager;

pub use http_server::{build_router, AppState, HttpService};
pub use service_manager::{Service, ServiceManager};
