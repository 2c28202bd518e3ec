pub mod auth;
pub mod body;
pub mod response;

pub use auth::AuthenticatedUser;
pub use body::parse_json;
pub use response::{failure, success, ErrorKind, Failure, HandlerResult, Success};
