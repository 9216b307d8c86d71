// Application layer modules
pub mod response;
pub mod upload_handler;

// Re-exports
pub use response::{FAILURE_MESSAGE, SUCCESS_MESSAGE, failure_response, success_response};
pub use upload_handler::{UploadHandler, UploadHandlerError};
