// Domain layer modules
pub mod photo_reference;
pub mod product_record;
pub mod upload_request;

// Re-exports
pub use photo_reference::{IMAGE_KEY_PREFIX, PHOTO_CONTENT_TYPE, object_key, public_url};
pub use product_record::ProductRecord;
pub use upload_request::{UploadRequest, UploadRequestError, ValidatedUpload};
