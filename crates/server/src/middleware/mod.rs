pub mod identity;
pub mod request_id;

pub use identity::RequestUserService;
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
