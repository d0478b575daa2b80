pub mod download;
pub mod health;
pub mod validation;
pub mod verify;

pub use download::{register_email, track_download};
pub use health::liveness;
pub use verify::{check_verification, redeem_token, request_verification};
