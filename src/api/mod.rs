pub mod resend_api;

pub use resend_api::{OutboundEmail, ResendApi};
