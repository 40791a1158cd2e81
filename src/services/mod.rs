pub mod identity;
pub mod otp;

pub use identity::{IdentityProvider, MockIdentityProvider};
pub use otp::{FixedOtpSender, InlineOtpSender, OtpSender};
