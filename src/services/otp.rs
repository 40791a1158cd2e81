use log::info;

use crate::error::DomainResult;
use crate::models::PendingSignup;
use crate::utils::generate_otp;

/// Produces signup codes and gets them to the user.
pub trait OtpSender: Send + Sync {
    fn generate(&self) -> String {
        generate_otp()
    }

    fn send(&self, to: &PendingSignup, otp: &str) -> DomainResult<()>;
}

/// Simulated out-of-band delivery: the code is logged and shown to the user
/// in the signup response.
pub struct InlineOtpSender;

impl OtpSender for InlineOtpSender {
    fn send(&self, to: &PendingSignup, otp: &str) -> DomainResult<()> {
        info!("OTP sent to {} ({}): {}", to.phone, to.role, otp);
        Ok(())
    }
}

/// Always issues the same code. For demos and tests.
pub struct FixedOtpSender(pub String);

impl FixedOtpSender {
    pub fn new(otp: impl Into<String>) -> Self {
        FixedOtpSender(otp.into())
    }
}

impl OtpSender for FixedOtpSender {
    fn generate(&self) -> String {
        self.0.clone()
    }

    fn send(&self, to: &PendingSignup, otp: &str) -> DomainResult<()> {
        info!("OTP sent to {} ({}): {}", to.phone, to.role, otp);
        Ok(())
    }
}
