use rand::Rng;
use regex::Regex;

const AADHAR_PATTERN: &str = r"^[0-9]{12}$";

/// Syntactic check only: exactly twelve ASCII digits.
pub fn is_valid_aadhar(aadhar: &str) -> bool {
    Regex::new(AADHAR_PATTERN)
        .map(|re| re.is_match(aadhar))
        .unwrap_or(false)
}

/// Six-digit code in `100000..=999999`. Not suitable for anything secret.
pub fn generate_otp() -> String {
    let mut rng = rand::thread_rng();
    let otp: u32 = rng.gen_range(100_000..=999_999);
    otp.to_string()
}
