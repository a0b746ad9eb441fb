use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(validate_email("jdoe@unomaha.edu").is_ok());
        assert!(validate_email("first.last+cslc@mail.unomaha.edu").is_ok());
    }

    #[test]
    fn test_invalid_email() {
        assert!(validate_email("jdoe").is_err());
        assert!(validate_email("jdoe@unomaha").is_err());
        assert!(validate_email("@unomaha.edu").is_err());
    }
}
