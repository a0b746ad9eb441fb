pub mod random_code;
pub mod validate;

pub use random_code::generate_secret;
pub use validate::validate_email;
