pub mod form;
pub mod response;

pub use form::FormFields;
pub use response::JsonList;
