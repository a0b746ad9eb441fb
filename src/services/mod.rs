pub mod admin;
pub mod auth;
pub mod pages;
pub mod reports;

pub use admin::{AdminKind, AdminService};
pub use auth::AuthService;
pub use pages::PageService;
pub use reports::ReportService;
