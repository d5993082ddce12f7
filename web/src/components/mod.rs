pub mod auth_guard;
pub mod confirm_dialog;
pub mod loading;
pub mod message_banner;
pub mod navbar;

// Re-export commonly used components
pub use auth_guard::SessionGuard;
pub use confirm_dialog::ConfirmBookingDialog;
pub use loading::LoadingView;
pub use message_banner::ResultBanner;
pub use navbar::PortalNavBar;
