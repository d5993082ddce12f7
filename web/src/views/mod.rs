pub mod apply;
pub mod documents_download;
pub mod documents_upload;
pub mod home;
pub mod interview;
pub mod login;
pub mod not_found;

pub use apply::ApplyPage;
pub use documents_download::DocumentsDownloadPage;
pub use documents_upload::DocumentsUploadPage;
pub use home::HomePage;
pub use interview::InterviewPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
