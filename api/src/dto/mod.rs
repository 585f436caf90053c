pub mod page;
pub mod session;

pub use gig_shared::ErrorResponse;
pub use page::PageView;
pub use session::{LoginForm, LogoutResponse, SessionResponse, VerifyOtpForm};
