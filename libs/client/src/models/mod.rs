//! Wire types exchanged with the olympiad platform

pub mod olympiad;
pub mod result;
pub mod user;

// Re-export for convenience
pub use olympiad::{Level, NewOlympiad, Olympiad, OlympiadFilter};
pub use result::{NewResult, OlympiadResult, StudentStats};
pub use user::{AuthPayload, RegisterData, Role, User};
