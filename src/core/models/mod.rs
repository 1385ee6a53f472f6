pub mod audit;
pub mod user;

pub use audit::AppLog;
pub use user::{NewUser, User, UserPatch};
