pub mod capture;
pub mod captured;

pub use capture::{AccessPolicy, PageInfo, Restrictions, SessionCapture, StorageState, TimingState};
pub use captured::{CapturedSession, CapturedStore};
