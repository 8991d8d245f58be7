pub mod contact;
pub mod navigation;
pub mod region;

pub use contact::{ContactForm, StatusKind, StatusModal};
pub use navigation::{HistoryEntry, SessionHistory};
pub use region::{ContentRegion, RegionPhase};
