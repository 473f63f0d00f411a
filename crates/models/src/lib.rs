//! Schema registry for the content backend's document kinds.
//!
//! Each record type maps to one document collection; the collection name is
//! the lowercased type name. Validation rejects malformed input before it
//! reaches storage.

pub mod errors;
pub mod inquiry;
pub mod service;
pub mod stored;
pub mod team_member;

pub use inquiry::Inquiry;
pub use service::Service;
pub use stored::Stored;
pub use team_member::TeamMember;
