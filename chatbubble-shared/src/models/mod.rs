//! Transcript record types.

pub mod avatar;
pub mod message;
pub mod role;
pub mod timestamp;

pub use avatar::AvatarSet;
pub use message::Message;
pub use role::Role;
pub use timestamp::Timestamp;
