//! wapi2 Models - Value objects returned by the server.
//!
//! All types are read-only projections of server state. The client only
//! forwards them to the caller; nothing here is mutated after decoding.

pub mod models;

pub use models::contact::Contact;
pub use models::group::Group;
pub use models::session::{Session, SessionStatus};
