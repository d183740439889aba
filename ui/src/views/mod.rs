//! Routed pages. Each reads the auth handle from context, since the router
//! constructs them without props.

mod home;
mod notifications;
mod profile;

pub use home::Home;
pub use notifications::Notifications;
pub use profile::Profile;
