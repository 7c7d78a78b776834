pub use super::artists::Entity as Artists;
pub use super::shows::Entity as Shows;
pub use super::venues::Entity as Venues;
