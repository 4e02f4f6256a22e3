pub mod analysis;
pub mod layout;
