pub mod account_directory;
pub mod header;
pub mod layout;
pub mod sidebar;
