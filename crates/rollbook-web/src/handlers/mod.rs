pub mod add;
pub mod deregister;
pub mod home;
pub mod list;
