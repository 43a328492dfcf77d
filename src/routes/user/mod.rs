pub mod get;
pub mod list;
pub mod notifications;
pub mod update;
pub mod visibility;
