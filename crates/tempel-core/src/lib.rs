pub mod error;
pub mod messages;
pub mod notification;
pub mod ports;
pub mod text;
pub mod theme;
pub mod view;
