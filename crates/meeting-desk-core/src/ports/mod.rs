//! Capabilities the core consumes but does not implement.

mod gateway;
mod notification;

pub use {
    gateway::{CreateError, PersistenceGateway, SaveError, SessionRecord},
    notification::{Notification, NotificationSink, Severity},
};
