pub mod destination;
pub mod navigator;
pub mod notification;
pub mod notifier;
pub mod scheduled_action;
