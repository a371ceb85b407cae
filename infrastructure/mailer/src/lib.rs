pub mod client;
pub mod log_notifier;
pub mod order_notifier;

pub use client::MailerClient;
pub use log_notifier::LogOnlyOrderNotifier;
pub use order_notifier::HttpOrderNotifier;
