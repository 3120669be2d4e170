//! Chat bot surface: command parsing, dispatch and Telegram delivery.

pub mod commands;
pub mod dispatcher;
pub mod telegram;

pub use commands::{parse_message, Command, Incoming};
pub use dispatcher::BotDispatcher;
pub use telegram::{BotMessage, TelegramClient, TelegramError, Update};
