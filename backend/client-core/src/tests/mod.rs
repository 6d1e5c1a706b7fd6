mod bot_client;
mod config;
mod error;
mod view;
