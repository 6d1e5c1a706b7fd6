pub mod bot_client;
pub mod config;
pub mod error;
pub mod view;

#[cfg(test)]
mod tests;

pub const BACKEND_HOSTNAME: &str = "localhost";
pub const BACKEND_PORT: u16 = 5001;
pub const DEFAULT_BACKEND_BASE_URL: &str =
    const_format::concatcp!("http://", BACKEND_HOSTNAME, ":", BACKEND_PORT);
