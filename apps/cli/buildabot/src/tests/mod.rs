mod cli;
mod logger;
mod render;
