mod check;
mod config;
mod messages;
mod modify;
