pub mod user_ms;
