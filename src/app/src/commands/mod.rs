pub mod signup_progress;
