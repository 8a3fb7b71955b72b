pub mod activities;
pub mod common;
pub mod signup;
