pub mod activities_activity;
pub mod activity_card;
