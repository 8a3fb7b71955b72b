// The unregister delay is kept equal to the notice TTL so the removal
// message stays readable until the list refreshes under it.
pub const NOTICE_TTL_MS: u64 = 5_000;
pub const UNREGISTER_REFRESH_DELAY_MS: u64 = 5_000;
pub const SIGNUP_REFRESH_DELAY_MS: u64 = 500;

pub const ACTIVITIES_HOST: &str = "http://127.0.0.1:8000";
