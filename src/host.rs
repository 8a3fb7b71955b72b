// In the browser the page is served from the same origin as the API, so
// routes stay relative unless a host was baked in at build time.
#[cfg(target_arch = "wasm32")]
pub fn get_host() -> String {
  if let Some(s) = option_env!("ACTIVITIES_HOST") {
    s.into()
  } else {
    "".into()
  }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn get_host() -> String {
  std::env::var("ACTIVITIES_HOST").unwrap_or_else(|_| crate::config::ACTIVITIES_HOST.into())
}
