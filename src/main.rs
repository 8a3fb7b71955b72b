#[cfg(target_arch = "wasm32")]
fn main() {
  use activities_ui::App;

  console_error_panic_hook::set_once();
  leptos::mount::mount_to_body(App);
}

// The client only ever runs in the browser; a host build of the binary
// exists so `cargo test` and friends work on the native toolchain.
#[cfg(not(target_arch = "wasm32"))]
fn main() {}
