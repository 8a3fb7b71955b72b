use leptos::prelude::*;

const FE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[component]
pub fn Layout(children: Children) -> impl IntoView {
  view! {
    <div class="flex flex-col min-h-screen">
      <nav class="flex flex-row py-0 navbar">
        <span class="text-xl whitespace-nowrap">"Activity Signup"</span>
      </nav>
      <div class="flex flex-col flex-grow w-full">
        <div class="sm:container sm:mx-auto">{children()}</div>
      </div>
      <nav class="container hidden mx-auto lg:flex navbar">
        <div class="w-auto navbar-end grow">
          <span class="text-md">"FE: " {FE_VERSION}</span>
        </div>
      </nav>
    </div>
  }
}
