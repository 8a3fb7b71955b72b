pub mod activity;
pub mod api;
pub mod config;
pub mod errors;
pub mod host;
pub mod layout;
pub mod ui;

use crate::{layout::Layout, ui::components::activities::activities_activity::ActivitiesActivity};
use leptos::prelude::*;
use leptos_meta::*;

#[component]
pub fn App() -> impl IntoView {
  provide_meta_context();

  view! {
    <Title text="Activity Signup" />
    <Meta name="description" content="Sign up for extracurricular activities" />
    <Layout>
      <ActivitiesActivity />
    </Layout>
  }
}
