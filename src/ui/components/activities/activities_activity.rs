use crate::{
  api::{ActivitiesApi, ActivitiesClient},
  ui::components::{activities::activity_card::ActivityCard, signup::signup_form::SignupForm},
};
use leptos::{logging, prelude::*};

/// The whole page: signup form on top, one card per activity below.
///
/// Bumping `refresh` re-runs the fetch; the card list is rebuilt from
/// scratch in whatever order the server returned, so a late response
/// simply wins by replacing the tree.
#[component]
pub fn ActivitiesActivity() -> impl IntoView {
  let refresh = RwSignal::new(0u32);

  let activities = LocalResource::new(move || {
    let _version = refresh.get();
    async move { ActivitiesClient.list_activities().await }
  });

  // The select keeps its previous options when a fetch fails, so the
  // option list lives in its own signal and only successful fetches
  // replace it.
  let names = RwSignal::new(Vec::<String>::new());
  Effect::new(move |_| {
    if let Some(Ok(collection)) = activities.get().as_deref() {
      names.set(collection.names());
    }
  });

  view! {
    <main class="p-3 mx-auto max-w-screen-md space-y-4">
      <SignupForm names refresh />
      <section>
        <h3>"Activities"</h3>
        {move || match activities.get().as_deref() {
          Some(Ok(collection)) => {
            let cards = collection
              .iter()
              .map(|(name, activity)| {
                view! { <ActivityCard name={name.clone()} activity={activity.clone()} refresh /> }
              })
              .collect_view();
            view! { <div id="activities-list" class="space-y-4">{cards}</div> }.into_any()
          }
          Some(Err(e)) => {
            logging::error!("Error fetching activities: {:#?}", e);
            view! { <p>"Failed to load activities. Please try again later."</p> }.into_any()
          }
          None => view! { <p>"Loading activities..."</p> }.into_any(),
        }}
      </section>
    </main>
  }
}
