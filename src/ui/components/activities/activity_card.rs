use crate::{
  activity::Activity,
  api::{ActivitiesApi, ActivitiesClient},
  config::UNREGISTER_REFRESH_DELAY_MS,
  errors::message_from_error,
  ui::components::common::notice::{NoticeKind, NoticeList, NoticeStack},
};
use leptos::{leptos_dom::helpers::set_timeout, prelude::*, task::spawn_local};
use web_sys::MouseEvent;

/// One activity with its roster and per-row remove affordances. Removal
/// feedback lands in this card's own notice stack; the deferred refresh
/// rebuilds the whole list afterwards, so the card (and its notices) are
/// replaced along with everything else.
#[component]
pub fn ActivityCard(name: String, activity: Activity, refresh: RwSignal<u32>) -> impl IntoView {
  let notices = NoticeStack::new();

  let on_remove_click = {
    let activity_name = name.clone();
    move |participant: String| {
      let activity_name = activity_name.clone();
      move |_e: MouseEvent| {
        let activity_name = activity_name.clone();
        let email = participant.clone();
        if activity_name.is_empty() || email.is_empty() {
          return;
        }
        let confirmed = window()
          .confirm_with_message(&format!("Remove {} from {}?", email, activity_name))
          .unwrap_or(false);
        if !confirmed {
          return;
        }
        spawn_local(async move {
          match ActivitiesClient.unregister(&activity_name, &email).await {
            Ok(_) => {
              notices.notify(NoticeKind::Success, format!("Removed {} from {}", email, activity_name));
              set_timeout(
                move || refresh.update(|v| *v = v.wrapping_add(1)),
                std::time::Duration::from_millis(UNREGISTER_REFRESH_DELAY_MS),
              );
            }
            Err(e) => {
              notices.notify(NoticeKind::Error, message_from_error(&e, "Failed to remove participant."));
            }
          }
        });
      }
    }
  };

  let participants = activity.participants.clone();

  view! {
    <div class="card card-bordered activity-card p-4">
      <h4 class="card-title">{name.clone()}</h4>
      <p>{activity.description.clone()}</p>
      <p>
        <strong>"Schedule: "</strong>
        {activity.schedule.clone()}
      </p>
      <p>
        <strong>"Availability: "</strong>
        {activity.spots_left()}
        " spots left"
      </p>
      <div class="participants-section">
        <NoticeList stack={notices} />
        <strong>{format!("Participants ({}):", participants.len())}</strong>
        {if participants.is_empty() {
          view! { <p class="no-participants">"No participants yet"</p> }.into_any()
        } else {
          let rows = participants
            .iter()
            .cloned()
            .map(|p| {
              view! {
                <span class="flex items-center participant-item">
                  <span class="grow">{p.clone()}</span>
                  <span class="delete-participant cursor-pointer ml-2" title="Remove" on:click={on_remove_click(p)}>
                    "🗑"
                  </span>
                </span>
              }
            })
            .collect_view();
          view! { <div class="participants-list">{rows}</div> }.into_any()
        }}
      </div>
    </div>
  }
}
