use crate::{
  api::{ActivitiesApi, ActivitiesClient},
  config::SIGNUP_REFRESH_DELAY_MS,
  errors::{message_from_error, AppErrorType},
  ui::components::common::{
    notice::{NoticeKind, NoticeList, NoticeStack},
    text_input::{InputType, TextInput},
  },
};
use leptos::{leptos_dom::helpers::set_timeout, prelude::*, task::spawn_local};
use web_sys::SubmitEvent;

fn validate_signup(email: &str, activity: &str) -> Option<AppErrorType> {
  if email.is_empty() {
    return Some(AppErrorType::EmptyEmail);
  }
  if activity.is_empty() {
    return Some(AppErrorType::EmptyActivity);
  }
  None
}

/// Signup form plus the activity select. The option list is fed by the
/// activity fetch and rebuilt whenever it succeeds; on a fetch failure it
/// keeps whatever it held before.
#[component]
pub fn SignupForm(names: RwSignal<Vec<String>>, refresh: RwSignal<u32>) -> impl IntoView {
  let notices = NoticeStack::new();

  let email = RwSignal::new(String::new());
  let selected = RwSignal::new(String::new());

  let on_signup_submit = move |e: SubmitEvent| {
    e.prevent_default();
    let email_value = email.get();
    let activity_value = selected.get();

    if let Some(error_type) = validate_signup(&email_value, &activity_value) {
      notices.notify(NoticeKind::Error, message_from_error(&error_type.into(), "An error occurred"));
      return;
    }

    spawn_local(async move {
      match ActivitiesClient.signup(&activity_value, &email_value).await {
        Ok(response) => {
          notices.notify(NoticeKind::Success, response.message);
          email.set(String::new());
          selected.set(String::new());
          set_timeout(
            move || refresh.update(|v| *v = v.wrapping_add(1)),
            std::time::Duration::from_millis(SIGNUP_REFRESH_DELAY_MS),
          );
        }
        Err(e) if e.is_rejection() => {
          notices.notify(NoticeKind::Error, message_from_error(&e, "An error occurred"));
        }
        Err(e) => {
          notices.notify(NoticeKind::Error, message_from_error(&e, "Failed to sign up. Please try again."));
        }
      }
    });
  };

  view! {
    <div id="signup-container" class="card card-bordered p-4">
      <NoticeList stack={notices} />
      <h3>"Sign Up for an Activity"</h3>
      <form id="signup-form" class="space-y-3" on:submit={on_signup_submit}>
        <TextInput id="email" name="email" label="Your Email" input_value={email} input_type={InputType::Email} required={true} />
        <select
          id="activity"
          name="activity"
          class="select select-bordered w-full"
          prop:value={move || selected.get()}
          on:change={move |e| {
            selected.set(event_target_value(&e));
          }}
        >
          <option value="">"-- Select an activity --"</option>
          <For each={move || names.get()} key={|n| n.clone()} let:option_name>
            <option value={option_name.clone()}>{option_name.clone()}</option>
          </For>
        </select>
        <button class="btn btn-neutral" type="submit">
          "Sign Up"
        </button>
      </form>
    </div>
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_fields_are_rejected_before_any_network_call() {
    assert_eq!(validate_signup("", "Chess Club"), Some(AppErrorType::EmptyEmail));
    assert_eq!(validate_signup("a@x.com", ""), Some(AppErrorType::EmptyActivity));
    assert_eq!(validate_signup("", ""), Some(AppErrorType::EmptyEmail));
  }

  #[test]
  fn filled_fields_pass_validation() {
    assert_eq!(validate_signup("a@x.com", "Chess Club"), None);
  }
}
