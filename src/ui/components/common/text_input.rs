use leptos::{prelude::*, text_prop::TextProp};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputType {
  Text,
  Email,
}

#[component]
pub fn TextInput(
  #[prop(optional, into)] required: MaybeProp<bool>,
  #[prop(into)] id: TextProp,
  #[prop(into)] name: TextProp,
  #[prop(into)] label: TextProp,
  #[prop(into)] input_value: RwSignal<String>,
  #[prop(default = InputType::Text)] input_type: InputType,
) -> impl IntoView {
  view! {
    <label class="flex relative gap-2 items-center">
      <input
        type={move || if input_type == InputType::Email { "email" } else { "text" }}
        id={id}
        class="input input-bordered p-4 grow"
        placeholder={move || label.get()}
        name={move || name.get()}
        required={move || required.get().unwrap_or(false)}
        prop:value={move || input_value.get()}
        on:input={move |e| {
          input_value.set(event_target_value(&e));
        }}
      />
    </label>
  }
}
