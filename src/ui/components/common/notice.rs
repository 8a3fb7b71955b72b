use crate::config::NOTICE_TTL_MS;
use leptos::{leptos_dom::helpers::set_timeout, prelude::*};
use strum_macros::Display;

#[derive(Display, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum NoticeKind {
  Success,
  Error,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Notice {
  pub id: usize,
  pub kind: NoticeKind,
  pub text: String,
}

/// A per-container stack of dismissable messages. New notices go on top;
/// each one can be dismissed by hand or expires after
/// [`NOTICE_TTL_MS`]. The whole stack disappears with its container when
/// the view is rebuilt, which is how stale notices get discarded.
#[derive(Clone, Copy)]
pub struct NoticeStack {
  items: RwSignal<Vec<Notice>>,
  next_id: RwSignal<usize>,
}

impl Default for NoticeStack {
  fn default() -> Self {
    Self::new()
  }
}

impl NoticeStack {
  pub fn new() -> Self {
    Self {
      items: RwSignal::new(Vec::new()),
      next_id: RwSignal::new(0),
    }
  }

  pub fn items(&self) -> RwSignal<Vec<Notice>> {
    self.items
  }

  pub fn push(&self, kind: NoticeKind, text: String) -> usize {
    let id = self.next_id.get_untracked();
    self.next_id.set(id.wrapping_add(1));
    self.items.update(|items| items.insert(0, Notice { id, kind, text }));
    id
  }

  pub fn dismiss(&self, id: usize) {
    self.items.update(|items| items.retain(|n| n.id != id));
  }

  /// Push plus the auto-expiry timer. Split from [`push`](Self::push) so
  /// the stack itself stays free of browser timers.
  pub fn notify(&self, kind: NoticeKind, text: String) {
    let id = self.push(kind, text);
    let stack = *self;
    set_timeout(move || stack.dismiss(id), std::time::Duration::from_millis(NOTICE_TTL_MS));
  }
}

#[component]
pub fn NoticeList(stack: NoticeStack) -> impl IntoView {
  view! {
    <For each={move || stack.items().get()} key={|n| n.id} let:notice>
      <div class={format!("flex justify-between alert alert-{} alert-soft", notice.kind)}>
        <span>{notice.text.clone()}</span>
        <button type="button" class="btn btn-ghost btn-sm" on:click={move |_| stack.dismiss(notice.id)}>
          "✕"
        </button>
      </div>
    </For>
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn push_inserts_at_the_front_with_fresh_ids() {
    let stack = NoticeStack::new();
    let first = stack.push(NoticeKind::Success, "one".into());
    let second = stack.push(NoticeKind::Error, "two".into());
    assert_ne!(first, second);

    let items = stack.items().get_untracked();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id, second);
    assert_eq!(items[0].text, "two");
    assert_eq!(items[1].id, first);
  }

  #[test]
  fn dismiss_removes_only_the_target() {
    let stack = NoticeStack::new();
    let first = stack.push(NoticeKind::Success, "one".into());
    let second = stack.push(NoticeKind::Success, "two".into());

    stack.dismiss(first);
    let items = stack.items().get_untracked();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, second);
  }

  #[test]
  fn dismissing_a_gone_notice_is_a_no_op() {
    let stack = NoticeStack::new();
    let id = stack.push(NoticeKind::Error, "one".into());
    stack.dismiss(id);
    stack.dismiss(id);
    assert!(stack.items().get_untracked().is_empty());
  }

  #[test]
  fn kind_renders_as_a_css_suffix() {
    assert_eq!(NoticeKind::Success.to_string(), "success");
    assert_eq!(NoticeKind::Error.to_string(), "error");
  }
}
