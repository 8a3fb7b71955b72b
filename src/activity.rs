use serde::{
  de::{MapAccess, Visitor},
  Deserialize, Deserializer, Serialize,
};

/// One signup-able activity as the server describes it. The
/// `max_participants` field name mirrors the wire contract and is kept
/// as-is.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Activity {
  pub description: String,
  pub schedule: String,
  pub max_participants: i64,
  #[serde(default)]
  pub participants: Vec<String>,
}

impl Activity {
  /// Capacity minus the current roster size. A missing participant list
  /// deserializes as empty, so it counts as zero here. Not clamped; a
  /// malformed response may yield a negative value and is shown as-is.
  pub fn spots_left(&self) -> i64 {
    self.max_participants - self.participants.len() as i64
  }
}

/// The full collection as returned by `GET /activities`, in the exact
/// order the server's JSON object listed it. Replaced wholesale on every
/// fetch; never patched in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivityCollection(Vec<(String, Activity)>);

impl ActivityCollection {
  pub fn iter(&self) -> impl Iterator<Item = &(String, Activity)> {
    self.0.iter()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn names(&self) -> Vec<String> {
    self.0.iter().map(|(name, _)| name.clone()).collect()
  }

  pub fn get(&self, name: &str) -> Option<&Activity> {
    self.0.iter().find(|(n, _)| n == name).map(|(_, a)| a)
  }
}

impl<'de> Deserialize<'de> for ActivityCollection {
  // serde's map-based containers reorder or sort keys; a hand-rolled
  // visitor keeps the server's document order, which is the only
  // ordering contract the client has.
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    struct CollectionVisitor;

    impl<'de> Visitor<'de> for CollectionVisitor {
      type Value = ActivityCollection;

      fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
        formatter.write_str("a map of activity name to activity details")
      }

      fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
      where
        A: MapAccess<'de>,
      {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((name, activity)) = map.next_entry::<String, Activity>()? {
          entries.push((name, activity));
        }
        Ok(ActivityCollection(entries))
      }
    }

    deserializer.deserialize_map(CollectionVisitor)
  }
}

/// Success body of the signup and unregister endpoints. The server may
/// omit the message on an empty body.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct MessageResponse {
  #[serde(default)]
  pub message: String,
}

/// Failure body of the mutation endpoints, non-2xx status.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ErrorDetail {
  #[serde(default)]
  pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn chess_club_scenario() {
    let json = r#"{"Chess Club": {"description": "d", "schedule": "s", "max_participants": 2, "participants": ["a@x.com"]}}"#;
    let collection: ActivityCollection = serde_json::from_str(json).unwrap();
    assert_eq!(collection.len(), 1);
    let chess = collection.get("Chess Club").unwrap();
    assert_eq!(chess.description, "d");
    assert_eq!(chess.schedule, "s");
    assert_eq!(chess.spots_left(), 1);
    assert_eq!(chess.participants, vec!["a@x.com"]);
  }

  #[test]
  fn missing_participants_counts_as_zero() {
    let json = r#"{"description": "d", "schedule": "s", "max_participants": 12}"#;
    let activity: Activity = serde_json::from_str(json).unwrap();
    assert!(activity.participants.is_empty());
    assert_eq!(activity.spots_left(), 12);
  }

  #[test]
  fn spots_left_is_not_clamped() {
    let activity = Activity {
      max_participants: 1,
      participants: vec!["a@x.com".into(), "b@x.com".into()],
      ..Default::default()
    };
    assert_eq!(activity.spots_left(), -1);
  }

  #[test]
  fn collection_preserves_document_order() {
    let json = r#"{
      "Zeta": {"description": "", "schedule": "", "max_participants": 1, "participants": []},
      "Alpha": {"description": "", "schedule": "", "max_participants": 1, "participants": []},
      "Middle": {"description": "", "schedule": "", "max_participants": 1, "participants": []}
    }"#;
    let collection: ActivityCollection = serde_json::from_str(json).unwrap();
    assert_eq!(collection.names(), vec!["Zeta", "Alpha", "Middle"]);
  }

  #[test]
  fn empty_collection_renders_no_cards() {
    let collection: ActivityCollection = serde_json::from_str("{}").unwrap();
    assert!(collection.is_empty());
    assert!(collection.names().is_empty());
  }

  #[test]
  fn message_response_tolerates_empty_body() {
    let m: MessageResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(m.message, "");

    let m: MessageResponse = serde_json::from_str(r#"{"message": "Signed up!"}"#).unwrap();
    assert_eq!(m.message, "Signed up!");
  }

  #[test]
  fn error_detail_is_optional() {
    let d: ErrorDetail = serde_json::from_str(r#"{"detail": "Not registered"}"#).unwrap();
    assert_eq!(d.detail.as_deref(), Some("Not registered"));

    let d: ErrorDetail = serde_json::from_str("{}").unwrap();
    assert_eq!(d.detail, None);
  }
}
