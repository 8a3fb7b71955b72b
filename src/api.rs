use crate::{
  activity::{ActivityCollection, MessageResponse},
  errors::AppResult,
  host::get_host,
};
use serde::{de::DeserializeOwned, Serialize};

#[derive(Clone, PartialEq)]
pub enum HttpType {
  Get,
  Post,
}

pub struct ActivitiesClient;

#[allow(async_fn_in_trait)]
pub trait Fetch {
  async fn make_request<Response>(&self, method: HttpType, path: &str) -> AppResult<Response>
  where
    Response: DeserializeOwned + 'static + core::fmt::Debug;
}

#[allow(async_fn_in_trait)]
pub trait ActivitiesApi: Fetch {
  async fn list_activities(&self) -> AppResult<ActivityCollection> {
    self.make_request(HttpType::Get, "activities").await
  }

  async fn signup(&self, activity: &str, email: &str) -> AppResult<MessageResponse> {
    self.make_request(HttpType::Post, &signup_route(activity, email)?).await
  }

  async fn unregister(&self, activity: &str, email: &str) -> AppResult<MessageResponse> {
    self.make_request(HttpType::Post, &unregister_route(activity, email)?).await
  }
}

impl ActivitiesApi for ActivitiesClient {}

#[derive(Serialize, Clone, Debug, PartialEq)]
struct EmailQuery<'a> {
  email: &'a str,
}

pub fn signup_route(activity: &str, email: &str) -> AppResult<String> {
  mutation_route(activity, "signup", email)
}

pub fn unregister_route(activity: &str, email: &str) -> AppResult<String> {
  mutation_route(activity, "unregister", email)
}

// Activity names are free text and land in a path segment; emails land in
// the query string. Both must be percent-encoded before the request goes
// out.
fn mutation_route(activity: &str, operation: &str, email: &str) -> AppResult<String> {
  let query = serde_urlencoded::to_string(EmailQuery { email })?;
  Ok(format!("activities/{}/{}?{}", urlencoding::encode(activity), operation, query))
}

fn build_route(route: &str) -> String {
  format!("{}/{}", get_host(), route)
}

#[cfg(target_arch = "wasm32")]
mod client {
  use super::*;
  use crate::{activity::ErrorDetail, errors::AppError};
  use gloo_net::http;
  use leptos::logging::log;

  impl Fetch for ActivitiesClient {
    async fn make_request<Response>(&self, method: HttpType, path: &str) -> AppResult<Response>
    where
      Response: DeserializeOwned + 'static + core::fmt::Debug,
    {
      let route = build_route(path);
      log!("{}", route);

      let r = match method {
        HttpType::Get => http::Request::get(&route).build()?,
        HttpType::Post => http::Request::post(&route).build()?,
      }
      .send()
      .await?;

      match r.status() {
        400..=599 => {
          let detail = r.json::<ErrorDetail>().await.ok().and_then(|d| d.detail);
          Err(AppError::api(r.status(), detail))
        }
        _ => {
          let t = r.text().await?;
          if t.is_empty() {
            serde_json::from_str::<Response>("{}").map_err(Into::into)
          } else {
            serde_json::from_str::<Response>(&t).map_err(Into::into)
          }
        }
      }
    }
  }
}

#[cfg(not(target_arch = "wasm32"))]
mod client {
  use super::*;
  use crate::{activity::ErrorDetail, errors::AppError};
  use leptos::logging::log;

  impl Fetch for ActivitiesClient {
    async fn make_request<Response>(&self, method: HttpType, path: &str) -> AppResult<Response>
    where
      Response: DeserializeOwned + 'static + core::fmt::Debug,
    {
      let route = build_route(path);
      log!("{}", route);

      let client = reqwest::Client::new();
      let r = match method {
        HttpType::Get => client.get(&route).send(),
        HttpType::Post => client.post(&route).send(),
      }
      .await?;

      match r.status().as_u16() {
        status @ 400..=599 => {
          let detail = r.json::<ErrorDetail>().await.ok().and_then(|d| d.detail);
          Err(AppError::api(status, detail))
        }
        _ => {
          let t = r.text().await.unwrap_or_default();
          if t.is_empty() {
            serde_json::from_str::<Response>("{}").map_err(Into::into)
          } else {
            serde_json::from_str::<Response>(&t).map_err(Into::into)
          }
        }
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn signup_route_encodes_path_and_query() {
    assert_eq!(
      signup_route("Chess Club", "a@x.com").unwrap(),
      "activities/Chess%20Club/signup?email=a%40x.com"
    );
  }

  #[test]
  fn unregister_route_encodes_path_and_query() {
    assert_eq!(
      unregister_route("Gym Class", "a+b@x.com").unwrap(),
      "activities/Gym%20Class/unregister?email=a%2Bb%40x.com"
    );
  }

  #[test]
  fn reserved_characters_cannot_escape_the_path_segment() {
    let route = signup_route("A/B&C?", "x@y.com").unwrap();
    assert_eq!(route, "activities/A%2FB%26C%3F/signup?email=x%40y.com");
  }
}
