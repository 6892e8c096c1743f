//! GraphQL projection of the upstream media feed document.
//!
//! Field names mirror the upstream JSON keys. Every field is nullable and
//! undeclared keys are dropped during deserialization.

use async_graphql::SimpleObject;
use serde::Deserialize;

use super::coerce;

#[derive(Debug, Clone, Default, Deserialize, SimpleObject)]
#[serde(default)]
#[graphql(rename_fields = "snake_case")]
pub struct Feed {
	#[serde(deserialize_with = "coerce::list")]
	pub items: Option<Vec<Option<Item>>>,
	#[serde(deserialize_with = "coerce::boolean")]
	pub more_available: Option<bool>,
	#[serde(deserialize_with = "coerce::string")]
	pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, SimpleObject)]
#[serde(default)]
#[graphql(rename_fields = "snake_case")]
pub struct Item {
	#[serde(deserialize_with = "coerce::string")]
	pub id: Option<String>,
	#[serde(deserialize_with = "coerce::string")]
	pub code: Option<String>,
	#[serde(deserialize_with = "coerce::object")]
	pub user: Option<User>,
	#[serde(deserialize_with = "coerce::object")]
	pub images: Option<ImageType>,
	#[serde(deserialize_with = "coerce::string")]
	pub created_time: Option<String>,
	#[serde(deserialize_with = "coerce::object")]
	pub caption: Option<Caption>,
	#[serde(deserialize_with = "coerce::boolean")]
	pub user_has_liked: Option<bool>,
	#[serde(deserialize_with = "coerce::object")]
	pub likes: Option<Likes>,
	#[serde(deserialize_with = "coerce::object")]
	pub comments: Option<Comments>,
	#[serde(deserialize_with = "coerce::boolean")]
	pub can_view_comments: Option<bool>,
	#[serde(deserialize_with = "coerce::boolean")]
	pub can_delete_comments: Option<bool>,
	#[serde(rename = "type", deserialize_with = "coerce::string")]
	#[graphql(name = "type")]
	pub kind: Option<String>,
	#[serde(deserialize_with = "coerce::string")]
	pub link: Option<String>,
	#[serde(deserialize_with = "coerce::string")]
	pub location: Option<String>,
	#[serde(deserialize_with = "coerce::string")]
	pub alt_media_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, SimpleObject)]
#[serde(default)]
#[graphql(rename_fields = "snake_case")]
pub struct User {
	#[serde(deserialize_with = "coerce::string")]
	pub id: Option<String>,
	#[serde(deserialize_with = "coerce::string")]
	pub full_name: Option<String>,
	#[serde(deserialize_with = "coerce::string")]
	pub profile_picture: Option<String>,
	#[serde(deserialize_with = "coerce::string")]
	pub username: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, SimpleObject)]
#[serde(default)]
#[graphql(rename_fields = "snake_case")]
pub struct ImageType {
	#[serde(deserialize_with = "coerce::object")]
	pub thumbnail: Option<Image>,
	#[serde(deserialize_with = "coerce::object")]
	pub low_resolution: Option<Image>,
	#[serde(deserialize_with = "coerce::object")]
	pub standard_resolution: Option<Image>,
}

#[derive(Debug, Clone, Default, Deserialize, SimpleObject)]
#[serde(default)]
pub struct Image {
	#[serde(deserialize_with = "coerce::int")]
	pub width: Option<i32>,
	#[serde(deserialize_with = "coerce::int")]
	pub height: Option<i32>,
	#[serde(deserialize_with = "coerce::string")]
	pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, SimpleObject)]
#[serde(default)]
#[graphql(rename_fields = "snake_case")]
pub struct Caption {
	#[serde(deserialize_with = "coerce::string")]
	pub id: Option<String>,
	#[serde(deserialize_with = "coerce::string")]
	pub text: Option<String>,
	#[serde(deserialize_with = "coerce::string")]
	pub created_time: Option<String>,
	#[serde(deserialize_with = "coerce::object")]
	pub from: Option<User>,
}

#[derive(Debug, Clone, Default, Deserialize, SimpleObject)]
#[serde(default)]
#[graphql(rename_fields = "snake_case")]
pub struct Comment {
	#[serde(deserialize_with = "coerce::string")]
	pub id: Option<String>,
	#[serde(deserialize_with = "coerce::string")]
	pub text: Option<String>,
	#[serde(deserialize_with = "coerce::string")]
	pub created_time: Option<String>,
	#[serde(deserialize_with = "coerce::object")]
	pub from: Option<User>,
}

#[derive(Debug, Clone, Default, Deserialize, SimpleObject)]
#[serde(default)]
pub struct Likes {
	#[serde(deserialize_with = "coerce::list")]
	pub data: Option<Vec<Option<User>>>,
	#[serde(deserialize_with = "coerce::int")]
	pub count: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, SimpleObject)]
#[serde(default)]
pub struct Comments {
	#[serde(deserialize_with = "coerce::list")]
	pub data: Option<Vec<Option<Comment>>>,
	#[serde(deserialize_with = "coerce::int")]
	pub count: Option<i32>,
}
