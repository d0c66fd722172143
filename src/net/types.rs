//! Post and commentary DTOs.
//!
//! DESIGN
//! ======
//! These types carry serde derives so swapping the simulated call for a real
//! endpoint only needs a transport; the shapes already match `{ title, post }`
//! requests and `{ id }` responses.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Response returned by the post endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Server-assigned post identifier.
    pub id: String,
}

/// A post after the endpoint has assigned it an id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub post: String,
}

/// User-supplied part of a post, collected from the post form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub post: String,
}

impl PostDraft {
    /// Attach the id assigned by the endpoint.
    pub fn into_post(self, id: String) -> Post {
        Post { id, title: self.title, post: self.post }
    }

    /// Record logged when the post form is submitted.
    pub fn log_record(&self) -> serde_json::Value {
        serde_json::json!({ "title": self.title, "post": self.post })
    }
}

/// A commentary collected once a post exists. Never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commentary {
    pub name: String,
    pub email: String,
    pub comment: String,
}

impl Commentary {
    /// Record logged when the commentary form is submitted.
    pub fn log_record(&self) -> serde_json::Value {
        serde_json::json!({
            "name": self.name,
            "email": self.email,
            "comment": self.comment,
        })
    }
}
