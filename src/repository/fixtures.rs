//! JSON fixtures for repository tests
//!
//! Each function returns a backend response body with sensible defaults.
//! Import via `use crate::repository::fixtures::*` in test modules.

use serde_json::{Value, json};

pub const CREATED_AT: &str = "2024-05-01T08:00:00";

pub fn user_json(id: i64, username: &str) -> Value {
    json!({
        "id": id,
        "email": format!("{username}@farm.io"),
        "username": username,
        "name": format!("User {id}"),
        "bio": null,
        "avatarUrl": null,
        "location": "Nakuru",
        "website": null,
        "createdAt": CREATED_AT,
        "updatedAt": null
    })
}

pub fn post_json(id: i64, user_id: i64, content: &str) -> Value {
    json!({
        "id": id,
        "userId": user_id,
        "content": content,
        "mediaUrl": null,
        "createdAt": CREATED_AT
    })
}

pub fn feed_post_json(id: i64, username: &str) -> Value {
    json!({
        "id": id,
        "userId": id * 10,
        "username": username,
        "content": format!("Post {id}"),
        "likeCount": 3,
        "commentCount": 1,
        "likedByCurrentUser": false,
        "createdAt": CREATED_AT
    })
}

pub fn comment_json(id: i64, post_id: i64, content: &str) -> Value {
    json!({
        "id": id,
        "postId": post_id,
        "userId": 5,
        "username": "bo",
        "content": content,
        "createdAt": CREATED_AT
    })
}

pub fn notification_json(id: i64, kind: &str, is_read: bool) -> Value {
    json!({
        "id": id,
        "userId": 1,
        "type": kind,
        "actorId": 8,
        "actorUsername": "bo",
        "postId": if kind == "FOLLOW" { Value::Null } else { json!(100) },
        "message": format!("{kind} notification"),
        "isRead": is_read,
        "createdAt": CREATED_AT
    })
}

/// Wrap `content` in a Spring-style page envelope.
pub fn page_json(content: Vec<Value>, page: u32, size: u32, total_elements: u64) -> String {
    let total_pages = if size == 0 {
        0
    } else {
        total_elements.div_ceil(u64::from(size))
    };
    json!({
        "content": content,
        "pageable": { "pageNumber": page, "pageSize": size },
        "totalElements": total_elements,
        "totalPages": total_pages,
        "last": u64::from(page) + 1 >= total_pages
    })
    .to_string()
}
