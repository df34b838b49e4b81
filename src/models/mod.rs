//! Domain models handed to callers
//!
//! These are the mapped, caller-facing representations of backend
//! resources. Wire formats live in [`crate::api`].

mod auth;
mod comment;
mod notification;
mod paged;
mod post;
mod social;
mod user;
mod weather;

pub use auth::LoginResult;
pub use comment::{Comment, CommentAuthor};
pub use notification::{Notification, NotificationActor, NotificationType};
pub use paged::PagedData;
pub use post::{FeedPost, Post, PostAuthor};
pub use social::FollowStats;
pub use user::{ProfileInput, User};
pub use weather::{CurrentConditions, ForecastDay, WeatherAlert, WeatherForecast, WeatherLocation};
