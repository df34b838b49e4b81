//! Command handlers
//!
//! Each handler makes one repository call and prints the result as JSON.

use colored::Colorize;

use super::{CommandContext, PageArgs};
use crate::output::print_json;

pub async fn login(ctx: &CommandContext, identifier: &str, password: &str) -> anyhow::Result<()> {
    let result = ctx.repos.auth.login(identifier, password).await?;
    ctx.persist_session().await?;

    eprintln!(
        "{} Signed in as {}",
        "✓".green(),
        result.user.username.bold()
    );
    print_json(&result)
}

pub async fn logout(ctx: &CommandContext) -> anyhow::Result<()> {
    ctx.repos.auth.logout().await?;
    ctx.persist_session().await?;
    eprintln!("{} Signed out", "✓".green());
    Ok(())
}

pub async fn feed(ctx: &CommandContext, page: PageArgs) -> anyhow::Result<()> {
    let feed = ctx.repos.feed.personalized_feed(page.page, page.size).await?;
    print_json(&feed)
}

pub async fn user_get(ctx: &CommandContext, id: i64) -> anyhow::Result<()> {
    let user = ctx.repos.users.user_by_id(id).await?;
    print_json(&user)
}

pub async fn user_me(ctx: &CommandContext) -> anyhow::Result<()> {
    let user = ctx.repos.users.current_user().await?;
    print_json(&user)
}

pub async fn user_search(ctx: &CommandContext, query: &str, page: PageArgs) -> anyhow::Result<()> {
    let users = ctx
        .repos
        .users
        .search_users(query, page.page, page.size)
        .await?;
    print_json(&users)
}

pub async fn post_get(ctx: &CommandContext, id: i64) -> anyhow::Result<()> {
    let post = ctx.repos.posts.post_by_id(id).await?;
    print_json(&post)
}

pub async fn post_list(ctx: &CommandContext, user_id: i64, page: PageArgs) -> anyhow::Result<()> {
    let posts = ctx
        .repos
        .posts
        .user_posts(user_id, page.page, page.size)
        .await?;
    print_json(&posts)
}

pub async fn comments(ctx: &CommandContext, post_id: i64, page: PageArgs) -> anyhow::Result<()> {
    let comments = ctx
        .repos
        .comments
        .post_comments(post_id, page.page, page.size)
        .await?;
    print_json(&comments)
}

pub async fn notifications(ctx: &CommandContext, unread: bool, page: PageArgs) -> anyhow::Result<()> {
    let notifications = &ctx.repos.notifications;
    let result = if unread {
        notifications.unread_notifications(page.page, page.size).await?
    } else {
        notifications.notifications(page.page, page.size).await?
    };
    print_json(&result)
}

pub async fn weather(ctx: &CommandContext, location: &str) -> anyhow::Result<()> {
    let forecast = ctx.repos.weather.forecast(location).await?;
    print_json(&forecast)
}
