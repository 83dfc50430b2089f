use color_eyre::Result;
use poise::serenity_prelude as serenity;
use tracing::{debug, info, instrument};

use crate::bot::CommandContext;

use super::{
    lookup::{evaluate_info, evaluate_list, normalize_query},
    render::{Card, Reply},
};

async fn send_reply(ctx: CommandContext<'_>, reply: Reply) -> Result<()> {
    debug!("Replying with: {}", reply.text());

    match reply {
        Reply::Text(text) => {
            ctx.say(text).await?;
        }
        Reply::Card(Card {
            description,
            color,
            footer,
            timestamp,
        }) => {
            ctx.send(|m| {
                m.embed(|e| {
                    e.description(description).color(color);
                    if let Some(footer) = footer {
                        e.footer(|f| f.text(footer));
                    }
                    if timestamp {
                        e.timestamp(serenity::Timestamp::now());
                    }
                    e
                })
            })
            .await?;
        }
    }

    Ok(())
}

/// Look up a player
#[poise::command(slash_command)]
#[instrument(skip(ctx))]
pub async fn info(
    ctx: CommandContext<'_>,
    #[description = "Real name or in-game name"] name: String,
) -> Result<()> {
    let query = match normalize_query(&name) {
        Ok(query) => query,
        Err(reply) => return send_reply(ctx, reply).await,
    };

    ctx.defer().await?;

    info!("Looking up player '{query}'");
    let result = ctx.data().tracker.fetch_roster().await;
    send_reply(ctx, evaluate_info(&result, &query)).await
}

/// List every tracked player
#[poise::command(slash_command)]
#[instrument(skip(ctx))]
pub async fn list(ctx: CommandContext<'_>) -> Result<()> {
    ctx.defer().await?;

    info!("Listing tracked players");
    let result = ctx.data().tracker.fetch_roster().await;
    send_reply(ctx, evaluate_list(&result)).await
}
