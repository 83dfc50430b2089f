use poise::serenity_prelude as serenity;

use color_eyre::{eyre::ErrReport, Result};
use tracing::{error, info, warn};

use crate::{config::Config, wisps, wisps::tracker::client::TrackerClient};

pub struct Bot {
    pub tracker: TrackerClient,
}

pub type CommandContext<'a> = poise::Context<'a, Bot, ErrReport>;

async fn event_handler(
    _ctx: &serenity::Context,
    event: &poise::Event<'_>,
    _framework: poise::FrameworkContext<'_, Bot, ErrReport>,
    _bot: &Bot,
) -> Result<(), ErrReport> {
    if let poise::Event::Ready {
        data_about_bot: ready,
    } = event
    {
        info!("{} connected successfully", ready.user.name);
    }
    Ok(())
}

async fn on_error(error: poise::FrameworkError<'_, Bot, ErrReport>) {
    match error {
        poise::FrameworkError::Command { error, ctx } => {
            error!("Command '{}' failed: {error:?}", ctx.command().name);
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                error!("Failed to handle framework error: {e}");
            }
        }
    }
}

pub async fn run(config: Config) -> Result<()> {
    let bot = Bot {
        tracker: TrackerClient::new(&config.worker_url, config.tracker_timeout)?,
    };
    info!("Tracking players at {}", bot.tracker.roster_url());

    let Config {
        token,
        client_id,
        testing_guild,
        ..
    } = config;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: wisps::commands(),
            event_handler: |ctx, event, framework, bot| {
                Box::pin(event_handler(ctx, event, framework, bot))
            },
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .token(token)
        .intents(serenity::GatewayIntents::GUILDS)
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                if ready.application.id != client_id {
                    warn!(
                        "$CLIENT_ID is {client_id} but Discord reports application {}",
                        ready.application.id
                    );
                }

                if let Some(guild_id) = testing_guild {
                    info!("Setting up slash commands for testing guild {guild_id}");
                    poise::builtins::register_in_guild(
                        ctx,
                        &framework.options().commands,
                        guild_id,
                    )
                    .await?;
                } else {
                    info!("Setting up global slash commands");
                    poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                }
                Ok(bot)
            })
        });

    framework.run().await?;

    Ok(())
}
