use serenity::all::{CreateEmbed, CreateEmbedAuthor};

use crate::{
    bot::wizard::Wizard,
    error::AppError,
    model::scoreboard::{Scoreboard, ScoreboardOption},
};

use super::{CommandContext, SUCCESS_COLOUR, SUCCESS_ICON};

/// Runs the creation wizard and registers the resulting scoreboard.
///
/// A cancelled or timed out wizard ends the command without a reply.
pub async fn run(command_ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let wizard = Wizard::new(
        command_ctx.ctx,
        command_ctx.guild_id,
        command_ctx.message,
        command_ctx.state.rcon_timeout,
    );

    let Some((channel_id, settings)) = wizard.run().await? else {
        return Ok(());
    };

    let service = command_ctx.service();
    let scoreboard = service
        .register(command_ctx.guild_id.get(), channel_id, settings)
        .await?;

    if let Err(e) = service.update(scoreboard.message_id).await {
        tracing::warn!(
            "First update of scoreboard {} failed: {}",
            scoreboard.name,
            e
        );
    }

    command_ctx
        .reply_embed(created_embed(&command_ctx.state.prefix, &scoreboard))
        .await?;

    Ok(())
}

/// Confirmation embed with the jump link and the `set` usage.
pub fn created_embed(prefix: &str, scoreboard: &Scoreboard) -> CreateEmbed {
    CreateEmbed::new()
        .colour(SUCCESS_COLOUR)
        .author(CreateEmbedAuthor::new("Scoreboard created").icon_url(SUCCESS_ICON))
        .description(format!(
            "[Jump to scoreboard]({})\n\nYou can change the configuration at any time, using the below command:```{}set {} <option> <new value>```\nAvailable options: {}",
            scoreboard.jump_url(),
            prefix,
            scoreboard.message_id,
            ScoreboardOption::list()
        ))
}

#[cfg(test)]
mod tests {
    use test_utils::fixture;

    use super::*;

    #[test]
    fn confirms_with_jump_link_and_set_usage() {
        let scoreboard = Scoreboard::from_entity(fixture::scoreboard::entity()).unwrap();

        let json = serde_json::to_value(created_embed("s!", &scoreboard)).unwrap();
        let description = json["description"].as_str().unwrap();

        assert_eq!(json["author"]["name"], "Scoreboard created");
        assert_eq!(json["color"], 7844437);
        assert!(description.starts_with(
            "[Jump to scoreboard](https://discord.com/channels/987654321/111111111/222222222)"
        ));
        assert!(description.contains("```s!set 222222222 <option> <new value>```"));
    }
}
