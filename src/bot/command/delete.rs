use serenity::all::{CreateEmbed, CreateEmbedAuthor};

use crate::error::AppError;

use super::{set::parse_message_id, Command, CommandContext, SUCCESS_COLOUR, SUCCESS_ICON};

pub async fn run(command_ctx: &CommandContext<'_>, args: &str) -> Result<(), AppError> {
    let Some(message_id) = args.split_whitespace().next() else {
        return Err(AppError::BadRequest(format!(
            "Usage: `{}{} {}`",
            command_ctx.state.prefix,
            Command::Delete.name(),
            Command::Delete.usage()
        )));
    };
    let message_id = parse_message_id(message_id)?;

    let scoreboard = command_ctx
        .service()
        .delete(command_ctx.guild_id.get(), message_id)
        .await?;

    command_ctx
        .reply_embed(deleted_embed(&scoreboard.name))
        .await?;

    Ok(())
}

fn deleted_embed(name: &str) -> CreateEmbed {
    CreateEmbed::new()
        .colour(SUCCESS_COLOUR)
        .author(CreateEmbedAuthor::new("Scoreboard deleted").icon_url(SUCCESS_ICON))
        .description(format!("Removed scoreboard \"{}\" and its message.", name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_deleted_scoreboard() {
        let json = serde_json::to_value(deleted_embed("Main server")).unwrap();

        assert_eq!(json["author"]["name"], "Scoreboard deleted");
        assert_eq!(
            json["description"],
            "Removed scoreboard \"Main server\" and its message."
        );
    }
}
