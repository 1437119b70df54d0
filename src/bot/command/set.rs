use serenity::all::{CreateEmbed, CreateEmbedAuthor};

use crate::{
    bot::validate::validate_option,
    error::AppError,
    model::scoreboard::{Scoreboard, ScoreboardOption},
};

use super::{Command, CommandContext, SUCCESS_COLOUR, SUCCESS_ICON};

/// Arguments of the `set` command.
#[derive(Debug, PartialEq, Eq)]
pub struct SetArgs<'a> {
    pub message_id: u64,
    pub option: ScoreboardOption,
    pub value: &'a str,
}

pub async fn run(command_ctx: &CommandContext<'_>, args: &str) -> Result<(), AppError> {
    let args = parse_args(&command_ctx.state.prefix, args)?;

    let change = validate_option(
        command_ctx.ctx,
        command_ctx.guild_id,
        args.option,
        args.value,
        command_ctx.state.rcon_timeout,
    )
    .await?;

    let scoreboard = command_ctx
        .service()
        .set_option(command_ctx.guild_id.get(), args.message_id, change)
        .await?;

    command_ctx
        .reply_embed(updated_embed(&scoreboard, args.option))
        .await?;

    Ok(())
}

/// Splits `<message id> <option> <new value>`; the value is the rest of the line.
///
/// # Returns
/// - `Ok(SetArgs)` - Parsed arguments
/// - `Err(AppError::BadRequest)` - Missing argument, invalid id or unknown option
pub fn parse_args<'a>(prefix: &str, args: &'a str) -> Result<SetArgs<'a>, AppError> {
    let usage = || {
        AppError::BadRequest(format!(
            "Usage: `{}{} {}`",
            prefix,
            Command::Set.name(),
            Command::Set.usage()
        ))
    };

    let (message_id, rest) = args
        .trim()
        .split_once(char::is_whitespace)
        .ok_or_else(usage)?;
    let (option, value) = rest
        .trim_start()
        .split_once(char::is_whitespace)
        .ok_or_else(usage)?;
    let value = value.trim();

    let message_id = parse_message_id(message_id)?;
    let option = ScoreboardOption::parse(option).ok_or_else(|| {
        AppError::BadRequest(format!(
            "Unknown option \"{}\". Available options: {}",
            option,
            ScoreboardOption::list()
        ))
    })?;

    Ok(SetArgs {
        message_id,
        option,
        value,
    })
}

/// Parses a scoreboard message id typed by a user.
pub fn parse_message_id(value: &str) -> Result<u64, AppError> {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .ok_or_else(|| AppError::BadRequest(format!("\"{}\" is not a valid message ID", value)))
}

fn updated_embed(scoreboard: &Scoreboard, option: ScoreboardOption) -> CreateEmbed {
    CreateEmbed::new()
        .colour(SUCCESS_COLOUR)
        .author(CreateEmbedAuthor::new("Scoreboard updated").icon_url(SUCCESS_ICON))
        .description(format!(
            "Changed `{}` of [{}]({})",
            option.as_str(),
            scoreboard.name,
            scoreboard.jump_url()
        ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_keeps_inner_whitespace() {
        let args = parse_args("s!", "1234 name My  main server ").unwrap();

        assert_eq!(
            args,
            SetArgs {
                message_id: 1234,
                option: ScoreboardOption::Name,
                value: "My  main server",
            }
        );
    }

    #[test]
    fn missing_arguments_show_usage() {
        for args in ["", "1234", "1234 name", "1234 name   "] {
            let result = parse_args("s!", args);

            assert!(
                matches!(&result, Err(AppError::BadRequest(message)) if message == "Usage: `s!set <message id> <option> <new value>`"),
                "{:?}",
                args
            );
        }
    }

    #[test]
    fn rejects_invalid_message_id() {
        let result = parse_args("s!", "abc name Main");

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert!(parse_message_id("0").is_err());
    }

    #[test]
    fn unknown_option_lists_options() {
        let result = parse_args("s!", "1234 colour red");

        assert!(matches!(
            result,
            Err(AppError::BadRequest(message)) if message.ends_with(&ScoreboardOption::list())
        ));
    }
}
