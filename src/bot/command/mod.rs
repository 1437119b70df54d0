//! Prefix commands.
//!
//! Parses guild messages that start with the configured prefix, checks the member's
//! permissions and runs the matching command. Failures are answered with a red embed
//! naming the kind of error.

pub mod create;
pub mod delete;
pub mod help;
pub mod list;
pub mod ping;
pub mod set;

use serenity::all::{
    Colour, Context, CreateEmbed, CreateEmbedAuthor, CreateMessage, GuildId, Message, Permissions,
    RoleId,
};

use crate::{error::AppError, service::scoreboard::ScoreboardService, state::AppState};

pub const ERROR_COLOUR: Colour = Colour::from_rgb(221, 46, 68);
pub const SUCCESS_COLOUR: Colour = Colour::new(7844437);
const ERROR_ICON: &str = "https://cdn.discordapp.com/emojis/808045512393621585.png";
/// Minimum similarity for a command name to be suggested.
const SUGGESTION_CUTOFF: f64 = 0.3;
const MAX_SUGGESTIONS: usize = 3;
pub const SUCCESS_ICON: &str = "https://cdn.discordapp.com/emojis/809149148356018256.png";

/// Commands the bot understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    List,
    Create,
    Set,
    Delete,
    Ping,
    Help,
}

impl Command {
    pub const ALL: [Command; 6] = [
        Command::List,
        Command::Create,
        Command::Set,
        Command::Delete,
        Command::Ping,
        Command::Help,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Command::List => "list",
            Command::Create => "create",
            Command::Set => "set",
            Command::Delete => "delete",
            Command::Ping => "ping",
            Command::Help => "help",
        }
    }

    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Command::List => &["scoreboards", "sbs", "list_scoreboards"],
            Command::Create => &[
                "create_sb",
                "create_scoreboard",
                "add",
                "add_sb",
                "add_scoreboard",
            ],
            Command::Set => &["edit"],
            Command::Delete => &["remove", "delete_sb", "remove_sb"],
            Command::Ping => &[],
            Command::Help => &["commands"],
        }
    }

    /// Arguments shown after the command name in help texts.
    pub fn usage(&self) -> &'static str {
        match self {
            Command::Set => "<message id> <option> <new value>",
            Command::Delete => "<message id>",
            _ => "",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Command::List => "List the scoreboards of this guild",
            Command::Create => "Create a new scoreboard",
            Command::Set => "Change an option of a scoreboard",
            Command::Delete => "Delete a scoreboard and its message",
            Command::Ping => "View my current latency",
            Command::Help => "Show this list",
        }
    }

    /// Whether the member needs the Manage Server permission.
    pub fn requires_manage_guild(&self) -> bool {
        matches!(self, Command::Create | Command::Set | Command::Delete)
    }

    /// Looks up a command by name or alias, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| {
            command.name().eq_ignore_ascii_case(name)
                || command
                    .aliases()
                    .iter()
                    .any(|alias| alias.eq_ignore_ascii_case(name))
        })
    }
}

/// Command names resembling an unknown name, most similar first.
///
/// Similarity is the normalized Levenshtein distance; names below the cutoff are left
/// out and equally similar names keep their help order.
pub fn suggest_commands(name: &str) -> Vec<&'static str> {
    let name = name.to_lowercase();

    let mut scored: Vec<(f64, &'static str)> = Command::ALL
        .iter()
        .map(|command| {
            (
                strsim::normalized_levenshtein(&name, command.name()),
                command.name(),
            )
        })
        .filter(|(score, _)| *score >= SUGGESTION_CUTOFF)
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, name)| name)
        .collect()
}

/// Description of the unknown command embed, if any command resembles `name`.
pub fn suggestion_text(prefix: &str, name: &str) -> Option<String> {
    let suggestions = suggest_commands(name);
    if suggestions.is_empty() {
        return None;
    }

    let commands: Vec<String> = suggestions
        .iter()
        .map(|command| format!("{}{}", prefix, command))
        .collect();

    Some(format!(
        "Maybe try one of the following: {}",
        commands.join(", ")
    ))
}

/// A command message split into the command name and the remaining text.
#[derive(Debug, PartialEq, Eq)]
pub struct Invocation<'m> {
    pub name: &'m str,
    pub args: &'m str,
}

/// Splits a message into an invocation if it starts with `prefix`.
///
/// Whitespace between the prefix and the command name is allowed.
///
/// # Returns
/// - `Some(Invocation)` - Command name and trimmed arguments
/// - `None` - Not a command message
pub fn parse_invocation<'m>(prefix: &str, content: &'m str) -> Option<Invocation<'m>> {
    let rest = content.strip_prefix(prefix)?.trim_start();
    if rest.is_empty() {
        return None;
    }

    let (name, args) = match rest.find(char::is_whitespace) {
        Some(index) => (&rest[..index], rest[index..].trim()),
        None => (rest, ""),
    };

    Some(Invocation { name, args })
}

/// Author line of the error embed for an error.
pub fn error_title(error: &AppError) -> &'static str {
    match error {
        AppError::BadRequest(_) | AppError::NotFound(_) => "Invalid argument!",
        AppError::PermissionDenied(_) => "Missing required permissions to use that command!",
        _ => "An unexpected error occured!",
    }
}

/// Red embed answering a failed or unknown command.
pub fn error_embed(title: &str, description: Option<String>) -> CreateEmbed {
    let embed = CreateEmbed::new()
        .colour(ERROR_COLOUR)
        .author(CreateEmbedAuthor::new(title).icon_url(ERROR_ICON));

    match description {
        Some(description) => embed.description(description),
        None => embed,
    }
}

/// Effective guild permissions of a member.
///
/// # Arguments
/// - `is_owner` - The member owns the guild
/// - `everyone` - Permissions of the @everyone role
/// - `roles` - Permissions of the member's other roles
pub fn effective_permissions(
    is_owner: bool,
    everyone: Permissions,
    roles: &[Permissions],
) -> Permissions {
    if is_owner {
        return Permissions::all();
    }

    let permissions = roles
        .iter()
        .fold(everyone, |permissions, role| permissions | *role);

    if permissions.administrator() {
        Permissions::all()
    } else {
        permissions
    }
}

/// Everything a command needs to run.
pub struct CommandContext<'a> {
    pub state: &'a AppState,
    pub ctx: &'a Context,
    pub message: &'a Message,
    pub guild_id: GuildId,
}

impl<'a> CommandContext<'a> {
    pub fn service(&self) -> ScoreboardService<'a> {
        ScoreboardService::new(
            &self.state.db,
            self.ctx.http.clone(),
            &self.state.registry,
            self.state.rcon_timeout,
        )
    }

    /// Sends an embed to the channel the command was used in.
    pub async fn reply_embed(&self, embed: CreateEmbed) -> Result<Message, AppError> {
        let message = self
            .message
            .channel_id
            .send_message(&self.ctx.http, CreateMessage::new().embed(embed))
            .await?;

        Ok(message)
    }

    /// Guild permissions of the command's author, from the cache.
    fn author_permissions(&self) -> Option<Permissions> {
        let member = self.message.member.as_ref()?;
        let guild = self.ctx.cache.guild(self.guild_id)?;

        let everyone = guild
            .roles
            .get(&RoleId::new(self.guild_id.get()))
            .map(|role| role.permissions)
            .unwrap_or_else(Permissions::empty);
        let roles: Vec<Permissions> = member
            .roles
            .iter()
            .filter_map(|role_id| guild.roles.get(role_id))
            .map(|role| role.permissions)
            .collect();

        Some(effective_permissions(
            guild.owner_id == self.message.author.id,
            everyone,
            &roles,
        ))
    }

    fn require_manage_guild(&self) -> Result<(), AppError> {
        match self.author_permissions() {
            Some(permissions) if permissions.manage_guild() => Ok(()),
            _ => Err(AppError::PermissionDenied(
                "You are missing Manage Server permission(s) to run this command.".to_string(),
            )),
        }
    }
}

/// Runs a parsed command and answers failures with an error embed.
///
/// # Arguments
/// - `state` - Shared application state
/// - `ctx` - Discord context
/// - `message` - The command message
/// - `invocation` - Command name and arguments parsed from the message
pub async fn dispatch(
    state: &AppState,
    ctx: &Context,
    message: &Message,
    invocation: Invocation<'_>,
) {
    let Some(guild_id) = message.guild_id else {
        return;
    };

    let command_ctx = CommandContext {
        state,
        ctx,
        message,
        guild_id,
    };

    let Some(command) = Command::from_name(invocation.name) else {
        let embed = error_embed(
            "Unknown command!",
            suggestion_text(&state.prefix, invocation.name),
        );
        if let Err(e) = command_ctx.reply_embed(embed).await
        {
            tracing::warn!("Failed to answer unknown command {}: {}", invocation.name, e);
        }
        return;
    };

    if let Err(e) = run(&command_ctx, command, invocation.args).await {
        match &e {
            AppError::BadRequest(_) | AppError::NotFound(_) | AppError::PermissionDenied(_) => {
                tracing::debug!("Command {} rejected: {}", command.name(), e);
            }
            _ => tracing::error!("Command {} failed: {}", command.name(), e),
        }

        let embed = error_embed(error_title(&e), Some(e.to_string()));
        if let Err(e) = command_ctx.reply_embed(embed).await {
            tracing::warn!("Failed to answer failed command {}: {}", command.name(), e);
        }
    }
}

async fn run(
    command_ctx: &CommandContext<'_>,
    command: Command,
    args: &str,
) -> Result<(), AppError> {
    if command.requires_manage_guild() {
        command_ctx.require_manage_guild()?;
    }

    match command {
        Command::List => list::run(command_ctx).await,
        Command::Create => create::run(command_ctx).await,
        Command::Set => set::run(command_ctx, args).await,
        Command::Delete => delete::run(command_ctx, args).await,
        Command::Ping => ping::run(command_ctx).await,
        Command::Help => help::run(command_ctx).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_command_and_arguments() {
        let invocation = parse_invocation("s!", "s!set 1234 name  Main server ").unwrap();

        assert_eq!(invocation.name, "set");
        assert_eq!(invocation.args, "1234 name  Main server");
    }

    #[test]
    fn allows_space_after_prefix() {
        let invocation = parse_invocation("s!", "s! list").unwrap();

        assert_eq!(invocation, Invocation { name: "list", args: "" });
    }

    #[test]
    fn ignores_other_messages() {
        assert!(parse_invocation("s!", "hello s!list").is_none());
        assert!(parse_invocation("s!", "s!").is_none());
        assert!(parse_invocation("s!", "S!list").is_none());
    }

    #[test]
    fn resolves_names_and_aliases_ignoring_case() {
        assert_eq!(Command::from_name("LIST"), Some(Command::List));
        assert_eq!(Command::from_name("sbs"), Some(Command::List));
        assert_eq!(Command::from_name("Add_Scoreboard"), Some(Command::Create));
        assert_eq!(Command::from_name("edit"), Some(Command::Set));
        assert_eq!(Command::from_name("remove_sb"), Some(Command::Delete));
        assert_eq!(Command::from_name("commands"), Some(Command::Help));
        assert_eq!(Command::from_name("eval"), None);
    }

    #[test]
    fn suggests_similar_commands_best_first() {
        assert_eq!(suggest_commands("crate"), vec!["create", "delete"]);
        assert_eq!(suggest_commands("lsit"), vec!["list", "set"]);
        assert_eq!(suggest_commands("DELET")[0], "delete");
        assert!(suggest_commands("zzzzzz").is_empty());
    }

    #[test]
    fn suggestion_text_lists_prefixed_commands() {
        assert_eq!(
            suggestion_text("s!", "sett").as_deref(),
            Some("Maybe try one of the following: s!set, s!create, s!delete")
        );
        assert_eq!(suggestion_text("s!", "zzzzzz"), None);
    }

    #[test]
    fn only_management_commands_need_manage_guild() {
        let restricted: Vec<_> = Command::ALL
            .into_iter()
            .filter(Command::requires_manage_guild)
            .collect();

        assert_eq!(restricted, vec![Command::Create, Command::Set, Command::Delete]);
    }

    #[test]
    fn names_error_classes() {
        assert_eq!(
            error_title(&AppError::BadRequest("Unknown option".to_string())),
            "Invalid argument!"
        );
        assert_eq!(
            error_title(&AppError::PermissionDenied("no".to_string())),
            "Missing required permissions to use that command!"
        );
        assert_eq!(
            error_title(&AppError::InternalError("boom".to_string())),
            "An unexpected error occured!"
        );
    }

    #[test]
    fn error_embed_is_red_with_author() {
        let json = serde_json::to_value(error_embed(
            "Invalid argument!",
            Some("Value is not a number".to_string()),
        ))
        .unwrap();

        assert_eq!(json["color"], 0xDD2E44);
        assert_eq!(json["author"]["name"], "Invalid argument!");
        assert_eq!(json["description"], "Value is not a number");
    }

    #[test]
    fn combines_role_permissions() {
        let permissions = effective_permissions(
            false,
            Permissions::SEND_MESSAGES,
            &[Permissions::MANAGE_GUILD],
        );

        assert!(permissions.manage_guild());
        assert!(permissions.send_messages());
        assert!(!effective_permissions(false, Permissions::SEND_MESSAGES, &[]).manage_guild());
    }

    #[test]
    fn owner_and_administrator_have_every_permission() {
        assert!(effective_permissions(true, Permissions::empty(), &[]).manage_guild());
        assert!(
            effective_permissions(false, Permissions::empty(), &[Permissions::ADMINISTRATOR])
                .manage_guild()
        );
    }
}
