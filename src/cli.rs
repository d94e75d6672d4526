use clap::{Parser, Subcommand};

/// webinar-cli — list, create and delete webinars.
#[derive(Parser, Debug)]
#[command(name = "webinar-cli", version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// Output as JSON instead of TSV
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List a user's webinars
    List(ListArgs),

    /// Show one webinar
    Get(GetArgs),

    /// Create a single webinar at a fixed time
    CreateScheduled(CreateScheduledArgs),

    /// Create a recurring webinar series
    CreateRecurring(CreateRecurringArgs),

    /// Delete a webinar or one occurrence of a series
    Delete(DeleteArgs),
}

/// Arguments for the `list` subcommand.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// User ID or email; "me" for the token's owner
    #[arg(long, default_value = "me")]
    pub user: String,

    /// Records per page (1-300)
    #[arg(long, default_value = "30")]
    pub page_size: u32,

    /// Page to fetch, starting at 1
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Keep fetching until the last page
    #[arg(long)]
    pub all: bool,
}

#[derive(Parser, Debug)]
pub struct GetArgs {
    pub webinar_id: i64,
}

/// Fields shared by both create subcommands.
#[derive(Parser, Debug)]
pub struct WebinarFields {
    /// User ID or email; "me" for the token's owner
    #[arg(long, default_value = "me")]
    pub user: String,

    #[arg(long)]
    pub topic: String,

    #[arg(long)]
    pub agenda: Option<String>,

    /// Duration in minutes
    #[arg(long)]
    pub duration: Option<u32>,

    /// Up to 10 characters from a-z A-Z 0-9 @ - _ *
    #[arg(long)]
    pub password: Option<String>,

    /// Tracking field as name=value; repeatable, order is kept
    #[arg(long = "tracking-field", value_parser = parse_key_value)]
    pub tracking_fields: Vec<(String, String)>,
}

/// Arguments for the `create-scheduled` subcommand.
#[derive(Parser, Debug)]
pub struct CreateScheduledArgs {
    #[command(flatten)]
    pub fields: WebinarFields,

    /// Start time, RFC 3339 (e.g. 2024-03-05T14:30:00-05:00)
    #[arg(long)]
    pub start: String,
}

/// Arguments for the `create-recurring` subcommand.
#[derive(Parser, Debug)]
pub struct CreateRecurringArgs {
    #[command(flatten)]
    pub fields: WebinarFields,

    /// Start time, RFC 3339; omit for a series with no fixed time
    #[arg(long)]
    pub start: Option<String>,

    /// Repeat daily, every N days
    #[arg(long, conflicts_with = "weekly_days")]
    pub every_days: Option<u32>,

    /// Repeat weekly on these days (1 = Sunday ... 7 = Saturday), e.g. "2,4"
    #[arg(long)]
    pub weekly_days: Option<String>,

    /// Number of occurrences
    #[arg(long, default_value = "1")]
    pub occurrences: u32,
}

#[derive(Parser, Debug)]
pub struct DeleteArgs {
    pub webinar_id: i64,

    /// Delete only this occurrence of a recurring series
    #[arg(long)]
    pub occurrence: Option<String>,

    /// Email registrants and panelists about the cancellation
    #[arg(long)]
    pub notify: bool,
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got {s:?}"))?;
    if key.is_empty() {
        return Err("tracking field name must not be empty".to_string());
    }
    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_list_defaults() {
        let cli = Cli::parse_from(["webinar-cli", "list"]);
        match cli.command {
            Command::List(args) => {
                assert_eq!(args.user, "me");
                assert_eq!(args.page_size, 30);
                assert_eq!(args.page, 1);
                assert!(!args.all);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn tracking_fields_keep_order() {
        let cli = Cli::parse_from([
            "webinar-cli",
            "create-scheduled",
            "--topic",
            "Launch",
            "--start",
            "2024-03-05T14:30:00-05:00",
            "--tracking-field",
            "custom1=abc",
            "--tracking-field",
            "custom2=xyz",
        ]);
        let Command::CreateScheduled(args) = cli.command else {
            panic!("expected create-scheduled");
        };
        assert_eq!(
            args.fields.tracking_fields,
            vec![
                ("custom1".to_string(), "abc".to_string()),
                ("custom2".to_string(), "xyz".to_string())
            ]
        );
    }

    #[test]
    fn key_value_requires_separator() {
        assert!(parse_key_value("novalue").is_err());
        assert!(parse_key_value("=x").is_err());
        assert_eq!(
            parse_key_value("a=b=c").unwrap(),
            ("a".to_string(), "b=c".to_string())
        );
    }
}
