mod cli;
mod error;
mod output;

use chrono::DateTime;
use clap::Parser;
use cli::{Command, WebinarFields};
use error::CliError;
use tokio_util::sync::CancellationToken;
use tracing::info;
use webinars::{
    PaginationRequest, RecurrenceInfo, RecurringWebinarRequest, ScheduledWebinarRequest, Zoom,
    ZoomConfig,
};

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize tracing
    let filter = cli
        .log_level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .unwrap_or(tracing_subscriber::filter::LevelFilter::INFO);

    tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let _ = dotenvy::dotenv(); // load .env if present

    // One token for the whole invocation, tripped by SIGINT/SIGTERM.
    let cancel = setup_signal_handlers();

    if let Err(e) = run(cli, &cancel).await {
        tracing::error!(error = %e, "command failed");
        std::process::exit(1);
    }
}

async fn run(cli: cli::Cli, cancel: &CancellationToken) -> Result<(), CliError> {
    let zoom = Zoom::new(config_from_env()?)?;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Command::List(args) => {
            let mut request = PaginationRequest::new(args.page_size, args.page)?;
            loop {
                let page = zoom.get_all_webinars(&args.user, request, cancel).await?;
                output::write_page(&page, cli.json, &mut stdout)?;
                if !args.all || !page.has_next_page() {
                    break;
                }
                request = request.next();
            }
        }

        Command::Get(args) => {
            let webinar = zoom.get_webinar(args.webinar_id, cancel).await?;
            output::write_webinar(&webinar, cli.json, &mut stdout)?;
        }

        Command::CreateScheduled(args) => {
            let start_time = parse_start(&args.start)?;
            let WebinarFields {
                user,
                topic,
                agenda,
                duration,
                password,
                tracking_fields,
            } = args.fields;
            let request = ScheduledWebinarRequest {
                agenda,
                duration,
                password,
                tracking_fields: non_empty(tracking_fields),
                ..ScheduledWebinarRequest::new(topic, start_time)
            };
            let webinar = zoom.create_scheduled_webinar(&user, &request, cancel).await?;
            output::write_webinar(&webinar, cli.json, &mut stdout)?;
        }

        Command::CreateRecurring(args) => {
            let start_time = args.start.as_deref().map(parse_start).transpose()?;
            let recurrence = match (&args.weekly_days, args.every_days) {
                (Some(days), _) => Some(RecurrenceInfo::weekly(1, days, args.occurrences)),
                (None, Some(every)) => Some(RecurrenceInfo::daily(every, args.occurrences)),
                (None, None) => None,
            };
            let WebinarFields {
                user,
                topic,
                agenda,
                duration,
                password,
                tracking_fields,
            } = args.fields;
            let request = RecurringWebinarRequest {
                agenda,
                start_time,
                duration,
                recurrence,
                password,
                tracking_fields: non_empty(tracking_fields),
                ..RecurringWebinarRequest::new(topic)
            };
            let series = zoom.create_recurring_webinar(&user, &request, cancel).await?;
            output::write_series(&series, cli.json, &mut stdout)?;
        }

        Command::Delete(args) => {
            zoom.delete_webinar(
                args.webinar_id,
                args.occurrence.as_deref(),
                args.notify,
                cancel,
            )
            .await?;
        }
    }

    Ok(())
}

fn config_from_env() -> Result<ZoomConfig, CliError> {
    let token =
        std::env::var("ZOOM_ACCESS_TOKEN").map_err(|_| CliError::MissingEnv("ZOOM_ACCESS_TOKEN"))?;
    let mut config = ZoomConfig::default().with_access_token(token);
    if let Ok(url) = std::env::var("ZOOM_API_URL") {
        info!(base_url = %url, "using custom API url");
        config = config.with_base_url(url);
    }
    Ok(config)
}

fn parse_start(input: &str) -> Result<DateTime<chrono::FixedOffset>, CliError> {
    DateTime::parse_from_rfc3339(input).map_err(|source| CliError::StartTime {
        input: input.to_string(),
        source,
    })
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    (!items.is_empty()).then_some(items)
}

/// Register SIGINT and SIGTERM handlers that trigger the returned token.
fn setup_signal_handlers() -> CancellationToken {
    let cancel = CancellationToken::new();

    let cancel_clone = cancel.clone();
    tokio::spawn(async move {
        let _ = tokio::signal::ctrl_c().await;
        info!("received SIGINT, cancelling");
        cancel_clone.cancel();
    });

    #[cfg(unix)]
    {
        let cancel_clone = cancel.clone();
        tokio::spawn(async move {
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(mut sig) => {
                    sig.recv().await;
                    info!("received SIGTERM, cancelling");
                    cancel_clone.cancel();
                }
                Err(e) => tracing::warn!(error = %e, "failed to register SIGTERM handler"),
            }
        });
    }

    cancel
}
