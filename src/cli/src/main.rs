use account_recovery::{
    config::AppConfig, http_client::HttpClient, progress::FileStepTracker, shell::Shell,
};
use account_recovery_core::{Event, ResetEvent, StepProps, UserDataUpdate, VerifyEvent};
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use env_logger::{Builder, Env, Target};
use log::{error, info};
use std::io::Write;

/// Signup verification and account-recovery client
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    action: Action,
}

#[derive(Debug, Subcommand)]
enum Action {
    /// Look up the recovery channels of a user
    Lookup {
        /// Username or email address
        user: String,
    },
    /// Send a password reset link through one recovery channel
    Reset {
        /// Username or email address
        user: String,
        /// Channel to use, e.g. primary-email or secondary-sms
        method: String,
    },
    /// Submit the email verification code of a signup step
    Verify {
        flow: String,
        step: String,
        code: String,
        /// Number of steps in the flow
        #[arg(long, default_value_t = 1)]
        flow_steps: usize,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        error!("application error: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    initialize();

    let config = AppConfig::load().context("failed to load configuration")?;
    let http = HttpClient::new(&config.api)?;
    let shell = Shell::new(http, FileStepTracker::new(config.progress.file.clone()));

    info!("using API at {}", config.api.base_url);

    match cli.action {
        Action::Lookup { user } => {
            let view = shell
                .dispatch(Event::Reset(ResetEvent::FetchOptions { user }))
                .await?;

            if let Some(error) = view.options_error {
                bail!("failed to look up recovery options: {error}");
            }

            let items = serde_json::to_string_pretty(&view.reset.options.items)
                .context("failed to serialize recovery options")?;
            println!("{items}");
        }

        Action::Reset { user, method } => {
            for event in [
                ResetEvent::UpdateUserData(UserDataUpdate::login(&user)),
                ResetEvent::PickOption {
                    method: method.clone(),
                },
            ] {
                shell.dispatch(Event::Reset(event)).await?;
            }

            let view = shell
                .dispatch(Event::Reset(ResetEvent::RequestPasswordReset { user, method }))
                .await?;

            if let Some(error) = view.reset.reset_request.error() {
                bail!("failed to request password reset: {error}");
            }

            let method = view.reset.picked_method.unwrap_or_default();
            println!("reset link sent via {method}");
        }

        Action::Verify {
            flow,
            step,
            code,
            flow_steps,
        } => {
            let props = StepProps {
                flow_name: flow,
                step_name: step,
                flow_step_count: flow_steps,
                sub_header_text: String::new(),
            };

            for event in [
                VerifyEvent::Mount(props),
                VerifyEvent::ChangeCode { code },
                VerifyEvent::Submit,
            ] {
                shell.dispatch(Event::Verify(event)).await?;
            }

            let view = shell.view();
            if !view.verify.submitting {
                bail!("failed to submit verification code: step tracker rejected it");
            }

            println!("{}", view.verify.header_text);
            println!("{}", view.verify.sub_header_text);
        }
    }

    Ok(())
}

fn initialize() {
    log_panics::init();

    let mut builder = if cfg!(debug_assertions) {
        Builder::from_env(Env::default().default_filter_or("debug"))
    } else {
        Builder::from_env(Env::default().default_filter_or("info"))
    };

    // stdout carries command results
    builder.target(Target::Stderr);
    builder.format(|f, record| writeln!(f, "[{}] {}", record.level(), record.args()));
    builder.init();
}
