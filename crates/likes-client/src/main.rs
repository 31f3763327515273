//! Like toggle entry point
//!
//! Submits the like form of one message once, as a click on its button would.
//!
//! Run with:
//! ```bash
//! LIKES_API_BASE_URL=http://localhost:5000 LIKES_USER_ID=42 LIKES_MESSAGE_ID=7 \
//!     cargo run -p likes-client --bin like-toggle
//! ```
//!
//! Set `LIKES_ID` to the id of an existing like to unlike instead.

use std::env;

use likes_client::{create_toggle_handler, ToggleOutcome};
use likes_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use likes_core::{LikeError, LikeForm, LikeId, LikeState, MessageId, UserId};
use tracing::{debug, error, info};

#[tokio::main]
async fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(2);
        }
    };

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run(config).await {
        error!(error = %e, code = e.code(), "Toggle failed");
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> Result<(), LikeError> {
    let user_id: UserId = required_id("LIKES_USER_ID")?;
    let message_id: MessageId = required_id("LIKES_MESSAGE_ID")?;
    let likes_id = env::var("LIKES_ID")
        .ok()
        .map(|s| parse_id::<LikeId>("LIKES_ID", &s))
        .transpose()?;

    info!(
        app = %config.app.name,
        base_url = %config.api.base_url,
        %user_id,
        %message_id,
        "Submitting like form"
    );

    let handler = create_toggle_handler(&config.api)?;
    debug!(policy = ?handler.delete_failure_policy(), "Toggle handler ready");
    let mut form = LikeForm::with_state(message_id, user_id, LikeState::from_marker(likes_id));

    let outcome = handler.submit(&mut form).await?;
    match outcome {
        ToggleOutcome::Liked(record) => info!(likes_id = %record.id, icon = %form.icon(), "Liked"),
        ToggleOutcome::Unliked { message, .. } => info!(%message, icon = %form.icon(), "Unliked"),
        ToggleOutcome::AlreadyUnliked(id) => {
            info!(likes_id = %id, icon = %form.icon(), "Like was already gone");
        }
    }

    Ok(())
}

fn required_id<T>(key: &'static str) -> Result<T, LikeError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let value = env::var(key).map_err(|_| LikeError::InvalidConfig(format!("{key} is not set")))?;
    parse_id(key, &value)
}

fn parse_id<T>(key: &str, value: &str) -> Result<T, LikeError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| LikeError::InvalidConfig(format!("{key}={value}: {e}")))
}
