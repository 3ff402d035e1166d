//! Sahayak assistant entry point

use std::io::{self, Write};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use sahayak_assistant::{first_available, Assistant, ConsoleSpeaker, StdinListener};
use sahayak_config::{load_settings, Settings};
use sahayak_core::{Listener, VoiceSettings};

fn main() -> anyhow::Result<()> {
    // Priority: env vars > config/{env}.yaml > config/default.yaml > defaults
    let env = std::env::var("SAHAYAK_ENV").ok();
    let settings = match load_settings(env.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            // Tracing not yet initialized, use eprintln for early logging
            eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
            Settings::default()
        },
    };

    init_tracing(&settings);

    tracing::info!("Starting Sahayak assistant v{}", env!("CARGO_PKG_VERSION"));

    // Broken rule tables or templates abort here, before any conversation.
    let mut assistant = Assistant::from_settings(&settings)?;
    tracing::info!(
        user_id = %settings.assistant.user_id,
        profile_dir = %settings.profiles.dir,
        "Assistant initialized"
    );

    let mut speaker = first_available(&[("console", ConsoleSpeaker::create)]);
    speaker.configure(&VoiceSettings::new().with_rate(200).with_volume(0.9));
    let mut listener = StdinListener::new();

    let welcome = assistant.welcome_message();
    if let Err(e) = speaker.speak(&welcome) {
        tracing::warn!(error = %e, "Speech output failed for welcome message");
        println!("{}", welcome);
    }

    let mut stdout = io::stdout();
    loop {
        print!("You: ");
        stdout.flush()?;

        let input = match listener.listen()? {
            Some(input) => input,
            None => break,
        };

        if matches!(input.to_lowercase().as_str(), "exit" | "quit" | "stop") {
            break;
        }

        if let Some(response) = assistant.handle_turn(Some(&input)) {
            if let Err(e) = speaker.speak(&response) {
                tracing::warn!(error = %e, "Speech output failed; printing reply");
                println!("{}", response);
            }
        }
    }

    tracing::info!("Sahayak assistant stopped");
    Ok(())
}

/// Initialize tracing from the observability settings
fn init_tracing(settings: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "sahayak={}",
            settings.observability.log_level
        ))
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);
    let fmt_layer = if settings.observability.log_json {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };
    subscriber.with(fmt_layer).init();
}
