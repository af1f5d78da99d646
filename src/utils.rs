use time::macros::format_description;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;

use crate::args::Args;

pub const MAX_WORD_LENGTH: usize = 64;

pub fn setup_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let timer = LocalTime::new(format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second]"
    ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(timer)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn validate_args(args: &Args) -> anyhow::Result<()> {
    if args.min_word_length == 0 || args.min_word_length > MAX_WORD_LENGTH {
        anyhow::bail!("--min-word-length must be between 1 and {}", MAX_WORD_LENGTH);
    }

    if args.top_words == 0 {
        anyhow::bail!("--top-words must be greater than 0");
    }

    if let Some(keyword) = &args.keyword {
        if keyword.trim().is_empty() {
            anyhow::bail!("--keyword must not be empty");
        }
    }

    if !args.demo && !args.interactive && args.input.is_none() {
        anyhow::bail!("No competitor data: pass --input, --interactive or --demo");
    }

    if args.input.is_some() && args.keyword.is_none() && !args.interactive {
        anyhow::bail!("--input requires --keyword");
    }

    Ok(())
}
