use icongen::logger::{self, LogLevel, LoggerConfig};
use icongen::{log_error, log_info, log_warn};
use icongen::{IconClient, IconConfig, IconError, Intent, Outcome, StylePreset};
use std::env;

const USAGE: &str = "usage: icongen <prompt> [style] [#RRGGBB ...]";

struct Args {
    prompt: String,
    style: StylePreset,
    colors: Vec<String>,
}

/// The second argument is taken as the style only when it names a preset;
/// anything else is left for the color validator.
fn parse_args_from<I>(args: I) -> Result<Args, Box<dyn std::error::Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter().peekable();
    let prompt = args.next().ok_or(USAGE)?;

    let style = match args.peek().map(|arg| arg.parse::<StylePreset>()) {
        Some(Ok(style)) => {
            args.next();
            style
        }
        _ => StylePreset::default(),
    };

    Ok(Args {
        prompt,
        style,
        colors: args.collect(),
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dotenv_loaded = dotenv::dotenv().is_ok();

    let level = env::var("ICONGEN_LOG")
        .ok()
        .and_then(|name| LogLevel::parse(&name))
        .unwrap_or(LogLevel::Info);
    logger::init_with_config(LoggerConfig::new().with_level(level))?;

    if !dotenv_loaded {
        log::debug!("No .env file found, using process environment");
    }
    logger::log_startup_info(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let args = parse_args_from(env::args().skip(1))?;
    let config = IconConfig::from_env();
    logger::log_config_info(&config);

    let client = IconClient::new(config)?;
    let mut workflow = client.controller();

    workflow.dispatch(Intent::SetPrompt(args.prompt)).await;
    workflow.dispatch(Intent::SetStyle(args.style)).await;
    for (index, color) in args.colors.into_iter().enumerate() {
        if index > 0 {
            workflow.dispatch(Intent::AddColor).await;
        }
        if let Outcome::Ignored = workflow.dispatch(Intent::UpdateColor(index, color)).await {
            log_warn!("Only the first 5 brand colors are used");
            break;
        }
    }

    match workflow.dispatch(Intent::Submit).await {
        Outcome::Generated { images } => log_info!("Generated {} icons", images),
        Outcome::Rejected(e) => {
            log_error!("{}", e);
            return Err(IconError::from(e).into());
        }
        Outcome::Failed(e) => {
            let message = workflow.state().error.clone().unwrap_or_else(|| e.to_string());
            log_error!("{}", message);
            return Err(e.into());
        }
        other => {
            log_warn!("Unexpected submit outcome: {:?}", other);
            return Ok(());
        }
    }

    if let Some(view) = workflow.results_view() {
        if let Some(metadata) = &view.metadata {
            log::info!("Prompt: {} | Style: {}", metadata.prompt, metadata.style);
        }
        for tile in &view.tiles {
            println!("{}\t{}", tile.label, tile.url);
        }
    }

    if let Outcome::BatchFinished(report) = workflow.dispatch(Intent::DownloadAll).await {
        for saved in &report.saved {
            println!("saved\t{}", saved.path.display());
        }
        for failure in &report.failed {
            log_error!("Icon {}: {}", failure.index + 1, failure.error);
        }
        if !report.is_complete() {
            return Err(format!("{} of the icons failed to download", report.failed.len()).into());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_style_is_optional() {
        let parsed = parse_args_from(args(&["weather", "outline", "#FF5733"])).unwrap();
        assert_eq!(parsed.style, StylePreset::Outline);
        assert_eq!(parsed.colors, vec!["#FF5733"]);

        let parsed = parse_args_from(args(&["weather", "#FF5733"])).unwrap();
        assert_eq!(parsed.style, StylePreset::Auto);
        assert_eq!(parsed.colors, vec!["#FF5733"]);
    }

    #[test]
    fn test_color_without_hash_reaches_color_validation() {
        let parsed = parse_args_from(args(&["weather", "FF5733"])).unwrap();
        assert_eq!(parsed.style, StylePreset::Auto);
        assert_eq!(parsed.colors, vec!["FF5733"]);

        let err = icongen::validation::validate_colors(&parsed.colors).unwrap_err();
        assert!(err.to_string().contains("Invalid HEX colors: FF5733"));
    }

    #[test]
    fn test_prompt_is_required() {
        assert!(parse_args_from(Vec::<String>::new()).is_err());
    }
}
