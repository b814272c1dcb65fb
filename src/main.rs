use signgloss::app::App;
use signgloss::gloss::{
    AssetCatalog, Config, DirectoryCatalog, GlossConfig, GlossPipeline, MemoryCatalog,
};
use signgloss::ui::TuiManager;
use std::fs::File;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::warn;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "signgloss.log";

#[derive(Debug, PartialEq)]
struct CliArgs {
    assets_dir: PathBuf,
    /// Text to gloss and print instead of starting the TUI.
    print: Option<String>,
}

fn parse_args<I>(args: I, env_assets: Option<String>) -> CliArgs
where
    I: IntoIterator<Item = String>,
{
    let mut assets_dir = None;
    let mut print = None;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--print" | "-p" => {
                let text: Vec<String> = args.by_ref().collect();
                print = Some(text.join(" "));
            }
            _ if assets_dir.is_none() => assets_dir = Some(PathBuf::from(arg)),
            _ => {}
        }
    }

    let assets_dir = assets_dir
        .or_else(|| env_assets.map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("assets"));

    CliArgs { assets_dir, print }
}

fn init_logging(to_stderr: bool) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_env("SIGNGLOSS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    if to_stderr {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        let file = File::create(LOG_FILE)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_args(std::env::args().skip(1), std::env::var("SIGNGLOSS_ASSETS").ok());
    init_logging(args.print.is_some())?;

    let config = Config {
        gloss: GlossConfig::from_env(),
        ..Config::default()
    };
    // Without a sign library every word is finger-spelled.
    let catalog: Arc<dyn AssetCatalog> = match DirectoryCatalog::open(&args.assets_dir) {
        Ok(catalog) => Arc::new(catalog),
        Err(err) => {
            warn!(error = %err, "no sign assets available");
            Arc::new(MemoryCatalog::new())
        }
    };
    let pipeline = GlossPipeline::with_config(catalog, config.gloss)?;

    if let Some(text) = args.print {
        println!("{}", pipeline.transform(&text).join(" "));
        return Ok(());
    }

    let mut app = App::new(pipeline, config.playback);
    let mut tui = TuiManager::new()?;
    tui.run_event_loop(&mut app)?;

    Ok(())
}
