use clap::Parser;
use deck_harvest::{Converter, HttpConversionApi, Prompt, WebDriverLauncher};
use env_logger::Env;

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging, `info` unless RUST_LOG says otherwise
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = match args.load_config() {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Failed to load configuration: {}", e);
            return;
        }
    };

    println!("Note: crawling requires a WebDriver server (e.g., ChromeDriver or geckodriver).");
    println!("Set WEBDRIVER_URL if not using the default {}", config.webdriver_url);

    let launcher = WebDriverLauncher::new(&config);
    let prompt = Prompt::stdio();

    if let Some(links_file) = &args.links_only {
        if let Err(e) =
            deck_harvest::run_links_only(prompt, &launcher, &config, links_file).await
        {
            ::log::error!("Error: {}", e);
        }
        return;
    }

    let api = HttpConversionApi::new(&config.converter);
    let converter = match Converter::new(api, &config.converter) {
        Ok(converter) => converter,
        Err(e) => {
            ::log::error!("Failed to set up the converter: {}", e);
            return;
        }
    };

    let start_time = std::time::Instant::now();
    match deck_harvest::run(prompt, &launcher, &converter, &config).await {
        Ok(summary) => ::log::info!(
            "Finished {} in {:.2} seconds: {} of {} presentations saved",
            summary.username,
            start_time.elapsed().as_secs_f64(),
            summary.saved,
            summary.links_found
        ),
        Err(e) => ::log::error!("Error: {}", e),
    }
}
