use std::io::Write;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use weather_widget::{
    GeolocationConfig, HostGeolocator, Mode, Screen, ViewController, WeatherClient, WeatherConfig,
};

const HELP: &str = "Type a city name to search, /geo to use your location, /now or /5d to switch view, exit to quit.";

/// One line of user input.
#[derive(Debug, PartialEq)]
enum Command {
    Search(String),
    Locate,
    Show(Mode),
    Exit,
}

impl Command {
    fn parse(line: &str) -> Self {
        match line.trim() {
            "exit" => Command::Exit,
            "/geo" => Command::Locate,
            "/now" => Command::Show(Mode::Current),
            "/5d" => Command::Show(Mode::Forecast),
            _ => Command::Search(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

/// Reads commands from stdin and prints the widget after every state change.
/// Fetches run as separate tasks, so a slow request never blocks input; when
/// two overlap, whichever finishes last is what stays on screen.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let client = WeatherClient::new(WeatherConfig::from_env())?;
    let geolocator = HostGeolocator::from_config(GeolocationConfig::from_env())?;
    let controller = Arc::new(ViewController::new(client, geolocator));

    let mut updates = controller.subscribe();
    let renderer = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let state = updates.borrow_and_update().clone();
            print!("{}> ", Screen(&state));
            if let Err(e) = std::io::stdout().flush() {
                debug!("Failed to flush stdout: {}", e);
                break;
            }
        }
    });

    println!("{}", HELP);
    print!("{}", Screen(&controller.state()));
    print!("> ");
    std::io::stdout().flush()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = Command::parse(&line);
        debug!("Command: {:?}", command);

        match command {
            Command::Exit => {
                info!("User wants to exit");
                break;
            }
            Command::Show(mode) => controller.toggle_mode(mode),
            Command::Locate => {
                let controller = Arc::clone(&controller);
                tokio::spawn(async move { controller.locate().await });
            }
            Command::Search(text) => {
                let controller = Arc::clone(&controller);
                tokio::spawn(async move { controller.search(&text).await });
            }
        }
    }

    renderer.abort();
    Ok(())
}
