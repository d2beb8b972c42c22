use clap::Parser;
use maritime_assistant::config::cli::{Cli, Command, LogFormat};
use maritime_assistant::utils::error::ErrorSeverity;
use maritime_assistant::utils::{logger, validation::Validate};
use maritime_assistant::{
    AppConfig, HuggingFaceClient, MaritimeAssistant, MaritimeError, OpenWeatherClient,
    PortLocator, QuestionAnswerer, StaticPortLocator, Unconfigured, VoyageEstimator,
    WeatherProvider,
};

type Assistant = MaritimeAssistant<
    Box<dyn QuestionAnswerer>,
    Box<dyn WeatherProvider>,
    Box<dyn PortLocator>,
>;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }
    tracing::debug!("CLI args: {:?}", cli);

    if let Err(e) = run(cli).await {
        tracing::error!(
            "❌ {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("⚠️ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run(cli: Cli) -> Result<(), MaritimeError> {
    let config = AppConfig::load_or_default(&cli.config)?;
    config.validate()?;
    tracing::debug!("Configuration loaded from {}", cli.config);

    match cli.command {
        Command::Ask { question } => {
            let assistant = build_assistant(&config, false)?;
            let answer = assistant.ask(&question.join(" ")).await?;
            println!("Answer:");
            println!("{}", answer.text);
        }
        Command::Weather { city } => {
            let assistant = build_assistant(&config, false)?;
            let report = assistant.weather(&city.join(" ")).await?;
            println!("Weather:");
            println!("{}", report);
        }
        Command::Voyage {
            from,
            to,
            speed,
            offline,
        } => {
            let speed = speed.unwrap_or(config.voyage.default_speed_knots);
            let assistant = build_assistant(&config, offline)?;
            let result = assistant.voyage(&from, &to, speed).await?;
            println!("🧭 {} → {}", from, to);
            println!("📏 Distance: {:.1} nm", result.distance_nm);
            println!(
                "⏱ Duration at {} kn: {:.1} hours ({:.1} days)",
                speed, result.duration_hours, result.duration_days
            );
        }
    }

    Ok(())
}

fn build_assistant(config: &AppConfig, offline: bool) -> Result<Assistant, MaritimeError> {
    let answerer: Box<dyn QuestionAnswerer> = if config.huggingface.api_key.is_some() {
        Box::new(HuggingFaceClient::new(config.huggingface.clone())?)
    } else {
        Box::new(Unconfigured::new("huggingface.api_key"))
    };

    let weather_client = if config.openweather.api_key.is_some() {
        Some(OpenWeatherClient::new(config.openweather.clone())?)
    } else {
        None
    };

    let weather: Box<dyn WeatherProvider> = match &weather_client {
        Some(client) => Box::new(client.clone()),
        None => Box::new(Unconfigured::new("openweather.api_key")),
    };

    let locator: Box<dyn PortLocator> = match weather_client {
        Some(client) if !offline => Box::new(client),
        Some(_) => Box::new(StaticPortLocator::with_default_ports()),
        None => {
            if !offline {
                tracing::info!("No OpenWeather key configured, using the built-in port table");
            }
            Box::new(StaticPortLocator::with_default_ports())
        }
    };

    let estimator = VoyageEstimator::with_timeout(locator, config.voyage.lookup_timeout());
    Ok(MaritimeAssistant::new(answerer, weather, estimator))
}
