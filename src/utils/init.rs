use crate::error::AppError;
use crate::utils::config::AppConfig;
use log::{info, warn, LevelFilter};
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use rust_i18n::t;
use std::path::Path;
use std::sync::Arc;

const LOG_CONFIG_PATH: &str = "config/log4rs.yml";

pub async fn init() -> crate::error::Result<Arc<AppConfig>> {
    // .env is optional
    let dotenv_loaded = dotenv::dotenv().is_ok();

    init_logging()?;
    if !dotenv_loaded {
        info!("{}", t!("logs.dotenv_missing"));
    }

    let config_path = AppConfig::path_from_env();
    let config = AppConfig::load(&config_path)?;
    info!("{}", t!("logs.config_loaded", path = &config_path));
    info!(
        "{}",
        t!(
            "logs.gemini_target",
            model = &config.gemini.model,
            base_url = &config.gemini.base_url
        )
    );

    if config.gemini.api_key_from_env().is_none() {
        warn!("{}", t!("logs.api_key_missing", env_var = &config.gemini.api_key_env));
    }

    Ok(Arc::new(config))
}

fn init_logging() -> crate::error::Result<()> {
    if Path::new(LOG_CONFIG_PATH).exists() {
        log4rs::init_file(LOG_CONFIG_PATH, Default::default())?;
        return Ok(());
    }

    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{d(%Y-%m-%d %H:%M:%S%.3f)} {h({l:<5})} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info))
        .map_err(|e| AppError::Logging(e.to_string()))?;
    log4rs::init_config(config).map_err(|e| AppError::Logging(e.to_string()))?;
    Ok(())
}
