use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub smtp_user: Option<String>,
    pub smtp_pass: Option<String>,
    pub smtp_relay: String,
    pub sendgrid_api_key: Option<String>,
    pub sendgrid_base_url: String,
    pub from_email: String,
    pub to_email: String,
    pub rate_limit_max: u32,
    pub rate_limit_window_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 5001,
            smtp_user: None,
            smtp_pass: None,
            smtp_relay: "smtp.gmail.com".to_string(),
            sendgrid_api_key: None,
            sendgrid_base_url: "https://api.sendgrid.com".to_string(),
            from_email: "no-reply@futureos.edu".to_string(),
            to_email: "info@futureos.edu".to_string(),
            rate_limit_max: 10,
            rate_limit_window_secs: 900,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        Self {
            port: try_load("PORT", "5001"),
            smtp_user: var("SMTP_USER"),
            smtp_pass: var("SMTP_PASS"),
            smtp_relay: var("SMTP_RELAY").unwrap_or(defaults.smtp_relay),
            sendgrid_api_key: var("SENDGRID_API_KEY"),
            sendgrid_base_url: var("SENDGRID_BASE_URL").unwrap_or(defaults.sendgrid_base_url),
            from_email: var("FROM_EMAIL").unwrap_or_else(|| {
                info!("FROM_EMAIL not set, using default");
                defaults.from_email
            }),
            to_email: var("TO_EMAIL").unwrap_or_else(|| {
                info!("TO_EMAIL not set, using default");
                defaults.to_email
            }),
            rate_limit_max: try_load("EMAIL_RATE_LIMIT", "10"),
            rate_limit_window_secs: try_load("EMAIL_RATE_WINDOW_SECS", "900"),
        }
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
