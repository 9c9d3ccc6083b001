use crate::domain::model::Credentials;

pub const KEY_ENV: &str = "ADAFRUIT_IO_KEY";
pub const USERNAME_ENV: &str = "ADAFRUIT_IO_USERNAME";

/// A non-empty flag wins; otherwise the environment variable; otherwise "".
pub fn resolve_value<F>(flag: Option<&str>, env_name: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    match flag {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => lookup(env_name).unwrap_or_default(),
    }
}

pub fn resolve_credentials_with<F>(key: Option<&str>, user: Option<&str>, lookup: F) -> Credentials
where
    F: Fn(&str) -> Option<String>,
{
    Credentials {
        key: resolve_value(key, KEY_ENV, &lookup),
        username: resolve_value(user, USERNAME_ENV, &lookup),
    }
}

pub fn resolve_credentials(key: Option<&str>, user: Option<&str>) -> Credentials {
    resolve_credentials_with(key, user, |name| std::env::var(name).ok())
}
