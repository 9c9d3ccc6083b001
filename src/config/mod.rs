pub mod credentials;

pub use credentials::{resolve_credentials, resolve_credentials_with, KEY_ENV, USERNAME_ENV};

#[cfg(feature = "cli")]
mod cli {
    use super::resolve_credentials;
    use crate::core::calls::{CallKind, DEFAULT_FEED, DEFAULT_VALUE};
    use crate::core::{ApiCall, Credentials};
    use crate::utils::error::Result;
    use crate::utils::validation::validate_non_empty_string;
    use clap::{CommandFactory, Parser};
    use std::ffi::OsString;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "aio-request-viewer")]
    #[command(about = "Print the raw request an Adafruit IO call would send, without sending it")]
    pub struct CliConfig {
        #[arg(long, help = "your Adafruit IO key")]
        pub key: Option<String>,

        #[arg(long, help = "your Adafruit IO user name")]
        pub user: Option<String>,

        #[arg(long, value_enum, default_value_t = CallKind::SendData, help = "API call to inspect")]
        pub call: CallKind,

        #[arg(long, default_value = DEFAULT_FEED, help = "Feed key used by feed and data calls")]
        pub feed: String,

        #[arg(long, default_value = DEFAULT_VALUE, allow_hyphen_values = true, help = "Value sent by send-data")]
        pub value: String,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl CliConfig {
        /// Parses the process arguments, accepting `-key` as well as `--key`.
        pub fn parse_go_style() -> Self {
            Self::parse_from(normalize_args(std::env::args_os()))
        }

        pub fn credentials(&self) -> Credentials {
            resolve_credentials(self.key.as_deref(), self.user.as_deref())
        }

        pub fn api_call(&self) -> Box<dyn ApiCall> {
            self.call.build(&self.feed, &self.value)
        }

        pub fn validate(&self) -> Result<()> {
            validate_non_empty_string("feed", &self.feed)
        }
    }

    /// Rewrites single-dash long flags (`-key`, `-user=x`) to their `--` form.
    /// Only names the parser knows are touched, so values like `-5` pass through.
    pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let command = CliConfig::command();
        let longs: Vec<&str> = command
            .get_arguments()
            .filter_map(|arg| arg.get_long())
            .chain(std::iter::once("help"))
            .collect();

        let mut passthrough = false;
        args.into_iter()
            .map(Into::<OsString>::into)
            .enumerate()
            .map(|(index, arg)| {
                if index == 0 || passthrough {
                    return arg;
                }
                let rewritten = match arg.to_str() {
                    Some("--") => {
                        passthrough = true;
                        None
                    }
                    Some(text) => text
                        .strip_prefix('-')
                        .filter(|rest| !rest.starts_with('-'))
                        .map(|rest| rest.split('=').next().unwrap_or(rest))
                        .filter(|name| longs.contains(name))
                        .map(|_| OsString::from(format!("-{}", text))),
                    None => None,
                };
                rewritten.unwrap_or(arg)
            })
            .collect()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn parse(args: &[&str]) -> CliConfig {
            CliConfig::parse_from(normalize_args(args.iter().copied()))
        }

        #[test]
        fn test_single_dash_flags_are_accepted() {
            let config = parse(&["aio-request-viewer", "-key", "12345ABC", "-user=jane"]);
            assert_eq!(config.key.as_deref(), Some("12345ABC"));
            assert_eq!(config.user.as_deref(), Some("jane"));
        }

        #[test]
        fn test_defaults_select_send_data() {
            let config = parse(&["aio-request-viewer"]);
            assert_eq!(config.call, CallKind::SendData);
            assert_eq!(config.feed, DEFAULT_FEED);
            assert_eq!(config.value, DEFAULT_VALUE);
            assert!(config.key.is_none());
            assert_eq!(config.api_call().name(), "send-data");
        }

        #[test]
        fn test_negative_value_is_not_rewritten() {
            let config = parse(&["aio-request-viewer", "--value", "-5", "-call", "last-data"]);
            assert_eq!(config.value, "-5");
            assert_eq!(config.call, CallKind::LastData);
        }

        #[test]
        fn test_unknown_logging_flag_is_rejected() {
            let args = normalize_args(["aio-request-viewer", "--json-logs"]);
            assert!(CliConfig::try_parse_from(args).is_err());
        }

        #[test]
        fn test_validate_rejects_blank_feed() {
            let config = parse(&["aio-request-viewer", "--feed", " "]);
            assert!(config.validate().is_err());
        }
    }
}

#[cfg(feature = "cli")]
pub use cli::{normalize_args, CliConfig};
