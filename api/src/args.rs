use clap::{Args as ClapArgs, Parser};
use healthco_core::domain::common::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, HealthCoConfig, LLMConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "healthco-api", version, about = "Health & Co nutrition advisor API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5555"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    /// Required; the server refuses to start without it.
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_GEMINI_MODEL)]
    pub gemini_model: String,

    #[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for HealthCoConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_parse_with_defaults() {
        let args = Args::try_parse_from(["healthco-api", "--gemini-api-key", "secret"]).unwrap();

        assert_eq!(args.server.port, 3333);
        assert_eq!(args.server.root_path, "");
        assert_eq!(args.llm.gemini_model, "gemini-pro");
        assert!(!args.log.json);

        let config = HealthCoConfig::from(args);
        assert_eq!(config.llm.gemini_api_key, "secret");
        assert_eq!(
            config.llm.gemini_base_url,
            "https://generativelanguage.googleapis.com"
        );
    }

    #[test]
    fn test_missing_api_key_is_rejected() {
        // Detach the env fallback so an exported GEMINI_API_KEY cannot satisfy it.
        let err = Args::command()
            .mut_arg("gemini_api_key", |arg| arg.env(None))
            .try_get_matches_from(["healthco-api"])
            .unwrap_err();

        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn test_allowed_origins_are_comma_separated() {
        let args = Args::try_parse_from([
            "healthco-api",
            "--gemini-api-key",
            "secret",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ])
        .unwrap();

        assert_eq!(
            args.server.allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }
}
