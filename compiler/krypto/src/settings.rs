use krypto_parser::ParserConfig;

/// Environment variable overriding the parser's operation ceiling.
pub const SCAN_LIMIT_ENV: &str = "KRYPTO_SCAN_LIMIT";

/// Builds the parser configuration from the environment and the command line.
/// The flag wins over the environment, which wins over the default.
pub fn parser_config(flag: Option<usize>) -> ParserConfig {
    let env = std::env::var(SCAN_LIMIT_ENV).ok();
    resolve_parser_config(env.as_deref(), flag)
}

pub fn resolve_parser_config(env: Option<&str>, flag: Option<usize>) -> ParserConfig {
    let mut config = ParserConfig::default();
    if let Some(s) = env {
        match s.trim().parse::<usize>() {
            Ok(n) => config.max_operations = n,
            Err(e) => log::warn!("ignoring {SCAN_LIMIT_ENV}={s:?}: {e}"),
        }
    }
    if let Some(n) = flag {
        config.max_operations = n;
    }
    config
}
