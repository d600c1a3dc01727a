use std::env;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 9201;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup("STORY_SERVICE_PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!(
                    "STORY_SERVICE_PORT={} is not a valid port, using {}",
                    raw,
                    DEFAULT_PORT
                );
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };
        Self {
            host: lookup("STORY_SERVICE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.bind_addr(), "127.0.0.1:9201");
    }

    #[test]
    fn test_overrides_and_bad_port() {
        let vars = HashMap::from([
            ("STORY_SERVICE_HOST", "0.0.0.0"),
            ("STORY_SERVICE_PORT", "eighty"),
        ]);
        let config = Config::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
