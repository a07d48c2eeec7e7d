use std::env;
use strum::EnumString;

#[derive(Default, Debug, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

/// Reads `ENV` to decide which environment the app runs in.
/// Debug builds fall back to development, release builds to production.
pub fn which() -> Environment {
    #[cfg(debug_assertions)]
    let default_env = Environment::Development;
    #[cfg(not(debug_assertions))]
    let default_env = Environment::Production;

    match env::var("ENV") {
        Err(_) => default_env,
        Ok(v) => v.parse().unwrap_or(default_env),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_lowercase_names() {
        assert_eq!("development".parse(), Ok(Environment::Development));
        assert_eq!("production".parse(), Ok(Environment::Production));
        assert!("staging".parse::<Environment>().is_err());
    }
}
