use super::schema::Config;
use crate::error::{ConfigError, Result};
use figment::{
    providers::{Env, Format, Json, Toml, Yaml},
    Figment,
};
use std::path::Path;

/// Load configuration from the default file locations, then apply
/// `COMPILER_*` environment overrides. The environment is merged last so
/// `COMPILER_SRC`/`COMPILER_DEST` take precedence over file values.
///
/// Semantic validation happens at middleware construction; callers wanting
/// an early check can run [`validate`] themselves.
pub fn load_from_env_or_file() -> Result<Config> {
    Figment::new()
        .merge(Toml::file("asset-compiler.toml"))
        .merge(Json::file("asset-compiler.json"))
        .merge(Yaml::file("asset-compiler.yaml"))
        .merge(Yaml::file("asset-compiler.yml"))
        .merge(Env::prefixed("COMPILER_"))
        .extract()
        .map_err(|e| ConfigError::Parse(e.to_string()).into())
}

/// Load configuration from an explicit file path, still honoring
/// `COMPILER_*` environment overrides.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();

    let figment = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => Figment::new().merge(Toml::file(path)),
        Some("json") => Figment::new().merge(Json::file(path)),
        Some("yaml") | Some("yml") => Figment::new().merge(Yaml::file(path)),
        _ => {
            return Err(ConfigError::Parse(
                "Unsupported config file format. Use .toml, .json, .yaml, or .yml".into(),
            )
            .into())
        }
    };

    figment
        .merge(Env::prefixed("COMPILER_"))
        .extract()
        .map_err(|e| ConfigError::Parse(e.to_string()).into())
}

pub fn validate(config: &Config) -> Result<()> {
    if config.enable.is_empty() {
        return Err(ConfigError::NothingEnabled.into());
    }

    for name in &config.enable {
        if !crate::plugin::is_known(name) {
            return Err(ConfigError::UnknownCompiler(name.clone()).into());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MiddlewareError;

    #[test]
    fn test_empty_enable_rejected() {
        let config = Config::default();
        let err = validate(&config).unwrap_err();
        assert!(matches!(
            err,
            MiddlewareError::Config(ConfigError::NothingEnabled)
        ));
    }

    #[test]
    fn test_unknown_compiler_rejected() {
        let config = Config {
            enable: vec!["typescript".to_string()],
            ..Config::default()
        };
        let err = validate(&config).unwrap_err();
        assert!(matches!(
            err,
            MiddlewareError::Config(ConfigError::UnknownCompiler(name)) if name == "typescript"
        ));
    }

    #[test]
    fn test_bundled_compilers_accepted() {
        let config = Config {
            enable: vec![
                "sass".to_string(),
                "less".to_string(),
                "coffeescript".to_string(),
            ],
            ..Config::default()
        };
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_dest_defaults_to_src() {
        let config = Config {
            src: Some("/srv/assets".into()),
            ..Config::default()
        };
        assert_eq!(config.dest_dir(), config.src_dir());
        assert_eq!(config.src_dir(), std::path::PathBuf::from("/srv/assets"));
    }

    #[test]
    fn test_env_overrides_take_precedence() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "asset-compiler.toml",
                r#"
                    src = "/from/file"
                    enable = ["sass"]
                "#,
            )?;
            jail.set_env("COMPILER_SRC", "/from/env");

            let config = load_from_env_or_file().expect("config should load");
            assert_eq!(config.src_dir(), std::path::PathBuf::from("/from/env"));
            assert_eq!(config.enable, vec!["sass".to_string()]);
            Ok(())
        });
    }
}
