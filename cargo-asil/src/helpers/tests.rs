//! Unit tests for cargo-asil helper modules

#[cfg(test)]
mod output_tests {
    use colored::Color;

    use super::super::output::*;

    #[test]
    fn test_output_manager_creation() {
        let output = OutputManager::new(OutputFormat::Human);
        assert_eq!(output.format(), &OutputFormat::Human);
        assert!(!output.is_colored()); // Default is no color

        let colored_output = output.with_color(true);
        assert!(colored_output.is_colored());
    }

    #[test]
    fn test_json_is_never_colored() {
        let output = OutputManager::new(OutputFormat::Json).with_color(true);
        assert!(!output.is_colored());
    }

    #[test]
    fn test_paint_without_color_is_plain() {
        let output = OutputManager::new(OutputFormat::Human);
        assert_eq!(output.paint("valid", Color::Green), "valid");
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("Human".parse::<OutputFormat>().unwrap(), OutputFormat::Human);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_simple_response() {
        let response = SimpleResponse::new("Test message");
        assert_eq!(response.message, "Test message");
        assert!(response.details.is_empty());

        let detailed_response = response.with_detail("Additional detail");
        assert_eq!(detailed_response.details.len(), 1);

        let output = OutputManager::new(OutputFormat::Human);
        assert_eq!(
            output.render(&detailed_response).unwrap(),
            "Test message\n  Additional detail"
        );
    }
}

#[cfg(test)]
mod config_tests {
    use tempfile::TempDir;

    use super::super::{
        config::*,
        output::OutputFormat,
    };

    #[test]
    fn test_missing_config_is_default() {
        let dir = TempDir::new().unwrap();
        let config = load_config_file(dir.path()).unwrap();
        assert_eq!(config, CargoAsilConfig::default());
    }

    #[test]
    fn test_config_lookup_order() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("cargo-asil.toml"), "output_format = \"json\"\n").unwrap();
        std::fs::write(dir.path().join(".cargo-asil.toml"), "keep_original = true\n").unwrap();

        let config = load_config_file(dir.path()).unwrap();
        assert_eq!(config.keep_original, Some(true));
        assert_eq!(config.output_format, None);
    }

    #[test]
    fn test_nested_config_location() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".config")).unwrap();
        std::fs::write(
            dir.path().join(".config").join("cargo-asil.toml"),
            "output_format = \"json\"\ncolor = false\n",
        )
        .unwrap();

        let config = load_config_file(dir.path()).unwrap();
        assert_eq!(config.output_format().unwrap(), Some(OutputFormat::Json));
        assert_eq!(config.color, Some(false));
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(".cargo-asil.toml"), "keep_original = \"maybe\"\n").unwrap();
        assert!(load_config_file(dir.path()).is_err());
    }

    #[test]
    fn test_unknown_output_format() {
        let config = CargoAsilConfig {
            output_format: Some("xml".to_string()),
            ..CargoAsilConfig::default()
        };
        assert!(matches!(
            config.output_format(),
            Err(ConfigError::UnknownOutputFormat(ref name)) if name == "xml"
        ));
    }

    #[test]
    fn test_init_config_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = init_config_file(dir.path(), false).unwrap();
        assert!(path.ends_with(".cargo-asil.toml"));

        let config = load_config_file(dir.path()).unwrap();
        assert_eq!(config, CargoAsilConfig::sample());

        assert!(init_config_file(dir.path(), false).is_err());
        assert!(init_config_file(dir.path(), true).is_ok());
    }
}
