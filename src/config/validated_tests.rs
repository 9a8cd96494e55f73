//! Tests for validated configuration.

use std::time::Duration;

use crate::message::Color;

use super::cli::Cli;
use super::defaults;
use super::error::{ConfigError, field};
use super::toml::TomlConfig;
use super::validated::{ValidatedConfig, write_default_config};

const URL: &str = "https://discord.com/api/webhooks/123/secret-token";

fn cli(args: &[&str]) -> Cli {
    Cli::parse_from_iter(std::iter::once("discord-hook").chain(args.iter().copied()))
}

fn toml(content: &str) -> TomlConfig {
    TomlConfig::parse(content).unwrap()
}

mod url_resolution {
    use super::*;

    #[test]
    fn url_from_cli() {
        let config = ValidatedConfig::from_raw(&cli(&["--url", URL, "--content", "x"]), None)
            .unwrap();

        assert_eq!(config.url.as_str(), URL);
    }

    #[test]
    fn url_from_toml() {
        let file = toml(&format!("[webhook]\nurl = \"{URL}\""));
        let config = ValidatedConfig::from_raw(&cli(&["--content", "x"]), Some(&file)).unwrap();

        assert_eq!(config.url.as_str(), URL);
    }

    #[test]
    fn cli_url_overrides_toml() {
        let file = toml("[webhook]\nurl = \"https://example.com/other\"");
        let config =
            ValidatedConfig::from_raw(&cli(&["--url", URL, "--content", "x"]), Some(&file))
                .unwrap();

        assert_eq!(config.url.as_str(), URL);
    }

    #[test]
    fn missing_url_is_error() {
        let result = ValidatedConfig::from_raw(&cli(&["--content", "x"]), None);

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequired { field: f, .. }) if f == field::URL
        ));
    }

    #[test]
    fn unparsable_url_is_error() {
        let result = ValidatedConfig::from_raw(&cli(&["--url", "not a url", "--content", "x"]), None);

        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }

    #[test]
    fn non_http_scheme_is_error() {
        let result =
            ValidatedConfig::from_raw(&cli(&["--url", "ftp://host/hook", "--content", "x"]), None);

        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }

    #[test]
    fn invalid_url_error_hides_url() {
        let secret = "https://discord.com:notaport/api/webhooks/1/secret-token";
        let err = ValidatedConfig::from_raw(&cli(&["--url", secret, "--content", "x"]), None)
            .unwrap_err();

        assert!(!err.to_string().contains("secret-token"));
    }
}

mod transport_settings {
    use super::*;

    #[test]
    fn defaults_apply() {
        let config = ValidatedConfig::from_raw(&cli(&["--url", URL, "--content", "x"]), None)
            .unwrap();

        assert_eq!(config.user_agent, defaults::USER_AGENT);
        assert_eq!(config.timeout, defaults::timeout());
        assert!(!config.best_effort);
        assert!(!config.dry_run);
        assert!(!config.verbose);
    }

    #[test]
    fn toml_values_apply() {
        let file = toml("[webhook]\nuser_agent = \"file-agent/2\"\ntimeout = 25");
        let config =
            ValidatedConfig::from_raw(&cli(&["--url", URL, "--content", "x"]), Some(&file))
                .unwrap();

        assert_eq!(config.user_agent, "file-agent/2");
        assert_eq!(config.timeout, Duration::from_secs(25));
    }

    #[test]
    fn cli_values_override_toml() {
        let file = toml("[webhook]\nuser_agent = \"file-agent/2\"\ntimeout = 25");
        let args = [
            "--url",
            URL,
            "--content",
            "x",
            "--user-agent",
            "cli-agent/3",
            "--timeout",
            "5",
        ];
        let config = ValidatedConfig::from_raw(&cli(&args), Some(&file)).unwrap();

        assert_eq!(config.user_agent, "cli-agent/3");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn zero_timeout_is_error() {
        let result =
            ValidatedConfig::from_raw(&cli(&["--url", URL, "--content", "x", "--timeout", "0"]), None);

        assert!(matches!(result, Err(ConfigError::InvalidDuration { .. })));
    }

    #[test]
    fn user_agent_with_newline_is_error() {
        let result = ValidatedConfig::from_raw(
            &cli(&["--url", URL, "--content", "x", "--user-agent", "bad\nagent"]),
            None,
        );

        assert!(matches!(result, Err(ConfigError::InvalidUserAgent { .. })));
    }

    #[test]
    fn behavior_flags_are_carried() {
        let args = ["--url", URL, "--content", "x", "--best-effort", "--dry-run", "-v"];
        let config = ValidatedConfig::from_raw(&cli(&args), None).unwrap();

        assert!(config.best_effort);
        assert!(config.dry_run);
        assert!(config.verbose);
    }
}

mod message_assembly {
    use super::*;

    #[test]
    fn content_only_message_has_no_embeds() {
        let file = toml("[embed]\ncolor = \"#FF0000\"\nfooter = \"ci\"");
        let config =
            ValidatedConfig::from_raw(&cli(&["--url", URL, "--content", "hello"]), Some(&file))
                .unwrap();

        assert_eq!(config.message.content.as_deref(), Some("hello"));
        assert!(config.message.embeds().is_empty());
        assert!(!config.message.tts);
    }

    #[test]
    fn empty_message_is_error() {
        let result = ValidatedConfig::from_raw(&cli(&["--url", URL]), None);

        assert!(matches!(result, Err(ConfigError::EmptyMessage)));
    }

    #[test]
    fn identity_from_toml_and_cli() {
        let file = toml("[message]\nusername = \"file-bot\"\navatar_url = \"https://a/file.png\"");
        let config = ValidatedConfig::from_raw(
            &cli(&["--url", URL, "--content", "x", "--username", "cli-bot"]),
            Some(&file),
        )
        .unwrap();

        assert_eq!(config.message.username.as_deref(), Some("cli-bot"));
        assert_eq!(
            config.message.avatar_url.as_deref(),
            Some("https://a/file.png")
        );
    }

    #[test]
    fn tts_flag_is_carried() {
        let config =
            ValidatedConfig::from_raw(&cli(&["--url", URL, "--content", "x", "--tts"]), None)
                .unwrap();

        assert!(config.message.tts);
    }

    #[test]
    fn embed_from_cli_options() {
        let args = [
            "--url",
            URL,
            "--title",
            "Deploy",
            "--description",
            "finished",
            "--color",
            "0x00FF00",
            "--author",
            "ci",
            "--author-icon",
            "https://ci/icon.png",
            "--field",
            "Version=1.2.3",
            "--field",
            "Branch = main",
            "--inline-fields",
            "--thumbnail",
            "https://ci/t.png",
            "--image",
            "https://ci/i.png",
            "--timestamp",
            "2024-01-02T03:04:05Z",
        ];
        let config = ValidatedConfig::from_raw(&cli(&args), None).unwrap();

        let embeds = config.message.embeds();
        assert_eq!(embeds.len(), 1);
        let embed = &embeds[0];

        assert_eq!(embed.title.as_deref(), Some("Deploy"));
        assert_eq!(embed.description.as_deref(), Some("finished"));
        assert_eq!(embed.color, Color::new(0, 255, 0));

        let author = embed.author.as_ref().unwrap();
        assert_eq!(author.name.as_deref(), Some("ci"));
        assert!(author.url.is_none());
        assert_eq!(author.icon_url.as_deref(), Some("https://ci/icon.png"));

        assert_eq!(embed.fields.len(), 2);
        assert_eq!(embed.fields[0].name, "Version");
        assert_eq!(embed.fields[0].value, "1.2.3");
        assert_eq!(embed.fields[1].name, "Branch");
        assert_eq!(embed.fields[1].value, "main");
        assert!(embed.fields.iter().all(|f| f.inline));

        assert_eq!(
            embed.thumbnail.as_ref().unwrap().url.as_deref(),
            Some("https://ci/t.png")
        );
        assert_eq!(
            embed.image.as_ref().unwrap().url.as_deref(),
            Some("https://ci/i.png")
        );
        assert_eq!(
            embed.timestamp.as_ref().unwrap().to_wire(),
            "2024-01-02T03:04:05Z"
        );
        assert!(embed.footer.is_none());
    }

    #[test]
    fn embed_color_defaults_to_zero() {
        let config =
            ValidatedConfig::from_raw(&cli(&["--url", URL, "--title", "t"]), None).unwrap();

        assert_eq!(config.message.embeds()[0].color.packed(), 0);
    }

    #[test]
    fn toml_embed_styling_applies_to_embeds() {
        let file = toml(
            "[embed]\ncolor = \"#5865F2\"\nfooter = \"ci\"\nfooter_icon = \"https://ci/f.png\"",
        );
        let config =
            ValidatedConfig::from_raw(&cli(&["--url", URL, "--title", "t"]), Some(&file)).unwrap();

        let embed = &config.message.embeds()[0];
        assert_eq!(embed.color.packed(), 0x0058_65F2);
        let footer = embed.footer.as_ref().unwrap();
        assert_eq!(footer.text.as_deref(), Some("ci"));
        assert_eq!(footer.icon_url.as_deref(), Some("https://ci/f.png"));
    }

    #[test]
    fn cli_embed_styling_overrides_toml() {
        let file = toml("[embed]\ncolor = \"#5865F2\"\nfooter = \"file\"");
        let args = ["--url", URL, "--title", "t", "--color", "255", "--footer", "cli"];
        let config = ValidatedConfig::from_raw(&cli(&args), Some(&file)).unwrap();

        let embed = &config.message.embeds()[0];
        assert_eq!(embed.color.packed(), 255);
        assert_eq!(embed.footer.as_ref().unwrap().text.as_deref(), Some("cli"));
    }

    #[test]
    fn timestamp_now_is_accepted() {
        let config =
            ValidatedConfig::from_raw(&cli(&["--url", URL, "--timestamp", "now"]), None).unwrap();

        assert!(config.message.embeds()[0].timestamp.is_some());
    }

    #[test]
    fn invalid_color_is_error() {
        let result =
            ValidatedConfig::from_raw(&cli(&["--url", URL, "--color", "chartreuse"]), None);

        assert!(matches!(result, Err(ConfigError::InvalidColor(_))));
    }

    #[test]
    fn invalid_timestamp_is_error() {
        let result =
            ValidatedConfig::from_raw(&cli(&["--url", URL, "--timestamp", "yesterday"]), None);

        assert!(matches!(result, Err(ConfigError::InvalidTimestamp(_))));
    }

    #[test]
    fn field_without_separator_is_error() {
        let result = ValidatedConfig::from_raw(&cli(&["--url", URL, "--field", "novalue"]), None);

        assert!(matches!(result, Err(ConfigError::InvalidField { .. })));
    }

    #[test]
    fn field_with_empty_name_is_error() {
        let result = ValidatedConfig::from_raw(&cli(&["--url", URL, "--field", "=value"]), None);

        assert!(matches!(result, Err(ConfigError::InvalidField { .. })));
    }

    #[test]
    fn field_value_may_contain_separator() {
        let config =
            ValidatedConfig::from_raw(&cli(&["--url", URL, "--field", "Query=a=b"]), None)
                .unwrap();

        let field = &config.message.embeds()[0].fields[0];
        assert_eq!(field.name, "Query");
        assert_eq!(field.value, "a=b");
        assert!(!field.inline);
    }
}

mod display {
    use super::*;

    #[test]
    fn display_redacts_webhook_path() {
        let config = ValidatedConfig::from_raw(&cli(&["--url", URL, "--content", "x"]), None)
            .unwrap();

        let shown = config.to_string();
        assert!(shown.contains("https://discord.com/<redacted>"));
        assert!(!shown.contains("secret-token"));
        assert!(!shown.contains("123"));
    }
}

mod loading {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_reads_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[webhook]\nurl = \"{URL}\"\ntimeout = 3").unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let config = ValidatedConfig::load(&cli(&["-c", &path, "--content", "x"])).unwrap();

        assert_eq!(config.url.as_str(), URL);
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn load_without_file_uses_cli() {
        let config = ValidatedConfig::load(&cli(&["--url", URL, "--content", "x"])).unwrap();

        assert_eq!(config.url.as_str(), URL);
    }

    #[test]
    fn load_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let path = path.to_str().unwrap();

        let result = ValidatedConfig::load(&cli(&["-c", path, "--content", "x"]));

        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }
}

mod init {
    use super::*;

    #[test]
    fn write_default_config_creates_parsable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("discord-hook.toml");

        write_default_config(&path).unwrap();

        let loaded = TomlConfig::load(&path).unwrap();
        assert_eq!(loaded.webhook.timeout, Some(defaults::TIMEOUT_SECS));
    }

    #[test]
    fn write_to_missing_directory_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("config.toml");

        let result = write_default_config(&path);

        assert!(matches!(result, Err(ConfigError::FileWrite { .. })));
    }
}
