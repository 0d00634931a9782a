// SPDX-License-Identifier: MPL-2.0
use iced_feed::config::{self, Config};
use iced_feed::i18n::I18n;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to pt-BR
    let mut br_config = Config::default();
    br_config.general.language = Some("pt-BR".to_string());
    config::save_to_path(&br_config, &temp_config_file_path)
        .expect("Failed to write pt-BR config file");

    let loaded_br_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load pt-BR config from path");
    let i18n_br = I18n::new(None, &loaded_br_config);
    assert_eq!(i18n_br.current_locale().to_string(), "pt-BR");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_cli_lang_overrides_config() {
    let mut config = Config::default();
    config.general.language = Some("en-US".to_string());

    let i18n = I18n::new(Some("pt-BR".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "pt-BR");
}

#[test]
fn test_server_settings_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.server.url = Some("http://feed.example:8080".to_string());
    config.server.user_id = Some(7);
    config.server.username = Some("ana".to_string());
    config.popup.hover_hide_delay_ms = Some(450);

    config::save_to_path(&config, &path).expect("save");
    let loaded = config::load_from_path(&path).expect("load");

    assert_eq!(loaded.server.url.as_deref(), Some("http://feed.example:8080"));
    assert_eq!(loaded.server.user_id, Some(7));
    assert_eq!(loaded.server.username.as_deref(), Some("ana"));
    assert_eq!(loaded.popup.hover_hide_delay_ms, Some(450));

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_localized_validation_messages_exist_in_both_locales() {
    for locale in ["en-US", "pt-BR"] {
        let mut config = Config::default();
        config.general.language = Some(locale.to_string());
        let i18n = I18n::new(None, &config);

        let empty = i18n.tr("composer-error-empty-content");
        assert!(!empty.starts_with("MISSING:"), "{locale}: {empty}");

        // The media message must name the kind it was blocked for
        let video_word = i18n.tr("post-kind-video");
        let message = i18n.tr_with_args(
            "composer-error-missing-media",
            &[("kind", video_word.as_str())],
        );
        assert!(
            message.contains(video_word.as_str()),
            "{locale}: {message}"
        );
    }
}
