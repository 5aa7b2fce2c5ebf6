// SPDX-License-Identifier: MPL-2.0
use iced_vitrine::config::{self, Config};
use iced_vitrine::i18n::fluent::I18n;
use iced_vitrine::prefs::{FilePreferences, PreferenceStore, THEME_KEY};
use iced_vitrine::ui::notifications::{Manager, Notification, Phase};
use iced_vitrine::ui::theming::ThemeMode;
use std::time::{Duration, Instant};
use tempfile::tempdir;

// Exit transition length mirrored from the notifications module; toasts are
// only detached once this much time has passed after a dismissal began.
const EXIT_TRANSITION: Duration = Duration::from_millis(300);

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("nav-contact"), "Contact");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("nav-home"), "Accueil");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_theme_preference_survives_restart() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let prefs_path = dir.path().join("prefs.toml");

    // First session: the user toggles into dark mode.
    {
        let mut store = FilePreferences::open(&prefs_path);
        let mode = ThemeMode::System.toggled();
        store
            .set(THEME_KEY, mode.as_str())
            .expect("failed to store theme");
    }

    // Second session: the stored value resolves to an explicit mode.
    let store = FilePreferences::open(&prefs_path);
    let stored = store.get(THEME_KEY).expect("theme preference missing");
    let mode = ThemeMode::from_preference(&stored).expect("stored value should parse");
    assert!(matches!(mode, ThemeMode::Light | ThemeMode::Dark));
}

#[test]
fn test_auto_dismissed_toast_reaches_removal_through_dismissing() {
    let mut manager = Manager::new();
    let id = manager
        .push(Notification::success("toast-submit-success").auto_dismiss_after(Duration::from_secs(3)))
        .expect("push should accept a non-empty message");

    // Visible immediately, in the showing phase.
    let toast = manager.visible().find(|n| n.id() == id).expect("toast missing");
    assert_eq!(toast.phase(), Phase::Showing);

    // After the deadline the toast transitions out...
    let expiry = Instant::now() + Duration::from_secs(4);
    manager.tick(expiry);
    let toast = manager.visible().find(|n| n.id() == id).expect("toast missing");
    assert_eq!(toast.phase(), Phase::Dismissing);

    // ...and is only detached once the exit transition completes.
    manager.tick(expiry + EXIT_TRANSITION);
    assert_eq!(manager.visible_count(), 0);
    assert!(!manager.has_notifications());
}

#[test]
fn test_persistent_toast_waits_for_manual_close() {
    let mut manager = Manager::new();
    let id = manager
        .push(Notification::error("toast-submit-error").auto_dismiss_after(Duration::ZERO))
        .expect("push should accept a non-empty message");

    // No amount of waiting dismisses it.
    manager.tick(Instant::now() + Duration::from_secs(3600));
    assert_eq!(manager.visible_count(), 1);

    // A manual close does.
    let closed_at = Instant::now() + Duration::from_secs(3600);
    assert!(manager.dismiss(id, closed_at));
    manager.tick(closed_at + EXIT_TRANSITION);
    assert_eq!(manager.visible_count(), 0);
}

#[test]
fn test_concurrent_toasts_do_not_interfere() {
    let mut manager = Manager::new();
    let first = manager
        .push(Notification::success("toast-submit-success"))
        .expect("first push failed");
    let second = manager
        .push(Notification::info("toast-catalog-preview"))
        .expect("second push failed");

    assert_eq!(manager.visible_count(), 2);

    let now = Instant::now();
    manager.dismiss(first, now);
    manager.tick(now + EXIT_TRANSITION);

    assert_eq!(manager.visible_count(), 1);
    let survivor = manager.visible().next().expect("second toast missing");
    assert_eq!(survivor.id(), second);
    assert_eq!(survivor.phase(), Phase::Showing);
}

#[test]
fn test_repeated_dismissals_remove_at_most_once() {
    let mut manager = Manager::new();
    let id = manager
        .push(Notification::success("toast-submit-success"))
        .expect("push failed");
    let now = Instant::now();

    assert!(manager.dismiss(id, now));
    // The auto-dismiss deadline firing later, extra clicks, and post-removal
    // dismissals are all safe no-ops.
    assert!(!manager.dismiss(id, now + Duration::from_millis(10)));
    manager.tick(now + EXIT_TRANSITION);
    assert!(!manager.dismiss(id, now + EXIT_TRANSITION + Duration::from_secs(5)));
    assert_eq!(manager.visible_count(), 0);
}
