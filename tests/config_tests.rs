// Host-side tests for build-mode configuration.

use portfolio_core::{BuildMode, ConfigError, SiteConfig, PRODUCTION_BASE_PATH};

#[test]
fn build_mode_parses_common_spellings() {
    assert_eq!("production".parse(), Ok(BuildMode::Production));
    assert_eq!(" PROD ".parse(), Ok(BuildMode::Production));
    assert_eq!("development".parse(), Ok(BuildMode::Development));
    assert_eq!("Dev".parse(), Ok(BuildMode::Development));
}

#[test]
fn unknown_build_mode_is_an_error() {
    let err = "staging".parse::<BuildMode>().unwrap_err();
    assert_eq!(err, ConfigError::UnknownBuildMode("staging".to_string()));
    assert!(err.to_string().contains("staging"));
}

#[test]
fn missing_flag_follows_build_profile() {
    let debug = SiteConfig::from_flag(None, true).unwrap();
    assert_eq!(debug.build_mode, BuildMode::Development);
    let release = SiteConfig::from_flag(Some("  "), false).unwrap();
    assert_eq!(release.build_mode, BuildMode::Production);
}

#[test]
fn explicit_flag_wins_over_profile() {
    let cfg = SiteConfig::from_flag(Some("production"), true).unwrap();
    assert_eq!(cfg.build_mode, BuildMode::Production);
}

#[test]
fn load_falls_back_on_bad_flag() {
    assert_eq!(
        SiteConfig::load(Some("nightly"), true).build_mode,
        BuildMode::Development
    );
    assert_eq!(
        SiteConfig::load(Some("nightly"), false).build_mode,
        BuildMode::Production
    );
}

#[test]
fn base_path_only_applies_in_production() {
    let prod = SiteConfig {
        build_mode: BuildMode::Production,
    };
    let dev = SiteConfig {
        build_mode: BuildMode::Development,
    };
    assert_eq!(prod.base_path(), PRODUCTION_BASE_PATH);
    assert_eq!(dev.base_path(), "");
    assert_eq!(prod.site_path("/pkg/app.wasm"), "/stephaneniyonizigiye/pkg/app.wasm");
    assert_eq!(dev.site_path("pkg/app.wasm"), "/pkg/app.wasm");
}
