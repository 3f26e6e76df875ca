use almanac_calendar::{DayOfWeek, Locale, Month, ResolverConfig, TextStyle};

const CONFIG: &str = r#"
locale = "de_DE"

[names.de.months]
full = ["Januar", "Februar", "März", "April", "Mai", "Juni",
        "Juli", "August", "September", "Oktober", "November", "Dezember"]

[names.de.days]
short = ["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"]

[names.en.days]
narrow_standalone = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"]
"#;

#[test]
fn configured_names_resolve_through_locale_parents() {
    let resolver = ResolverConfig::from_toml_str(CONFIG).unwrap().build_resolver().unwrap();
    assert_eq!(resolver.locale().tag(), "de-DE");
    // full_standalone degrades to full, de-DE falls back to de.
    assert_eq!(resolver.display_name(Month::March).unwrap(), "März");
    assert_eq!(
        resolver
            .display_name_with(DayOfWeek::Friday, TextStyle::ShortStandalone, resolver.locale())
            .unwrap(),
        "Fr"
    );
}

#[test]
fn configured_names_override_builtin() {
    let resolver = ResolverConfig::from_toml_str(CONFIG).unwrap().build_resolver().unwrap();
    let en = Locale::english();
    assert_eq!(
        resolver.display_name_with(DayOfWeek::Sunday, TextStyle::NarrowStandalone, &en).unwrap(),
        "Su"
    );
    // Other English styles still come from the built-in table.
    assert_eq!(
        resolver.display_name_with(DayOfWeek::Sunday, TextStyle::Full, &en).unwrap(),
        "Sunday"
    );
}

#[test]
fn disabled_fallback_surfaces_missing_names() {
    let toml_str = "locale = \"de\"\nnarrow_fallback = false";
    let resolver = ResolverConfig::from_toml_str(toml_str).unwrap().build_resolver().unwrap();
    assert!(resolver.display_name(Month::May).is_err());
}

#[test]
fn invalid_config_is_an_error() {
    let err = ResolverConfig::from_toml_str("narrow_fallback = \"yes\"").unwrap_err();
    assert!(err.to_string().starts_with("invalid resolver configuration"));
}
