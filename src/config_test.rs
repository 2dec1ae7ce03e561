use super::*;

// =============================================================================
// required_var — uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn required_var_returns_trimmed_value() {
    const KEY: &str = "__TEST_RV_TRIM_101__";
    unsafe { std::env::set_var(KEY, "  https://example.com  ") };
    assert_eq!(required_var(KEY).unwrap(), "https://example.com");
    unsafe { std::env::remove_var(KEY) };
}

#[test]
fn required_var_unset_is_missing() {
    let err = required_var("__TEST_RV_SURELY_UNSET_42__").unwrap_err();
    assert_eq!(err.to_string(), "missing environment variable: __TEST_RV_SURELY_UNSET_42__");
}

#[test]
fn required_var_blank_is_missing() {
    const KEY: &str = "__TEST_RV_BLANK_102__";
    unsafe { std::env::set_var(KEY, "   ") };
    assert!(matches!(required_var(KEY), Err(ConfigError::Missing(_))));
    unsafe { std::env::remove_var(KEY) };
}

// =============================================================================
// env_bool
// =============================================================================

#[test]
fn env_bool_true_variants() {
    for (i, val) in ["1", "true", "yes", "on"].iter().enumerate() {
        let key = format!("__TEST_EB_TRUE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_false_variants() {
    for (i, val) in ["0", "false", "no", "off"].iter().enumerate() {
        let key = format!("__TEST_EB_FALSE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(false), "expected false for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_invalid_or_unset_returns_none() {
    let key = "__TEST_EB_INVALID_103__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
    assert_eq!(env_bool("__TEST_EB_SURELY_UNSET_104__"), None);
}

// =============================================================================
// AppConfig::from_env — shared variable names, serialized via temp_env.
// =============================================================================

const ALL_SET: [(&str, Option<&str>); 3] = [
    (ENV_BASE_URL, Some("http://localhost:3000")),
    (ENV_SUPABASE_URL, Some("https://project.supabase.co/")),
    (ENV_SUPABASE_ANON_KEY, Some("anon-key-123")),
];

#[test]
fn from_env_loads_all_required() {
    temp_env::with_vars(ALL_SET, || {
        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.supabase_url, "https://project.supabase.co");
        assert_eq!(config.supabase_anon_key, "anon-key-123");
        assert_eq!(config.port, 3000);
    });
}

#[test]
fn from_env_missing_base_url_names_variable() {
    temp_env::with_vars(
        [
            (ENV_BASE_URL, None),
            (ENV_SUPABASE_URL, Some("https://project.supabase.co")),
            (ENV_SUPABASE_ANON_KEY, Some("anon-key-123")),
        ],
        || {
            let err = AppConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("BASE_URL"), "got: {err}");
        },
    );
}

#[test]
fn from_env_blank_anon_key_names_variable() {
    temp_env::with_vars(
        [
            (ENV_BASE_URL, Some("http://localhost:3000")),
            (ENV_SUPABASE_URL, Some("https://project.supabase.co")),
            (ENV_SUPABASE_ANON_KEY, Some("   ")),
        ],
        || {
            let err = AppConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("SUPABASE_ANON_KEY"), "got: {err}");
        },
    );
}

#[test]
fn from_env_strips_trailing_slash_from_supabase_url() {
    temp_env::with_vars(ALL_SET, || {
        let config = AppConfig::from_env().unwrap();
        assert!(!config.supabase_url.ends_with('/'));
    });
}

#[test]
fn from_env_parses_port_and_rejects_garbage() {
    let mut vars = ALL_SET.to_vec();
    vars.push(("PORT", Some("8080")));
    temp_env::with_vars(vars, || {
        assert_eq!(AppConfig::from_env().unwrap().port, 8080);
    });

    let mut vars = ALL_SET.to_vec();
    vars.push(("PORT", Some("not-a-port")));
    temp_env::with_vars(vars, || {
        assert!(matches!(AppConfig::from_env(), Err(ConfigError::Invalid { var: "PORT", .. })));
    });
}

#[test]
fn from_env_infers_cookie_secure_from_base_url() {
    let mut vars = ALL_SET.to_vec();
    vars[0] = (ENV_BASE_URL, Some("https://inventory.example.com"));
    vars.push(("COOKIE_SECURE", None));
    temp_env::with_vars(vars, || {
        assert!(AppConfig::from_env().unwrap().cookie_secure);
    });

    let mut vars = ALL_SET.to_vec();
    vars.push(("COOKIE_SECURE", None));
    temp_env::with_vars(vars, || {
        assert!(!AppConfig::from_env().unwrap().cookie_secure);
    });
}

#[test]
fn from_env_cookie_secure_explicit_override() {
    let mut vars = ALL_SET.to_vec();
    vars.push(("COOKIE_SECURE", Some("true")));
    temp_env::with_vars(vars, || {
        assert!(AppConfig::from_env().unwrap().cookie_secure);
    });
}
