//! `.env` values flow through the env layer; real env vars win over them.
//!
//! Kept to a single test: dotenvy writes to the process environment, which
//! `Jail` does not restore for keys it never set.

use figment::Jail;
use pretty_assertions::assert_eq;
use verbo_config::VerboConfig;

#[test]
fn dotenv_fills_env_layer_without_overriding() {
    Jail::expect_with(|jail| {
        jail.create_file(
            ".env",
            "VERBO_ANALYSIS__PREVIEW_FORMS=4\nVERBO_GENERAL__DEFAULT_LIMIT=7\n",
        )?;
        jail.set_env("VERBO_GENERAL__DEFAULT_LIMIT", "9");

        let config = VerboConfig::load_with_dotenv().expect("config loads");
        assert_eq!(config.analysis.preview_forms, 4);
        assert_eq!(config.general.default_limit, 9);
        Ok(())
    });
}
