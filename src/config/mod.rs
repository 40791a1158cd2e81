use rocket::figment::{Figment, providers::{Env, Format, Toml}};
use rocket::Config as RocketConfig;
use std::env;
use std::path::PathBuf;

use crate::profile::DEFAULT_MAX_IMAGE_BYTES;
use crate::store::DEFAULT_STORAGE_KEY;

pub struct Config;

impl Config {
    fn figment() -> Figment {
        // Get the current profile
        let profile = env::var("ROCKET_PROFILE").unwrap_or_else(|_| "development".to_string());

        Figment::from(RocketConfig::default())
            .merge(Toml::file("Rocket.toml").nested())
            .select(&profile)
            .merge(Env::prefixed("ROCKET_").split("_"))
            .merge(Env::prefixed("JOBBY_"))
    }

    pub fn session_file() -> PathBuf {
        Self::figment()
            .extract_inner("session_file")
            .unwrap_or_else(|_| PathBuf::from("jobby-session.json"))
    }

    pub fn storage_key() -> String {
        Self::figment()
            .extract_inner("storage_key")
            .unwrap_or_else(|_| DEFAULT_STORAGE_KEY.to_string())
    }

    /// Keep the session in memory only; nothing survives a restart.
    pub fn ephemeral_session() -> bool {
        Self::figment()
            .extract_inner("ephemeral_session")
            .unwrap_or(false)
    }

    pub fn max_image_bytes() -> usize {
        Self::figment()
            .extract_inner("max_image_bytes")
            .unwrap_or(DEFAULT_MAX_IMAGE_BYTES)
    }
}
