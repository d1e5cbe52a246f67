use serde::Deserialize;
use std::{collections::HashSet, sync::LazyLock, time::Duration};
use thiserror::Error;

use crate::motion::SpringConfig;

static SITE_JSON: &str = include_str!("../site.json");

pub static GLOBAL_SITE_CONFIG: LazyLock<SiteConfig> =
    LazyLock::new(|| match SiteConfig::from_json(SITE_JSON) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("site.json rejected, using built-in defaults: {e}");
            SiteConfig::default()
        }
    });

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Couldn't parse site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid site config `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Distance below the top of the viewport (nav bar height) at which a
    /// section counts as active.
    pub probe_offset: f64,
    /// Scroll distance over which the hero fades out.
    pub hero_distance: f64,
    /// How far the hero drifts up at full progress.
    pub hero_shift: f64,
    /// Section element ids, in document order.
    pub sections: Vec<String>,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            probe_offset: 100.0,
            hero_distance: 500.0,
            hero_shift: 150.0,
            sections: ["home", "skills", "projects", "achievements", "contact"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub tick_ms: u64,
    /// Pause on the finished text before moving to the next role.
    pub hold_ms: u64,
    pub roles: Vec<String>,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            tick_ms: 80,
            hold_ms: 2000,
            roles: vec![
                "Full Stack Developer".to_string(),
                "Innovation Engineer".to_string(),
                "Technology Artisan".to_string(),
            ],
        }
    }
}

impl TypewriterConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn hold(&self) -> Duration {
        Duration::from_millis(self.hold_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub scroll: ScrollConfig,
    pub spring: SpringConfig,
    pub typewriter: TypewriterConfig,
}

impl SiteConfig {
    pub fn from_json(s: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Config compiled into the binary; identical on server and client.
    pub fn global() -> &'static SiteConfig {
        &GLOBAL_SITE_CONFIG
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let scroll = &self.scroll;
        if !scroll.probe_offset.is_finite() || scroll.probe_offset < 0.0 {
            return Err(ConfigError::invalid(
                "scroll.probe_offset",
                "must be a finite, non-negative number",
            ));
        }
        if !scroll.hero_distance.is_finite() || scroll.hero_distance <= 0.0 {
            return Err(ConfigError::invalid(
                "scroll.hero_distance",
                "must be greater than zero",
            ));
        }
        if !scroll.hero_shift.is_finite() || scroll.hero_shift < 0.0 {
            return Err(ConfigError::invalid(
                "scroll.hero_shift",
                "must be a finite, non-negative number",
            ));
        }
        if scroll.sections.is_empty() {
            return Err(ConfigError::invalid("scroll.sections", "must not be empty"));
        }
        let mut seen = HashSet::new();
        if let Some(dup) = scroll.sections.iter().find(|id| !seen.insert(id.as_str())) {
            return Err(ConfigError::invalid(
                "scroll.sections",
                format!("duplicate section id: {dup}"),
            ));
        }

        let spring = &self.spring;
        if !spring.stiffness.is_finite() || spring.stiffness <= 0.0 {
            return Err(ConfigError::invalid("spring.stiffness", "must be greater than zero"));
        }
        if !spring.mass.is_finite() || spring.mass <= 0.0 {
            return Err(ConfigError::invalid("spring.mass", "must be greater than zero"));
        }
        if !spring.damping.is_finite() || spring.damping < 0.0 {
            return Err(ConfigError::invalid("spring.damping", "must not be negative"));
        }
        if !spring.is_overdamped() {
            log::warn!(
                "spring damping {} is below critical ({:.2}); animations will overshoot",
                spring.damping,
                spring.critical_damping()
            );
        }

        if self.typewriter.tick_ms == 0 {
            return Err(ConfigError::invalid("typewriter.tick_ms", "must be at least 1"));
        }
        if self.typewriter.roles.iter().all(|r| r.is_empty()) {
            return Err(ConfigError::invalid(
                "typewriter.roles",
                "needs at least one non-empty role",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = SiteConfig::from_json(SITE_JSON).expect("site.json should parse");
        assert_eq!(config, SiteConfig::default());
        assert_eq!(SiteConfig::global(), &config);
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = SiteConfig::from_json(r#"{ "scroll": { "probe_offset": 64.0 } }"#)
            .expect("partial config should parse");
        assert_eq!(config.scroll.probe_offset, 64.0);
        assert_eq!(config.scroll.sections, ScrollConfig::default().sections);
        assert_eq!(config.spring, SpringConfig::default());

        let empty = SiteConfig::from_json("{}").expect("empty object should parse");
        assert_eq!(empty, SiteConfig::default());
    }

    #[test]
    fn test_parse_error() {
        let err = SiteConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    fn invalid_field(json: &str) -> &'static str {
        match SiteConfig::from_json(json) {
            Err(ConfigError::Invalid { field, .. }) => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_validation_failures() {
        assert_eq!(
            invalid_field(r#"{ "scroll": { "probe_offset": -1.0 } }"#),
            "scroll.probe_offset"
        );
        assert_eq!(
            invalid_field(r#"{ "scroll": { "hero_distance": 0.0 } }"#),
            "scroll.hero_distance"
        );
        assert_eq!(
            invalid_field(r#"{ "scroll": { "hero_shift": -5.0 } }"#),
            "scroll.hero_shift"
        );
        assert_eq!(
            invalid_field(r#"{ "scroll": { "sections": [] } }"#),
            "scroll.sections"
        );
        assert_eq!(
            invalid_field(r#"{ "scroll": { "sections": ["home", "home"] } }"#),
            "scroll.sections"
        );
        assert_eq!(
            invalid_field(r#"{ "spring": { "stiffness": 0.0 } }"#),
            "spring.stiffness"
        );
        assert_eq!(invalid_field(r#"{ "spring": { "mass": 0.0 } }"#), "spring.mass");
        assert_eq!(
            invalid_field(r#"{ "spring": { "damping": -1.0 } }"#),
            "spring.damping"
        );
        assert_eq!(
            invalid_field(r#"{ "typewriter": { "tick_ms": 0 } }"#),
            "typewriter.tick_ms"
        );
        assert_eq!(
            invalid_field(r#"{ "typewriter": { "roles": [""] } }"#),
            "typewriter.roles"
        );
    }

    #[test]
    fn test_underdamped_spring_is_allowed() {
        let config = SiteConfig::from_json(r#"{ "spring": { "damping": 5.0 } }"#)
            .expect("underdamped spring is only a warning");
        assert!(!config.spring.is_overdamped());
    }

    #[test]
    fn test_durations() {
        let tw = TypewriterConfig::default();
        assert_eq!(tw.tick(), Duration::from_millis(80));
        assert_eq!(tw.hold(), Duration::from_secs(2));
    }
}
