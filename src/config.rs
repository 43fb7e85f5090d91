use crate::core::registration::DEFAULT_CLEAR_PROMPT;
use crate::core::state::DEFAULT_COURSES;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_ENV: &str = "LABDESK_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("course list must not be empty")]
    NoCourses,

    #[error("duplicate course {0:?}")]
    DuplicateCourse(String),

    #[error("start path {0:?} must begin with '/'")]
    RelativeStartPath(String),
}

/// Optional YAML settings. Every field falls back to its default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub courses: Vec<String>,
    pub clear_all_prompt: String,
    pub start_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            courses: DEFAULT_COURSES.iter().map(|c| c.to_string()).collect(),
            clear_all_prompt: DEFAULT_CLEAR_PROMPT.to_string(),
            start_path: "/".to_string(),
        }
    }
}

impl Config {
    pub fn from_yaml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.normalized()
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&text, path)?;
        tracing::debug!(path = %path.display(), courses = config.courses.len(), "config loaded");
        Ok(config)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn normalized(mut self) -> Result<Self, ConfigError> {
        self.courses = self
            .courses
            .into_iter()
            .map(|course| course.trim().to_string())
            .filter(|course| !course.is_empty())
            .collect();
        if self.courses.is_empty() {
            return Err(ConfigError::NoCourses);
        }
        for (idx, course) in self.courses.iter().enumerate() {
            if self.courses[..idx].contains(course) {
                return Err(ConfigError::DuplicateCourse(course.clone()));
            }
        }
        if !self.start_path.starts_with('/') {
            return Err(ConfigError::RelativeStartPath(self.start_path));
        }
        if self.clear_all_prompt.trim().is_empty() {
            self.clear_all_prompt = DEFAULT_CLEAR_PROMPT.to_string();
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, ConfigError};
    use std::path::Path;

    fn parse(text: &str) -> Result<Config, ConfigError> {
        Config::from_yaml(text, Path::new("labdesk.yaml"))
    }

    #[test]
    fn empty_document_uses_defaults() {
        let config = parse("{}").expect("defaults");
        assert_eq!(config, Config::default());
        assert_eq!(config.courses.len(), 6);
    }

    #[test]
    fn partial_document_overrides_fields() {
        let config = parse("courses: [\" Physics \", Chemistry]\nstart_path: /about\n")
            .expect("valid config");
        assert_eq!(config.courses, vec!["Physics", "Chemistry"]);
        assert_eq!(config.start_path, "/about");
        assert_eq!(config.clear_all_prompt, Config::default().clear_all_prompt);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(parse("courses: []"), Err(ConfigError::NoCourses)));
        assert!(matches!(
            parse("courses: [Art, Art]"),
            Err(ConfigError::DuplicateCourse(course)) if course == "Art"
        ));
        assert!(matches!(
            parse("start_path: about"),
            Err(ConfigError::RelativeStartPath(_))
        ));
        assert!(matches!(parse("colour: red"), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn no_path_means_defaults() {
        assert_eq!(Config::load_or_default(None).expect("defaults"), Config::default());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = Config::load(Path::new("/definitely/not/here.yaml")).expect_err("missing file");
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("/definitely/not/here.yaml"));
    }
}
