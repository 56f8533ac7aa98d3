use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Optional overrides read from `~/.config/extract-colors/config.yaml`.
///
/// Every field defaults to the d7shell layout when omitted.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// SCSS variable file. Default: ~/Projects/d7shell/style/colors.scss
    #[serde(default)]
    pub stylesheet: Option<String>,

    /// Template with `{{colors.<mode>.<role>}}` placeholders.
    /// Default: ~/.config/matugen/templates/starship-colors.toml
    #[serde(default)]
    pub starship_template: Option<String>,

    /// Rendered starship config. Default: ~/.config/starship.toml
    #[serde(default)]
    pub starship_config: Option<String>,
}

/// Resolved destinations passed to the writers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub stylesheet: PathBuf,
    pub starship_template: PathBuf,
    pub starship_config: PathBuf,
}

impl Paths {
    /// The fixed d7shell layout under `home`.
    pub fn defaults(home: &Path) -> Self {
        Self {
            stylesheet: home.join("Projects/d7shell/style/colors.scss"),
            starship_template: home.join(".config/matugen/templates/starship-colors.toml"),
            starship_config: home.join(".config/starship.toml"),
        }
    }
}

impl Config {
    /// Load the global config file, resolving paths against the home directory.
    pub fn load_paths() -> Result<Paths> {
        let home = home::home_dir().ok_or_else(|| anyhow!("Could not determine home directory"))?;
        let config = Self::load_global(&home)?.unwrap_or_default();
        let paths = config.resolve(&home);
        debug!(
            stylesheet = %paths.stylesheet.display(),
            starship_template = %paths.starship_template.display(),
            starship_config = %paths.starship_config.display(),
            "config:paths resolved"
        );
        Ok(paths)
    }

    /// Apply overrides on top of [`Paths::defaults`].
    pub fn resolve(&self, home: &Path) -> Paths {
        let defaults = Paths::defaults(home);
        let pick = |value: &Option<String>, default: PathBuf| {
            value
                .as_deref()
                .map(|v| expand_path(v, home))
                .unwrap_or(default)
        };

        Paths {
            stylesheet: pick(&self.stylesheet, defaults.stylesheet),
            starship_template: pick(&self.starship_template, defaults.starship_template),
            starship_config: pick(&self.starship_config, defaults.starship_config),
        }
    }

    fn load_from_path(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        debug!(path = %path.display(), "config:reading file");
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        // An empty file parses as null; treat it as no overrides.
        if contents.trim().is_empty() {
            return Ok(Some(Self::default()));
        }
        let config: Config = serde_yaml::from_str(&contents)
            .map_err(|e| anyhow!("Failed to parse config at {}: {}", path.display(), e))?;
        Ok(Some(config))
    }

    fn load_global(home: &Path) -> Result<Option<Self>> {
        let config_dir = home.join(".config/extract-colors");
        for name in ["config.yaml", "config.yml"] {
            let path = config_dir.join(name);
            if path.exists() {
                return Self::load_from_path(&path);
            }
        }
        Ok(None)
    }
}

/// Expand a leading `~/` and anchor relative paths at `home`.
fn expand_path(value: &str, home: &Path) -> PathBuf {
    if value == "~" {
        return home.to_path_buf();
    }
    if let Some(rest) = value.strip_prefix("~/") {
        return home.join(rest);
    }
    let path = Path::new(value);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        home.join(path)
    }
}
