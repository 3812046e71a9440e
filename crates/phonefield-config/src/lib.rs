use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use phonefield_core::{PhoneField, Region, MAX_PHONE_LEN};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "phonefield";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub plan: Region,
    pub field: PhoneField,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            plan: Region::Usa,
            field: PhoneField::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("config file permissions too permissive: {0}")]
    InsecurePermissions(PathBuf),
    #[error("invalid plan value: {0}")]
    InvalidPlan(String),
    #[error("invalid field.max_length value: {0} (expected 1..={max})", max = MAX_PHONE_LEN)]
    InvalidMaxLength(usize),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    plan: Option<String>,
    field: Option<FieldFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FieldFile {
    required: Option<bool>,
    max_length: Option<usize>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    Ok(load_at_path(&path, required)?.unwrap_or_default())
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = custom {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidConfigPath(path));
        }
        return Ok(path);
    }

    let base = match env::var_os("XDG_CONFIG_HOME") {
        Some(dir) => {
            let path = PathBuf::from(dir);
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            path
        }
        None => dirs::home_dir()
            .ok_or(ConfigError::MissingHomeDir)?
            .join(".config"),
    };
    Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    ensure_permissions(path)?;
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    merge_config(parsed).map(Some)
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(plan) = parsed.plan {
        config.plan = plan
            .parse::<Region>()
            .map_err(|_| ConfigError::InvalidPlan(plan))?;
    }

    let field = parsed.field.unwrap_or_default();
    if let Some(required) = field.required {
        config.field.required = required;
    }
    if let Some(max_length) = field.max_length {
        if max_length == 0 || max_length > MAX_PHONE_LEN {
            return Err(ConfigError::InvalidMaxLength(max_length));
        }
        config.field.max_length = max_length;
    }

    Ok(config)
}

#[cfg(unix)]
fn ensure_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = fs::metadata(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if metadata.permissions().mode() & 0o077 != 0 {
        return Err(ConfigError::InsecurePermissions(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(not(unix))]
fn ensure_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{load, load_at_path, merge_config, AppConfig, ConfigError, ConfigFile, FieldFile};
    use phonefield_core::Region;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn restrict_permissions(path: &Path) {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path).expect("metadata").permissions();
            perms.set_mode(0o600);
            fs::set_permissions(path, perms).expect("chmod");
        }
    }

    #[test]
    fn merge_config_applies_values() {
        let parsed = ConfigFile {
            plan: Some("USA".to_string()),
            field: Some(FieldFile {
                required: Some(false),
                max_length: Some(20),
            }),
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(merged.plan, Region::Usa);
        assert!(!merged.field.required);
        assert_eq!(merged.field.max_length, 20);
    }

    #[test]
    fn merge_config_defaults_when_empty() {
        let merged = merge_config(ConfigFile::default()).expect("merge");
        assert_eq!(merged, AppConfig::default());
        assert!(merged.field.required);
        assert_eq!(merged.field.max_length, 31);
    }

    #[test]
    fn merge_config_rejects_unknown_plan() {
        let parsed = ConfigFile {
            plan: Some("mars".to_string()),
            field: None,
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPlan(value) if value == "mars"));
    }

    #[test]
    fn merge_config_rejects_out_of_range_max_length() {
        for max_length in [0, 32] {
            let parsed = ConfigFile {
                plan: None,
                field: Some(FieldFile {
                    required: None,
                    max_length: Some(max_length),
                }),
            };
            let err = merge_config(parsed).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidMaxLength(value) if value == max_length));
        }
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
        assert!(load_at_path(&missing, false).expect("optional").is_none());
    }

    #[test]
    fn load_at_path_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "plan = \"usa\"\n[field]\nrequired = false\nmax_length = 24\n",
        )
        .expect("write config");
        restrict_permissions(&path);

        let config = load_at_path(&path, true).expect("load").expect("config");
        assert!(!config.field.required);
        assert_eq!(config.field.max_length, 24);
    }

    #[test]
    fn load_at_path_rejects_unknown_keys() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "[field]\nwidth = 3\n").expect("write config");
        restrict_permissions(&path);

        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn load_at_path_rejects_world_readable_file() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "plan = \"usa\"\n").expect("write config");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).expect("chmod");

        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::InsecurePermissions(_)));
    }

    #[test]
    fn load_with_explicit_path_reads_file() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("custom.toml");
        fs::write(&path, "[field]\nrequired = false\n").expect("write config");
        restrict_permissions(&path);

        let config = load(Some(path)).expect("load");
        assert!(!config.field.required);
    }
}
