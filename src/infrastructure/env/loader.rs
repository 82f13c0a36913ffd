use regex::Regex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, info, warn};

use super::references::{expand_references, mark_references};
use crate::domain::models::EnvironmentMap;
use crate::domain::LoadError;

// `KEY=` at the start of a line, as a swallowed entry would look
static ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(export\s+)?[A-Z_][A-Z0-9_]*=([^=]|$)").expect("valid regex")
});

/// Where the variables layered over the file come from
#[derive(Debug, Clone)]
enum ProcessSource {
    /// Snapshot of the running process at load time
    Ambient,
    /// File values only
    Isolated,
    /// Caller-supplied variables
    Fixed(EnvironmentMap),
}

/// Loader for a dotenv-style environment file
///
/// Precedence (lowest to highest):
/// 1. Variables from the file
/// 2. Process environment (unless isolated)
///
/// `$NAME` references in the file see the same sources: an isolated load
/// expands them from earlier file entries only.
///
/// This mirrors dotenv's default of never overriding a variable that is
/// already set, but produces a new map instead of exporting into the process.
#[derive(Debug, Clone)]
pub struct EnvLoader {
    path: PathBuf,
    process: ProcessSource,
}

impl EnvLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            process: ProcessSource::Ambient,
        }
    }

    /// Ignore the process environment entirely
    #[must_use]
    pub fn isolated(mut self) -> Self {
        self.process = ProcessSource::Isolated;
        self
    }

    /// Layer `vars` over the file instead of the real process environment
    #[must_use]
    pub fn with_process_env(mut self, vars: EnvironmentMap) -> Self {
        self.process = ProcessSource::Fixed(vars);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the file and merge it with the process environment
    ///
    /// # Returns
    /// * `Ok(EnvironmentMap)` - merged variables
    /// * `Err(LoadError::NotFound)` - the file does not exist
    /// * `Err(LoadError::Io)` - the file exists but could not be read
    pub fn load(&self) -> Result<EnvironmentMap, LoadError> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "environment file not found");
            return Err(LoadError::NotFound {
                path: self.path.clone(),
            });
        }

        let file_vars = self.read_file()?;
        debug!(
            path = %self.path.display(),
            count = file_vars.len(),
            "loaded environment file"
        );

        let merged = match &self.process {
            ProcessSource::Ambient => file_vars.overlay(process_environment().iter()),
            ProcessSource::Fixed(vars) => file_vars.overlay(vars.iter()),
            ProcessSource::Isolated => file_vars,
        };

        Ok(merged)
    }

    /// Parse the file into a map, later duplicates winning
    ///
    /// With the ambient process source the parser expands `$NAME` references
    /// itself, from the process first. Otherwise references are expanded
    /// from the fixed variables and earlier file entries only, so nothing
    /// from the real process leaks in.
    fn read_file(&self) -> Result<EnvironmentMap, LoadError> {
        let overrides = match &self.process {
            ProcessSource::Ambient => {
                let iter = dotenvy::from_path_iter(&self.path).map_err(|err| self.io_error(err))?;
                return Ok(self.collect_pairs(iter)?.into_iter().collect());
            }
            ProcessSource::Isolated => None,
            ProcessSource::Fixed(vars) => Some(vars),
        };

        let contents = std::fs::read_to_string(&self.path).map_err(|source| LoadError::Io {
            path: self.path.clone(),
            source,
        })?;
        let marked = mark_references(contents.trim_start_matches('\u{feff}'));
        let pairs = self.collect_pairs(dotenvy::from_read_iter(marked.as_bytes()))?;

        let mut resolved: HashMap<String, String> = HashMap::with_capacity(pairs.len());
        for (key, raw) in pairs {
            let value = expand_references(&raw, |name| {
                overrides
                    .and_then(|vars| vars.get(name))
                    .or_else(|| resolved.get(name).map(String::as_str))
            });
            resolved.insert(key, value);
        }

        Ok(resolved.into_iter().collect())
    }

    fn collect_pairs<I>(&self, iter: I) -> Result<Vec<(String, String)>, LoadError>
    where
        I: Iterator<Item = dotenvy::Result<(String, String)>>,
    {
        let mut pairs = Vec::new();
        for item in iter {
            match item {
                Ok((key, value)) => {
                    if value.lines().skip(1).any(|line| ASSIGNMENT.is_match(line)) {
                        warn!(
                            path = %self.path.display(),
                            key = %key,
                            "multi-line value contains assignments; check for an unterminated quote"
                        );
                    }
                    pairs.push((key, value));
                }
                Err(dotenvy::Error::LineParse(line, index)) if line.contains('\n') => {
                    warn!(
                        path = %self.path.display(),
                        index,
                        start = %line.lines().next().unwrap_or_default(),
                        skipped_lines = line.lines().count(),
                        "unterminated quote; ignoring the rest of the file"
                    );
                }
                Err(dotenvy::Error::LineParse(line, index)) => {
                    warn!(
                        path = %self.path.display(),
                        index,
                        line = %line,
                        "skipping malformed environment line"
                    );
                }
                Err(dotenvy::Error::Io(source)) => {
                    return Err(LoadError::Io {
                        path: self.path.clone(),
                        source,
                    });
                }
                Err(other) => {
                    warn!(path = %self.path.display(), error = %other, "skipping environment entry");
                }
            }
        }
        Ok(pairs)
    }

    fn io_error(&self, err: dotenvy::Error) -> LoadError {
        let source = match err {
            dotenvy::Error::Io(source) => source,
            other => std::io::Error::new(std::io::ErrorKind::InvalidData, other.to_string()),
        };
        LoadError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

/// Snapshot of the current process environment
///
/// Variables whose name or value is not valid UTF-8 are left out.
pub fn process_environment() -> EnvironmentMap {
    std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn env_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");

        let err = EnvLoader::new(&path).isolated().load().unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
        assert_eq!(err.path(), &path);
    }

    #[test]
    fn test_parses_dotenv_conventions() {
        let file = env_file(
            "# comment\n\nMASTER_KEY=sk-master\nexport OPENAI_API_KEY=\"sk-openai\"\nEMPTY=\n",
        );

        let env = EnvLoader::new(file.path()).isolated().load().unwrap();
        assert_eq!(env.get("MASTER_KEY"), Some("sk-master"));
        assert_eq!(env.get("OPENAI_API_KEY"), Some("sk-openai"));
        assert_eq!(env.get("EMPTY"), Some(""));
        assert_eq!(env.len(), 3);
    }

    #[test]
    fn test_process_environment_takes_precedence() {
        let file = env_file("MASTER_KEY=from-file\nGROQ_API_KEY=gsk-file\n");
        let process: EnvironmentMap = [("MASTER_KEY", "from-process")].into_iter().collect();

        let env = EnvLoader::new(file.path())
            .with_process_env(process)
            .load()
            .unwrap();

        assert_eq!(env.get("MASTER_KEY"), Some("from-process"));
        assert_eq!(env.get("GROQ_API_KEY"), Some("gsk-file"));
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let file = env_file("GOOD=1\nthis line is not valid\nALSO_GOOD=2\n");

        let env = EnvLoader::new(file.path()).isolated().load().unwrap();
        assert_eq!(env.get("GOOD"), Some("1"));
        assert_eq!(env.get("ALSO_GOOD"), Some("2"));
    }

    #[test]
    fn test_later_duplicate_wins() {
        let file = env_file("MASTER_KEY=first\nMASTER_KEY=second\n");

        let env = EnvLoader::new(file.path()).isolated().load().unwrap();
        assert_eq!(env.get("MASTER_KEY"), Some("second"));
    }

    #[test]
    fn test_isolated_references_resolve_from_file() {
        let file = env_file("HOST=db.internal\nURL=postgres://${HOST}/app\nMISSING=${NOT_IN_FILE}\n");

        let env = EnvLoader::new(file.path()).isolated().load().unwrap();
        assert_eq!(env.get("URL"), Some("postgres://db.internal/app"));
        assert_eq!(env.get("MISSING"), Some(""));
    }

    #[test]
    fn test_fixed_process_env_feeds_references() {
        let file = env_file("HOST=file-host\nURL=http://$HOST:8080\nLITERAL='$HOST'\n");
        let process: EnvironmentMap = [("HOST", "fixed-host")].into_iter().collect();

        let env = EnvLoader::new(file.path())
            .with_process_env(process)
            .load()
            .unwrap();

        assert_eq!(env.get("URL"), Some("http://fixed-host:8080"));
        assert_eq!(env.get("LITERAL"), Some("$HOST"));
        assert_eq!(env.get("HOST"), Some("fixed-host"));
    }

    #[test]
    fn test_unterminated_quote_drops_rest_of_file() {
        let file = env_file("MASTER_KEY=m\nDB_PASSWORD='broken\nOPENAI_API_KEY=sk\n");

        let env = EnvLoader::new(file.path()).isolated().load().unwrap();
        assert_eq!(env.get("MASTER_KEY"), Some("m"));
        assert!(!env.contains("DB_PASSWORD"));
        assert!(!env.contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_assignment_pattern_spots_swallowed_entries() {
        assert!(ASSIGNMENT.is_match("OPENAI_API_KEY=sk"));
        assert!(ASSIGNMENT.is_match("export GROQ_API_KEY="));
        assert!(!ASSIGNMENT.is_match("MIIBOgIBAAJBAKj34GkxFhD90vcNLYLInFEX6Ppy1tPf9Cnzj4p4WGeKLs1Pt8Qu"));
        assert!(!ASSIGNMENT.is_match("AB=="));
    }
}
