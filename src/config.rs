// Build-time project list and link settings.

use thiserror::Error;

/// One orbiting project: its repository name, a display category and the
/// orbit radius in world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectEntry {
    pub name: &'static str,
    pub category: &'static str,
    pub radius: f32,
}

impl ProjectEntry {
    pub const fn new(name: &'static str, category: &'static str, radius: f32) -> Self {
        Self {
            name,
            category,
            radius,
        }
    }
}

pub const DEFAULT_PROJECTS: &[ProjectEntry] = &[
    ProjectEntry::new("particle-galaxy-3d", "3D Graphics", 1.5),
    ProjectEntry::new("audio-spectrum-3d", "Audio Viz", 2.0),
    ProjectEntry::new("SnakeEye-sudo", "Profile", 1.3),
    ProjectEntry::new("FunASR", "AI/ML", 1.7),
    ProjectEntry::new("snakeeye-orbits-3d", "Portfolio", 1.9),
];

pub const DEFAULT_LINK_HOST: &str = "github.com";
pub const DEFAULT_LINK_OWNER: &str = "SnakeEye-sudo";

/// URL pattern `https://<host>/<owner>/<project>` used when a satellite is clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectLinks {
    pub host: &'static str,
    pub owner: &'static str,
}

impl Default for ProjectLinks {
    fn default() -> Self {
        Self {
            host: DEFAULT_LINK_HOST,
            owner: DEFAULT_LINK_OWNER,
        }
    }
}

impl ProjectLinks {
    pub fn url_for(&self, project_name: &str) -> String {
        format!("https://{}/{}/{}", self.host, self.owner, project_name)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("link owner must not be empty")]
    EmptyOwner,
    #[error("project #{index} has an empty name")]
    EmptyProjectName { index: usize },
    #[error("project `{name}` has invalid orbit radius {radius}")]
    InvalidRadius { name: &'static str, radius: f32 },
    #[error("invalid seed `{0}` in query string")]
    InvalidSeed(String),
}

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub links: ProjectLinks,
    pub projects: Vec<ProjectEntry>,
    /// Fixed RNG seed for satellite speeds; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            links: ProjectLinks::default(),
            projects: DEFAULT_PROJECTS.to_vec(),
            seed: None,
        }
    }
}

impl SceneConfig {
    /// Default configuration with overrides taken from a `location.search` string.
    pub fn from_query(query: &str) -> Result<Self, ConfigError> {
        let seed = seed_from_query(query)?;
        Ok(Self {
            seed,
            ..Self::default()
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.links.owner.trim().is_empty() {
            return Err(ConfigError::EmptyOwner);
        }
        for (index, p) in self.projects.iter().enumerate() {
            if p.name.trim().is_empty() {
                return Err(ConfigError::EmptyProjectName { index });
            }
            if !p.radius.is_finite() || p.radius <= 0.0 {
                return Err(ConfigError::InvalidRadius {
                    name: p.name,
                    radius: p.radius,
                });
            }
        }
        Ok(())
    }
}

/// Extract `seed=<u64>` from a query string such as `?seed=42&x=1`.
pub fn seed_from_query(query: &str) -> Result<Option<u64>, ConfigError> {
    let query = query.strip_prefix('?').unwrap_or(query);
    for pair in query.split('&') {
        let mut kv = pair.splitn(2, '=');
        if kv.next() != Some("seed") {
            continue;
        }
        let raw = kv.next().unwrap_or("");
        return raw
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidSeed(raw.to_string()));
    }
    Ok(None)
}
