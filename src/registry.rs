//! Level registrar.
//!
//! Keeps the name/rank table the formatter resolves level names from, plus the
//! accessor names under which a level can be called (`log_named("spam", ..)`).
//! Registration never overwrites: a clashing name, accessor, method or rank is
//! reported and the registry is left untouched.

use crate::level::Rank;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::sync::{Mutex, OnceLock};

/// Standard levels every registry starts with, aliases included.
const STANDARD_LEVELS: &[(&str, Rank)] = &[
    ("NOTSET", 0),
    ("DEBUG", 10),
    ("INFO", 20),
    ("WARNING", 30),
    ("ERROR", 40),
    ("CRITICAL", 50),
];

/// Alternate spellings that resolve to a standard rank but never render.
const STANDARD_ALIASES: &[(&str, Rank)] = &[("WARN", 30), ("FATAL", 50)];

/// Module-level convenience calls that exist without any registration.
const RESERVED_ACCESSORS: &[&str] = &[
    "debug", "info", "warning", "warn", "error", "exception", "critical", "fatal", "log",
    "disable", "shutdown",
];

/// Logger methods that a custom level accessor must not shadow.
const RESERVED_METHODS: &[&str] = &[
    "debug",
    "info",
    "warning",
    "warn",
    "error",
    "exception",
    "critical",
    "fatal",
    "log",
    "log_named",
    "enabled",
    "flush",
    "min_level",
    "format",
];

/// Configuration collision. Always fatal to setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The level name is already known.
    LevelExists(String),
    /// The accessor collides with a module-level call.
    AccessorExists(String),
    /// The accessor collides with a logger method.
    MethodExists(String),
    /// Another level already owns this rank.
    RankExists(Rank),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LevelExists(name) => write!(f, "{name} already defined as a log level"),
            Self::AccessorExists(name) => write!(f, "{name} already defined as a log accessor"),
            Self::MethodExists(name) => write!(f, "{name} already defined in logger"),
            Self::RankExists(rank) => write!(f, "rank {rank} already assigned to a log level"),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Name/rank table plus the accessor namespace.
#[derive(Debug, Clone)]
pub struct LevelRegistry {
    by_name: HashMap<String, Rank>,
    by_rank: BTreeMap<Rank, String>,
    accessors: HashMap<String, Rank>,
    methods: HashSet<String>,
}

impl Default for LevelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelRegistry {
    /// Registry holding the standard levels only.
    #[must_use]
    pub fn new() -> Self {
        let mut by_name = HashMap::new();
        let mut by_rank = BTreeMap::new();
        for &(name, rank) in STANDARD_LEVELS {
            by_name.insert(name.to_string(), rank);
            by_rank.insert(rank, name.to_string());
        }
        for &(alias, rank) in STANDARD_ALIASES {
            by_name.insert(alias.to_string(), rank);
        }

        let accessors = RESERVED_ACCESSORS
            .iter()
            .filter_map(|&name| {
                by_name
                    .get(&name.to_uppercase())
                    .map(|&rank| (name.to_string(), rank))
            })
            .collect();

        Self {
            by_name,
            by_rank,
            accessors,
            methods: RESERVED_METHODS.iter().map(ToString::to_string).collect(),
        }
    }

    /// Adds `name` at `rank`, callable as `accessor` (defaults to the lowercased name).
    ///
    /// # Errors
    /// Returns the first collision found, checked in order: level name,
    /// module-level accessor, logger method, rank.
    pub fn register(
        &mut self,
        name: &str,
        rank: Rank,
        accessor: Option<&str>,
    ) -> Result<(), RegistryError> {
        let accessor = accessor.map_or_else(|| name.to_lowercase(), ToString::to_string);

        if self.by_name.contains_key(name) {
            return Err(RegistryError::LevelExists(name.to_string()));
        }
        if RESERVED_ACCESSORS.contains(&accessor.as_str()) || self.accessors.contains_key(&accessor)
        {
            return Err(RegistryError::AccessorExists(accessor));
        }
        if self.methods.contains(&accessor) {
            return Err(RegistryError::MethodExists(accessor));
        }
        if self.by_rank.contains_key(&rank) {
            return Err(RegistryError::RankExists(rank));
        }

        self.by_name.insert(name.to_string(), rank);
        self.by_rank.insert(rank, name.to_string());
        self.accessors.insert(accessor.clone(), rank);
        self.methods.insert(accessor);
        Ok(())
    }

    /// Rank for a level name. Case-sensitive, like the names themselves.
    #[must_use]
    pub fn rank_of(&self, name: &str) -> Option<Rank> {
        self.by_name.get(name).copied()
    }

    /// Display name for a rank; unregistered ranks render as `Level <n>`.
    #[must_use]
    pub fn name_of(&self, rank: Rank) -> String {
        self.by_rank
            .get(&rank)
            .cloned()
            .unwrap_or_else(|| format!("Level {rank}"))
    }

    /// Rank behind an accessor such as `"spam"` or `"info"`.
    #[must_use]
    pub fn accessor_rank(&self, accessor: &str) -> Option<Rank> {
        self.accessors.get(accessor).copied()
    }

    /// True once `name` has been registered or is a standard level.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Canonical levels in rank order, aliases excluded.
    pub fn levels(&self) -> impl Iterator<Item = (Rank, &str)> {
        self.by_rank.iter().map(|(&rank, name)| (rank, name.as_str()))
    }
}

static GLOBAL_REGISTRY: OnceLock<Mutex<LevelRegistry>> = OnceLock::new();

/// The process-wide registry the configurator registers custom levels into.
pub fn global() -> &'static Mutex<LevelRegistry> {
    GLOBAL_REGISTRY.get_or_init(|| Mutex::new(LevelRegistry::new()))
}

/// Registers into the process-wide registry.
///
/// # Errors
/// Same collisions as [`LevelRegistry::register`].
pub fn register(name: &str, rank: Rank, accessor: Option<&str>) -> Result<(), RegistryError> {
    let mut registry = global()
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    registry.register(name, rank, accessor)
}

/// Copy of the process-wide registry, taken when a logger is built.
#[must_use]
pub fn snapshot() -> LevelRegistry {
    global()
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
        .clone()
}
