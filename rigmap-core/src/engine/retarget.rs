//! Retargeter - Two-Tier Mapping Strategy
//!
//! Composes both mappers the way the retargeting pipeline uses them:
//! 1. Ask the direct mapper whether the target skeleton is recognized
//! 2. If so, map table-covered bones by exact lookup
//! 3. Fall back to fuzzy matching for whatever targets are still unresolved
//! 4. Otherwise fuzzy-map the whole skeleton
//!
//! Direct entries always win over fuzzy ones for the same target bone.

use std::collections::{HashMap, HashSet};
use std::fmt;

use tracing::{debug, info, warn};

use crate::config::MapperConfig;
use crate::engine::auto_mapper::AutoMapper;
use crate::engine::convention::SkeletonConvention;
use crate::engine::direct_mapper::DirectMapper;
use crate::engine::mapping::{BoneMapping, BoneMatch, MatchOrigin};
use crate::error::Result;

// ============================================================================
// Mapping Report
// ============================================================================

/// Which strategy produced a mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MappingStrategy {
    /// Table lookup only
    Direct,
    /// Table lookup, then fuzzy matching for unresolved targets
    DirectWithFallback,
    /// Fuzzy matching only
    Auto,
}

impl fmt::Display for MappingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingStrategy::Direct => f.write_str("direct"),
            MappingStrategy::DirectWithFallback => f.write_str("direct+fallback"),
            MappingStrategy::Auto => f.write_str("auto"),
        }
    }
}

/// Outcome of a full retargeting map.
#[derive(Debug, Clone)]
pub struct MappingReport {
    pub strategy: MappingStrategy,
    /// Convention the target skeleton was classified under
    pub convention: SkeletonConvention,
    /// Merged target -> source mapping
    pub mapping: BoneMapping,
    /// Accepted matches in target order
    pub matches: Vec<BoneMatch>,
    /// Target bones with no acceptable source, in target order
    pub unmapped: Vec<String>,
}

impl MappingReport {
    /// Share of distinct target bones that received a source.
    pub fn coverage(&self) -> f32 {
        let total = self.matches.len() + self.unmapped.len();
        if total == 0 {
            return 0.0;
        }
        self.matches.len() as f32 / total as f32
    }

    /// Number of matches produced by table lookup.
    pub fn direct_count(&self) -> usize {
        self.count_origin(MatchOrigin::Direct)
    }

    /// Number of matches produced by fuzzy scoring.
    pub fn fuzzy_count(&self) -> usize {
        self.count_origin(MatchOrigin::Fuzzy)
    }

    fn count_origin(&self, origin: MatchOrigin) -> usize {
        self.matches.iter().filter(|m| m.origin == origin).count()
    }
}

// ============================================================================
// Retargeter
// ============================================================================

/// Direct-then-fuzzy bone mapper.
///
/// # Usage
/// ```
/// use rigmap_core::engine::{MappingStrategy, Retargeter};
/// use rigmap_core::MapperConfig;
///
/// let retargeter = Retargeter::new(MapperConfig::default()).unwrap();
/// let report = retargeter.map(
///     &["pelvis", "spine_01", "Tail"],
///     &["mixamorigHips", "mixamorigSpine", "mixamorigTail"],
/// );
///
/// assert_eq!(report.strategy, MappingStrategy::DirectWithFallback);
/// assert_eq!(report.mapping.get("mixamorigHips"), Some("pelvis"));
/// assert_eq!(report.mapping.get("mixamorigTail"), Some("Tail"));
/// ```
#[derive(Debug, Clone)]
pub struct Retargeter {
    config: MapperConfig,
    direct: DirectMapper,
    auto: AutoMapper,
}

impl Retargeter {
    /// Create a retargeter using the built-in Mixamo table.
    pub fn new(config: MapperConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            direct: DirectMapper::mixamo().with_recognition(config.recognition),
            auto: AutoMapper::from_config(&config),
            config,
        })
    }

    /// Swap in another convention table; the configured recognition policy applies.
    pub fn with_direct_mapper(mut self, direct: DirectMapper) -> Self {
        self.direct = direct.with_recognition(self.config.recognition);
        self
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Map target bones to source bones, choosing the strategy from the
    /// target skeleton's naming.
    pub fn map<S, T>(&self, source_names: &[S], target_names: &[T]) -> MappingReport
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let recognized = self.direct.is_target_convention(target_names);

        let (strategy, convention, found) = if recognized {
            let mut found = self.direct.direct_map_scored(source_names, target_names);

            if self.config.fallback_to_auto {
                let resolved: HashSet<&str> = found.iter().map(|m| m.target.as_str()).collect();
                let unresolved: Vec<&str> = target_names
                    .iter()
                    .map(|name| name.as_ref())
                    .filter(|name| !resolved.contains(name))
                    .collect();

                debug!(
                    direct = found.len(),
                    unresolved = unresolved.len(),
                    "Falling back to fuzzy matching for unresolved targets"
                );

                let fuzzy = self.auto.auto_map_scored(source_names, &unresolved);
                found.extend(fuzzy);
                (MappingStrategy::DirectWithFallback, self.direct.convention(), found)
            } else {
                (MappingStrategy::Direct, self.direct.convention(), found)
            }
        } else {
            let found = self.auto.auto_map_scored(source_names, target_names);
            (MappingStrategy::Auto, SkeletonConvention::Generic, found)
        };

        let report = Self::assemble(strategy, convention, found, target_names);

        info!(
            strategy = %report.strategy,
            convention = %report.convention,
            mapped = report.matches.len(),
            unmapped = report.unmapped.len(),
            "Bone mapping complete"
        );

        report
    }

    /// Order matches by target, keep the first match per target, and list
    /// the targets that were left out.
    fn assemble<T: AsRef<str>>(
        strategy: MappingStrategy,
        convention: SkeletonConvention,
        found: Vec<BoneMatch>,
        target_names: &[T],
    ) -> MappingReport {
        let mut by_target: HashMap<String, BoneMatch> = HashMap::with_capacity(found.len());
        for m in found {
            by_target.entry(m.target.clone()).or_insert(m);
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(target_names.len());
        let mut matches = Vec::with_capacity(by_target.len());
        let mut unmapped = Vec::new();

        for target in target_names.iter().map(|name| name.as_ref()) {
            if !seen.insert(target) {
                continue;
            }
            match by_target.remove(target) {
                Some(m) => matches.push(m),
                None => {
                    warn!(bone = target, "No source bone found for target bone");
                    unmapped.push(target.to_string());
                }
            }
        }

        MappingReport {
            strategy,
            convention,
            mapping: matches.iter().collect(),
            matches,
            unmapped,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
