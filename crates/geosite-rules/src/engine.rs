//! Include resolution: breadth-first traversal over rule-set includes.

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

use geosite_core::SEED_LABEL_SEPARATOR;
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::diagnostics::{Diagnostics, TracingDiagnostics, TraversalEvent};
use crate::error::{RulesError, SourceError};
use crate::parser::classify;
use crate::policy::IgnorePolicy;
use crate::provider::ContentProvider;
use crate::rule::{ClassifiedLine, ResolutionResult, RuleSetName};

/// Worklist and visited set of one resolution run.
///
/// A name enters the worklist at most once per run: once visited it is
/// never queued again, however many rule sets include it.
#[derive(Debug, Default)]
pub struct TraversalState {
    pending: VecDeque<RuleSetName>,
    visited: FxHashSet<RuleSetName>,
}

impl TraversalState {
    /// Start a run from `seeds`, keeping their order. Repeated seeds are
    /// queued once.
    pub fn new<I, N>(seeds: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<RuleSetName>,
    {
        let mut state = Self::default();
        for seed in seeds {
            state.schedule(&seed.into());
        }
        state
    }

    /// Queue `name` unless it was seen before. Returns true when queued.
    pub fn schedule(&mut self, name: &RuleSetName) -> bool {
        if self.visited.contains(name) {
            return false;
        }
        self.visited.insert(name.clone());
        self.pending.push_back(name.clone());
        true
    }

    /// Next name to process, in discovery order.
    pub fn pop(&mut self) -> Option<RuleSetName> {
        self.pending.pop_front()
    }

    pub fn is_visited(&self, name: &str) -> bool {
        self.visited.contains(name)
    }

    pub fn visited_len(&self) -> usize {
        self.visited.len()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

/// How seeds are chosen for a conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// One independent run per top-level rule set of the provider.
    Batch,
    /// One merged run over an explicit seed list.
    Single { seeds: Vec<RuleSetName> },
}

/// Seeds of a single resolution run and the label its output is named by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedGroup {
    pub label: String,
    pub seeds: Vec<RuleSetName>,
}

/// Resolves rule sets and their includes into flat domain lists.
///
/// Send + Sync; batch runs may share one resolver across threads since
/// every run owns its own [`TraversalState`].
pub struct Resolver {
    provider: Arc<dyn ContentProvider>,
    policy: IgnorePolicy,
    diagnostics: Arc<dyn Diagnostics>,
}

impl Resolver {
    /// Resolver with an empty ignore policy and tracing diagnostics.
    pub fn new(provider: impl ContentProvider + 'static) -> Self {
        ResolverBuilder::new(provider).build()
    }

    pub fn builder(provider: impl ContentProvider + 'static) -> ResolverBuilder {
        ResolverBuilder::new(provider)
    }

    pub fn policy(&self) -> &IgnorePolicy {
        &self.policy
    }

    /// Walk every rule set reachable from `seeds` and collect its domains.
    ///
    /// Ignored names are skipped without being read. Missing or unreadable
    /// rule sets are reported to the diagnostics sink and contribute
    /// nothing; the walk always runs to completion. Every name that was not
    /// ignored ends with a `FileDone` carrying the running totals.
    pub fn resolve<I, N>(&self, seeds: I) -> ResolutionResult
    where
        I: IntoIterator<Item = N>,
        N: Into<RuleSetName>,
    {
        let mut state = TraversalState::new(seeds);
        let mut result = ResolutionResult::default();

        while let Some(name) = state.pop() {
            if self.policy.is_ignored(name.as_str()) {
                self.emit(TraversalEvent::Ignored { name });
                continue;
            }

            self.emit(TraversalEvent::Processing { name: name.clone() });
            let lines = match self.provider.lines(&name) {
                Ok(lines) => lines,
                Err(SourceError::NotFound { .. }) => {
                    self.emit(TraversalEvent::NotFound { name: name.clone() });
                    Vec::new()
                }
                Err(e) => {
                    self.emit(TraversalEvent::ReadFailed {
                        name: name.clone(),
                        error: e.to_string(),
                    });
                    Vec::new()
                }
            };

            for line in &lines {
                match classify(line) {
                    ClassifiedLine::Include(target) => {
                        let event = if state.schedule(&target) {
                            TraversalEvent::IncludeQueued {
                                from: name.clone(),
                                target,
                            }
                        } else {
                            TraversalEvent::IncludeSkipped {
                                from: name.clone(),
                                target,
                            }
                        };
                        self.emit(event);
                    }
                    ClassifiedLine::FullDomain(domain) => result.full_domains.push(domain),
                    ClassifiedLine::SuffixDomain(domain) => result.suffix_domains.push(domain),
                    ClassifiedLine::Blank
                    | ClassifiedLine::Comment
                    | ClassifiedLine::RegexIgnored => {}
                }
            }

            self.emit(TraversalEvent::FileDone {
                name,
                suffix_total: result.suffix_domains.len(),
                full_total: result.full_domains.len(),
            });
        }

        debug!(
            visited = state.visited_len(),
            suffix = result.suffix_domains.len(),
            full = result.full_domains.len(),
            "resolution finished"
        );
        result
    }

    /// Resolve the seeds of a planned group.
    pub fn resolve_group(&self, group: &SeedGroup) -> ResolutionResult {
        self.resolve(&group.seeds)
    }

    /// Plan the resolution runs for `mode`.
    ///
    /// Batch mode lists the provider's rule sets and leaves out those the
    /// ignore policy matches; failing to list them is the only fatal error.
    /// Single mode keeps its seeds as given, ignored ones included, so the
    /// policy is applied when they are popped. It still requires the
    /// provider to be available, so an unreachable corpus never yields an
    /// empty rule set.
    pub fn seed_groups(&self, mode: &RunMode) -> Result<Vec<SeedGroup>, RulesError> {
        match mode {
            RunMode::Batch => {
                let names = self.provider.names()?;
                let mut groups = Vec::with_capacity(names.len());
                for name in names {
                    if self.policy.is_ignored(name.as_str()) {
                        self.emit(TraversalEvent::Ignored { name });
                        continue;
                    }
                    groups.push(SeedGroup {
                        label: name.to_string(),
                        seeds: vec![name],
                    });
                }
                Ok(groups)
            }
            RunMode::Single { seeds } => {
                if seeds.is_empty() {
                    return Err(RulesError::NoSeeds);
                }
                self.provider.ensure_available()?;
                let label = seeds
                    .iter()
                    .map(RuleSetName::as_str)
                    .collect::<Vec<_>>()
                    .join(SEED_LABEL_SEPARATOR);
                Ok(vec![SeedGroup {
                    label,
                    seeds: seeds.clone(),
                }])
            }
        }
    }

    fn emit(&self, event: TraversalEvent) {
        self.diagnostics.event(event);
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

// ── Builder ──

/// Builder for constructing a `Resolver`.
pub struct ResolverBuilder {
    provider: Arc<dyn ContentProvider>,
    policy: IgnorePolicy,
    diagnostics: Arc<dyn Diagnostics>,
}

impl ResolverBuilder {
    pub fn new(provider: impl ContentProvider + 'static) -> Self {
        Self {
            provider: Arc::new(provider),
            policy: IgnorePolicy::default(),
            diagnostics: Arc::new(TracingDiagnostics),
        }
    }

    /// Set the ignore policy applied to every popped name.
    pub fn set_policy(&mut self, policy: IgnorePolicy) -> &mut Self {
        self.policy = policy;
        self
    }

    /// Replace the default tracing sink.
    pub fn set_diagnostics(&mut self, diagnostics: Arc<dyn Diagnostics>) -> &mut Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn build(self) -> Resolver {
        Resolver {
            provider: self.provider,
            policy: self.policy,
            diagnostics: self.diagnostics,
        }
    }
}
