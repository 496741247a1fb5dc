//! Include resolution for domain-list-community rule sets.
//!
//! A rule set is a named list of lines: bare domains (suffix matches),
//! `full:` domains (exact matches), `regexp:` entries and `include:`
//! directives pulling in other rule sets. This crate flattens a rule set and
//! everything it transitively includes into two domain lists.
//!
//! # Architecture
//!
//! - **Parser**: `classify` maps one raw line to a [`ClassifiedLine`]
//! - **Providers**: `DirProvider` (one file per rule set), `MemoryProvider`
//! - **Engine**: `Resolver` walks includes breadth-first, each name once
//! - **Diagnostics**: traversal events go to a pluggable sink (tracing by default)
//!
//! # Example
//!
//! ```
//! use geosite_rules::provider::MemoryProvider;
//! use geosite_rules::{IgnorePolicy, Resolver};
//!
//! let provider = MemoryProvider::new()
//!     .with("google", "google.com\nfull:www.google.com @cn\ninclude:youtube")
//!     .with("youtube", "youtube.com\nregexp:^yt[0-9]+\\.com$");
//!
//! let mut builder = Resolver::builder(provider);
//! builder.set_policy(IgnorePolicy::new(["all"], [".md"]));
//! let resolver = builder.build();
//!
//! let result = resolver.resolve(["google"]);
//! assert_eq!(result.suffix_domains, vec!["google.com", "youtube.com"]);
//! assert_eq!(result.full_domains, vec!["www.google.com"]);
//! ```

pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod parser;
pub mod policy;
pub mod provider;
pub mod rule;

pub use diagnostics::{Diagnostics, TraversalEvent};
pub use engine::{Resolver, ResolverBuilder, RunMode, SeedGroup, TraversalState};
pub use error::{RulesError, SourceError};
pub use parser::classify;
pub use policy::IgnorePolicy;
pub use provider::{ContentProvider, DirProvider};
pub use rule::{ClassifiedLine, ResolutionResult, RuleSetName};
