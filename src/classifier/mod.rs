//! Keep/omit classification of tree entries
//!
//! The [`Classifier`] holds two ordered pattern lists and decides each path
//! independently:
//!
//! 1. First matching exclude pattern wins -> `omit` / `omit_all`
//! 2. Otherwise first matching include pattern -> `keep` / `keep_all`
//! 3. Otherwise -> `omit` / `omit_all`, "Outside include patterns"
//!
//! Excludes are always checked before includes, so a path matching both is
//! omitted.

mod pattern;

pub use pattern::{translate, Pattern};

use thiserror::Error;

use crate::models::{Decision, Entry, NodeKind};

/// Errors raised while compiling pattern lists
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Failed to compile pattern '{pattern}': {source}")]
    Compile {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Decision plus its explanation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub decision: Decision,
    pub reasons: Vec<String>,
}

/// Which rule produced a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule<'a> {
    Excluded(&'a Pattern),
    Included(&'a Pattern),
    OutsideIncludes,
}

impl Rule<'_> {
    pub fn reason(&self) -> String {
        match self {
            Rule::Excluded(p) => format!("Excluded by pattern '{}'", p),
            Rule::Included(p) => format!("Included by pattern '{}'", p),
            Rule::OutsideIncludes => "Outside include patterns".to_string(),
        }
    }
}

/// Pure path classifier over immutable include/exclude lists
#[derive(Debug, Clone)]
pub struct Classifier {
    include: Vec<Pattern>,
    exclude: Vec<Pattern>,
}

impl Classifier {
    pub fn new<I, E>(include: I, exclude: E) -> Result<Self, PatternError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        Ok(Self {
            include: compile(include)?,
            exclude: compile(exclude)?,
        })
    }

    /// Find the rule that decides `path`
    pub fn rule_for(&self, path: &str) -> Rule<'_> {
        if let Some(p) = first_match(&self.exclude, path) {
            return Rule::Excluded(p);
        }
        if let Some(p) = first_match(&self.include, path) {
            return Rule::Included(p);
        }
        Rule::OutsideIncludes
    }

    /// Decide a path. `path` is matched as given, without a trailing `/`
    /// for directories.
    pub fn decide(&self, path: &str, is_dir: bool) -> Verdict {
        let kind = NodeKind::from_is_dir(is_dir);
        let rule = self.rule_for(path);
        let decision = match rule {
            Rule::Included(_) => Decision::keep(kind),
            Rule::Excluded(_) | Rule::OutsideIncludes => Decision::omit(kind),
        };
        Verdict {
            decision,
            reasons: vec![rule.reason()],
        }
    }

    /// Decide and build the entry for one listing node
    pub fn classify(&self, path: &str, is_dir: bool) -> Entry {
        let Verdict { decision, reasons } = self.decide(path, is_dir);
        Entry {
            path: if is_dir {
                format!("{}/", path)
            } else {
                path.to_string()
            },
            node: NodeKind::from_is_dir(is_dir),
            decision,
            reasons,
        }
    }

    /// Classify every `(path, is_dir)` pair, in input order
    pub fn classify_all<'a, I>(&self, nodes: I) -> Vec<Entry>
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        nodes
            .into_iter()
            .map(|(path, is_dir)| self.classify(path, is_dir))
            .collect()
    }
}

fn compile<I>(patterns: I) -> Result<Vec<Pattern>, PatternError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    patterns
        .into_iter()
        .map(|p| Pattern::new(p.as_ref()))
        .collect()
}

fn first_match<'a>(patterns: &'a [Pattern], path: &str) -> Option<&'a Pattern> {
    patterns.iter().find(|p| p.matches(path))
}
