//! What happened to each declaration during one assembly pass.

use std::fmt;

/// Where a transport's factory came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Looked up by name in the built-in registry.
    Builtin,
    /// The named export of this module.
    Plugin(String),
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => f.write_str("builtin"),
            Self::Plugin(module) => write!(f, "module {module}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// No factory: unknown name, missing or failing module, or missing export.
    Resolution,
    /// The factory was found but `add` rejected the options.
    Registration,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolution => f.write_str("resolution"),
            Self::Registration => f.write_str("registration"),
        }
    }
}

#[derive(Debug)]
pub struct AttachFailure {
    pub kind: FailureKind,
    pub error: crate::Error,
}

impl fmt::Display for AttachFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed: {}", self.kind, self.error)
    }
}

#[derive(Debug)]
pub enum Outcome {
    /// `enabled` absent or false; nothing was attempted.
    Disabled,
    Attached(Resolution),
    Failed(AttachFailure),
}

#[derive(Debug)]
pub struct DeclarationReport {
    pub name: String,
    pub module: Option<String>,
    pub outcome: Outcome,
}

/// One entry per declaration, in declaration order.
#[derive(Debug, Default)]
pub struct AssemblyReport {
    entries: Vec<DeclarationReport>,
}

impl AssemblyReport {
    pub(crate) fn push(&mut self, name: &str, module: Option<&str>, outcome: Outcome) {
        self.entries.push(DeclarationReport {
            name: name.to_string(),
            module: module.map(ToString::to_string),
            outcome,
        });
    }

    #[must_use]
    pub fn entries(&self) -> &[DeclarationReport] {
        &self.entries
    }

    #[must_use]
    pub fn attached_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, Outcome::Attached(_)))
            .count()
    }

    #[must_use]
    pub fn disabled_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, Outcome::Disabled))
            .count()
    }

    /// Failed declarations with their failure.
    pub fn failures(&self) -> impl Iterator<Item = (&DeclarationReport, &AttachFailure)> {
        self.entries.iter().filter_map(|e| match &e.outcome {
            Outcome::Failed(failure) => Some((e, failure)),
            _ => None,
        })
    }

    /// True when every enabled declaration was attached.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures().next().is_none()
    }
}
