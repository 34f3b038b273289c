use std::collections::BTreeSet;
use std::fmt::{Display, Formatter, Result as FmtResult};

use toc_semantics::{BOTH_ENVIRONMENTS, ConditionKind};

use crate::conditions::EvalContext;

/// A load condition: a kind plus the set of tokens it accepts or rejects.
///
/// Tokens compare case-insensitively against the context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    kind: ConditionKind,
    values: BTreeSet<String>,
}

impl Condition {
    pub fn new(kind: ConditionKind, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Condition {
            kind,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Build from comma-separated token text, e.g. `mainline, vanilla`.
    pub fn parse(kind: ConditionKind, text: &str) -> Self {
        Condition::new(
            kind,
            text.split(',')
                .map(str::trim)
                .filter(|token| !token.is_empty()),
        )
    }

    pub fn kind(&self) -> ConditionKind {
        self.kind
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    /// Returns true if the token set contains `token`, ignoring ASCII case.
    pub fn contains(&self, token: &str) -> bool {
        self.values.iter().any(|v| v.eq_ignore_ascii_case(token))
    }

    /// Evaluate this condition against the context.
    pub fn evaluate<C: EvalContext + ?Sized>(&self, ctx: &C) -> bool {
        match self.kind {
            ConditionKind::AllowLoad | ConditionKind::AllowLoadEnvironment => {
                self.contains(ctx.environment().as_str()) || self.contains(BOTH_ENVIRONMENTS)
            }
            ConditionKind::AllowLoadGameType => self.contains(ctx.game_type().as_str()),
            ConditionKind::AllowLoadTextLocale => self.contains(ctx.text_locale().as_str()),
            // A set without `Both` always admits.
            ConditionKind::ExcludeLoad | ConditionKind::ExcludeLoadEnvironment => {
                !self.contains(ctx.environment().as_str()) || !self.contains(BOTH_ENVIRONMENTS)
            }
            ConditionKind::ExcludeLoadGameType => !self.contains(ctx.game_type().as_str()),
            ConditionKind::ExcludeLoadTextLocale => !self.contains(ctx.text_locale().as_str()),
        }
    }

    /// The tokens joined with `", "`.
    pub fn values_text(&self) -> String {
        self.values.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
    }

    /// Render as a file-line clause, e.g. `[AllowLoadGameType mainline]`.
    pub fn export(&self) -> String {
        if self.values.is_empty() {
            format!("[{}]", self.kind.name())
        } else {
            format!("[{} {}]", self.kind.name(), self.values_text())
        }
    }
}

impl Display for Condition {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.export())
    }
}
