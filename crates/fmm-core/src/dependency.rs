use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use fmm_util::errors::FmmError;
use serde::{Deserialize, Serialize};

use crate::ident::ModIdent;
use crate::version::ModVersion;

/// Relationship between a mod and one of its declared dependencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyKind {
    /// No prefix: must be installed and loads first.
    Required,
    /// `?`: loads first if present.
    Optional,
    /// `(?)`: like `Optional`, hidden in the in-game mod list.
    HiddenOptional,
    /// `!`: must not be active at the same time.
    Incompatible,
    /// `~`: must be installed but imposes no load order.
    NoLoadOrder,
}

impl DependencyKind {
    /// Whether the resolver follows edges of this kind. Only these kinds
    /// force another mod to be installed.
    pub fn is_traversed(self) -> bool {
        matches!(self, DependencyKind::Required | DependencyKind::NoLoadOrder)
    }

    fn prefix(self) -> &'static str {
        match self {
            DependencyKind::Required => "",
            DependencyKind::Optional => "? ",
            DependencyKind::HiddenOptional => "(?) ",
            DependencyKind::Incompatible => "! ",
            DependencyKind::NoLoadOrder => "~ ",
        }
    }
}

/// How a candidate version is compared against the required version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintOperator {
    Any,
    Eq,
    Lt,
    Lte,
    Gt,
    Gte,
}

impl ConstraintOperator {
    fn symbol(self) -> Option<&'static str> {
        match self {
            ConstraintOperator::Any => None,
            ConstraintOperator::Eq => Some("="),
            ConstraintOperator::Lt => Some("<"),
            ConstraintOperator::Lte => Some("<="),
            ConstraintOperator::Gt => Some(">"),
            ConstraintOperator::Gte => Some(">="),
        }
    }

    fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "=" => Some(ConstraintOperator::Eq),
            "<" => Some(ConstraintOperator::Lt),
            "<=" => Some(ConstraintOperator::Lte),
            ">" => Some(ConstraintOperator::Gt),
            ">=" => Some(ConstraintOperator::Gte),
            _ => None,
        }
    }

    fn accepts(self, ordering: Ordering) -> bool {
        match self {
            ConstraintOperator::Any => true,
            ConstraintOperator::Eq => ordering == Ordering::Equal,
            ConstraintOperator::Lt => ordering == Ordering::Less,
            ConstraintOperator::Lte => ordering != Ordering::Greater,
            ConstraintOperator::Gt => ordering == Ordering::Greater,
            ConstraintOperator::Gte => ordering != Ordering::Less,
        }
    }
}

/// A dependency on another mod, as declared in `info.json` or requested by
/// the user.
///
/// Serialized in the `info.json` string form, e.g. `"? bobplates >= 1.1.0"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Dependency {
    /// The target mod; `target.version` is the required version operand.
    pub target: ModIdent,
    pub kind: DependencyKind,
    pub operator: ConstraintOperator,
}

impl Dependency {
    pub fn new(target: ModIdent, kind: DependencyKind, operator: ConstraintOperator) -> Self {
        Self {
            target,
            kind,
            operator,
        }
    }

    /// A required dependency on exactly the given identity: `Eq` when it
    /// carries a version, `Any` otherwise.
    pub fn from_ident(ident: ModIdent) -> Self {
        let operator = if ident.version.is_some() {
            ConstraintOperator::Eq
        } else {
            ConstraintOperator::Any
        };
        Self::new(ident, DependencyKind::Required, operator)
    }

    pub fn name(&self) -> &str {
        &self.target.name
    }

    /// Whether `candidate` satisfies this constraint.
    ///
    /// `Any` accepts everything, including an unknown version. Every other
    /// operator rejects an unknown candidate, and also rejects everything
    /// when the dependency itself carries no required version.
    pub fn test(&self, candidate: Option<&ModVersion>) -> bool {
        if self.operator == ConstraintOperator::Any {
            return true;
        }
        match (candidate, &self.target.version) {
            (Some(candidate), Some(required)) => self.operator.accepts(candidate.cmp(required)),
            _ => false,
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.prefix(), self.target.name)?;
        if let (Some(symbol), Some(version)) = (self.operator.symbol(), &self.target.version) {
            write!(f, " {symbol} {version}")?;
        }
        Ok(())
    }
}

impl FromStr for Dependency {
    type Err = FmmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| FmmError::InvalidDependency {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = s.trim();
        let (kind, rest) = if let Some(rest) = trimmed.strip_prefix("(?)") {
            (DependencyKind::HiddenOptional, rest)
        } else if let Some(rest) = trimmed.strip_prefix('?') {
            (DependencyKind::Optional, rest)
        } else if let Some(rest) = trimmed.strip_prefix('!') {
            (DependencyKind::Incompatible, rest)
        } else if let Some(rest) = trimmed.strip_prefix('~') {
            (DependencyKind::NoLoadOrder, rest)
        } else {
            (DependencyKind::Required, trimmed)
        };

        let Some(op_start) = rest.find(['<', '>', '=']) else {
            let name = rest.trim();
            if name.is_empty() {
                return Err(invalid("missing mod name"));
            }
            return Ok(Self::new(
                ModIdent::named(name),
                kind,
                ConstraintOperator::Any,
            ));
        };

        let name = rest[..op_start].trim();
        if name.is_empty() {
            return Err(invalid("missing mod name"));
        }
        let after_name = &rest[op_start..];
        let op_len = after_name
            .find(|c| !matches!(c, '<' | '>' | '='))
            .unwrap_or(after_name.len());
        let operator = ConstraintOperator::from_symbol(&after_name[..op_len])
            .ok_or_else(|| invalid("unknown comparison operator"))?;
        let version_text = after_name[op_len..].trim();
        if version_text.is_empty() {
            return Err(invalid("operator without a version"));
        }
        let version =
            ModVersion::parse_operand(version_text).map_err(|e| FmmError::InvalidDependency {
                input: s.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self::new(ModIdent::new(name, Some(version)), kind, operator))
    }
}

impl TryFrom<String> for Dependency {
    type Error = FmmError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Dependency> for String {
    fn from(dep: Dependency) -> Self {
        dep.to_string()
    }
}
