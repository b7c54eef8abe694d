//! Filter expression tree
//!
//! Filters are built from field comparisons and combined with `&` / `&=`.
//! Conjunctions are flattened as they are built, so `a & b & c` and
//! `a & (b & c)` produce the same tree and the same RQL.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::fmt;
use std::ops::{BitAnd, BitAndAssign};

/// Comparison operators supported by the platform's RQL dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal
    Eq,
    /// Greater than or equal
    Ge,
    /// Less than or equal
    Le,
}

impl Operator {
    /// RQL function name
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "eq",
            Operator::Ge => "ge",
            Operator::Le => "le",
        }
    }
}

/// A dotted field path such as `asset.product.id`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field(String);

/// Start a comparison on a field path
///
/// ```
/// use margin_report::rql::field;
///
/// let filter = field("type").eq("purchase") & field("status").eq("approved");
/// assert_eq!(filter.to_rql(), "and(eq(type,purchase),eq(status,approved))");
/// ```
pub fn field(path: impl Into<String>) -> Field {
    Field(path.into())
}

impl Field {
    /// The dotted path
    pub fn path(&self) -> &str {
        &self.0
    }

    pub fn eq(self, value: impl Into<String>) -> Filter {
        self.compare(Operator::Eq, value)
    }

    pub fn ge(self, value: impl Into<String>) -> Filter {
        self.compare(Operator::Ge, value)
    }

    pub fn le(self, value: impl Into<String>) -> Filter {
        self.compare(Operator::Le, value)
    }

    fn compare(self, op: Operator, value: impl Into<String>) -> Filter {
        Filter::Compare {
            op,
            field: self,
            value: value.into(),
        }
    }
}

/// Boolean predicate over record fields
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    /// Matches everything; the identity for `&`
    #[default]
    All,

    /// Single field comparison
    Compare {
        op: Operator,
        field: Field,
        value: String,
    },

    /// Conjunction of two or more clauses, never nested
    And(Vec<Filter>),
}

impl Filter {
    /// Filter that matches every record
    pub fn all() -> Self {
        Filter::All
    }

    /// True when the filter places no constraint
    pub fn is_all(&self) -> bool {
        matches!(self, Filter::All)
    }

    /// Top-level clauses of the conjunction
    pub fn clauses(&self) -> &[Filter] {
        match self {
            Filter::All => &[],
            Filter::And(clauses) => clauses,
            single => std::slice::from_ref(single),
        }
    }

    /// Serialize to RQL
    ///
    /// [`Filter::All`] serializes to an empty string.
    pub fn to_rql(&self) -> String {
        match self {
            Filter::All => String::new(),
            Filter::Compare { op, field, value } => {
                format!("{}({},{})", op.as_str(), field.path(), escape_value(value))
            }
            Filter::And(clauses) => {
                let inner: Vec<String> = clauses.iter().map(Filter::to_rql).collect();
                format!("and({})", inner.join(","))
            }
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rql())
    }
}

impl BitAnd for Filter {
    type Output = Filter;

    fn bitand(self, rhs: Filter) -> Filter {
        match (self, rhs) {
            (Filter::All, other) | (other, Filter::All) => other,
            (Filter::And(mut left), Filter::And(right)) => {
                left.extend(right);
                Filter::And(left)
            }
            (Filter::And(mut left), single) => {
                left.push(single);
                Filter::And(left)
            }
            (single, Filter::And(right)) => {
                let mut clauses = Vec::with_capacity(right.len() + 1);
                clauses.push(single);
                clauses.extend(right);
                Filter::And(clauses)
            }
            (left, right) => Filter::And(vec![left, right]),
        }
    }
}

impl BitAndAssign for Filter {
    fn bitand_assign(&mut self, rhs: Filter) {
        let current = std::mem::take(self);
        *self = current & rhs;
    }
}

/// Characters that are RQL or query-string syntax inside a value
const RQL_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'(')
    .add(b')')
    .add(b'+')
    .add(b',')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'|');

fn escape_value(value: &str) -> String {
    utf8_percent_encode(value, RQL_VALUE).to_string()
}
