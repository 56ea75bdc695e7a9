//! Condition trees for WHERE and HAVING.
//!
//! ```rust
//! use busbar_sf_soql::Condition;
//!
//! let clause = Condition::and([
//!     Condition::eq("Name", "Acme"),
//!     Condition::or([
//!         Condition::gt("AnnualRevenue", 1_000_000),
//!         Condition::in_list("Industry", ["Energy", "Utilities"]),
//!     ]),
//! ]);
//!
//! assert_eq!(
//!     clause.render().unwrap(),
//!     "Name = 'Acme' AND (AnnualRevenue > 1000000 OR Industry IN ('Energy', 'Utilities'))"
//! );
//! ```

use std::fmt;

use crate::error::{Error, ErrorKind, Result};
use crate::field::FieldRef;
use crate::literal::Literal;
use crate::query::{compose_query, SoqlQuery};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Like,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::Like => "LIKE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOperator {
    In,
    NotIn,
    /// Multi-select picklist contains any of the values.
    Includes,
    /// Multi-select picklist contains none of the values.
    Excludes,
}

impl ListOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListOperator::In => "IN",
            ListOperator::NotIn => "NOT IN",
            ListOperator::Includes => "INCLUDES",
            ListOperator::Excludes => "EXCLUDES",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    And,
    Or,
}

impl LogicalOperator {
    fn separator(&self) -> &'static str {
        match self {
            LogicalOperator::And => " AND ",
            LogicalOperator::Or => " OR ",
        }
    }
}

/// Right-hand side of a list operator.
#[derive(Debug, Clone, PartialEq)]
pub enum ListOperand {
    Values(Vec<Literal>),
    /// Semi-join: `Id IN (SELECT AccountId FROM Contact)`.
    Subquery(Box<SoqlQuery>),
}

/// A node in a condition tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Comparison {
        field: FieldRef,
        op: Operator,
        value: Literal,
    },
    Membership {
        field: FieldRef,
        op: ListOperator,
        operand: ListOperand,
    },
    Group {
        op: LogicalOperator,
        children: Vec<Condition>,
        negated: bool,
    },
}

impl Condition {
    pub fn compare(field: impl Into<FieldRef>, op: Operator, value: impl Into<Literal>) -> Self {
        Condition::Comparison {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    pub fn eq(field: impl Into<FieldRef>, value: impl Into<Literal>) -> Self {
        Self::compare(field, Operator::Eq, value)
    }

    pub fn ne(field: impl Into<FieldRef>, value: impl Into<Literal>) -> Self {
        Self::compare(field, Operator::Ne, value)
    }

    pub fn lt(field: impl Into<FieldRef>, value: impl Into<Literal>) -> Self {
        Self::compare(field, Operator::Lt, value)
    }

    pub fn le(field: impl Into<FieldRef>, value: impl Into<Literal>) -> Self {
        Self::compare(field, Operator::Le, value)
    }

    pub fn gt(field: impl Into<FieldRef>, value: impl Into<Literal>) -> Self {
        Self::compare(field, Operator::Gt, value)
    }

    pub fn ge(field: impl Into<FieldRef>, value: impl Into<Literal>) -> Self {
        Self::compare(field, Operator::Ge, value)
    }

    /// `LIKE` takes a string pattern; the pattern's wildcards are passed through.
    /// Use [`escape_like`](busbar_sf_client::security::soql::escape_like) on
    /// user input before adding your own `%`.
    pub fn like(field: impl Into<FieldRef>, pattern: impl Into<Literal>) -> Self {
        Self::compare(field, Operator::Like, pattern)
    }

    pub fn membership<I, V>(field: impl Into<FieldRef>, op: ListOperator, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Literal>,
    {
        Condition::Membership {
            field: field.into(),
            op,
            operand: ListOperand::Values(values.into_iter().map(Into::into).collect()),
        }
    }

    pub fn in_list<I, V>(field: impl Into<FieldRef>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Literal>,
    {
        Self::membership(field, ListOperator::In, values)
    }

    pub fn not_in<I, V>(field: impl Into<FieldRef>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Literal>,
    {
        Self::membership(field, ListOperator::NotIn, values)
    }

    pub fn includes<I, V>(field: impl Into<FieldRef>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Literal>,
    {
        Self::membership(field, ListOperator::Includes, values)
    }

    pub fn excludes<I, V>(field: impl Into<FieldRef>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Literal>,
    {
        Self::membership(field, ListOperator::Excludes, values)
    }

    /// `field IN (SELECT ...)`.
    pub fn in_query(field: impl Into<FieldRef>, query: SoqlQuery) -> Self {
        Condition::Membership {
            field: field.into(),
            op: ListOperator::In,
            operand: ListOperand::Subquery(Box::new(query)),
        }
    }

    /// `field NOT IN (SELECT ...)`.
    pub fn not_in_query(field: impl Into<FieldRef>, query: SoqlQuery) -> Self {
        Condition::Membership {
            field: field.into(),
            op: ListOperator::NotIn,
            operand: ListOperand::Subquery(Box::new(query)),
        }
    }

    pub fn and(children: impl IntoIterator<Item = Condition>) -> Self {
        Condition::Group {
            op: LogicalOperator::And,
            children: children.into_iter().collect(),
            negated: false,
        }
    }

    pub fn or(children: impl IntoIterator<Item = Condition>) -> Self {
        Condition::Group {
            op: LogicalOperator::Or,
            children: children.into_iter().collect(),
            negated: false,
        }
    }

    /// Negate this condition.
    ///
    /// A group flips its negation flag. A leaf is wrapped in a one-child
    /// negated group, so it renders as `NOT (leaf)`.
    pub fn negate(self) -> Self {
        match self {
            Condition::Group {
                op,
                children,
                negated,
            } => Condition::Group {
                op,
                children,
                negated: !negated,
            },
            leaf => Condition::Group {
                op: LogicalOperator::And,
                children: vec![leaf],
                negated: true,
            },
        }
    }

    /// Render to SOQL condition text, without a `WHERE`/`HAVING` keyword.
    pub fn render(&self) -> Result<String> {
        match self {
            Condition::Comparison { field, op, value } => {
                if *op == Operator::Like && !value.is_string() {
                    return Err(Error::new(ErrorKind::LiteralType(format!(
                        "LIKE on {} needs a string pattern",
                        field.render()
                    ))));
                }
                Ok(format!("{} {} {}", field.render(), op.as_str(), value.render()?))
            }
            Condition::Membership { field, op, operand } => {
                let list = match operand {
                    ListOperand::Values(values) => {
                        if values.is_empty() {
                            return Err(Error::new(ErrorKind::EmptyListOperand {
                                field: field.render(),
                            }));
                        }
                        values
                            .iter()
                            .map(Literal::render)
                            .collect::<Result<Vec<_>>>()?
                            .join(", ")
                    }
                    ListOperand::Subquery(query) => compose_query(query)?,
                };
                Ok(format!("{} {} ({})", field.render(), op.as_str(), list))
            }
            Condition::Group {
                op,
                children,
                negated,
            } => {
                if children.is_empty() {
                    return Err(Error::new(ErrorKind::EmptyConditionGroup));
                }
                let parts = children
                    .iter()
                    .map(|child| {
                        let rendered = child.render()?;
                        Ok(match child {
                            Condition::Group { .. } => format!("({rendered})"),
                            _ => rendered,
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                let joined = parts.join(op.separator());
                Ok(if *negated {
                    format!("NOT ({joined})")
                } else {
                    joined
                })
            }
        }
    }
}

impl std::ops::Not for Condition {
    type Output = Condition;

    fn not(self) -> Condition {
        self.negate()
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.render() {
            Ok(rendered) => f.write_str(&rendered),
            Err(err) => write!(f, "<invalid condition: {err}>"),
        }
    }
}
