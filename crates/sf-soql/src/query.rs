//! Query specifications and the composer that renders them.

use tracing::trace;

use crate::condition::Condition;
use crate::error::{Error, ErrorKind, Result};
use crate::field::FieldRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupByKind {
    Cube,
    Rollup,
}

/// `GROUP BY` with optional `CUBE`/`ROLLUP` and `HAVING`.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupBy {
    pub fields: Vec<FieldRef>,
    pub kind: Option<GroupByKind>,
    pub having: Option<Condition>,
}

impl GroupBy {
    pub fn new<I, F>(fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<FieldRef>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            kind: None,
            having: None,
        }
    }

    pub fn cube(mut self) -> Self {
        self.kind = Some(GroupByKind::Cube);
        self
    }

    pub fn rollup(mut self) -> Self {
        self.kind = Some(GroupByKind::Rollup);
        self
    }

    pub fn having(mut self, condition: Condition) -> Self {
        self.having = Some(condition);
        self
    }

    fn render(&self) -> Result<String> {
        if self.fields.is_empty() {
            return Err(Error::new(ErrorKind::EmptyGroupBy));
        }
        let fields: Vec<String> = self.fields.iter().map(FieldRef::render).collect();
        let fields = fields.join(", ");
        let mut rendered = match self.kind {
            Some(GroupByKind::Cube) => format!("CUBE({fields})"),
            Some(GroupByKind::Rollup) => format!("ROLLUP({fields})"),
            None => fields,
        };
        if let Some(having) = &self.having {
            rendered.push_str(" HAVING ");
            rendered.push_str(&having.render()?);
        }
        Ok(rendered)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NullsOrder {
    First,
    Last,
}

/// One `ORDER BY` term. Direction and null ordering are omitted when unset,
/// leaving the server default.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub field: FieldRef,
    pub direction: Option<SortDirection>,
    pub nulls: Option<NullsOrder>,
}

impl OrderBy {
    pub fn new(field: impl Into<FieldRef>) -> Self {
        Self {
            field: field.into(),
            direction: None,
            nulls: None,
        }
    }

    pub fn asc(field: impl Into<FieldRef>) -> Self {
        Self {
            direction: Some(SortDirection::Asc),
            ..Self::new(field)
        }
    }

    pub fn desc(field: impl Into<FieldRef>) -> Self {
        Self {
            direction: Some(SortDirection::Desc),
            ..Self::new(field)
        }
    }

    pub fn nulls_first(mut self) -> Self {
        self.nulls = Some(NullsOrder::First);
        self
    }

    pub fn nulls_last(mut self) -> Self {
        self.nulls = Some(NullsOrder::Last);
        self
    }

    fn render(&self) -> String {
        let mut rendered = self.field.render();
        match self.direction {
            Some(SortDirection::Asc) => rendered.push_str(" ASC"),
            Some(SortDirection::Desc) => rendered.push_str(" DESC"),
            None => {}
        }
        match self.nulls {
            Some(NullsOrder::First) => rendered.push_str(" NULLS FIRST"),
            Some(NullsOrder::Last) => rendered.push_str(" NULLS LAST"),
            None => {}
        }
        rendered
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForClause {
    View,
    Update,
    Reference,
}

impl ForClause {
    pub fn as_str(&self) -> &'static str {
        match self {
            ForClause::View => "VIEW",
            ForClause::Update => "UPDATE",
            ForClause::Reference => "REFERENCE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateClause {
    Tracking,
    Viewstat,
}

impl UpdateClause {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateClause::Tracking => "TRACKING",
            UpdateClause::Viewstat => "VIEWSTAT",
        }
    }
}

/// Everything in a query except its `FROM` target.
///
/// This is what a build callback returns; `build_query_object` supplies the
/// target from the entity type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pub select: Vec<FieldRef>,
    pub where_clause: Option<Condition>,
    pub group_by: Option<GroupBy>,
    pub order_by: Vec<OrderBy>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub for_clause: Vec<ForClause>,
    pub update: Option<UpdateClause>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append fields to the select list.
    pub fn select<I, F>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<FieldRef>,
    {
        self.select.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Set the `WHERE` condition, replacing any previous one.
    pub fn filter(mut self, condition: Condition) -> Self {
        self.where_clause = Some(condition);
        self
    }

    pub fn group_by(mut self, group_by: GroupBy) -> Self {
        self.group_by = Some(group_by);
        self
    }

    /// Append an ordering term.
    pub fn order_by(mut self, order: OrderBy) -> Self {
        self.order_by.push(order);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn for_clause(mut self, clause: ForClause) -> Self {
        self.for_clause.push(clause);
        self
    }

    pub fn update(mut self, clause: UpdateClause) -> Self {
        self.update = Some(clause);
        self
    }
}

/// A complete query specification. Compose it with [`compose_query`].
#[derive(Debug, Clone, PartialEq)]
pub struct SoqlQuery {
    pub from: String,
    pub params: QueryParams,
}

impl SoqlQuery {
    pub fn new(from: impl Into<String>, params: QueryParams) -> Self {
        Self {
            from: from.into(),
            params,
        }
    }

    pub fn compose(&self) -> Result<String> {
        compose_query(self)
    }
}

/// Render a query specification to SOQL text.
///
/// Clauses are always emitted in the order SELECT, FROM, WHERE, GROUP BY,
/// HAVING, ORDER BY, LIMIT, OFFSET, FOR, UPDATE. Select fields are
/// de-duplicated by their rendered text, keeping the first occurrence.
pub fn compose_query(query: &SoqlQuery) -> Result<String> {
    let params = &query.params;

    let mut select: Vec<String> = Vec::with_capacity(params.select.len());
    for field in &params.select {
        let rendered = field.render_select();
        if !select.contains(&rendered) {
            select.push(rendered);
        }
    }
    if select.is_empty() {
        return Err(Error::new(ErrorKind::MissingSelectFields));
    }

    let from = query.from.trim();
    if from.is_empty() {
        return Err(Error::new(ErrorKind::MissingFromTarget));
    }

    let mut soql = format!("SELECT {} FROM {}", select.join(", "), from);

    if let Some(condition) = &params.where_clause {
        soql.push_str(" WHERE ");
        soql.push_str(&condition.render()?);
    }

    if let Some(group_by) = &params.group_by {
        soql.push_str(" GROUP BY ");
        soql.push_str(&group_by.render()?);
    }

    if !params.order_by.is_empty() {
        let orderings: Vec<String> = params.order_by.iter().map(OrderBy::render).collect();
        soql.push_str(" ORDER BY ");
        soql.push_str(&orderings.join(", "));
    }

    if let Some(limit) = params.limit {
        soql.push_str(&format!(" LIMIT {limit}"));
    }

    if let Some(offset) = params.offset {
        soql.push_str(&format!(" OFFSET {offset}"));
    }

    if !params.for_clause.is_empty() {
        let mut clauses: Vec<&str> = Vec::with_capacity(params.for_clause.len());
        for clause in &params.for_clause {
            if !clauses.contains(&clause.as_str()) {
                clauses.push(clause.as_str());
            }
        }
        soql.push_str(" FOR ");
        soql.push_str(&clauses.join(" "));
    }

    if let Some(update) = params.update {
        soql.push_str(" UPDATE ");
        soql.push_str(update.as_str());
    }

    trace!(%soql, "composed query");
    Ok(soql)
}
