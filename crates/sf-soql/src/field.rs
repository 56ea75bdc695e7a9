//! Field references: what the resolver hands out and the composer renders.

use std::fmt;

/// A renderable field in select, condition, group or order position.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldRef {
    /// A field on the queried entity, e.g. `Name`.
    Plain(String),
    /// A field reached through parent relationships, e.g. `Account.Owner.Name`.
    Relationship { path: Vec<String>, field: String },
    /// A function applied to other fields, e.g. `COUNT(Id)`.
    Function(FunctionField),
    /// A child-relationship subquery, already composed: `(SELECT ... FROM Contacts)`.
    /// Only meaningful in the select list.
    Subquery(String),
}

impl FieldRef {
    /// A field by wire name, without descriptor checks.
    pub fn plain(api_name: impl Into<String>) -> Self {
        FieldRef::Plain(api_name.into())
    }

    /// Render for WHERE, HAVING, GROUP BY, ORDER BY and function arguments.
    pub fn render(&self) -> String {
        match self {
            FieldRef::Plain(name) => name.clone(),
            FieldRef::Relationship { path, field } => {
                let mut rendered = path.join(".");
                rendered.push('.');
                rendered.push_str(field);
                rendered
            }
            FieldRef::Function(function) => function.render(),
            FieldRef::Subquery(query) => query.clone(),
        }
    }

    /// Render for the select list, where function aliases apply.
    pub fn render_select(&self) -> String {
        match self {
            FieldRef::Function(function) => match &function.alias {
                Some(alias) => format!("{} {}", function.render(), alias),
                None => function.render(),
            },
            other => other.render(),
        }
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for FieldRef {
    fn from(api_name: &str) -> Self {
        FieldRef::plain(api_name)
    }
}

impl From<String> for FieldRef {
    fn from(api_name: String) -> Self {
        FieldRef::Plain(api_name)
    }
}

impl From<FunctionField> for FieldRef {
    fn from(function: FunctionField) -> Self {
        FieldRef::Function(function)
    }
}

/// SOQL functions: aggregates, date parts and the value converters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoqlFunction {
    Count,
    CountDistinct,
    Avg,
    Min,
    Max,
    Sum,
    Grouping,
    CalendarMonth,
    CalendarQuarter,
    CalendarYear,
    DayInMonth,
    DayInWeek,
    DayInYear,
    DayOnly,
    FiscalMonth,
    FiscalQuarter,
    FiscalYear,
    HourInDay,
    WeekInMonth,
    WeekInYear,
    ConvertTimezone,
    ConvertCurrency,
    Format,
    ToLabel,
}

impl SoqlFunction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Count => "COUNT",
            Self::CountDistinct => "COUNT_DISTINCT",
            Self::Avg => "AVG",
            Self::Min => "MIN",
            Self::Max => "MAX",
            Self::Sum => "SUM",
            Self::Grouping => "GROUPING",
            Self::CalendarMonth => "CALENDAR_MONTH",
            Self::CalendarQuarter => "CALENDAR_QUARTER",
            Self::CalendarYear => "CALENDAR_YEAR",
            Self::DayInMonth => "DAY_IN_MONTH",
            Self::DayInWeek => "DAY_IN_WEEK",
            Self::DayInYear => "DAY_IN_YEAR",
            Self::DayOnly => "DAY_ONLY",
            Self::FiscalMonth => "FISCAL_MONTH",
            Self::FiscalQuarter => "FISCAL_QUARTER",
            Self::FiscalYear => "FISCAL_YEAR",
            Self::HourInDay => "HOUR_IN_DAY",
            Self::WeekInMonth => "WEEK_IN_MONTH",
            Self::WeekInYear => "WEEK_IN_YEAR",
            Self::ConvertTimezone => "convertTimezone",
            Self::ConvertCurrency => "convertCurrency",
            Self::Format => "FORMAT",
            Self::ToLabel => "toLabel",
        }
    }

    pub fn is_aggregate(&self) -> bool {
        matches!(
            self,
            Self::Count
                | Self::CountDistinct
                | Self::Avg
                | Self::Min
                | Self::Max
                | Self::Sum
                | Self::Grouping
        )
    }
}

/// A function wrapped around zero or more field references.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionField {
    pub function: SoqlFunction,
    pub args: Vec<FieldRef>,
    pub alias: Option<String>,
}

impl FunctionField {
    pub fn new(function: SoqlFunction, args: Vec<FieldRef>) -> Self {
        Self {
            function,
            args,
            alias: None,
        }
    }

    /// `COUNT()`, the row-count form.
    pub fn count() -> Self {
        Self::new(SoqlFunction::Count, Vec::new())
    }

    /// Name the column in the select list. The alias is not used anywhere else.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Wrap this function in another, e.g. `convertCurrency` inside `SUM`.
    pub fn wrap(self, function: SoqlFunction) -> FunctionField {
        FunctionField::new(function, vec![FieldRef::Function(self)])
    }

    pub fn render(&self) -> String {
        let args: Vec<String> = self.args.iter().map(FieldRef::render).collect();
        format!("{}({})", self.function.name(), args.join(", "))
    }
}

impl fmt::Display for FunctionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
