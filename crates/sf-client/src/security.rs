//! Escaping and validation helpers for values that end up in SOQL text or URLs.
//!
//! The query builder routes every literal through [`soql::escape_string`];
//! callers composing SOQL by hand should do the same.
//!
//! ```rust
//! use busbar_sf_client::security::soql;
//!
//! let name = soql::escape_string("O'Brien");
//! let query = format!("SELECT Id FROM Contact WHERE LastName = '{}'", name);
//! assert_eq!(query, "SELECT Id FROM Contact WHERE LastName = 'O\\'Brien'");
//! ```

/// SOQL literal escaping and identifier checks.
pub mod soql {
    /// Escape a string for use inside a single-quoted SOQL literal.
    ///
    /// Quotes, backslashes and the control characters SOQL defines escape
    /// sequences for (`\n \r \t \b \f`) are escaped. Everything else is kept.
    ///
    /// ```rust
    /// use busbar_sf_client::security::soql;
    ///
    /// assert_eq!(soql::escape_string("' OR Name != '"), "\\' OR Name != \\'");
    /// ```
    #[must_use]
    pub fn escape_string(value: &str) -> String {
        let mut escaped = String::with_capacity(value.len() + 8);
        for ch in value.chars() {
            match ch {
                '\'' => escaped.push_str("\\'"),
                '"' => escaped.push_str("\\\""),
                '\\' => escaped.push_str("\\\\"),
                '\n' => escaped.push_str("\\n"),
                '\r' => escaped.push_str("\\r"),
                '\t' => escaped.push_str("\\t"),
                '\u{8}' => escaped.push_str("\\b"),
                '\u{c}' => escaped.push_str("\\f"),
                _ => escaped.push(ch),
            }
        }
        escaped
    }

    /// Escape a value that should match literally inside a LIKE pattern.
    ///
    /// Applies [`escape_string`] and additionally escapes the `%` and `_`
    /// wildcards, so the caller can add their own:
    ///
    /// ```rust
    /// use busbar_sf_client::security::soql;
    ///
    /// let pattern = format!("{}%", soql::escape_like("100%_done"));
    /// assert_eq!(pattern, "100\\%\\_done%");
    /// ```
    #[must_use]
    pub fn escape_like(value: &str) -> String {
        let mut escaped = String::with_capacity(value.len() + 8);
        for ch in escape_string(value).chars() {
            match ch {
                '%' => escaped.push_str("\\%"),
                '_' => escaped.push_str("\\_"),
                _ => escaped.push(ch),
            }
        }
        escaped
    }

    /// True if `name` is a plain API identifier: an ASCII letter followed by
    /// letters, digits or underscores (`Name`, `Region__c`, `Owner__r`).
    #[must_use]
    pub fn is_safe_field_name(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() => {}
            _ => return false,
        }
        chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
    }

    /// True if `path` is a dot-separated chain of safe identifiers
    /// (`Account.Owner.Name`).
    #[must_use]
    pub fn is_safe_field_path(path: &str) -> bool {
        path.split('.').all(is_safe_field_name)
    }

    /// True if `name` is a safe SObject API name.
    ///
    /// Same rules as field names; namespaced custom objects
    /// (`ns__Invoice__c`) pass.
    #[must_use]
    pub fn is_safe_sobject_name(name: &str) -> bool {
        is_safe_field_name(name)
    }
}

/// URL helpers.
pub mod url {
    /// Percent-encode a value for use as a single URL path segment or
    /// query parameter.
    #[must_use]
    pub fn encode_param(value: &str) -> String {
        urlencoding::encode(value).into_owned()
    }

    /// True if `id` looks like a Salesforce record id (15 or 18 alphanumeric characters).
    #[must_use]
    pub fn is_valid_salesforce_id(id: &str) -> bool {
        matches!(id.len(), 15 | 18) && id.chars().all(|c| c.is_ascii_alphanumeric())
    }
}
