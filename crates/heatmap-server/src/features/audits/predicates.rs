//! Typed filter predicates for audit queries
//!
//! Optional query parameters are composed into an ordered list of tagged
//! predicate values, and a single trusted function renders them into a
//! parameterized `WHERE` clause. Handlers never assemble filter SQL from
//! strings themselves.

use chrono::NaiveDate;
use sqlx::{QueryBuilder, Sqlite};

use super::types::AuditType;

/// One filter condition over stored audits
///
/// Predicates are combined conjunctively; there is no OR and no negation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditPredicate {
    /// `audit_type` equals the given type
    TypeEquals(AuditType),
    /// The calendar year component of `audit_date` equals the given year
    YearEquals(i32),
    /// `audit_date` is on or after the given date
    DateOnOrAfter(NaiveDate),
    /// `audit_date` is on or before the given date
    DateOnOrBefore(NaiveDate),
    /// `audit_date` equals the given date exactly
    DateEquals(NaiveDate),
}

/// Optional filter parameters accepted by the list operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AuditFilter {
    pub audit_type: Option<AuditType>,
    pub year: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Result ordering for read-many operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditOrdering {
    /// Newest audit date first; the read-many default
    DateDesc,
    /// Audit type, then creation time ascending; used by the by-date lookup
    TypeThenCreated,
}

impl AuditOrdering {
    pub fn as_sql(&self) -> &'static str {
        match self {
            AuditOrdering::DateDesc => " ORDER BY audit_date DESC",
            AuditOrdering::TypeThenCreated => " ORDER BY audit_type, created_at",
        }
    }
}

/// Compose filter parameters into an ordered predicate list.
///
/// Deterministic: the same filter always yields the same list in the same
/// order (type, year, start, end). Absent parameters contribute nothing.
/// Overlapping constraints (e.g. `year` plus an out-of-year `start_date`)
/// are deliberately not deduplicated; the narrower, possibly empty, result
/// is correct.
pub fn compose(filter: &AuditFilter) -> Vec<AuditPredicate> {
    let mut predicates = Vec::new();

    if let Some(audit_type) = filter.audit_type {
        predicates.push(AuditPredicate::TypeEquals(audit_type));
    }
    if let Some(year) = filter.year {
        predicates.push(AuditPredicate::YearEquals(year));
    }
    if let Some(start) = filter.start_date {
        predicates.push(AuditPredicate::DateOnOrAfter(start));
    }
    if let Some(end) = filter.end_date {
        predicates.push(AuditPredicate::DateOnOrBefore(end));
    }

    predicates
}

/// Render predicates into a `WHERE` clause on the given builder.
///
/// This is the only place predicates become SQL; all values go through
/// bind parameters.
pub fn push_where(qb: &mut QueryBuilder<'_, Sqlite>, predicates: &[AuditPredicate]) {
    if predicates.is_empty() {
        return;
    }

    qb.push(" WHERE ");
    let mut clause = qb.separated(" AND ");
    for predicate in predicates {
        match *predicate {
            AuditPredicate::TypeEquals(audit_type) => {
                clause.push("audit_type = ");
                clause.push_bind_unseparated(audit_type.as_str());
            },
            AuditPredicate::YearEquals(year) => {
                clause.push("CAST(strftime('%Y', audit_date) AS INTEGER) = ");
                clause.push_bind_unseparated(year);
            },
            AuditPredicate::DateOnOrAfter(date) => {
                clause.push("audit_date >= ");
                clause.push_bind_unseparated(date);
            },
            AuditPredicate::DateOnOrBefore(date) => {
                clause.push("audit_date <= ");
                clause.push_bind_unseparated(date);
            },
            AuditPredicate::DateEquals(date) => {
                clause.push("audit_date = ");
                clause.push_bind_unseparated(date);
            },
        }
    }
}
