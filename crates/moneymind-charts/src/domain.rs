//! Padded axis domains for chart rendering.
//!
//! A domain is computed from the raw minimum and maximum of one numeric
//! field, widened by a margin proportional to the data range and rounded
//! outward to whole numbers. Percentage axes are additionally clamped so
//! that small or all-positive data still gets a readable scale.

use crate::traits::FieldSource;
use moneymind_common::{MoneyMindError, Result};
use moneymind_config::{DomainStyle, DEFAULT_PADDING_RATIO};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// Domain returned for an empty record set.
pub const EMPTY_DOMAIN: AxisDomain = AxisDomain { min: 0, max: 100 };

/// Smallest upper bound of an all-positive percentage axis.
pub const MIN_POSITIVE_CEILING: i64 = 10;

/// Largest lower bound of a percentage axis that crosses zero.
pub const MAX_NEGATIVE_FLOOR: i64 = -5;

/// Smallest upper bound of a percentage axis that crosses zero.
pub const MIN_NEGATIVE_CEILING: i64 = 5;

/// `i64::MIN` as a float, exact.
#[allow(clippy::cast_precision_loss)]
const LOWEST_BOUND: f64 = i64::MIN as f64;

/// `2^63`, the first float above `i64::MAX`.
#[allow(clippy::cast_precision_loss)]
const BOUND_LIMIT: f64 = i64::MAX as f64;

/// How a numeric value is read from a record.
pub enum Accessor<'a, R> {
    /// A named field, read through [`FieldSource`].
    Key(&'a str),
    /// A value computed from the whole record.
    Derived(Box<dyn Fn(&R) -> f64 + Send + Sync + 'a>),
}

impl<'a, R> Accessor<'a, R> {
    /// Reads the named field.
    #[must_use]
    pub const fn key(name: &'a str) -> Self {
        Self::Key(name)
    }

    /// Reads the value computed by `f`.
    pub fn derived<F>(f: F) -> Self
    where
        F: Fn(&R) -> f64 + Send + Sync + 'a,
    {
        Self::Derived(Box::new(f))
    }

    /// Field name used in error reports.
    #[must_use]
    pub const fn field_name(&self) -> &str {
        match self {
            Self::Key(name) => *name,
            Self::Derived(_) => "derived",
        }
    }
}

impl<R: FieldSource> Accessor<'_, R> {
    /// Reads the value of `record`, the `index`-th of its collection.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the record lacks the named field or the
    /// value is not finite.
    pub fn read(&self, record: &R, index: usize) -> Result<f64> {
        let value = match self {
            Self::Key(name) => record.field(name).ok_or_else(|| {
                MoneyMindError::validation_field(
                    format!("record {index} has no field '{name}'"),
                    *name,
                )
            })?,
            Self::Derived(f) => f(record),
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(MoneyMindError::validation_field(
                format!("record {index} yields non-finite value {value}"),
                self.field_name(),
            ))
        }
    }
}

impl<R> fmt::Debug for Accessor<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(name) => f.debug_tuple("Key").field(name).finish(),
            Self::Derived(_) => f.write_str("Derived(..)"),
        }
    }
}

/// Options of a domain computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomainOptions {
    /// Clamp the result as a percentage axis.
    pub is_percentage: bool,
    /// Fraction of the data range added on both sides.
    pub padding_ratio: f64,
}

impl DomainOptions {
    /// Percentage axis with the default padding.
    #[must_use]
    pub const fn percentage() -> Self {
        Self {
            is_percentage: true,
            padding_ratio: DEFAULT_PADDING_RATIO,
        }
    }

    /// Unclamped axis with the default padding.
    #[must_use]
    pub const fn absolute() -> Self {
        Self {
            is_percentage: false,
            padding_ratio: DEFAULT_PADDING_RATIO,
        }
    }

    /// Options with the configured padding ratio.
    #[must_use]
    pub const fn from_style(style: &DomainStyle, is_percentage: bool) -> Self {
        Self {
            is_percentage,
            padding_ratio: style.padding_ratio,
        }
    }

    /// Replaces the padding ratio.
    #[must_use]
    pub const fn with_padding_ratio(mut self, padding_ratio: f64) -> Self {
        self.padding_ratio = padding_ratio;
        self
    }
}

impl Default for DomainOptions {
    fn default() -> Self {
        Self::percentage()
    }
}

/// Closed integer range an axis is scaled to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisDomain {
    /// Lower bound.
    pub min: i64,
    /// Upper bound.
    pub max: i64,
}

impl AxisDomain {
    /// Creates a domain.
    #[must_use]
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Distance between the bounds.
    #[must_use]
    pub const fn span(&self) -> u64 {
        self.max.abs_diff(self.min)
    }

    /// Whether `value` lies within the bounds.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn contains(&self, value: f64) -> bool {
        (self.min as f64) <= value && value <= (self.max as f64)
    }
}

impl fmt::Display for AxisDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

impl From<AxisDomain> for (i64, i64) {
    fn from(domain: AxisDomain) -> Self {
        (domain.min, domain.max)
    }
}

impl From<AxisDomain> for [i64; 2] {
    fn from(domain: AxisDomain) -> Self {
        [domain.min, domain.max]
    }
}

/// Computes padded axis domains.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RangeComputer {
    options: DomainOptions,
}

impl RangeComputer {
    /// Creates a computer with the given options.
    #[must_use]
    pub const fn new(options: DomainOptions) -> Self {
        Self { options }
    }

    /// Options in use.
    #[must_use]
    pub const fn options(&self) -> DomainOptions {
        self.options
    }

    /// Computes the domain of `accessor` over `records`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the padding ratio is negative or not
    /// finite, or if any record yields a missing or non-finite value.
    pub fn compute<R: FieldSource>(
        &self,
        records: &[R],
        accessor: &Accessor<'_, R>,
    ) -> Result<AxisDomain> {
        let ratio = self.options.padding_ratio;
        if !ratio.is_finite() || ratio < 0.0 {
            return Err(MoneyMindError::validation_field(
                format!("padding ratio {ratio} must be finite and non-negative"),
                "padding_ratio",
            ));
        }

        if records.is_empty() {
            return Ok(EMPTY_DOMAIN);
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for (index, record) in records.iter().enumerate() {
            let value = accessor.read(record, index)?;
            min = min.min(value);
            max = max.max(value);
        }

        let domain = self.pad(min, max).ok_or_else(|| {
            MoneyMindError::validation_field(
                format!("padded range of [{min}, {max}] does not fit an integer axis"),
                accessor.field_name(),
            )
        })?;
        trace!(
            records = records.len(),
            field = accessor.field_name(),
            raw_min = min,
            raw_max = max,
            %domain,
            "Computed axis domain"
        );
        Ok(domain)
    }

    /// Pads and clamps a finite raw range.
    ///
    /// Returns `None` when the padded bounds do not fit in `i64`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn pad(&self, min: f64, max: f64) -> Option<AxisDomain> {
        let margin = (max - min) * self.options.padding_ratio;
        let lower = (min - margin).floor();
        let upper = (max + margin).ceil();
        // also rejects NaN from an overflowing margin
        if !(lower >= LOWEST_BOUND && upper < BOUND_LIMIT) {
            return None;
        }
        let mut lower = lower as i64;
        let mut upper = upper as i64;

        if self.options.is_percentage {
            if lower >= 0 {
                lower = 0;
                upper = upper.max(MIN_POSITIVE_CEILING);
            } else {
                lower = lower.min(MAX_NEGATIVE_FLOOR);
                upper = upper.max(MIN_NEGATIVE_CEILING);
            }
        }

        Some(AxisDomain::new(lower, upper))
    }
}

/// Computes the domain of `accessor` over `records` with the default padding.
///
/// # Errors
///
/// Returns a validation error if any record yields a missing or non-finite
/// value.
pub fn compute_axis_domain<R: FieldSource>(
    records: &[R],
    accessor: &Accessor<'_, R>,
    is_percentage: bool,
) -> Result<AxisDomain> {
    let options = DomainOptions {
        is_percentage,
        ..DomainOptions::default()
    };
    RangeComputer::new(options).compute(records, accessor)
}
