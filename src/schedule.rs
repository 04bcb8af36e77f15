use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::ScheduleError;

/// The five positions of a schedule expression, in field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
}

impl Field {
    /// Inclusive bounds of the field's value domain.
    fn bounds(self) -> (u32, u32) {
        match self {
            Field::Minute => (0, 59),
            Field::Hour => (0, 23),
            Field::DayOfMonth => (1, 31),
            Field::Month => (1, 12),
            Field::DayOfWeek => (0, 6),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Field::Minute => "minute",
            Field::Hour => "hour",
            Field::DayOfMonth => "day-of-month",
            Field::Month => "month",
            Field::DayOfWeek => "day-of-week",
        }
    }

    /// Unit noun used in descriptions.
    pub fn unit(self) -> &'static str {
        match self {
            Field::Minute => "minute",
            Field::Hour => "hour",
            Field::DayOfMonth | Field::DayOfWeek => "day",
            Field::Month => "month",
        }
    }

    /// Resolve a three-letter month or weekday name, case-insensitive.
    fn alias(self, token: &str) -> Option<u32> {
        let names: &[&str] = match self {
            Field::Month => &[
                "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov",
                "dec",
            ],
            Field::DayOfWeek => &["sun", "mon", "tue", "wed", "thu", "fri", "sat"],
            _ => return None,
        };
        let lower = token.to_ascii_lowercase();
        let index = names.iter().position(|name| *name == lower)?;
        Some(match self {
            Field::Month => index as u32 + 1,
            _ => index as u32,
        })
    }
}

/// Allowed values for one field. A wildcard is kept as an explicit marker
/// instead of eagerly enumerating the whole domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSet {
    Any,
    Values(BTreeSet<u32>),
}

impl FieldSet {
    pub fn contains(&self, value: u32) -> bool {
        match self {
            FieldSet::Any => true,
            FieldSet::Values(values) => values.contains(&value),
        }
    }
}

/// One parsed field together with the token it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    field: Field,
    token: String,
    set: FieldSet,
    star: bool,
}

impl FieldSpec {
    pub fn field(&self) -> Field {
        self.field
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn matches(&self, value: u32) -> bool {
        self.set.contains(value)
    }

    /// True for a literal `*` token. Used by the describer, which keys off
    /// the text as written.
    pub fn is_wildcard(&self) -> bool {
        self.token == "*"
    }

    /// True when the field places no restriction for the day-matching rule:
    /// any `*`-based term (`*`, `*/n`) counts.
    pub fn is_unrestricted(&self) -> bool {
        self.star
    }
}

/// An immutable, parsed five-field schedule expression.
///
/// Equality compares the parsed field sets and the original text, so
/// parsing the same string twice yields equal values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleExpression {
    text: String,
    minute: FieldSpec,
    hour: FieldSpec,
    day_of_month: FieldSpec,
    month: FieldSpec,
    day_of_week: FieldSpec,
}

impl ScheduleExpression {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn minute(&self) -> &FieldSpec {
        &self.minute
    }

    pub fn hour(&self) -> &FieldSpec {
        &self.hour
    }

    pub fn day_of_month(&self) -> &FieldSpec {
        &self.day_of_month
    }

    pub fn month(&self) -> &FieldSpec {
        &self.month
    }

    pub fn day_of_week(&self) -> &FieldSpec {
        &self.day_of_week
    }

    /// All five fields in field order.
    pub fn fields(&self) -> [&FieldSpec; 5] {
        [
            &self.minute,
            &self.hour,
            &self.day_of_month,
            &self.month,
            &self.day_of_week,
        ]
    }
}

impl fmt::Display for ScheduleExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for ScheduleExpression {
    type Err = ScheduleError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        if tokens.len() != 5 {
            return Err(malformed(
                text,
                format!("expected 5 fields, got {}", tokens.len()),
            ));
        }

        Ok(Self {
            text: text.trim().to_string(),
            minute: parse_field(Field::Minute, tokens[0]).map_err(|r| malformed(text, r))?,
            hour: parse_field(Field::Hour, tokens[1]).map_err(|r| malformed(text, r))?,
            day_of_month: parse_field(Field::DayOfMonth, tokens[2])
                .map_err(|r| malformed(text, r))?,
            month: parse_field(Field::Month, tokens[3]).map_err(|r| malformed(text, r))?,
            day_of_week: parse_field(Field::DayOfWeek, tokens[4])
                .map_err(|r| malformed(text, r))?,
        })
    }
}

fn malformed(expression: &str, reason: String) -> ScheduleError {
    ScheduleError::MalformedExpression {
        expression: expression.trim().to_string(),
        reason,
    }
}

/// Parse one field token: `*`, single values, ranges, lists, steps, and
/// three-letter month/weekday names, in any list combination.
fn parse_field(field: Field, token: &str) -> Result<FieldSpec, String> {
    if token == "*" {
        return Ok(FieldSpec {
            field,
            token: token.to_string(),
            set: FieldSet::Any,
            star: true,
        });
    }

    let (low, high) = field.bounds();
    let mut values = BTreeSet::new();
    let mut star = false;

    for part in token.split(',') {
        if part.is_empty() {
            return Err(format!("empty list item in {} field '{}'", field.name(), token));
        }

        let (base, step_text) = match part.split_once('/') {
            Some((base, step)) => (base, Some(step)),
            None => (part, None),
        };
        let step = match step_text {
            Some(step) => {
                let step: u32 = step
                    .parse()
                    .map_err(|_| format!("non-numeric step '{}' in {} field", step, field.name()))?;
                if step == 0 {
                    return Err(format!("step of zero in {} field", field.name()));
                }
                step
            }
            None => 1,
        };

        let (start, end) = if base == "*" {
            star = true;
            (low, high)
        } else if let Some((from, to)) = base.split_once('-') {
            let from = parse_value(field, from)?;
            let to = parse_value(field, to)?;
            if from > to {
                return Err(format!("descending range '{}' in {} field", base, field.name()));
            }
            (from, to)
        } else {
            let value = parse_value(field, base)?;
            // "n/step" runs from n to the top of the domain.
            if step_text.is_some() {
                (value, high)
            } else {
                (value, value)
            }
        };

        if start < low || end > high {
            return Err(format!(
                "{} value out of range {}-{} in '{}'",
                field.name(),
                low,
                high,
                part
            ));
        }

        let mut value = start;
        while value <= end {
            values.insert(value);
            value += step;
        }
    }

    Ok(FieldSpec {
        field,
        token: token.to_string(),
        set: FieldSet::Values(values),
        star,
    })
}

fn parse_value(field: Field, text: &str) -> Result<u32, String> {
    if let Some(value) = field.alias(text) {
        return Ok(value);
    }
    text.parse()
        .map_err(|_| format!("invalid {} value '{}'", field.name(), text))
}
