use crate::schedule::{Field, FieldSpec, ScheduleExpression};

/// Render a schedule as a short English sentence, one clause per
/// constrained field, in field order.
pub fn describe(expression: &ScheduleExpression) -> String {
    let clauses: Vec<String> = expression
        .fields()
        .iter()
        .filter(|spec| !spec.is_wildcard())
        .map(|spec| clause(spec))
        .collect();

    if clauses.is_empty() {
        return "It runs every minute".to_string();
    }
    format!("It runs {}", clauses.join(" "))
}

fn clause(spec: &FieldSpec) -> String {
    let value = display_value(spec);
    let unit = spec.field().unit();
    let suffix = if value == "1" { "" } else { "s" };
    match spec.field() {
        Field::Minute => format!("every {value} {unit}{suffix}"),
        Field::Hour => format!("past every {value} {unit}{suffix}"),
        Field::DayOfMonth | Field::DayOfWeek => format!("on every {value} {unit}{suffix}"),
        Field::Month => format!("of every {value} {unit}{suffix}"),
    }
}

/// A step term reads as its step value: `*/15` describes as "15".
fn display_value(spec: &FieldSpec) -> &str {
    spec.token().strip_prefix("*/").unwrap_or(spec.token())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn describe_text(text: &str) -> String {
        describe(&text.parse().unwrap())
    }

    #[test]
    fn test_step_minutes_pluralized() {
        assert_eq!(describe_text("*/15 * * * *"), "It runs every 15 minutes");
    }

    #[test]
    fn test_unit_step_is_singular() {
        assert_eq!(describe_text("*/1 * * * *"), "It runs every 1 minute");
    }

    #[test]
    fn test_minute_value_only() {
        let sentence = describe_text("0 * * * *");
        assert_eq!(sentence, "It runs every 0 minutes");
        assert!(!sentence.contains("hour"));
        assert!(!sentence.contains("day"));
        assert!(!sentence.contains("month"));
    }

    #[test]
    fn test_all_wildcards() {
        assert_eq!(describe_text("* * * * *"), "It runs every minute");
    }

    #[test]
    fn test_minute_and_hour_clauses() {
        assert_eq!(
            describe_text("*/15 3 * * *"),
            "It runs every 15 minutes past every 3 hours"
        );
    }

    #[test]
    fn test_all_fields_constrained() {
        assert_eq!(
            describe_text("0 0 1 1 0"),
            "It runs every 0 minutes past every 0 hours on every 1 day of every 1 month on every 0 days"
        );
    }

    #[test]
    fn test_range_tokens_pass_through() {
        assert_eq!(
            describe_text("0 9-17 * * *"),
            "It runs every 0 minutes past every 9-17 hours"
        );
    }

    #[test]
    fn test_weekday_clause_without_other_days() {
        assert_eq!(
            describe_text("30 * * * MON-FRI"),
            "It runs every 30 minutes on every MON-FRI days"
        );
    }
}
