use crate::domain::model::{ClassificationError, ParsedNumber};

/// Turns the raw `number` query value into an integer.
///
/// Accepts an optional single leading `-` followed by one or more ASCII
/// digits. Nothing is trimmed. Negative values are returned as-is; whether
/// they are admitted is decided by the classifier.
pub fn parse(raw: Option<&str>) -> Result<ParsedNumber, ClassificationError> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Err(ClassificationError::MissingInput),
    };

    let digits = raw.strip_prefix('-').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ClassificationError::NotANumber {
            input: raw.to_string(),
        });
    }

    // The shape is already checked, so the only remaining failure is overflow.
    let value = raw
        .parse::<i64>()
        .map_err(|_| ClassificationError::OutOfRange {
            input: raw.to_string(),
        })?;

    Ok(ParsedNumber {
        raw: raw.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_negative_integers() {
        assert_eq!(parse(Some("371")).unwrap().value, 371);
        assert_eq!(parse(Some("0")).unwrap().value, 0);
        assert_eq!(parse(Some("-5")).unwrap().value, -5);
        assert_eq!(parse(Some("-0")).unwrap().value, 0);

        let parsed = parse(Some("007")).unwrap();
        assert_eq!(parsed.value, 7);
        assert_eq!(parsed.raw, "007");
    }

    #[test]
    fn test_parse_missing_input() {
        assert_eq!(parse(None), Err(ClassificationError::MissingInput));
        assert_eq!(parse(Some("")), Err(ClassificationError::MissingInput));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        for raw in ["abc", "12a", "-", "--5", "+5", " 5", "5 ", "1.5", "1e3", "٣"] {
            assert_eq!(
                parse(Some(raw)),
                Err(ClassificationError::NotANumber {
                    input: raw.to_string()
                }),
                "input {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_parse_integer_bounds() {
        assert_eq!(parse(Some("9223372036854775807")).unwrap().value, i64::MAX);
        assert_eq!(parse(Some("-9223372036854775808")).unwrap().value, i64::MIN);
        assert_eq!(
            parse(Some("9223372036854775808")),
            Err(ClassificationError::OutOfRange {
                input: "9223372036854775808".to_string()
            })
        );
    }
}
