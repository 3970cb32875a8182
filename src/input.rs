//! Plain-text trip lists: one `ORIGIN DESTINATION` pair per line.
//!
//! Origin and destination may be separated by `->`, `,`, `-` or whitespace.
//! `#` starts a comment. Codes are passed on unnormalized.

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Line {line}: expected `ORIGIN DESTINATION`, found {content:?}")]
    MalformedLine { line: usize, content: String },
}

/// Raw origin/destination pair as written in the list.
pub type RawRoute = (String, String);

pub fn parse_trip_list(source: &str) -> Result<Vec<RawRoute>, InputError> {
    let mut routes = Vec::new();

    for (idx, raw_line) in source.lines().enumerate() {
        let line = match raw_line.find('#') {
            Some(pos) => &raw_line[..pos],
            None => raw_line,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = split_route(line).collect();
        match fields.as_slice() {
            [origin, destination] if is_single_code(origin) && is_single_code(destination) => {
                routes.push((origin.trim().to_string(), destination.trim().to_string()))
            }
            _ => {
                return Err(InputError::MalformedLine {
                    line: idx + 1,
                    content: raw_line.to_string(),
                });
            }
        }
    }

    Ok(routes)
}

fn is_single_code(field: &str) -> bool {
    !field.trim().contains(char::is_whitespace)
}

fn split_route(line: &str) -> Box<dyn Iterator<Item = &str> + '_> {
    for sep in ["->", ",", "-"] {
        if line.contains(sep) {
            return Box::new(line.split(sep));
        }
    }
    Box::new(line.split_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("BLR MAA")]
    #[case("BLR   MAA")]
    #[case("BLR\tMAA")]
    #[case("BLR -> MAA")]
    #[case("BLR->MAA")]
    #[case("BLR, MAA")]
    #[case("BLR-MAA")]
    #[case("  BLR - MAA  # morning flight")]
    fn test_separators(#[case] line: &str) {
        let routes = parse_trip_list(line).unwrap();
        assert_eq!(routes, vec![("BLR".to_string(), "MAA".to_string())]);
    }

    #[test]
    fn test_skips_blank_and_comment_lines() {
        let source = "# week 1\n\nBLR MAA\n   \nMAA HYD # return\n";
        let routes = parse_trip_list(source).unwrap();
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[1], ("MAA".to_string(), "HYD".to_string()));
    }

    #[test]
    fn test_keeps_raw_codes() {
        let routes = parse_trip_list("bangalore -> chennai").unwrap();
        assert_eq!(routes[0], ("bangalore".to_string(), "chennai".to_string()));
    }

    #[test]
    fn test_empty_field_is_passed_through() {
        let routes = parse_trip_list("BLR,").unwrap();
        assert_eq!(routes[0], ("BLR".to_string(), String::new()));
    }

    #[rstest]
    #[case("BLR")]
    #[case("BLR MAA HYD")]
    #[case("A-B-C")]
    #[case("BLR -> MAA -> HYD")]
    #[case("BLR-MAA HYD")]
    #[case("BLR, MAA HYD")]
    #[case("BLR HYD -> MAA")]
    fn test_malformed_line(#[case] bad: &str) {
        let source = format!("BLR MAA\n{bad}\n");
        let err = parse_trip_list(&source).unwrap_err();
        assert_eq!(
            err,
            InputError::MalformedLine {
                line: 2,
                content: bad.to_string(),
            }
        );
    }
}
