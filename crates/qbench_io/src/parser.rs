//! Parser for benchmark timing files.
//!
//! Benchmark `.dat` files are plain text: floating point numbers separated
//! by spaces, tabs or newlines, with any number of values per line. The
//! line structure carries no meaning; values are returned as one flat,
//! row-major sequence. A `#` starts a comment that runs to the end of the
//! line, and blank lines are skipped.

use anyhow::{Result, bail};
use nom::IResult;
use nom::character::complete::{space0, space1};
use nom::combinator::all_consuming;
use nom::multi::separated_list0;
use nom::number::complete::double;
use nom::sequence::delimited;

/// Parses every numeric token in `text`, in reading order.
///
/// Accepts integers, decimals, exponent notation, and the `nan`/`inf`
/// spellings. Anything else fails the whole parse; no partial result is
/// returned.
///
/// # Arguments
///
/// * `text` - Full contents of a benchmark file
///
/// # Returns
///
/// The flat sequence of values, or an error naming the 1-based line number
/// and the offending token.
pub fn parse_values(text: &str) -> Result<Vec<f64>> {
    let mut values = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let content = line.split_once('#').map_or(line, |(before, _)| before);

        match value_line(content) {
            Ok((_, mut parsed)) => values.append(&mut parsed),
            Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
                let offset = content.len() - e.input.len();
                bail!(
                    "line {}: invalid numeric token `{}`",
                    idx + 1,
                    token_around(content, offset)
                );
            }
            Err(nom::Err::Incomplete(_)) => {
                bail!("line {}: unexpected end of input", idx + 1);
            }
        }
    }

    Ok(values)
}

fn value_line(input: &str) -> IResult<&str, Vec<f64>> {
    all_consuming(delimited(space0, separated_list0(space1, double), space0))(input)
}

/// The whitespace-delimited word of `line` that contains byte `offset`.
fn token_around(line: &str, offset: usize) -> &str {
    let offset = offset.min(line.len());
    let start = line[..offset]
        .rfind(char::is_whitespace)
        .map_or(0, |i| i + 1);
    let end = line[offset..]
        .find(char::is_whitespace)
        .map_or(line.len(), |i| offset + i);
    &line[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_values_across_lines() {
        let text = "1 2 3\n4.5\t6e2  7E-1\n";
        assert_eq!(
            parse_values(text).unwrap(),
            vec![1.0, 2.0, 3.0, 4.5, 600.0, 0.7]
        );
    }

    #[test]
    fn skips_blank_lines_and_comments() {
        let text = "# timings in us\n\n  10 20 # first row\n30\r\n   \n";
        assert_eq!(parse_values(text).unwrap(), vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(parse_values("").unwrap().is_empty());
    }

    #[test]
    fn handles_signs_and_leading_dots() {
        assert_eq!(
            parse_values("-1.5 +2 .25").unwrap(),
            vec![-1.5, 2.0, 0.25]
        );
    }

    #[test]
    fn reports_bad_token_with_line_number() {
        let err = parse_values("1 2\n3 abc 4\n").unwrap_err();
        assert_eq!(err.to_string(), "line 2: invalid numeric token `abc`");
    }

    #[test]
    fn rejects_glued_garbage() {
        let err = parse_values("12.5ms").unwrap_err();
        assert_eq!(err.to_string(), "line 1: invalid numeric token `12.5ms`");
    }

    #[test]
    fn rejects_comma_separators() {
        assert!(parse_values("1,2,3").is_err());
    }
}
