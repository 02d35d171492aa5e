// src/notation/token.rs
//
// One comma-separated unit of an appearance cell:
//   "7"            -> [7]
//   "4-9"          -> [4, 5, 6, 7, 8, 9]
//   "6 (ikke 7)"   -> [6], annotation "(ikke 7)"

use crate::error::TokenFault;

/// Longest range a single token may expand to.
pub const MAX_RANGE_LEN: u32 = 1000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedToken {
    pub ordinals: Vec<u32>,
    /// Trailing parenthetical, kept verbatim and never applied.
    pub annotation: Option<String>,
}

/// Parse one trimmed token into episode ordinals. Never returns an empty list.
pub fn parse(token: &str) -> Result<ParsedToken, TokenFault> {
    let (body, annotation) = split_annotation(token);
    let ordinals = match body.split_once('-') {
        Some((a, b)) => expand(number(a)?, number(b)?)?,
        None => vec![number(body)?],
    };
    Ok(ParsedToken { ordinals, annotation })
}

/// Cut at the first " (" (or a bare "(" glued to the number).
fn split_annotation(token: &str) -> (&str, Option<String>) {
    let cut = token.find(" (").or_else(|| token.find('('));
    match cut {
        Some(i) => {
            let note = token[i..].trim();
            let note = (!note.is_empty()).then(|| note.to_string());
            (token[..i].trim(), note)
        }
        None => (token.trim(), None),
    }
}

fn number(s: &str) -> Result<u32, TokenFault> {
    let s = s.trim();
    if s.is_empty() {
        return Err(TokenFault::Empty);
    }
    // u32::from_str accepts a leading '+'; the page never writes one
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TokenFault::NotANumber(s!(s)));
    }
    s.parse().map_err(|_| TokenFault::NotANumber(s!(s)))
}

fn expand(start: u32, end: u32) -> Result<Vec<u32>, TokenFault> {
    if start > end {
        return Err(TokenFault::ReversedRange { start, end });
    }
    if end - start >= MAX_RANGE_LEN {
        return Err(TokenFault::RangeTooLong { start, end });
    }
    Ok((start..=end).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ords(t: &str) -> Vec<u32> {
        parse(t).unwrap().ordinals
    }

    #[test]
    fn plain_number() {
        assert_eq!(ords("7"), vec![7]);
        assert_eq!(parse("7").unwrap().annotation, None);
    }

    #[test]
    fn inclusive_range() {
        assert_eq!(ords("4-9"), vec![4, 5, 6, 7, 8, 9]);
        assert_eq!(ords("12-12"), vec![12]);
        assert_eq!(ords("3 - 5"), vec![3, 4, 5]);
    }

    #[test]
    fn annotation_is_stripped_and_kept() {
        let t = parse("6 (ikke 7)").unwrap();
        assert_eq!(t.ordinals, vec![6]);
        assert!(!t.ordinals.contains(&7));
        assert_eq!(t.annotation.as_deref(), Some("(ikke 7)"));

        let r = parse("5-7 (ikke 6)").unwrap();
        assert_eq!(r.ordinals, vec![5, 6, 7]);
        assert_eq!(r.annotation.as_deref(), Some("(ikke 6)"));

        assert_eq!(ords("8(stemme)"), vec![8]);
    }

    #[test]
    fn reversed_range_is_rejected() {
        assert_eq!(parse("9-4"), Err(TokenFault::ReversedRange { start: 9, end: 4 }));
    }

    #[test]
    fn oversized_range_fails_before_expanding() {
        assert_eq!(parse("1-4000000000"), Err(TokenFault::RangeTooLong { start: 1, end: 4_000_000_000 }));
        assert_eq!(parse("1-400000000"), Err(TokenFault::RangeTooLong { start: 1, end: 400_000_000 }));
        assert_eq!(ords(&format!("1-{MAX_RANGE_LEN}")).len(), MAX_RANGE_LEN as usize);
        assert!(matches!(parse(&format!("1-{}", MAX_RANGE_LEN + 1)), Err(TokenFault::RangeTooLong { .. })));
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(parse("x"), Err(TokenFault::NotANumber(s!("x"))));
        assert_eq!(parse("+3"), Err(TokenFault::NotANumber(s!("+3"))));
        assert_eq!(parse("4-"), Err(TokenFault::Empty));
        assert_eq!(parse("(kun stemme)"), Err(TokenFault::Empty));
        assert!(matches!(parse("1-2-3"), Err(TokenFault::NotANumber(_))));
        assert!(matches!(parse("99999999999"), Err(TokenFault::NotANumber(_))));
    }
}
