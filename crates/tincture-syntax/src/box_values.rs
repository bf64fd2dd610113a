//! Reduction of box shorthand values (`margin`, `padding`, `inset`,
//! `border-width`, ...).
//!
//! The four sides are `top right bottom left`; a missing `left` repeats
//! `right`, a missing `bottom` repeats `top` and a missing `right` repeats
//! `top`.

fn same(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Reduce a 1-4 value box shorthand to its shortest equivalent.
///
/// Values are compared case-insensitively on their raw text. Lists with
/// any other length are returned unchanged.
///
/// ```
/// use tincture_syntax::box_values::reduce_box_values;
///
/// assert_eq!(reduce_box_values(&["1px", "2px", "1px", "2px"]), vec!["1px", "2px"]);
/// assert_eq!(reduce_box_values(&["0", "0", "0"]), vec!["0"]);
/// ```
pub fn reduce_box_values<'a>(values: &[&'a str]) -> Vec<&'a str> {
    if values.is_empty() || values.len() > 4 {
        return values.to_vec();
    }

    let mut reduced = values.to_vec();
    if reduced.len() == 4 && same(reduced[3], reduced[1]) {
        reduced.pop();
    }
    if reduced.len() == 3 && same(reduced[2], reduced[0]) {
        reduced.pop();
    }
    if reduced.len() == 2 && same(reduced[1], reduced[0]) {
        reduced.pop();
    }
    reduced
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduce_four_values() {
        assert_eq!(
            reduce_box_values(&["1px", "2px", "3px", "4px"]),
            vec!["1px", "2px", "3px", "4px"]
        );
        assert_eq!(reduce_box_values(&["1px", "2px", "3px", "2px"]), vec!["1px", "2px", "3px"]);
        assert_eq!(reduce_box_values(&["1px", "2px", "1px", "2px"]), vec!["1px", "2px"]);
        assert_eq!(reduce_box_values(&["1px", "1PX", "1px", "1px"]), vec!["1px"]);
    }

    #[test]
    fn reduction_stops_at_first_difference() {
        assert_eq!(
            reduce_box_values(&["1px", "2px", "3px", "3px"]),
            vec!["1px", "2px", "3px", "3px"]
        );
        assert_eq!(reduce_box_values(&["1px", "1px", "2px"]), vec!["1px", "1px", "2px"]);
    }

    #[test]
    fn other_lengths_unchanged() {
        assert!(reduce_box_values(&[]).is_empty());
        assert_eq!(reduce_box_values(&["a", "a", "a", "a", "a"]).len(), 5);
        assert_eq!(reduce_box_values(&["auto"]), vec!["auto"]);
    }
}
