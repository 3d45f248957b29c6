use std::collections::BTreeSet;
use std::io::{self, Write};

/// Which search path a differing name was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// One line of the report: a name present in exactly one of the two sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine {
    pub name: String,
    pub side: Side,
}

/// Classify the symmetric difference of two executable sets.
///
/// Names present in both sets are dropped. The result is ordered
/// lexicographically by name, which `BTreeSet::symmetric_difference`
/// guarantees.
pub fn diff(left: &BTreeSet<String>, right: &BTreeSet<String>) -> Vec<DiffLine> {
    left.symmetric_difference(right)
        .map(|name| DiffLine {
            name: name.clone(),
            side: if left.contains(name) {
                Side::Left
            } else {
                Side::Right
            },
        })
        .collect()
}

/// Render the diff, one name per line.
///
/// Left-only names are bare; right-only names carry a single leading tab.
/// The tab prefix is the whole protocol: no header, no counts.
pub fn write_report<W: Write>(out: &mut W, lines: &[DiffLine]) -> io::Result<()> {
    for line in lines {
        match line.side {
            Side::Left => writeln!(out, "{}", line.name)?,
            Side::Right => writeln!(out, "\t{}", line.name)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn render(lines: &[DiffLine]) -> String {
        let mut buf = Vec::new();
        write_report(&mut buf, lines).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_names_in_both_sets_are_dropped() {
        let lines = diff(&set(&["alpha", "beta", "gamma"]), &set(&["beta", "gamma"]));
        assert_eq!(
            lines,
            vec![DiffLine {
                name: "alpha".to_string(),
                side: Side::Left,
            }]
        );
    }

    #[test]
    fn test_identical_sets_produce_no_lines() {
        let names = set(&["cc", "ld"]);
        assert!(diff(&names, &names).is_empty());
        assert_eq!(render(&diff(&names, &names)), "");
    }

    #[test]
    fn test_report_is_sorted_across_both_sides() {
        let lines = diff(&set(&["delta", "alpha"]), &set(&["charlie", "bravo"]));
        let names: Vec<_> = lines.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "bravo", "charlie", "delta"]);
    }

    #[test]
    fn test_tab_prefix_marks_right_only_names() {
        let report = render(&diff(&set(&["alpha"]), &set(&["bravo"])));
        assert_eq!(report, "alpha\n\tbravo\n");
    }

    #[test]
    fn test_swapping_sides_flips_prefixes_and_keeps_order() {
        let left = set(&["alpha", "mid", "zulu"]);
        let right = set(&["bravo", "mid"]);

        let forward = diff(&left, &right);
        let backward = diff(&right, &left);

        let forward_names: Vec<_> = forward.iter().map(|l| l.name.clone()).collect();
        let backward_names: Vec<_> = backward.iter().map(|l| l.name.clone()).collect();
        assert_eq!(forward_names, backward_names);

        for (f, b) in forward.iter().zip(backward.iter()) {
            assert_ne!(f.side, b.side, "prefix must flip for {}", f.name);
        }
    }

    #[test]
    fn test_empty_sets() {
        assert!(diff(&set(&[]), &set(&[])).is_empty());

        let lines = diff(&set(&[]), &set(&["only"]));
        assert_eq!(
            lines,
            vec![DiffLine {
                name: "only".to_string(),
                side: Side::Right,
            }]
        );
        assert_eq!(render(&lines), "\tonly\n");
    }
}
