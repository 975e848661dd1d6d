//! Entity name generators.
//!
//! Produces unique, ordered names for synthetic problem instances:
//! exam subjects, transport lines, or single letters.

/// Generators for ordered, unique entity names.
#[derive(Debug, Clone, Copy)]
pub struct EntityNames;

impl EntityNames {
    /// `Subject1`, `Subject2`, ..., `Subject{n}`.
    pub fn subjects(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("Subject{i}")).collect()
    }

    /// `L1`, `L2`, ..., `L{n}`.
    pub fn lines(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("L{i}")).collect()
    }

    /// `A`, `B`, ..., `Z`, `AA`, `AB`, ... (spreadsheet column style).
    pub fn letters(n: usize) -> Vec<String> {
        (0..n).map(column_label).collect()
    }
}

/// Bijective base-26 label for a 0-based index.
fn column_label(mut idx: usize) -> String {
    let mut label = Vec::new();
    loop {
        label.push(b'A' + (idx % 26) as u8);
        if idx < 26 {
            break;
        }
        idx = idx / 26 - 1;
    }
    label.reverse();
    String::from_utf8_lossy(&label).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subjects() {
        assert_eq!(
            EntityNames::subjects(3),
            vec!["Subject1", "Subject2", "Subject3"]
        );
        assert!(EntityNames::subjects(0).is_empty());
    }

    #[test]
    fn test_lines() {
        assert_eq!(EntityNames::lines(2), vec!["L1", "L2"]);
    }

    #[test]
    fn test_letters_wrap() {
        let names = EntityNames::letters(30);
        assert_eq!(names[0], "A");
        assert_eq!(names[25], "Z");
        assert_eq!(names[26], "AA");
        assert_eq!(names[27], "AB");
        assert_eq!(column_label(26 * 26 + 25), "ZZ");
        assert_eq!(column_label(26 * 27), "AAA");
    }
}
