use crate::domain::model::{FilteredSet, Record};

/// Keep records whose name contains `substring` (case-sensitive), in input order.
/// Records without a name are dropped.
pub fn filter_by_name(records: Vec<Record>, substring: &str) -> FilteredSet {
    records
        .into_iter()
        .filter(|record| record.name_contains(substring))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(set: &FilteredSet) -> Vec<&str> {
        set.records()
            .iter()
            .filter_map(|r| r.name.as_deref())
            .collect()
    }

    #[test]
    fn test_keeps_matching_records_in_order() {
        let records = vec![
            Record::new("Apple Watch"),
            Record::new("Samsung TV"),
            Record::new("Apple iPad"),
            Record::new("Apple Watch"),
        ];

        let filtered = filter_by_name(records, "Apple");

        assert_eq!(names(&filtered), vec!["Apple Watch", "Apple iPad", "Apple Watch"]);
    }

    #[test]
    fn test_match_is_case_sensitive_substring() {
        let records = vec![
            Record::new("apple pie"),
            Record::new("Pineapple"),
            Record::new("Big Apple"),
        ];

        let filtered = filter_by_name(records, "Apple");

        assert_eq!(names(&filtered), vec!["Big Apple"]);
    }

    #[test]
    fn test_absent_names_never_match() {
        let records = vec![Record::default(), Record::new("Apple Watch"), Record::default()];

        let filtered = filter_by_name(records, "Apple");

        assert_eq!(filtered.len(), 1);
        assert!(filtered.records().iter().all(|r| r.name.is_some()));
    }

    #[test]
    fn test_output_never_longer_than_input() {
        let cases: Vec<Vec<Record>> = vec![
            vec![],
            vec![Record::new("Samsung")],
            vec![Record::new("Apple"), Record::new("Apple")],
            vec![Record::default(), Record::new("AppleApple")],
        ];

        for records in cases {
            let input_len = records.len();
            let filtered = filter_by_name(records, "Apple");
            assert!(filtered.len() <= input_len);
            assert!(filtered.records().iter().all(|r| r.name_contains("Apple")));
        }
    }
}
