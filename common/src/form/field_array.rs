//! Row keys for the user email list.
//!
//! Every row gets a uuid when it is created. Indices shift when an earlier row
//! is removed but keys never do, so the view can key its list items on them and
//! keep focus and DOM state attached to the right input.

use uuid::Uuid;

use super::path::FieldPath;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFieldArray {
    keys: Vec<String>,
}

impl UserFieldArray {
    pub fn with_len(len: usize) -> Self {
        Self {
            keys: (0..len).map(|_| new_key()).collect(),
        }
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Adds a key for a new last row and returns it.
    pub fn append(&mut self) -> &str {
        self.keys.push(new_key());
        &self.keys[self.keys.len() - 1]
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.keys.len()).then(|| self.keys.remove(index))
    }
}

fn new_key() -> String {
    Uuid::new_v4().to_string()
}

/// Where `path` ends up once the row at `removed` is gone.
///
/// Rows after `removed` move up by one, the removed row's own paths vanish,
/// everything else stays where it is.
pub fn shift_after_removal(path: &FieldPath, removed: usize) -> Option<FieldPath> {
    match path {
        FieldPath::UserEmail(index) if *index == removed => None,
        FieldPath::UserEmail(index) if *index > removed => Some(FieldPath::UserEmail(index - 1)),
        other => Some(*other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_survive_removal_of_earlier_rows() {
        let mut array = UserFieldArray::with_len(3);
        let last = array.keys()[2].clone();

        let removed = array.remove(0);

        assert!(removed.is_some());
        assert_eq!(array.len(), 2);
        assert_eq!(array.keys()[1], last);
    }

    #[test]
    fn test_keys_are_unique() {
        let mut array = UserFieldArray::with_len(1);
        let appended = array.append().to_string();
        assert_ne!(array.keys()[0], appended);
    }

    #[test]
    fn test_remove_out_of_range_is_none() {
        let mut array = UserFieldArray::with_len(1);
        assert_eq!(array.remove(1), None);
        assert_eq!(array.len(), 1);
    }

    #[test]
    fn test_shift_after_removal() {
        assert_eq!(shift_after_removal(&FieldPath::UserEmail(1), 1), None);
        assert_eq!(
            shift_after_removal(&FieldPath::UserEmail(3), 1),
            Some(FieldPath::UserEmail(2))
        );
        assert_eq!(
            shift_after_removal(&FieldPath::UserEmail(0), 1),
            Some(FieldPath::UserEmail(0))
        );
        assert_eq!(shift_after_removal(&FieldPath::Users, 0), Some(FieldPath::Users));
    }
}
