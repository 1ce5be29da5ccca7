//! Dynamic list editor for veterinarian education history
//!
//! Entries are index-addressed so the UI can route edits to exactly one
//! row. Removal compacts the sequence; indices above the removed entry
//! shift down by one.

/// A single education history record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub year: String,
}

impl EducationEntry {
    /// Read the named field
    pub fn get(&self, field: EducationField) -> &str {
        match field {
            EducationField::Degree => &self.degree,
            EducationField::Institution => &self.institution,
            EducationField::Year => &self.year,
        }
    }

    fn get_mut(&mut self, field: EducationField) -> &mut String {
        match field {
            EducationField::Degree => &mut self.degree,
            EducationField::Institution => &mut self.institution,
            EducationField::Year => &mut self.year,
        }
    }
}

/// The three editable columns of an education entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationField {
    Degree,
    Institution,
    Year,
}

impl EducationField {
    pub const ALL: [EducationField; 3] = [
        EducationField::Degree,
        EducationField::Institution,
        EducationField::Year,
    ];

    /// Stable field name used in error keys
    pub fn name(&self) -> &'static str {
        match self {
            EducationField::Degree => "degree",
            EducationField::Institution => "institution",
            EducationField::Year => "year",
        }
    }

    /// Display label for rendering
    pub fn label(&self) -> &'static str {
        match self {
            EducationField::Degree => "Degree",
            EducationField::Institution => "Institution",
            EducationField::Year => "Year",
        }
    }

    /// Composite error key for this field at a list index, e.g. `degree-0`
    pub fn error_key(&self, index: usize) -> String {
        format!("{}-{}", self.name(), index)
    }
}

/// Ordered, user-resizable collection of education entries
#[derive(Debug, Clone, Default)]
pub struct EducationList {
    entries: Vec<EducationEntry>,
}

impl EducationList {
    /// Append a new empty entry at the end of the sequence
    pub fn add(&mut self) {
        self.entries.push(EducationEntry::default());
    }

    /// Remove the entry at `index`; later entries shift down by one.
    ///
    /// Out-of-range indices are absorbed as a no-op: removal is
    /// user-triggered and the UI's index can transiently lag the state.
    pub fn remove(&mut self, index: usize) {
        if index < self.entries.len() {
            self.entries.remove(index);
        }
    }

    /// Replace one field of the entry at `index`; silently ignored when
    /// the index is out of range.
    #[allow(dead_code)]
    pub fn update_field(&mut self, index: usize, field: EducationField, value: String) {
        if let Some(entry) = self.entries.get_mut(index) {
            *entry.get_mut(field) = value;
        }
    }

    /// Push a character onto one field of the entry at `index`
    pub fn push_char(&mut self, index: usize, field: EducationField, c: char) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.get_mut(field).push(c);
        }
    }

    /// Pop the last character off one field of the entry at `index`
    pub fn pop_char(&mut self, index: usize, field: EducationField) {
        if let Some(entry) = self.entries.get_mut(index) {
            entry.get_mut(field).pop();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&EducationEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EducationEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled(degree: &str, institution: &str, year: &str) -> EducationEntry {
        EducationEntry {
            degree: degree.to_string(),
            institution: institution.to_string(),
            year: year.to_string(),
        }
    }

    #[test]
    fn test_add_appends_empty_entry() {
        let mut list = EducationList::default();
        list.add();
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0), Some(&EducationEntry::default()));
    }

    #[test]
    fn test_add_has_no_upper_bound() {
        let mut list = EducationList::default();
        for _ in 0..50 {
            list.add();
        }
        assert_eq!(list.len(), 50);
    }

    #[test]
    fn test_update_field_targets_single_entry() {
        let mut list = EducationList::default();
        list.add();
        list.add();
        list.update_field(1, EducationField::Degree, "DVM".to_string());
        assert_eq!(list.get(0).unwrap().degree, "");
        assert_eq!(list.get(1).unwrap().degree, "DVM");
    }

    #[test]
    fn test_update_field_out_of_range_is_noop() {
        let mut list = EducationList::default();
        list.add();
        list.update_field(5, EducationField::Year, "2020".to_string());
        assert_eq!(list.get(0).unwrap().year, "");
    }

    #[test]
    fn test_remove_compacts_indices() {
        let mut list = EducationList::default();
        list.add();
        list.add();
        list.update_field(1, EducationField::Institution, "Cornell".to_string());
        list.remove(0);

        assert_eq!(list.len(), 1);
        // The former index-1 entry now lives at index 0
        assert_eq!(list.get(0).unwrap().institution, "Cornell");
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut list = EducationList::default();
        list.add();
        list.remove(3);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_from_empty_is_noop() {
        let mut list = EducationList::default();
        list.remove(0);
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_middle_shifts_later_entries_down_by_one() {
        let mut list = EducationList::default();
        for i in 0..3 {
            list.add();
            list.update_field(i, EducationField::Degree, format!("degree-{i}"));
        }
        list.remove(1);

        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).unwrap().degree, "degree-0");
        assert_eq!(list.get(1).unwrap().degree, "degree-2");
    }

    #[test]
    fn test_push_and_pop_char_route_by_index() {
        let mut list = EducationList::default();
        list.add();
        list.add();
        list.push_char(1, EducationField::Year, '2');
        list.push_char(1, EducationField::Year, '0');
        list.pop_char(1, EducationField::Year);

        assert_eq!(list.get(0).unwrap().year, "");
        assert_eq!(list.get(1).unwrap().year, "2");
    }

    #[test]
    fn test_push_char_out_of_range_is_noop() {
        let mut list = EducationList::default();
        list.push_char(0, EducationField::Degree, 'x');
        assert!(list.is_empty());
    }

    #[test]
    fn test_error_key_format() {
        assert_eq!(EducationField::Degree.error_key(0), "degree-0");
        assert_eq!(EducationField::Institution.error_key(2), "institution-2");
        assert_eq!(EducationField::Year.error_key(11), "year-11");
    }

    #[test]
    fn test_entry_get_reads_named_field() {
        let entry = filled("DVM", "Cornell", "2019");
        assert_eq!(entry.get(EducationField::Degree), "DVM");
        assert_eq!(entry.get(EducationField::Institution), "Cornell");
        assert_eq!(entry.get(EducationField::Year), "2019");
    }
}
