//! Preferences Form Rules
//!
//! Exactly three genres must be chosen. A fourth check is refused as it
//! happens rather than at submit time.

/// Genre checkboxes offered on the form
pub const GENRES: &[&str] = &[
    "Fantasy",
    "Science Fiction",
    "Mystery",
    "Thriller",
    "Romance",
    "Horror",
    "Historical Fiction",
    "Young Adult",
    "Nonfiction",
    "Biography",
    "Self Help",
    "Poetry",
];

/// Reading frequency options (value, label)
pub const FREQUENCIES: &[(&str, &str)] = &[
    ("daily", "Every day"),
    ("weekly", "A few times a week"),
    ("monthly", "A few times a month"),
    ("rarely", "Rarely"),
];

pub const REQUIRED_GENRES: usize = 3;
pub const TOO_MANY_GENRES: &str = "You can only select EXACTLY 3 genres.";
pub const WRONG_GENRE_COUNT: &str = "Please select EXACTLY 3 genres.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Checked,
    Unchecked,
    /// The box must be unchecked again
    Rejected,
}

/// Checked genres in the order they were checked
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenreSelection(Vec<String>);

impl GenreSelection {
    pub fn from_genres(genres: &[String]) -> Self {
        let mut selection = Self::default();
        for genre in genres.iter().take(REQUIRED_GENRES) {
            selection.toggle(genre, true);
        }
        selection
    }

    pub fn contains(&self, genre: &str) -> bool {
        self.0.iter().any(|g| g == genre)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Apply a checkbox change event
    pub fn toggle(&mut self, genre: &str, checked: bool) -> ToggleOutcome {
        if !checked {
            self.0.retain(|g| g != genre);
            return ToggleOutcome::Unchecked;
        }
        if self.contains(genre) {
            return ToggleOutcome::Checked;
        }
        if self.0.len() >= REQUIRED_GENRES {
            return ToggleOutcome::Rejected;
        }
        self.0.push(genre.to_string());
        ToggleOutcome::Checked
    }

    /// Genres ready to save, or the alert to show
    pub fn validate(&self) -> Result<Vec<String>, &'static str> {
        if self.0.len() != REQUIRED_GENRES {
            return Err(WRONG_GENRE_COUNT);
        }
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three() -> GenreSelection {
        let mut s = GenreSelection::default();
        s.toggle("Fantasy", true);
        s.toggle("Mystery", true);
        s.toggle("Horror", true);
        s
    }

    #[test]
    fn test_fourth_genre_is_rejected() {
        let mut s = three();
        assert_eq!(s.toggle("Poetry", true), ToggleOutcome::Rejected);
        assert_eq!(s.len(), 3);
        assert!(!s.contains("Poetry"));
    }

    #[test]
    fn test_uncheck_frees_a_slot() {
        let mut s = three();
        assert_eq!(s.toggle("Mystery", false), ToggleOutcome::Unchecked);
        assert_eq!(s.toggle("Poetry", true), ToggleOutcome::Checked);
        assert_eq!(s.validate().unwrap(), vec!["Fantasy", "Horror", "Poetry"]);
    }

    #[test]
    fn test_fewer_than_three_fails_validation() {
        let mut s = GenreSelection::default();
        s.toggle("Fantasy", true);
        s.toggle("Mystery", true);
        assert_eq!(s.validate(), Err(WRONG_GENRE_COUNT));
    }

    #[test]
    fn test_rechecking_is_idempotent() {
        let mut s = three();
        assert_eq!(s.toggle("Fantasy", true), ToggleOutcome::Checked);
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn test_from_genres_caps_at_three() {
        let saved: Vec<String> = ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect();
        let s = GenreSelection::from_genres(&saved);
        assert_eq!(s.len(), 3);
        assert!(!s.contains("D"));
    }
}
