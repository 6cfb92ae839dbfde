//! Small per-widget state: the profile card, the name form, and the
//! details toggle. Each is an owned struct with mutators and derived
//! getters; none of them carries any logic beyond its single binding.

/// Data behind the profile/greeting card.
#[derive(Debug, Clone)]
pub struct ProfileCard {
    name: String,
    age: u8,
    avatar_url: String,
}

impl ProfileCard {
    /// Creates a profile card.
    pub fn new(name: impl Into<String>, age: u8, avatar_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            avatar_url: avatar_url.into(),
        }
    }

    /// Returns the displayed name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the displayed age.
    pub fn age(&self) -> u8 {
        self.age
    }

    /// Returns the avatar image URL.
    pub fn avatar_url(&self) -> &str {
        &self.avatar_url
    }

    /// Derives the greeting line shown on the card.
    pub fn greeting(&self) -> String {
        format!("{} is {} years old", self.name, self.age)
    }

    /// Returns a random number in `[0, 1)` for the card's party trick.
    pub fn lucky_number(&self) -> f64 {
        rand::random::<f64>()
    }
}

impl Default for ProfileCard {
    fn default() -> Self {
        Self::new("Evan", 25, "https://example.com/img/avatar.png")
    }
}

/// The name-confirmation form: a draft field and a confirmed copy.
#[derive(Debug, Clone, Default)]
pub struct NameForm {
    draft: String,
    confirmed: Option<String>,
}

impl NameForm {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the draft field (the input binding).
    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    /// Returns the current draft.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Copies the draft into the confirmed field (the button binding).
    ///
    /// Returns the confirmed value.
    pub fn confirm(&mut self) -> &str {
        self.confirmed = Some(self.draft.clone());
        self.confirmed.as_deref().unwrap_or_default()
    }

    /// Returns the confirmed name, if any.
    pub fn confirmed(&self) -> Option<&str> {
        self.confirmed.as_deref()
    }

    /// Clears both fields.
    pub fn clear(&mut self) {
        self.draft.clear();
        self.confirmed = None;
    }
}

/// The show/hide toggle for the details paragraph.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetailsToggle {
    visible: bool,
}

impl DetailsToggle {
    /// Creates a toggle in the hidden state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips visibility and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    /// Returns true if the details are shown.
    pub fn visible(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting() {
        let card = ProfileCard::new("Ada", 36, "ada.png");
        assert_eq!(card.greeting(), "Ada is 36 years old");
    }

    #[test]
    fn test_lucky_number_range() {
        let card = ProfileCard::default();
        for _ in 0..100 {
            let n = card.lucky_number();
            assert!((0.0..1.0).contains(&n));
        }
    }

    #[test]
    fn test_confirm_copies_draft() {
        let mut form = NameForm::new();
        assert!(form.confirmed().is_none());

        form.set_draft("Grace");
        assert_eq!(form.confirm(), "Grace");
        assert_eq!(form.confirmed(), Some("Grace"));

        // Editing the draft afterwards does not touch the confirmed copy.
        form.set_draft("Grace H.");
        assert_eq!(form.confirmed(), Some("Grace"));
    }

    #[test]
    fn test_clear() {
        let mut form = NameForm::new();
        form.set_draft("Grace");
        form.confirm();
        form.clear();

        assert_eq!(form.draft(), "");
        assert!(form.confirmed().is_none());
    }

    #[test]
    fn test_toggle_flips() {
        let mut toggle = DetailsToggle::new();
        assert!(!toggle.visible());
        assert!(toggle.toggle());
        assert!(!toggle.toggle());
    }
}
