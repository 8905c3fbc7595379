//! Cosmetic class changes applied to page sections.
//!
//! Each [`Activity`] rewrites the utility classes of one kind of element
//! (promo banner, testimonials, contact form). The page owns a [`ClassList`]
//! per element and applies activities to it; an element that is not on the
//! page is simply skipped.

/// Ordered set of CSS class names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class if not already present
    pub fn add(&mut self, class: &str) {
        if !self.contains(class) {
            self.0.push(class.to_string());
        }
    }

    /// Remove a class if present
    pub fn remove(&mut self, class: &str) {
        self.0.retain(|c| c != class);
    }

    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<&str> for ClassList {
    fn from(classes: &str) -> Self {
        let mut list = ClassList::new();
        for class in classes.split_whitespace() {
            list.add(class);
        }
        list
    }
}

impl std::fmt::Display for ClassList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

const BANNER_BACKGROUNDS: &[&str] = &[
    "bg-dark",
    "bg-primary",
    "bg-success",
    "bg-info",
    "bg-danger",
    "bg-warning",
];

/// Class rewrites for the decorative page sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    /// Repaint the promo banner yellow with dark text
    PromoBanner,
    /// Highlight a VIP testimonial in blue
    VipTestimonial,
    /// Paint paragraph text red
    Paragraph,
    /// Tint the first text input of the contact form
    ContactFirstInput,
    /// Turn contact form buttons into danger buttons
    ContactButton,
    /// Yellow text for the contact name field and its label
    ContactNameField,
}

impl Activity {
    pub fn apply(&self, classes: &mut ClassList) {
        match self {
            Activity::PromoBanner => {
                for bg in BANNER_BACKGROUNDS {
                    classes.remove(bg);
                }
                classes.add("bg-warning");
                classes.remove("text-white");
                classes.add("text-dark");
            }
            Activity::VipTestimonial => classes.add("text-primary"),
            Activity::Paragraph => classes.add("text-danger"),
            Activity::ContactFirstInput => {
                classes.add("bg-success");
                classes.add("bg-opacity-10");
            }
            Activity::ContactButton => {
                classes.remove("btn-primary");
                classes.remove("btn-outline-secondary");
                classes.add("btn-danger");
            }
            Activity::ContactNameField => classes.add("text-warning"),
        }
    }

    /// Apply to an element that may be missing from the page
    pub fn apply_to(&self, classes: Option<&mut ClassList>) {
        if let Some(classes) = classes {
            self.apply(classes);
        }
    }

    /// Apply to a class string, returning the rewritten string
    pub fn restyle(&self, classes: &str) -> String {
        let mut list = ClassList::from(classes);
        self.apply(&mut list);
        list.to_string()
    }
}
