use serde::Serialize;

/// One detection category the service can run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Abusive,
    Violent,
    Nsfw,
    Political,
    Religious,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Abusive,
        Category::Violent,
        Category::Nsfw,
        Category::Political,
        Category::Religious,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Abusive => "Detect Abusive Content",
            Category::Violent => "Detect Violent Content",
            Category::Nsfw => "Detect NSFW Content",
            Category::Political => "Detect Political Content",
            Category::Religious => "Detect Religious Content",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Category::Abusive => "Identify hate speech, harassment, and offensive language",
            Category::Violent => "Identify violence, threats, and dangerous behavior",
            Category::Nsfw => "Identify adult content and inappropriate material",
            Category::Political => "Identify political bias and politically charged language",
            Category::Religious => "Identify religious content and potentially sensitive material",
        }
    }

    /// Multipart field name the service expects for this category.
    pub fn form_field(&self) -> &'static str {
        match self {
            Category::Abusive => "detect_abusive",
            Category::Violent => "detect_violent",
            Category::Nsfw => "detect_nsfw",
            Category::Political => "detect_political",
            Category::Religious => "detect_religious",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisOptions {
    pub detect_abusive: bool,
    pub detect_violent: bool,
    pub detect_nsfw: bool,
    pub detect_political: bool,
    pub detect_religious: bool,
}

impl AnalysisOptions {
    pub fn all() -> Self {
        Self {
            detect_abusive: true,
            detect_violent: true,
            detect_nsfw: true,
            detect_political: true,
            detect_religious: true,
        }
    }

    pub fn get(&self, category: Category) -> bool {
        match category {
            Category::Abusive => self.detect_abusive,
            Category::Violent => self.detect_violent,
            Category::Nsfw => self.detect_nsfw,
            Category::Political => self.detect_political,
            Category::Religious => self.detect_religious,
        }
    }

    /// Replace one field, leaving the other four untouched.
    pub fn set(&mut self, category: Category, enabled: bool) {
        let field = match category {
            Category::Abusive => &mut self.detect_abusive,
            Category::Violent => &mut self.detect_violent,
            Category::Nsfw => &mut self.detect_nsfw,
            Category::Political => &mut self.detect_political,
            Category::Religious => &mut self.detect_religious,
        };
        *field = enabled;
    }

    pub fn toggle(&mut self, category: Category) {
        self.set(category, !self.get(category));
    }

    pub fn any_enabled(&self) -> bool {
        Category::ALL.iter().any(|c| self.get(*c))
    }

    pub fn enabled(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(|c| self.get(*c))
    }
}
