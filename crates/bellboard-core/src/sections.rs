//! Collapsible panel sections.

/// One region of the panel that can be shown or hidden independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Header,
    Sounds,
    Footer,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Header, Section::Sounds, Section::Footer];

    pub fn label(self) -> &'static str {
        match self {
            Self::Header => "Header",
            Self::Sounds => "Sounds",
            Self::Footer => "Footer",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "header" => Some(Self::Header),
            "sounds" => Some(Self::Sounds),
            "footer" => Some(Self::Footer),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Header => 0,
            Self::Sounds => 1,
            Self::Footer => 2,
        }
    }
}

/// Visibility of each section. Everything starts visible.
#[derive(Debug, Clone)]
pub struct SectionVisibility {
    visible: [bool; 3],
}

impl SectionVisibility {
    pub fn new() -> Self {
        Self { visible: [true; 3] }
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.visible[section.index()]
    }

    /// Flip one section. Returns the new visibility.
    pub fn toggle(&mut self, section: Section) -> bool {
        let v = &mut self.visible[section.index()];
        *v = !*v;
        *v
    }
}

impl Default for SectionVisibility {
    fn default() -> Self {
        Self::new()
    }
}
