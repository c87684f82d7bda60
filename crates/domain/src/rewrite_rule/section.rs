use std::fmt;
use std::str::FromStr;

/// Response section a record was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordSection {
    Answer,
    Extra,
}

impl RecordSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordSection::Answer => "answer",
            RecordSection::Extra => "extra",
        }
    }
}

impl fmt::Display for RecordSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sections of a response a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionScope {
    #[default]
    Answer,
    Extra,
    All,
}

impl SectionScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionScope::Answer => "answer",
            SectionScope::Extra => "extra",
            SectionScope::All => "all",
        }
    }

    pub fn covers(&self, section: RecordSection) -> bool {
        matches!(
            (self, section),
            (SectionScope::All, _)
                | (SectionScope::Answer, RecordSection::Answer)
                | (SectionScope::Extra, RecordSection::Extra)
        )
    }
}

impl fmt::Display for SectionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SectionScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "answer" => Ok(SectionScope::Answer),
            "extra" | "additional" => Ok(SectionScope::Extra),
            "all" => Ok(SectionScope::All),
            _ => Err(format!("Unknown rewrite section: {}", s)),
        }
    }
}
