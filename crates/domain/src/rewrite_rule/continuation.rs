use std::fmt;
use std::str::FromStr;

/// What happens to the remaining rules once a rule has matched a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Continuation {
    #[default]
    Stop,
    Continue,
}

impl Continuation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Continuation::Stop => "stop",
            Continuation::Continue => "continue",
        }
    }

    pub fn is_stop(&self) -> bool {
        matches!(self, Continuation::Stop)
    }
}

impl fmt::Display for Continuation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Continuation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stop" => Ok(Continuation::Stop),
            "continue" => Ok(Continuation::Continue),
            _ => Err(format!("Unknown rule continuation: {}", s)),
        }
    }
}
