use serde::{Deserialize, Serialize};

/// A boolean node toggle that can be included in a take independently of
/// parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flag {
    Display,
    Render,
    Bypass,
}

impl Flag {
    pub const ALL: [Flag; 3] = [Flag::Display, Flag::Render, Flag::Bypass];

    /// Directive token naming this flag in `takeinclude`.
    pub fn token(self) -> &'static str {
        match self {
            Flag::Display => "-d",
            Flag::Render => "-r",
            Flag::Bypass => "-b",
        }
    }

    pub fn from_token(token: &str) -> Option<Flag> {
        Flag::ALL.into_iter().find(|f| f.token() == token)
    }

    pub fn label(self) -> &'static str {
        match self {
            Flag::Display => "display",
            Flag::Render => "render",
            Flag::Bypass => "bypass",
        }
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Flag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "display" | "display_flag" | "-d" => Ok(Flag::Display),
            "render" | "render_flag" | "-r" => Ok(Flag::Render),
            "bypass" | "bypass_flag" | "-b" => Ok(Flag::Bypass),
            other => Err(format!("unknown flag '{other}' (expected display, render or bypass)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_round_trip() {
        for flag in Flag::ALL {
            assert_eq!(Flag::from_token(flag.token()), Some(flag));
        }
        assert_eq!(Flag::from_token("-q"), None);
        assert_eq!(Flag::from_token("-u"), None);
    }

    #[test]
    fn test_parse_accepts_legacy_keys() {
        assert_eq!("display_flag".parse::<Flag>(), Ok(Flag::Display));
        assert_eq!("render".parse::<Flag>(), Ok(Flag::Render));
        assert!("visible".parse::<Flag>().is_err());
    }
}
