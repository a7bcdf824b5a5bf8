use serde::{Deserialize, Serialize};

use crate::model::Flag;

use super::directive::{quote, tokenize};

const INCLUDE_VERB: &str = "takeinclude";
const QUIET: &str = "-q";
const EXCLUDE: &str = "-u";

/// What one `takeinclude` line addresses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScriptEntry {
    Flag { flag: Flag, path: String },
    /// `parm` is a parameter name as written by the host: an exact name,
    /// the base name of a multi-component parameter, or `*`.
    Parm { path: String, parm: String },
}

impl ScriptEntry {
    pub fn path(&self) -> &str {
        match self {
            ScriptEntry::Flag { path, .. } | ScriptEntry::Parm { path, .. } => path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub entry: ScriptEntry,
    pub exclude: bool,
}

impl std::fmt::Display for ScriptLine {
    /// Host script form, always quiet: `takeinclude -q -d /obj/geo1`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{INCLUDE_VERB} {QUIET}")?;
        if self.exclude {
            write!(f, " {EXCLUDE}")?;
        }
        match &self.entry {
            ScriptEntry::Flag { flag, path } => write!(f, " {} {}", flag.token(), quote(path)),
            ScriptEntry::Parm { path, parm } => write!(f, " {} {}", quote(path), quote(parm)),
        }
    }
}

/// Parse `takeinclude [-u] [-q] <flag|node> <parm-or-path>`.
///
/// Tokens are compared whole, so a path that merely contains `-r` is never
/// read as a render flag. Returns `None` for anything else.
pub fn parse_include_line(line: &str) -> Option<ScriptLine> {
    let tokens = tokenize(line).ok()?;
    let (verb, rest) = tokens.split_first()?;
    if verb != INCLUDE_VERB {
        return None;
    }

    let mut exclude = false;
    let args: Vec<&String> = rest
        .iter()
        .filter(|t| match t.as_str() {
            QUIET => false,
            EXCLUDE => {
                exclude = true;
                false
            }
            _ => true,
        })
        .collect();

    if let Some(flag) = args.iter().find_map(|t| Flag::from_token(t)) {
        let path = args.last().filter(|p| Flag::from_token(p).is_none())?;
        return Some(ScriptLine {
            entry: ScriptEntry::Flag {
                flag,
                path: path.to_string(),
            },
            exclude,
        });
    }

    match args.as_slice() {
        [path, parm] => Some(ScriptLine {
            entry: ScriptEntry::Parm {
                path: path.to_string(),
                parm: parm.to_string(),
            },
            exclude,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag_lines() {
        let line = parse_include_line("takeinclude -q -d /obj/geo1").unwrap();
        assert_eq!(
            line.entry,
            ScriptEntry::Flag {
                flag: Flag::Display,
                path: "/obj/geo1".into()
            }
        );
        assert!(!line.exclude);

        let line = parse_include_line("takeinclude -u -b /obj/geo1/null1").unwrap();
        assert!(line.exclude);
        assert_eq!(line.entry.path(), "/obj/geo1/null1");
    }

    #[test]
    fn test_parse_parm_lines() {
        let line = parse_include_line("takeinclude -q /obj/geo1 t").unwrap();
        assert_eq!(
            line.entry,
            ScriptEntry::Parm {
                path: "/obj/geo1".into(),
                parm: "t".into()
            }
        );
    }

    #[test]
    fn test_path_containing_flag_text_is_not_a_flag() {
        let line = parse_include_line("takeinclude -q /obj/set-render scale").unwrap();
        assert!(matches!(line.entry, ScriptEntry::Parm { .. }));
    }

    #[test]
    fn test_rejects_other_lines() {
        assert!(parse_include_line("takeadd -p Main shot").is_none());
        assert!(parse_include_line("takeinclude -q").is_none());
        assert!(parse_include_line("takeinclude -d").is_none());
        assert!(parse_include_line("takeinclude /obj/geo1 tx ty").is_none());
        assert!(parse_include_line("# comment").is_none());
    }

    #[test]
    fn test_display_is_parseable() {
        let line = ScriptLine {
            entry: ScriptEntry::Parm {
                path: "/obj/geo1".into(),
                parm: "scale".into(),
            },
            exclude: false,
        };
        assert_eq!(line.to_string(), "takeinclude -q /obj/geo1 scale");
        assert_eq!(parse_include_line(&line.to_string()), Some(line));
    }
}
