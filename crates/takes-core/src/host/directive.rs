use crate::model::Flag;

use super::script::{parse_include_line, ScriptEntry};

/// A single textual command understood by the host.
///
/// `Display` renders the command line sent through the channel;
/// [`Directive::parse`] reads it back (used by hosts that interpret
/// directives themselves, such as the in-memory host).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    List,
    Create { name: String, parent: Option<String> },
    SetActive(String),
    Delete { name: String, recursive: bool },
    Rename { from: String, to: String },
    Move { name: String, parent: String },
    IncludeFlag { flag: Flag, path: String, exclude: bool },
    /// `parm` may be `*` to address every parameter of the node.
    IncludeParm { path: String, parm: String, exclude: bool },
    Merge { dest: String, src: String, force: bool },
    Save { file: String, name: String, recursive: bool },
    Load { file: String, parent: Option<String> },
    Script(String),
    AutoMode(bool),
}

impl Directive {
    pub fn verb(&self) -> &'static str {
        match self {
            Directive::List => "takels",
            Directive::Create { .. } => "takeadd",
            Directive::SetActive(_) => "takeset",
            Directive::Delete { .. } => "takerm",
            Directive::Rename { .. } => "takename",
            Directive::Move { .. } => "takemove",
            Directive::IncludeFlag { .. } | Directive::IncludeParm { .. } => "takeinclude",
            Directive::Merge { .. } => "takemerge",
            Directive::Save { .. } => "takesave",
            Directive::Load { .. } => "takeload",
            Directive::Script(_) => "takescript",
            Directive::AutoMode(_) => "takeautomode",
        }
    }

    /// Parse a command line. Errors carry a host-style message.
    pub fn parse(command: &str) -> Result<Directive, String> {
        let mut tokens = tokenize(command)?;
        if tokens.is_empty() {
            return Err("Empty command".into());
        }
        let verb = tokens.remove(0);

        let directive = match verb.as_str() {
            "takels" => Directive::List,
            "takeadd" => {
                let parent = take_option(&mut tokens, "-p")?;
                let [name] = positional::<1>(&verb, tokens)?;
                Directive::Create { name, parent }
            }
            "takeset" => {
                let [name] = positional::<1>(&verb, tokens)?;
                Directive::SetActive(name)
            }
            "takerm" => {
                let recursive = take_switch(&mut tokens, "-R");
                let [name] = positional::<1>(&verb, tokens)?;
                Directive::Delete { name, recursive }
            }
            "takename" => {
                let [from, to] = positional::<2>(&verb, tokens)?;
                Directive::Rename { from, to }
            }
            "takemove" => {
                let [name, parent] = positional::<2>(&verb, tokens)?;
                Directive::Move { name, parent }
            }
            "takeinclude" => {
                let line = parse_include_line(command)
                    .ok_or_else(|| format!("Bad arguments to takeinclude: {command}"))?;
                match line.entry {
                    ScriptEntry::Flag { flag, path } => Directive::IncludeFlag {
                        flag,
                        path,
                        exclude: line.exclude,
                    },
                    ScriptEntry::Parm { path, parm } => Directive::IncludeParm {
                        path,
                        parm,
                        exclude: line.exclude,
                    },
                }
            }
            "takemerge" => {
                let force = take_switch(&mut tokens, "-f");
                let [dest, src] = positional::<2>(&verb, tokens)?;
                Directive::Merge { dest, src, force }
            }
            "takesave" => {
                let file = take_option(&mut tokens, "-o")?
                    .ok_or_else(|| "takesave requires -o <file>".to_string())?;
                let recursive = take_switch(&mut tokens, "-R");
                let [name] = positional::<1>(&verb, tokens)?;
                Directive::Save {
                    file,
                    name,
                    recursive,
                }
            }
            "takeload" => {
                let parent = take_option(&mut tokens, "-p")?;
                let [file] = positional::<1>(&verb, tokens)?;
                Directive::Load { file, parent }
            }
            "takescript" => {
                let [name] = positional::<1>(&verb, tokens)?;
                Directive::Script(name)
            }
            "takeautomode" => {
                let [mode] = positional::<1>(&verb, tokens)?;
                match mode.as_str() {
                    "on" => Directive::AutoMode(true),
                    "off" => Directive::AutoMode(false),
                    other => return Err(format!("takeautomode: expected on or off, got '{other}'")),
                }
            }
            other => return Err(format!("Unknown command: {other}")),
        };
        Ok(directive)
    }
}

impl std::fmt::Display for Directive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.verb())?;
        match self {
            Directive::List => Ok(()),
            Directive::Create { name, parent } => {
                if let Some(parent) = parent {
                    write!(f, " -p {}", quote(parent))?;
                }
                write!(f, " {}", quote(name))
            }
            Directive::SetActive(name) | Directive::Script(name) => write!(f, " {}", quote(name)),
            Directive::Delete { name, recursive } => {
                if *recursive {
                    f.write_str(" -R")?;
                }
                write!(f, " {}", quote(name))
            }
            Directive::Rename { from, to } => write!(f, " {} {}", quote(from), quote(to)),
            Directive::Move { name, parent } => write!(f, " {} {}", quote(name), quote(parent)),
            Directive::IncludeFlag {
                flag,
                path,
                exclude,
            } => {
                if *exclude {
                    f.write_str(" -u")?;
                }
                write!(f, " {} {}", flag.token(), quote(path))
            }
            Directive::IncludeParm {
                path,
                parm,
                exclude,
            } => {
                if *exclude {
                    f.write_str(" -u")?;
                }
                write!(f, " {} {}", quote(path), quote(parm))
            }
            Directive::Merge { dest, src, force } => {
                if *force {
                    f.write_str(" -f")?;
                }
                write!(f, " {} {}", quote(dest), quote(src))
            }
            Directive::Save {
                file,
                name,
                recursive,
            } => {
                write!(f, " -o {}", quote(file))?;
                if *recursive {
                    f.write_str(" -R")?;
                }
                write!(f, " {}", quote(name))
            }
            Directive::Load { file, parent } => {
                if let Some(parent) = parent {
                    write!(f, " -p {}", quote(parent))?;
                }
                write!(f, " {}", quote(file))
            }
            Directive::AutoMode(on) => f.write_str(if *on { " on" } else { " off" }),
        }
    }
}

/// Split a command line on whitespace, honoring double quotes and `\"`
/// escapes inside them.
pub fn tokenize(line: &str) -> Result<Vec<String>, String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                in_token = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(escaped) => current.push(escaped),
                            None => return Err(format!("Unterminated quote in: {line}")),
                        },
                        Some(other) => current.push(other),
                        None => return Err(format!("Unterminated quote in: {line}")),
                    }
                }
            }
            c if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                in_token = true;
                current.push(c);
            }
        }
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

/// Quote a word when it would not survive [`tokenize`] as-is.
pub fn quote(word: &str) -> String {
    if !word.is_empty() && !word.chars().any(|c| c.is_whitespace() || c == '"' || c == '\\') {
        return word.to_string();
    }
    let escaped = word.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

fn take_option(tokens: &mut Vec<String>, option: &str) -> Result<Option<String>, String> {
    match tokens.iter().position(|t| t == option) {
        Some(i) if i + 1 < tokens.len() => {
            let value = tokens.remove(i + 1);
            tokens.remove(i);
            Ok(Some(value))
        }
        Some(_) => Err(format!("Option {option} requires a value")),
        None => Ok(None),
    }
}

fn take_switch(tokens: &mut Vec<String>, switch: &str) -> bool {
    let before = tokens.len();
    tokens.retain(|t| t != switch);
    tokens.len() != before
}

fn positional<const N: usize>(verb: &str, tokens: Vec<String>) -> Result<[String; N], String> {
    let count = tokens.len();
    tokens
        .try_into()
        .map_err(|_| format!("{verb}: expected {N} argument(s), got {count}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_commands() {
        let cases = [
            (Directive::List, "takels"),
            (
                Directive::Create {
                    name: "shot".into(),
                    parent: Some("seq".into()),
                },
                "takeadd -p seq shot",
            ),
            (
                Directive::Delete {
                    name: "shot".into(),
                    recursive: true,
                },
                "takerm -R shot",
            ),
            (
                Directive::IncludeFlag {
                    flag: Flag::Display,
                    path: "/obj/geo1".into(),
                    exclude: true,
                },
                "takeinclude -u -d /obj/geo1",
            ),
            (
                Directive::IncludeParm {
                    path: "/obj/geo1".into(),
                    parm: "*".into(),
                    exclude: false,
                },
                "takeinclude /obj/geo1 *",
            ),
            (
                Directive::Merge {
                    dest: "a".into(),
                    src: "b".into(),
                    force: true,
                },
                "takemerge -f a b",
            ),
            (
                Directive::Save {
                    file: "/tmp/my takes.json".into(),
                    name: "a".into(),
                    recursive: true,
                },
                "takesave -o \"/tmp/my takes.json\" -R a",
            ),
            (Directive::AutoMode(false), "takeautomode off"),
        ];
        for (directive, expected) in cases {
            assert_eq!(directive.to_string(), expected);
        }
    }

    #[test]
    fn test_parse_inverts_render() {
        let directives = [
            Directive::List,
            Directive::Create {
                name: "t1".into(),
                parent: None,
            },
            Directive::SetActive("Main".into()),
            Directive::Rename {
                from: "a".into(),
                to: "b".into(),
            },
            Directive::Move {
                name: "a".into(),
                parent: "Main".into(),
            },
            Directive::IncludeParm {
                path: "/obj/geo1".into(),
                parm: "scale".into(),
                exclude: true,
            },
            Directive::Load {
                file: "C:\\takes\\a.json".into(),
                parent: Some("seq".into()),
            },
            Directive::Script("t1".into()),
            Directive::AutoMode(true),
        ];
        for directive in directives {
            let rendered = directive.to_string();
            assert_eq!(Directive::parse(&rendered), Ok(directive), "{rendered}");
        }
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(Directive::parse("").is_err());
        assert!(Directive::parse("takedance now").is_err());
        assert!(Directive::parse("takeset").is_err());
        assert!(Directive::parse("takeadd -p").is_err());
        assert!(Directive::parse("takesave a").is_err());
        assert!(Directive::parse("takeautomode maybe").is_err());
        assert!(Directive::parse("takeset \"open").is_err());
    }

    #[test]
    fn test_tokenize_quotes() {
        assert_eq!(
            tokenize(r#"takeload -p a "x y\"z""#).unwrap(),
            vec!["takeload", "-p", "a", "x y\"z"]
        );
        assert_eq!(tokenize(r#"a """#).unwrap(), vec!["a", ""]);
    }
}
