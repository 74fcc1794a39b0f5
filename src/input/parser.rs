//! Command interpreter.
//!
//! Every verb owns an ordered list of templates, most specific first. Input is matched
//! against all templates of all verbs in table order; the first template that matches the
//! whole line wins and its capture groups become the arguments.
//!
//! Examples:
//!   "take the wooden pickaxe"       -> Verb::Take, args=["wooden pickaxe"]
//!   "dig down using pickaxe"        -> Verb::Dig, args=["down", "pickaxe"]
//!   "break the tree with the pick"  -> Verb::Break, args=["tree", "pick"]
//!   "n"                             -> Verb::Go, args=["n"]
//!   "take"                          -> Verb::Take, args=[]
//!   ""                              -> Verb::NoInput
//!   "juggle"                        -> Verb::BadInput
//!
//! Template syntax: `{}` captures free text (letters and spaces), `{w}` captures a single word.

use once_cell::sync::Lazy;
use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// Empty line
    NoInput,
    /// Nothing matched
    BadInput,
    Wait,
    Look,
    Inventory,
    Go,
    Dig,
    Take,
    Drop,
    Place,
    Break,
    Mine,
    Attack,
    Craft,
    Build,
    Eat,
    Help,
    Exit,
}

impl Verb {
    pub fn as_str(&self) -> &str {
        match self {
            Verb::NoInput => "noinput",
            Verb::BadInput => "badinput",
            Verb::Wait => "wait",
            Verb::Look => "look",
            Verb::Inventory => "inventory",
            Verb::Go => "go",
            Verb::Dig => "dig",
            Verb::Take => "take",
            Verb::Drop => "drop",
            Verb::Place => "place",
            Verb::Break => "break",
            Verb::Mine => "mine",
            Verb::Attack => "attack",
            Verb::Craft => "craft",
            Verb::Build => "build",
            Verb::Eat => "eat",
            Verb::Help => "help",
            Verb::Exit => "exit",
        }
    }

    /// Verbs that are not gameplay actions and therefore don't take a turn.
    pub fn is_reserved(&self) -> bool {
        matches!(self, Verb::NoInput | Verb::BadInput)
    }
}

impl std::fmt::Display for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intent {
    pub verb: Verb,
    /// Normalized input line
    pub original: String,
    /// Capture groups of the matching template, in order
    pub args: Vec<String>,
}

impl Intent {
    pub fn arg(&self, idx: usize) -> Option<&str> {
        self.args.get(idx).map(String::as_str)
    }
}

const PATTERN_TABLE: &[(Verb, &[&str])] = &[
    (Verb::Wait, &["wait"]),
    (
        Verb::Look,
        &[
            "look at the {}",
            "look at {}",
            "look",
            "inspect the {}",
            "inspect {}",
            "inspect",
        ],
    ),
    (
        Verb::Inventory,
        &["check self", "check inventory", "inventory", "i"],
    ),
    (
        Verb::Go,
        &[
            "go {w}",
            "travel {w}",
            "walk {w}",
            "run {w}",
            "go",
            "(north|south|east|west|up|down|n|s|e|w|u|d)",
        ],
    ),
    (
        Verb::Dig,
        &["dig {w} using the {}", "dig {w} using {}", "dig {w} with the {}", "dig {w} with {}", "dig {w}", "dig"],
    ),
    (
        Verb::Take,
        &[
            "pick up the {}",
            "pick up {}",
            "pickup the {}",
            "pickup {}",
            "take the {}",
            "take {}",
            "take",
        ],
    ),
    (
        Verb::Drop,
        &["put down the {}", "put down {}", "drop the {}", "drop {}", "drop"],
    ),
    (Verb::Place, &["place the {}", "place {}", "place"]),
    (
        Verb::Break,
        &[
            "punch the {}",
            "punch {}",
            "punch",
            "break the {} with the {}",
            "break {} with {}",
            "break the {}",
            "break {}",
            "break",
        ],
    ),
    (
        Verb::Mine,
        &["mine the {} with the {}", "mine {} with {}", "mine the {}", "mine {}", "mine"],
    ),
    (
        Verb::Attack,
        &[
            "attack the {} with the {}",
            "attack {} with {}",
            "attack the {}",
            "attack {}",
            "attack",
            "kill the {} with the {}",
            "kill {} with {}",
            "kill the {}",
            "kill {}",
            "kill",
            "hit the {} with the {}",
            "hit {} with {}",
            "hit the {}",
            "hit {}",
            "hit",
        ],
    ),
    (
        Verb::Craft,
        &[
            "craft a {}",
            "craft an {}",
            "craft some {}",
            "craft {}",
            "craft",
            "make a {}",
            "make an {}",
            "make some {}",
            "make {}",
            "make",
        ],
    ),
    (
        Verb::Build,
        &["build {} out of {}", "build {} from {}", "build {}", "build"],
    ),
    (Verb::Eat, &["eat a {}", "eat the {}", "eat some {}", "eat {}", "eat"]),
    (Verb::Help, &["help me", "help"]),
    (
        Verb::Exit,
        &["exit", "quit", "goodbye", "good bye", "bye", "farewell"],
    ),
];

struct Pattern {
    verb: Verb,
    re: Regex,
}

fn compile(template: &str) -> Regex {
    let body = template.replace("{}", "([a-z ]+)").replace("{w}", "([a-z]+)");
    Regex::new(&format!("^(?:{body})$")).expect("valid command template")
}

static PATTERNS: Lazy<Vec<Pattern>> = Lazy::new(|| {
    PATTERN_TABLE
        .iter()
        .flat_map(|(verb, templates)| {
            templates.iter().map(|t| Pattern {
                verb: *verb,
                re: compile(t),
            })
        })
        .collect()
});

pub fn parse_command(input: &str) -> Intent {
    let normalized = normalize(input);

    if normalized.is_empty() {
        return Intent {
            verb: Verb::NoInput,
            original: normalized,
            args: vec![],
        };
    }

    for pattern in PATTERNS.iter() {
        if let Some(caps) = pattern.re.captures(&normalized) {
            let args = caps
                .iter()
                .skip(1)
                .flatten()
                .map(|m| m.as_str().trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();

            return Intent {
                verb: pattern.verb,
                original: normalized,
                args,
            };
        }
    }

    Intent {
        verb: Verb::BadInput,
        original: normalized,
        args: vec![],
    }
}

fn normalize(s: &str) -> String {
    // lowercase, trim, collapse spaces
    let mut out = String::with_capacity(s.len());
    let mut last_space = false;
    for ch in s.trim().chars() {
        let c = ch.to_ascii_lowercase();
        if c.is_whitespace() {
            if !last_space {
                out.push(' ');
                last_space = true;
            }
        } else {
            out.push(c);
            last_space = false;
        }
    }
    out
}
