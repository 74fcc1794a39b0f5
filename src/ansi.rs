pub const RESET: &str = "\x1b[0m";
pub const FG_RED: &str = "\x1b[31m";

/// Build an ANSI SGR sequence given a fg name and attributes.
/// Unknown names are ignored; if nothing maps, returns "".
pub fn compose_sgr(fg: Option<&str>, attrs: &[&str]) -> String {
    let mut codes: Vec<&'static str> = Vec::new();

    if let Some(name) = fg
        && let Some(code) = fg_code(name)
    {
        codes.push(code);
    }
    for a in attrs {
        if let Some(code) = attr_code(a) {
            codes.push(code);
        }
    }

    if codes.is_empty() {
        return String::new();
    }

    format!("\x1b[{}m", codes.join(";"))
}

/// Wrap `text` in the given colour. Returns the text untouched when the colour is unknown.
pub fn paint(text: &str, fg: &str, attrs: &[&str]) -> String {
    let sgr = compose_sgr(Some(fg), attrs);
    if sgr.is_empty() {
        return text.to_string();
    }
    format!("{sgr}{text}{RESET}")
}

fn fg_code(name: &str) -> Option<&'static str> {
    match norm(name).as_str() {
        "black" => Some("30"),
        "red" => Some("31"),
        "green" => Some("32"),
        "yellow" => Some("33"),
        "blue" => Some("34"),
        "magenta" => Some("35"),
        "cyan" => Some("36"),
        "white" => Some("37"),
        "gray" | "grey" | "bright_black" => Some("90"),
        "bright_red" => Some("91"),
        "bright_green" => Some("92"),
        "bright_yellow" => Some("93"),
        "default" | "reset" => Some("39"),
        _ => None,
    }
}

fn attr_code(name: &str) -> Option<&'static str> {
    match norm(name).as_str() {
        "bold" => Some("1"),
        "dim" => Some("2"),
        "italic" => Some("3"),
        "underline" => Some("4"),
        _ => None,
    }
}

fn norm(s: &str) -> String {
    s.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_compose() {
        assert_eq!(compose_sgr(Some("red"), &["bold"]), "\x1b[31;1m");
        assert_eq!(compose_sgr(Some("Bright_Red"), &[]), "\x1b[91m");
        assert_eq!(compose_sgr(Some("chartreuse"), &["wobbly"]), "");
    }

    #[test]
    fn t_paint() {
        assert_eq!(paint("dead", "red", &[]), format!("{FG_RED}dead{RESET}"));
        assert_eq!(paint("plain", "nope", &[]), "plain");
    }
}
