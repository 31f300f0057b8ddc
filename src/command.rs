//! Command module
//!
//! Describes possible commands used during gameplay and parses them from
//! raw input lines.

/// Commands that can be executed by the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Inventory,
    Go(Option<String>),
    Look,
    Quit,
    Take(Option<String>),
    Unknown,
}

/// Splits an input line into lowercase tokens.
///
/// Tokens are maximal runs of alphanumeric characters; punctuation and any
/// other separators are discarded. Stricter than whitespace splitting, so
/// `"pegar a chave!!"` yields `["pegar", "a", "chave"]`.
pub fn tokenize(input: &str) -> Vec<String> {
    input
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses an input string and returns a corresponding `Command` if recognized.
///
/// The first token is the command keyword; the second (if any) is its single
/// argument. Further tokens are silently discarded.
pub fn parse_command(input: &str) -> Command {
    let tokens = tokenize(input);
    let words: Vec<&str> = tokens.iter().map(String::as_str).collect();
    match words.as_slice() {
        ["olhar", ..] => Command::Look,
        ["ir", rest @ ..] => Command::Go(rest.first().map(|s| (*s).to_string())),
        ["pegar", rest @ ..] => Command::Take(rest.first().map(|s| (*s).to_string())),
        ["inventario" | "inventário", ..] => Command::Inventory,
        ["ajuda", ..] => Command::Help,
        ["sair", ..] => Command::Quit,
        _ => Command::Unknown,
    }
}
