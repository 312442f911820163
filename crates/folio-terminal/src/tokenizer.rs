//! Splits one command into words, resolving quotes and backslash escapes.

/// Tokenize a command respecting quotes and backslash escapes.
///
/// - `"` and `'` open a quoted region closed by the same character.
/// - `\n`, `\t`, `\\`, `\"` and `\'` become the literal character, inside or
///   outside quotes. Any other `\x` is kept as both characters.
/// - An unterminated quote swallows the rest of the input into the last word.
/// - Empty words are never produced.
pub fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut chars = input.chars();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => match chars.next() {
                Some(next) => match unescape(next) {
                    Some(literal) => current.push(literal),
                    None => {
                        current.push('\\');
                        current.push(next);
                    },
                },
                None => current.push('\\'),
            },
            '"' | '\'' => match quote {
                None => quote = Some(ch),
                Some(open) if open == ch => quote = None,
                Some(_) => current.push(ch),
            },
            c if c.is_whitespace() && quote.is_none() => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            },
            _ => current.push(ch),
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

fn unescape(ch: char) -> Option<char> {
    match ch {
        'n' => Some('\n'),
        't' => Some('\t'),
        '\\' | '"' | '\'' => Some(ch),
        _ => None,
    }
}
