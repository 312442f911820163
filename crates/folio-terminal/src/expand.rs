//! Line expansions applied before parsing: history, aliases, variables.

use std::collections::BTreeMap;

use folio_types::error::{FolioError, Result};

/// Replace a whole-line `!!` or `!n` (1-based) with the history entry.
pub fn expand_history(line: &str, history: &[String]) -> Result<String> {
    if line == "!!" {
        return history
            .last()
            .cloned()
            .ok_or_else(|| FolioError::Command("!!: event not found".to_string()));
    }
    if let Some(n_str) = line.strip_prefix('!')
        && let Ok(n) = n_str.parse::<usize>()
    {
        if n == 0 || n > history.len() {
            return Err(FolioError::Command(format!("!{n}: event not found")));
        }
        return Ok(history[n - 1].clone());
    }
    Ok(line.to_string())
}

/// Expand a leading alias, re-expanding the result up to `max_depth` times.
///
/// Only the first word is considered, and only when it is the whole line or
/// is followed by a space. An alias is expanded at most once per call, so
/// `alias ls='ls -la'` terminates.
pub fn expand_aliases(
    line: &str,
    aliases: &BTreeMap<String, String>,
    max_depth: usize,
) -> String {
    let mut current = line.to_string();
    let mut expanded: Vec<String> = Vec::new();

    for _ in 0..max_depth {
        let (first, rest) = match current.split_once(' ') {
            Some((first, rest)) => (first, Some(rest)),
            None => (current.as_str(), None),
        };
        if expanded.iter().any(|a| a == first) {
            log::debug!("Alias cycle at {first}");
            break;
        }
        let Some(expansion) = aliases.get(first) else {
            break;
        };
        expanded.push(first.to_string());
        let next = match rest {
            Some(rest) => format!("{expansion} {rest}"),
            None => expansion.clone(),
        };
        current = next;
    }
    current
}

/// Substitute `$NAME` and `${NAME}` using `lookup`. Unknown names are left
/// exactly as written.
pub fn expand_variables(input: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(dollar) = rest.find('$') {
        out.push_str(&rest[..dollar]);
        let after = &rest[dollar + 1..];

        if let Some(inner) = after.strip_prefix('{')
            && let Some(end) = inner.find('}')
        {
            let name = &inner[..end];
            match lookup(name).filter(|_| is_var_name(name)) {
                Some(value) => out.push_str(&value),
                None => out.push_str(&rest[dollar..dollar + end + 3]),
            }
            rest = &inner[end + 1..];
            continue;
        }

        let len = after
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
            .count();
        if len == 0 {
            out.push('$');
            rest = after;
            continue;
        }
        let name = &after[..len];
        match lookup(name) {
            Some(value) => out.push_str(&value),
            None => {
                out.push('$');
                out.push_str(name);
            },
        }
        rest = &after[len..];
    }
    out.push_str(rest);
    out
}

fn is_var_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history() -> Vec<String> {
        vec!["ls".into(), "cd blog".into(), "pwd".into()]
    }

    #[test]
    fn history_bang_bang() {
        assert_eq!(expand_history("!!", &history()).unwrap(), "pwd");
        assert!(expand_history("!!", &[]).is_err());
    }

    #[test]
    fn history_by_number() {
        assert_eq!(expand_history("!2", &history()).unwrap(), "cd blog");
        assert!(expand_history("!0", &history()).is_err());
        assert!(expand_history("!9", &history()).is_err());
        assert_eq!(expand_history("!x", &history()).unwrap(), "!x");
        assert_eq!(expand_history("echo hi", &history()).unwrap(), "echo hi");
    }

    fn aliases(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn alias_replaces_first_word() {
        let table = aliases(&[("ll", "ls -la")]);
        assert_eq!(expand_aliases("ll /tmp", &table, 8), "ls -la /tmp");
        assert_eq!(expand_aliases("ll", &table, 8), "ls -la");
        assert_eq!(expand_aliases("lll /tmp", &table, 8), "lll /tmp");
        assert_eq!(expand_aliases("echo ll", &table, 8), "echo ll");
    }

    #[test]
    fn alias_chains_until_depth() {
        let table = aliases(&[("a", "b x"), ("b", "c y"), ("c", "echo z")]);
        assert_eq!(expand_aliases("a", &table, 8), "echo z y x");
        assert_eq!(expand_aliases("a", &table, 1), "b x");
    }

    #[test]
    fn alias_cycles_stop() {
        let table = aliases(&[("ls", "ls -la")]);
        assert_eq!(expand_aliases("ls /", &table, 8), "ls -la /");
        let table = aliases(&[("a", "b 1"), ("b", "a 2")]);
        assert_eq!(expand_aliases("a", &table, 8), "a 2 1");
    }

    fn vars(name: &str) -> Option<String> {
        match name {
            "HOME" => Some("/".to_string()),
            "USER" => Some("guest".to_string()),
            _ => None,
        }
    }

    #[test]
    fn variables_plain_and_braced() {
        assert_eq!(expand_variables("cd $HOME", vars), "cd /");
        assert_eq!(expand_variables("hi ${USER}!", vars), "hi guest!");
        assert_eq!(expand_variables("$USER$USER", vars), "guestguest");
    }

    #[test]
    fn unknown_variables_stay_verbatim() {
        assert_eq!(expand_variables("echo $NOPE", vars), "echo $NOPE");
        assert_eq!(expand_variables("echo ${NOPE}", vars), "echo ${NOPE}");
        assert_eq!(expand_variables("cost $5", vars), "cost $5");
        assert_eq!(expand_variables("a $ b", vars), "a $ b");
        assert_eq!(expand_variables("end$", vars), "end$");
        assert_eq!(expand_variables("${open", vars), "${open");
    }
}
