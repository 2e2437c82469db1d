use std::collections::BTreeMap;

/// Environment overlay handed to a debug launch.
pub type EnvironmentMap = BTreeMap<String, String>;

/// Parse a free-form `KEY=VALUE KEY2="spaced value" --flag` string.
///
/// Double quotes group text and are dropped. A token without `=` becomes a
/// key with an empty value. A key that appears more than once keeps every
/// value, joined with a single space, instead of the last one winning.
/// Nothing here fails: stray characters end up in some key or value.
pub fn parse_environment_string(raw: &str) -> EnvironmentMap {
    let mut env = EnvironmentMap::new();
    let mut buffer = String::new();
    let mut key: Option<String> = None;
    let mut in_quote = false;

    for c in raw.chars() {
        match c {
            '"' => in_quote = !in_quote,
            '=' if !in_quote && key.is_none() => {
                key = Some(std::mem::take(&mut buffer));
            }
            ' ' if !in_quote => flush(&mut env, &mut key, &mut buffer),
            _ => buffer.push(c),
        }
    }
    flush(&mut env, &mut key, &mut buffer);

    env
}

fn flush(env: &mut EnvironmentMap, key: &mut Option<String>, buffer: &mut String) {
    let value = std::mem::take(buffer);
    match key.take() {
        Some(key) => insert_joined(env, key, value),
        // bare flag
        None if !value.is_empty() => insert_joined(env, value, String::new()),
        None => {}
    }
}

fn insert_joined(env: &mut EnvironmentMap, key: String, value: String) {
    env.entry(key)
        .and_modify(|existing| {
            existing.push(' ');
            existing.push_str(&value);
        })
        .or_insert(value);
}
