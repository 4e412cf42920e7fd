// Command abbreviation matching for the befast-status CLI

/// Find all commands that start with the given prefix (case-insensitive)
pub fn find_matching_commands<'a>(prefix: &str, commands: &'a [&str]) -> Vec<&'a str> {
    let prefix_lower = prefix.to_lowercase();
    commands.iter()
        .filter(|cmd| cmd.to_lowercase().starts_with(&prefix_lower))
        .copied()
        .collect()
}

/// Find a unique command match for the given prefix
/// Returns Ok(command) if exactly one match, Err(matches) if ambiguous, Err(empty) if no match
/// Note: Exact matches take precedence over prefix matches
pub fn find_unique_command<'a>(prefix: &str, commands: &'a [&str]) -> Result<&'a str, Vec<&'a str>> {
    let prefix_lower = prefix.to_lowercase();
    for cmd in commands {
        if cmd.to_lowercase() == prefix_lower {
            return Ok(*cmd);
        }
    }

    let matches = find_matching_commands(prefix, commands);

    if matches.is_empty() {
        Err(Vec::new())
    } else if matches.len() == 1 {
        Ok(matches[0])
    } else {
        Err(matches)
    }
}

/// Top-level commands
pub const TOP_LEVEL_COMMANDS: &[&str] = &[
    "normalize", "classify", "list", "aliases", "summary", "check"
];

/// Expand an abbreviated command in first position
/// Everything after the command is raw status input and passes through untouched
pub fn expand_command_abbreviations(args: Vec<String>) -> Result<Vec<String>, String> {
    let Some(first) = args.first() else {
        return Ok(args);
    };
    if first.starts_with('-') {
        return Ok(args);
    }

    match find_unique_command(first, TOP_LEVEL_COMMANDS) {
        Ok(full_cmd) => {
            let mut expanded = Vec::with_capacity(args.len());
            expanded.push(full_cmd.to_string());
            expanded.extend(args.into_iter().skip(1));
            Ok(expanded)
        }
        // No match - let clap report it (or handle "help")
        Err(matches) if matches.is_empty() => Ok(args),
        Err(matches) => Err(format!(
            "Ambiguous command '{}'. Did you mean one of: {}?",
            first,
            matches.join(", ")
        )),
    }
}
