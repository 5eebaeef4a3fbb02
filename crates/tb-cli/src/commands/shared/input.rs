use anyhow::Context;

/// Return `value` itself, or the content of the file it names when it starts
/// with `@`.
pub fn value_or_from_path(value: &str) -> anyhow::Result<String> {
    match value.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read definition file '{path}'")),
        None => Ok(value.to_string()),
    }
}

/// Reject an empty `--subject`.
pub fn require_subject(subject: &str) -> anyhow::Result<&str> {
    if subject.is_empty() {
        anyhow::bail!("subject is not specified");
    }
    Ok(subject)
}
