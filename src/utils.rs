use anyhow::Result;

/// Validate a branch name before handing it to a backend.
///
/// The backends do their own validation; this catches the inputs that are
/// never legitimate (injection attempts, traversal, control characters) with
/// a clearer message than a backend failure.
pub fn validate_branch_name(branch_name: &str) -> Result<()> {
    if branch_name.is_empty() {
        anyhow::bail!("Branch name cannot be empty");
    }

    if branch_name.contains("..") {
        anyhow::bail!("Branch name cannot contain '..'");
    }

    if branch_name.starts_with('/') || branch_name.ends_with('/') {
        anyhow::bail!("Branch name cannot start or end with '/'");
    }

    if branch_name.starts_with('-') {
        anyhow::bail!("Branch name cannot start with '-'");
    }

    if branch_name.starts_with('.') {
        anyhow::bail!("Branch name cannot start with '.'");
    }

    if branch_name
        .chars()
        .any(|c| c.is_whitespace() || c.is_control())
    {
        anyhow::bail!("Branch name cannot contain whitespace or control characters");
    }

    const UNSAFE: &[char] = &[';', '&', '|', '$', '`', '<', '>'];
    if branch_name.contains(UNSAFE) {
        anyhow::bail!("Branch name contains unsafe characters");
    }

    if branch_name.len() > 255 {
        anyhow::bail!("Branch name too long (max 255 characters)");
    }

    Ok(())
}
