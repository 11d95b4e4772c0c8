use anyhow::{Context, Result, bail};

/// Split a `PROJECT#NUMBER` build reference
pub fn parse_build_ref(build_ref: &str) -> Result<(String, u64)> {
    let Some((project, number)) = build_ref.rsplit_once('#') else {
        bail!("Build reference '{build_ref}' must look like PROJECT#NUMBER");
    };

    if project.is_empty() {
        bail!("Build reference '{build_ref}' has no project");
    }

    let number = number
        .parse::<u64>()
        .with_context(|| format!("Invalid build number in '{build_ref}'"))?;

    Ok((project.to_string(), number))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build_ref() {
        assert_eq!(
            parse_build_ref("team/app#12").unwrap(),
            ("team/app".to_string(), 12)
        );
        assert!(parse_build_ref("team/app").is_err());
        assert!(parse_build_ref("#3").is_err());
        assert!(parse_build_ref("app#three").is_err());
    }
}
