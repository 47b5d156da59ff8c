//! Version command handler

/// Render version information
pub fn version_info() -> String {
    format!(
        "{} {}\n  {}\n  License: {}\n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_LICENSE"),
    )
}

/// Display version information
pub fn display_version() {
    print!("{}", version_info());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_info() {
        let info = version_info();
        assert!(info.starts_with("runner-options "));
        assert!(info.contains(env!("CARGO_PKG_VERSION")));
    }
}
