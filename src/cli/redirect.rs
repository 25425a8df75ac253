//! `redirect` command: look up the current location of a legacy URL.

use anyhow::{Result, bail};

use crate::redirects;

/// Print the mapping for a historical URL, or fail when none exists.
pub fn run_redirect(url: &str) -> Result<()> {
    match redirects::lookup(url) {
        Some(target) => {
            println!("{target}");
            Ok(())
        }
        None => bail!("not found"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_url_succeeds() {
        assert!(run_redirect("https://v8project.blogspot.com/2018/09/dataview.html").is_ok());
    }

    #[test]
    fn test_unknown_url_fails() {
        let err = run_redirect("https://example.com/nope").unwrap_err();
        assert_eq!(err.to_string(), "not found");
    }
}
