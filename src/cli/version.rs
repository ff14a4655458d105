//! Version and usage output.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const USAGE: &str = "\
Usage: multiview [OPTIONS]

Options:
  --no-animations   Disable transition animations
  --state <DIR>     Directory holding the saved session
  -V, --version     Print version
  -h, --help        Print this help";

/// Prints the version string and exits successfully.
pub fn handle_version_command() -> ! {
    println!("multiview {}", VERSION);
    std::process::exit(0)
}

pub fn handle_help_command() -> ! {
    println!("multiview {}\n\n{}", VERSION, USAGE);
    std::process::exit(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_format() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2, "Version should have at least major.minor");
    }

    #[test]
    fn test_usage_lists_flags() {
        for flag in ["--no-animations", "--state", "--version", "--help"] {
            assert!(USAGE.contains(flag), "missing {}", flag);
        }
    }
}
