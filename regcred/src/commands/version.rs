/// Get the version string for regcred and libregcred
pub fn get_version_string() -> String {
    format!(
        "regcred {}\nlibregcred {}",
        env!("CARGO_PKG_VERSION"),
        libregcred::version()
    )
}

/// Print version information to stdout
pub fn print_version() {
    println!("{}", get_version_string());
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;
