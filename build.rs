fn main() {
    // Capture the current timestamp as the build time
    let build_time = chrono::Utc::now().to_rfc3339();

    // Also set as environment variable for use in env! macro
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // Page variant overrides are read with option_env!
    println!("cargo:rerun-if-env-changed=PORTFOLIO_THEME");
    println!("cargo:rerun-if-env-changed=PORTFOLIO_ANIMATION");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=content");
}
