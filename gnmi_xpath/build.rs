// build.rs - TOML-driven compile-time limit generation
use std::env;
use std::fs;
use std::path::Path;

#[derive(serde::Deserialize)]
struct CompileTimeConfig {
    lexical: LexicalLimits,
    path: PathLimits,
    logging: LoggingLimits,
}

#[derive(serde::Deserialize)]
struct LexicalLimits {
    max_xpath_length: usize,
    max_token_count: usize,
    max_text_length: usize,
}

#[derive(serde::Deserialize)]
struct PathLimits {
    max_elements: usize,
    max_keys_per_element: usize,
}

#[derive(serde::Deserialize)]
struct LoggingLimits {
    max_logged_value_length: usize,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=GNMI_XPATH_BUILD_PROFILE");
    println!("cargo:rerun-if-env-changed=GNMI_XPATH_CONFIG_DIR");

    let profile =
        env::var("GNMI_XPATH_BUILD_PROFILE").unwrap_or_else(|_| "development".to_string());
    let config_dir = env::var("GNMI_XPATH_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    // Find workspace root (parent of gnmi_xpath directory)
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = Path::new(&manifest_dir)
        .parent()
        .expect("Could not find workspace root (parent directory)");

    let config_path = workspace_root
        .join(&config_dir)
        .join(format!("{}.toml", profile));

    println!("cargo:rerun-if-changed={}", config_path.display());

    if !config_path.exists() {
        panic!(
            "Configuration file not found: {}\nWorkspace root: {}\nLooking for: {}/{}/{}.toml",
            config_path.display(),
            workspace_root.display(),
            workspace_root.display(),
            config_dir,
            profile
        );
    }

    let config_content = fs::read_to_string(&config_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", config_path.display(), e));

    let config: CompileTimeConfig = toml::from_str(&config_content)
        .unwrap_or_else(|e| panic!("Invalid TOML in {}: {}", config_path.display(), e));

    validate_security_constraints(&config, &profile);
    generate_constants(&config, &profile);
}

fn validate_security_constraints(config: &CompileTimeConfig, profile: &str) {
    const ABSOLUTE_MAX_XPATH_LENGTH: usize = 1_048_576;
    const ABSOLUTE_MAX_ELEMENTS: usize = 10_000;

    if config.lexical.max_xpath_length == 0 || config.lexical.max_token_count == 0 {
        panic!("SECURITY: lexical limits must be non-zero");
    }

    if config.lexical.max_xpath_length > ABSOLUTE_MAX_XPATH_LENGTH {
        panic!("SECURITY: max_xpath_length exceeds absolute maximum");
    }

    if config.lexical.max_text_length > config.lexical.max_xpath_length {
        panic!("SECURITY: max_text_length cannot exceed max_xpath_length");
    }

    if config.path.max_elements == 0 || config.path.max_elements > ABSOLUTE_MAX_ELEMENTS {
        panic!("SECURITY: max_elements must be within 1..={}", ABSOLUTE_MAX_ELEMENTS);
    }

    if config.path.max_keys_per_element == 0 {
        panic!("SECURITY: max_keys_per_element must be non-zero");
    }

    if profile == "production" && config.lexical.max_xpath_length > 65_536 {
        panic!("PRODUCTION: max_xpath_length too high for production");
    }
}

fn generate_constants(config: &CompileTimeConfig, profile: &str) {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("constants.rs");

    let constants_code = format!(
        r#"
// Generated compile-time constants from TOML configuration
// Profile: {}
// DO NOT EDIT - Generated by build.rs

pub mod compile_time {{
    pub mod lexical {{
        pub const MAX_XPATH_LENGTH: usize = {};
        pub const MAX_TOKEN_COUNT: usize = {};
        pub const MAX_TEXT_LENGTH: usize = {};
    }}

    pub mod path {{
        pub const MAX_ELEMENTS: usize = {};
        pub const MAX_KEYS_PER_ELEMENT: usize = {};
    }}

    pub mod logging {{
        pub const MAX_LOGGED_VALUE_LENGTH: usize = {};
    }}
}}
"#,
        profile,
        config.lexical.max_xpath_length,
        config.lexical.max_token_count,
        config.lexical.max_text_length,
        config.path.max_elements,
        config.path.max_keys_per_element,
        config.logging.max_logged_value_length,
    );

    fs::write(output_path, constants_code).unwrap();
}
