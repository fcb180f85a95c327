use crate::constants::{
    DEFAULT_MODEL, DEFAULT_PROMPT, ENV_API_KEY, ENV_MODEL, ENV_PROXY_URL, ENV_SYSTEM_PROMPT,
    ENV_UPSTREAM_URL, PLACEHOLDER_API_KEY, PROXY_BASE_URL, UPSTREAM_BASE_URL,
};
use colored::Colorize;

pub fn print_help() {
    println!("{:━^60}", " PROXY PROBE ".yellow());
    println!("Usage:");
    println!("  {} [option] [prompt]", "probe".bold().green());
    println!("\nOptions:");
    println!(
        "  {}   Send one chat completion through the proxy (default).",
        " "
    );
    println!(
        "  {}   List the models the proxy reports for the upstream.",
        "m".bold().cyan()
    );
    println!(
        "  {}     Display this help message.",
        "-h, -help".bold().blue()
    );
    println!("\nArguments:");
    println!(
        "  {}  Prompt text (default: \"{}\").",
        "<prompt>".bold().green(),
        DEFAULT_PROMPT
    );
    println!(
        "\nEnvironment (also read from a {} file in the working directory):",
        ".env".bold()
    );
    println!("  {}  {}", ENV_PROXY_URL.bold(), PROXY_BASE_URL);
    println!("  {}  {}", ENV_UPSTREAM_URL.bold(), UPSTREAM_BASE_URL);
    println!("  {}  {}", ENV_API_KEY.bold(), PLACEHOLDER_API_KEY);
    println!("  {}  {}", ENV_MODEL.bold(), DEFAULT_MODEL);
    println!("  {}  (unset: no system message)", ENV_SYSTEM_PROMPT.bold());
    println!("\nExamples:");
    println!("  {}", "probe".bold().green());
    println!(
        "  {} What is the capital of the United States?",
        "probe".bold().green()
    );
    println!("  {}", "probe m".bold().cyan());
    println!("{:━^60}", "".yellow());
}
