//! Session summary printed after setup.
//!
//! Shows the resolved configuration, the flags that change it, and the exact
//! command that starts the coverage agent with the rendered prompt.

use crate::config::Configuration;
use crate::prompt::RenderedPrompt;
use std::io::Write;

/// Name of the installed binary, as shown in the override hint.
pub const BIN_NAME: &str = "coverage-agent";

const RULE_WIDTH: usize = 60;

/// Format the summary for `config` and `prompt`.
pub fn format_report(prompt: &RenderedPrompt, config: &Configuration) -> String {
    let rule = "━".repeat(RULE_WIDTH);
    let mut out = String::new();

    out.push_str("Setup complete!\n\n");
    out.push_str(&rule);
    out.push('\n');
    out.push_str("Configuration:\n\n");
    out.push_str(&format!(
        "  Tests directory:   {}\n",
        config.workspace_dir.display()
    ));
    if config.using_temp_dir {
        out.push_str("                    (using temp directory)\n");
    }
    out.push_str(&format!("  Output file:       {}\n\n", config.output_file));

    out.push_str("To change configuration, use:\n\n");
    out.push_str(&format!("  {} {}", BIN_NAME, config.mode));
    for flag in config.mode.override_flags() {
        out.push_str(" \\\n    ");
        out.push_str(flag);
    }
    out.push_str("\n\n");

    out.push_str(&rule);
    out.push('\n');
    out.push_str("Next Steps:\n\n");
    if !prompt.is_written() {
        out.push_str("  Warning: the prompt template was missing, so no prompt file was generated.\n\n");
    }
    out.push_str("  Start Claude Code with the coverage agent prompt:\n\n");
    out.push_str(&format!(
        "  claude \"{}\" \\\n       --append-system-prompt {}\n\n",
        config.mode.launch_phrase(),
        shell_words::quote(&prompt.path.to_string_lossy())
    ));
    out.push_str(&rule);
    out.push('\n');

    out
}

/// Write the summary to `out`, ignoring write errors.
pub fn write_report(out: &mut dyn Write, prompt: &RenderedPrompt, config: &Configuration) {
    let _ = out.write_all(format_report(prompt, config).as_bytes());
    let _ = out.flush();
}
