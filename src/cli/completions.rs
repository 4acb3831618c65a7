use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    folio completions bash > ~/.bash_completion.d/folio\n\n\
                  Generate zsh completions:\n    folio completions zsh > ~/.zfunc/_folio\n\n\
                  Generate fish completions:\n    folio completions fish > ~/.config/fish/completions/folio.fish\n\n\
                  Generate PowerShell completions:\n    folio completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
