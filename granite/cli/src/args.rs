use clap::builder::NonEmptyStringValueParser;
use clap::Parser;

/// Generate text from a prompt with IBM Granite.
///
/// Downloads the checkpoint into the local cache on first use, then prints
/// the prompt followed by up to 100 generated tokens.
#[derive(Parser, Debug)]
#[command(name = "granite-infer", version, about, arg_required_else_help = true)]
pub struct Cli {
    /// Treat every following argument as prompt text.
    #[arg(long)]
    pub prompt: bool,

    /// Prompt text. Words are joined with single spaces; once the first word
    /// is seen, everything after it is prompt text, flags included.
    #[arg(
        value_name = "TEXT",
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_parser = NonEmptyStringValueParser::new()
    )]
    text: Vec<String>,
}

impl Cli {
    /// The prompt as one string, words separated by single spaces.
    pub fn prompt_text(&self) -> String {
        self.text.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("granite-infer").chain(args.iter().copied()))
    }

    #[test]
    fn prompt_flag_joins_words() {
        let cli = parse(&["--prompt", "The", "quick", "fox"]).unwrap();
        assert_eq!(cli.prompt_text(), "The quick fox");
    }

    #[test]
    fn prompt_flag_single_quoted_argument() {
        let cli = parse(&["--prompt", "hello world"]).unwrap();
        assert_eq!(cli.prompt_text(), "hello world");
    }

    #[test]
    fn bare_argument_matches_prompt_flag() {
        let bare = parse(&["hello world"]).unwrap();
        let flagged = parse(&["--prompt", "hello world"]).unwrap();
        assert_eq!(bare.prompt_text(), "hello world");
        assert_eq!(bare.prompt_text(), flagged.prompt_text());
    }

    #[test]
    fn bare_words_are_joined() {
        let cli = parse(&["The", "quick", "fox"]).unwrap();
        assert_eq!(cli.prompt_text(), "The quick fox");
    }

    #[test]
    fn no_arguments_is_an_error() {
        let err = parse(&[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand);
    }

    #[test]
    fn prompt_flag_without_words_is_an_error() {
        let err = parse(&["--prompt"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn empty_prompt_is_an_error() {
        assert!(parse(&[""]).is_err());
        assert!(parse(&["--prompt", ""]).is_err());
    }

    #[test]
    fn hyphen_word_after_prompt_flag_is_text() {
        let cli = parse(&["--prompt", "What", "does", "-v", "do"]).unwrap();
        assert!(cli.prompt);
        assert_eq!(cli.prompt_text(), "What does -v do");
    }

    #[test]
    fn bare_prompt_may_start_with_hyphen() {
        let cli = parse(&["-5 degrees"]).unwrap();
        assert_eq!(cli.prompt_text(), "-5 degrees");
        let cli = parse(&["-5", "degrees"]).unwrap();
        assert_eq!(cli.prompt_text(), "-5 degrees");
    }

    #[test]
    fn help_word_inside_prompt_is_text() {
        let cli = parse(&["--prompt", "explain", "--help"]).unwrap();
        assert_eq!(cli.prompt_text(), "explain --help");
    }

    #[test]
    fn later_prompt_flag_is_text() {
        let cli = parse(&["hello", "--prompt", "world"]).unwrap();
        assert!(!cli.prompt);
        assert_eq!(cli.prompt_text(), "hello --prompt world");
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
