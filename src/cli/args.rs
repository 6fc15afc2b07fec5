// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs)]
/// msdist - Minimum String Distance and optimal alignments for text entry evaluation
pub struct Args {
    /// presented (reference) text for single-pair mode
    #[argh(option, short = 'p')]
    pub presented: Option<String>,

    /// transcribed (entered) text for single-pair mode
    #[argh(option, short = 't')]
    pub transcribed: Option<String>,

    /// read presented/transcribed line pairs from stdin until EOF or two empty lines
    #[argh(switch, short = 'i')]
    pub interactive: bool,

    /// trial file for batch scoring (.tsv, .txt or .csv)
    #[argh(option)]
    pub input: Option<String>,

    /// output results file for batch scoring
    #[argh(option)]
    pub output: Option<String>,

    /// output format: tsv, csv, json (default: tsv)
    #[argh(option, default = "String::from(\"tsv\")")]
    pub format: String,

    /// allow adjacent transpositions as a single edit
    #[argh(switch)]
    pub transpositions: bool,

    /// compare word sequences instead of characters
    #[argh(switch, short = 'w')]
    pub word_level: bool,

    /// regex separating words in word-level mode (default: \s+)
    #[argh(option, default = "String::from(\"\\\\s+\")")]
    pub word_delimiter: String,

    /// item comparator: exact, ignore-case (default: exact)
    #[argh(option, default = "String::from(\"exact\")")]
    pub comparator: String,

    /// frontier size above which the alignment search is thinned (default: 200)
    #[argh(option, default = "200")]
    pub thinning_threshold: usize,

    /// hard limit on search nodes expanded per pair (default: unlimited)
    #[argh(option)]
    pub max_expansions: Option<usize>,

    /// print each alignment as an annotated matrix path
    #[argh(switch, short = 'a')]
    pub show_paths: bool,

    /// maximum number of alignments printed per pair (default: 10)
    #[argh(option, default = "10")]
    pub max_shown: usize,

    /// number of threads for batch scoring (default: auto-detect)
    #[argh(option)]
    pub threads: Option<usize>,

    /// suppress status lines
    #[argh(switch, short = 'q')]
    pub quiet: bool,

    /// validate inputs without computation (dry run)
    #[argh(switch)]
    pub dry_run: bool,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}

/// How the binary was asked to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Single,
    Interactive,
    Batch,
}

impl Args {
    /// Resolve the run mode from the input options
    pub fn run_mode(&self) -> Result<RunMode, String> {
        let single = self.presented.is_some() || self.transcribed.is_some();
        let batch = self.input.is_some();

        match (single, self.interactive, batch) {
            (true, false, false) => {
                if self.presented.is_none() || self.transcribed.is_none() {
                    return Err("--presented and --transcribed must be given together".to_string());
                }
                Ok(RunMode::Single)
            }
            (false, true, false) => Ok(RunMode::Interactive),
            (false, false, true) => Ok(RunMode::Batch),
            (false, false, false) => Err(
                "Nothing to do. Use --presented/--transcribed, --interactive or --input".to_string(),
            ),
            _ => Err("--presented/--transcribed, --interactive and --input are mutually exclusive".to_string()),
        }
    }

    /// Default arguments, as if the binary was started without options
    pub fn defaults() -> Self {
        Self {
            presented: None,
            transcribed: None,
            interactive: false,
            input: None,
            output: None,
            format: "tsv".to_string(),
            transpositions: false,
            word_level: false,
            word_delimiter: "\\s+".to_string(),
            comparator: "exact".to_string(),
            thinning_threshold: 200,
            max_expansions: None,
            show_paths: false,
            max_shown: 10,
            threads: None,
            quiet: false,
            dry_run: false,
            config: None,
            generate_config: false,
        }
    }
}
