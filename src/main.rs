use clap::{Arg, ArgAction, Command};
use res_translate::config::Config;
use res_translate::mt::{
    GoogleTranslateProvider, GoogleWebTranslator, MachineTranslator, MockMode, MockTranslator,
};
use res_translate::{Error, Pipeline, parse_language_list};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("res-translate")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Machine-translate Android strings.xml into values-<lang> folders")
        .arg(
            Arg::new("languages")
                .help("Target platform language codes, e.g. vi,ja or pt-BR (prompted when absent)")
                .num_args(0..)
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("JSON configuration file"),
        )
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .help("Baseline strings.xml (default: app/src/main/res/values/strings.xml)"),
        )
        .arg(
            Arg::new("res-dir")
                .long("res-dir")
                .short('r')
                .help("Directory holding the values-* folders (default: app/src/main/res)"),
        )
        .arg(
            Arg::new("source-locale")
                .long("source")
                .short('s')
                .help("Source language code (default: auto)"),
        )
        .arg(
            Arg::new("api-key")
                .long("api-key")
                .help("Use the Cloud Translation API with this key"),
        )
        .arg(
            Arg::new("backup")
                .long("backup")
                .short('b')
                .help("Rename an existing output file to strings_old.xml before writing")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("mock")
                .long("mock")
                .short('m')
                .help("Use the offline mock translator instead of Google Translate")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log every decision, not only progress")
                .action(ArgAction::SetTrue),
        )
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_target(false)
        .without_time()
        .init();
}

fn build_config(matches: &clap::ArgMatches) -> Result<Config, Error> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => Config::from_file(&PathBuf::from(path))?,
        None => Config::default(),
    };
    if let Some(input) = matches.get_one::<String>("input") {
        config.input_path = PathBuf::from(input);
    }
    if let Some(res_dir) = matches.get_one::<String>("res-dir") {
        config.res_dir = PathBuf::from(res_dir);
    }
    if let Some(source) = matches.get_one::<String>("source-locale") {
        config.source_lang = source.clone();
    }
    if let Some(key) = matches.get_one::<String>("api-key") {
        config.api_key = Some(key.clone());
    }
    if matches.get_flag("backup") {
        config.backup = true;
    }
    Ok(config)
}

fn build_translator(config: &Config, use_mock: bool) -> Result<Box<dyn MachineTranslator>, Error> {
    if use_mock {
        return Ok(Box::new(MockTranslator::new(MockMode::Suffix)));
    }
    match &config.api_key {
        Some(key) => Ok(Box::new(GoogleTranslateProvider::new(key.clone())?)),
        None => Ok(Box::new(GoogleWebTranslator::new()?)),
    }
}

fn prompt_languages() -> io::Result<Vec<String>> {
    print!("Enter target language codes, comma separated (e.g. vi,ja,ko): ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(parse_language_list(&line))
}

fn requested_languages(matches: &clap::ArgMatches, config: &Config) -> io::Result<Vec<String>> {
    let from_args: Vec<String> = matches
        .get_many::<String>("languages")
        .into_iter()
        .flatten()
        .flat_map(|arg| parse_language_list(arg))
        .collect();
    if !from_args.is_empty() {
        return Ok(from_args);
    }
    if !config.target_langs.is_empty() {
        return Ok(config.target_langs.clone());
    }
    prompt_languages()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("verbose"));

    let config = match build_config(&matches) {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    // Checked before prompting so nobody types a list for nothing
    if !config.input_path.is_file() {
        error!("{}", Error::MissingInput(config.input_path.clone()));
        return ExitCode::FAILURE;
    }

    let languages = match requested_languages(&matches, &config) {
        Ok(languages) => languages,
        Err(err) => {
            error!("Could not read the language list: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let translator = match build_translator(&config, matches.get_flag("mock")) {
        Ok(translator) => translator,
        Err(err) => {
            error!("Failed to initialize translator: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let pipeline = Pipeline::new(config, translator);
    let summary = match pipeline.run(&languages).await {
        Ok(summary) => summary,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    for failure in &summary.failures {
        error!("{} was not written: {}", failure.language, failure.error);
    }
    info!("All languages processed.");

    if summary.has_failures() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        cli().debug_assert();
    }

    #[test]
    fn test_languages_from_arguments() {
        let matches = cli().get_matches_from(["res-translate", "vi,ja", "pt-BR"]);
        let languages = requested_languages(&matches, &Config::default()).unwrap();
        assert_eq!(languages, vec!["vi", "ja", "pt-BR"]);
    }

    #[test]
    fn test_config_languages_used_without_arguments() {
        let matches = cli().get_matches_from(["res-translate"]);
        let config = Config {
            target_langs: vec!["ko".to_string()],
            ..Config::default()
        };
        assert_eq!(requested_languages(&matches, &config).unwrap(), vec!["ko"]);
    }

    #[test]
    fn test_flags_override_config() {
        let matches = cli().get_matches_from([
            "res-translate",
            "--input",
            "base.xml",
            "--res-dir",
            "out",
            "--source",
            "en",
            "--backup",
        ]);
        let config = build_config(&matches).unwrap();
        assert_eq!(config.input_path, PathBuf::from("base.xml"));
        assert_eq!(config.res_dir, PathBuf::from("out"));
        assert_eq!(config.source_lang, "en");
        assert!(config.backup);
    }

    #[test]
    fn test_translator_selection() {
        let config = Config::default();
        assert_eq!(
            build_translator(&config, true).unwrap().provider_name(),
            "Mock Translator"
        );
        assert_eq!(
            build_translator(&config, false).unwrap().provider_name(),
            "Google Translate"
        );
        let keyed = Config {
            api_key: Some("key".to_string()),
            ..Config::default()
        };
        assert_eq!(
            build_translator(&keyed, false).unwrap().provider_name(),
            "Google Cloud Translation"
        );
    }
}
