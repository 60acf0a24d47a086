use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use lexicard_anki::{CardAssembler, CardType, WordEntry};
use lexicard_config::Config;
use lexicard_core::Engine;
use lexicard_types::{DictionaryKey, Language, PresentationMode};

#[derive(Parser, Debug)]
#[command(
    name = "lexicard",
    about = "Turn saved dictionary pages into flashcard text",
    version
)]
pub struct Cli {
    /// JSON profile; defaults plus LEXICARD_* environment overrides otherwise
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the dictionaries available for a language
    Dictionaries {
        #[arg(long)]
        lang: Option<Language>,
    },
    /// Print the normalized definition found in a saved dictionary page
    Define {
        page: PathBuf,
        #[arg(long)]
        word: String,
        #[arg(long)]
        lang: Option<Language>,
        #[arg(long)]
        id: Option<u8>,
        /// Highlight (a) or redact (b) the word in the output
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,
    },
    /// Print the spellings searched for when highlighting a word
    Forms {
        word: String,
        #[arg(long)]
        lang: Option<Language>,
    },
    /// Print the front and back of a card as JSON
    Card {
        page: PathBuf,
        #[arg(long)]
        word: String,
        /// Book passage the word was looked up from
        #[arg(long, default_value = "")]
        usage: String,
        #[arg(long)]
        lang: Option<Language>,
        #[arg(long)]
        id: Option<u8>,
        #[arg(long, value_enum, default_value_t = ModeArg::A)]
        card_type: ModeArg,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ModeArg {
    A,
    B,
}

impl From<ModeArg> for CardType {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::A => CardType::A,
            ModeArg::B => CardType::B,
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let engine = Engine::new(&config)?;

    match cli.command {
        Command::Dictionaries { lang } => handle_dictionaries(&engine, lang),
        Command::Define {
            page,
            word,
            lang,
            id,
            mode,
        } => {
            let key = pick_key(&config, lang, id);
            handle_define(&engine, key, &page, &word, mode)
        }
        Command::Forms { word, lang } => {
            handle_forms(&engine, &word, lang.unwrap_or(config.dictionary.language))
        }
        Command::Card {
            page,
            word,
            usage,
            lang,
            id,
            card_type,
        } => {
            let key = pick_key(&config, lang, id);
            handle_card(&engine, &config, key, &page, word, usage, card_type.into())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Reading profile {}", path.display()))?;
            Config::from_json(&json).with_context(|| format!("Parsing profile {}", path.display()))
        }
        None => Ok(Config::new()),
    }
}

fn pick_key(config: &Config, lang: Option<Language>, id: Option<u8>) -> DictionaryKey {
    DictionaryKey::new(
        lang.unwrap_or(config.dictionary.language),
        id.unwrap_or(config.dictionary.id),
    )
}

fn read_page(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Reading page {}", path.display()))
}

fn handle_dictionaries(engine: &Engine, lang: Option<Language>) -> Result<()> {
    let languages = match lang {
        Some(lang) => vec![lang],
        None => Language::ALL.to_vec(),
    };

    for language in languages {
        for ruleset in engine.registry().dictionaries_for(language) {
            println!(
                "{}::{}::{} -> {}",
                ruleset.key, ruleset.info.name, ruleset.info.description, ruleset.info.url
            );
        }
    }
    Ok(())
}

fn handle_define(
    engine: &Engine,
    key: DictionaryKey,
    page: &Path,
    word: &str,
    mode: Option<ModeArg>,
) -> Result<()> {
    let ruleset = engine.ruleset(key)?;
    let html = read_page(page)?;
    let definition = ruleset.define(&html, word);

    let output = match (mode, definition.text()) {
        (Some(mode), Some(text)) => {
            let mode = PresentationMode::from(CardType::from(mode));
            engine.present(text, word, key.language, mode, ruleset.quirk)?
        }
        _ => definition.to_string(),
    };

    println!("{output}");
    Ok(())
}

fn handle_forms(engine: &Engine, word: &str, lang: Language) -> Result<()> {
    for form in engine.forms(word, lang)?.iter() {
        println!("{form}");
    }
    Ok(())
}

fn handle_card(
    engine: &Engine,
    config: &Config,
    key: DictionaryKey,
    page: &Path,
    word: String,
    usage: String,
    card_type: CardType,
) -> Result<()> {
    let assembler = CardAssembler::new(engine, config, key, card_type)?;
    let html = read_page(page)?;
    let report = assembler.assemble(&[WordEntry::new(word, usage, html)]);

    if let Some(failed) = report.failed.first() {
        anyhow::bail!("{}: {}", failed.word, failed.reason);
    }
    match report.cards.first() {
        Some(card) => println!("{}", serde_json::to_string_pretty(card)?),
        None => println!("{}", lexicard_core::NOT_FOUND),
    }
    Ok(())
}
