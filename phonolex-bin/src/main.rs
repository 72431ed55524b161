use std::io::{self, Read};
use std::path::PathBuf;

use gumdrop::Options;
use serde::Serialize;

use phonolex::remote::free_dict::{FreeDictClient, RemoteConfig};
use phonolex::resolver::{ResolutionResult, Resolver, ResolverConfig};
use phonolex::store::chunked::ChunkedStore;
use phonolex::store::memory::MemoryStore;
use phonolex::store::TranscriptionStore;
use phonolex::tokenizer::Tokenize;

trait OutputWriter {
    fn write_result(&mut self, word: &str, result: &ResolutionResult);
    fn finish(&mut self);
}

struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn write_result(&mut self, word: &str, result: &ResolutionResult) {
        match &result.transcription {
            Some(transcription) => println!("{}\t{}", word, transcription),
            None => println!("{}\t-", word),
        }
    }

    fn finish(&mut self) {}
}

#[derive(Serialize)]
struct ResolutionRecord {
    word: String,
    #[serde(flatten)]
    result: ResolutionResult,
}

#[derive(Serialize)]
struct JsonWriter {
    results: Vec<ResolutionRecord>,
}

impl JsonWriter {
    pub fn new() -> JsonWriter {
        JsonWriter { results: vec![] }
    }
}

impl OutputWriter for JsonWriter {
    fn write_result(&mut self, word: &str, result: &ResolutionResult) {
        self.results.push(ResolutionRecord {
            word: word.to_string(),
            result: result.clone(),
        });
    }

    fn finish(&mut self) {
        println!("{}", serde_json::to_string_pretty(&self).expect("serializing results"));
    }
}

#[derive(Debug, Options)]
struct Args {
    #[options(help = "print help message")]
    help: bool,

    #[options(command)]
    command: Option<Command>,
}

#[derive(Debug, Options)]
enum Command {
    #[options(help = "resolve transcriptions for the provided words")]
    Lookup(LookupArgs),

    #[options(help = "annotate text with transcriptions inline")]
    Annotate(AnnotateArgs),

    #[options(help = "print input in word-separated tokenized form")]
    Tokenize(TokenizeArgs),
}

#[derive(Debug, Options)]
struct LookupArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "TSV dictionary file to be used")]
    dict: Option<PathBuf>,

    #[options(no_short, help = "directory of per-initial JSON dictionary chunks")]
    chunks: Option<PathBuf>,

    #[options(no_short, long = "remote-url", help = "base URL of the remote fallback API")]
    remote_url: Option<String>,

    #[options(no_short, long = "no-remote", help = "disable the remote fallback")]
    no_remote: bool,

    #[options(no_short, help = "maximum number of memoized resolutions")]
    cache_size: Option<usize>,

    #[options(no_short, long = "json", help = "output in JSON format")]
    use_json: bool,

    #[options(free, help = "words to be resolved")]
    inputs: Vec<String>,
}

#[derive(Debug, Options)]
struct AnnotateArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "TSV dictionary file to be used")]
    dict: Option<PathBuf>,

    #[options(no_short, help = "directory of per-initial JSON dictionary chunks")]
    chunks: Option<PathBuf>,

    #[options(no_short, long = "remote-url", help = "base URL of the remote fallback API")]
    remote_url: Option<String>,

    #[options(no_short, long = "no-remote", help = "disable the remote fallback")]
    no_remote: bool,

    #[options(no_short, help = "maximum number of memoized resolutions")]
    cache_size: Option<usize>,

    #[options(free, help = "text to be annotated")]
    inputs: Vec<String>,
}

#[derive(Debug, Options)]
struct TokenizeArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(short = "w", long = "words", help = "show words only")]
    is_words_only: bool,

    #[options(free, help = "text to be tokenized")]
    inputs: Vec<String>,
}

fn read_inputs(inputs: Vec<String>, joiner: &str) -> String {
    if inputs.is_empty() {
        eprintln!("Reading from stdin...");
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .expect("reading stdin");
        buffer
    } else {
        inputs.join(joiner)
    }
}

fn load_store(dict: Option<PathBuf>, chunks: Option<PathBuf>) -> anyhow::Result<Box<dyn TranscriptionStore>> {
    if let Some(path) = dict {
        let store = MemoryStore::from_tsv_path(&path)?;
        return Ok(Box::new(store));
    }

    if let Some(dir) = chunks {
        let store = ChunkedStore::open(&dir)?;
        return Ok(Box::new(store));
    }

    anyhow::bail!("either --dict or --chunks is required")
}

fn build_resolver(
    dict: Option<PathBuf>,
    chunks: Option<PathBuf>,
    remote_url: Option<String>,
    no_remote: bool,
    cache_size: Option<usize>,
) -> anyhow::Result<Resolver<Box<dyn TranscriptionStore>>> {
    let store = load_store(dict, chunks)?;

    let config = ResolverConfig {
        cache_size: cache_size.or(ResolverConfig::default().cache_size),
    };

    let mut resolver = Resolver::with_config(store, &config);

    if !no_remote {
        let remote_config = match remote_url {
            Some(base_url) => RemoteConfig {
                base_url,
                ..RemoteConfig::default()
            },
            None => RemoteConfig::default(),
        };
        resolver = resolver.with_remote(Box::new(FreeDictClient::with_config(remote_config)));
    }

    Ok(resolver)
}

fn lookup(args: LookupArgs) -> anyhow::Result<()> {
    let resolver = build_resolver(
        args.dict,
        args.chunks,
        args.remote_url,
        args.no_remote,
        args.cache_size,
    )?;

    let mut writer: Box<dyn OutputWriter> = if args.use_json {
        Box::new(JsonWriter::new())
    } else {
        Box::new(StdoutWriter)
    };

    let input = read_inputs(args.inputs, "\n");

    for word in input.split_whitespace() {
        let result = resolver.resolve(word);
        writer.write_result(word, &result);
    }

    writer.finish();

    Ok(())
}

fn annotate(args: AnnotateArgs) -> anyhow::Result<()> {
    let resolver = build_resolver(
        args.dict,
        args.chunks,
        args.remote_url,
        args.no_remote,
        args.cache_size,
    )?;

    let input = read_inputs(args.inputs, " ");
    let mut out = String::with_capacity(input.len() * 2);

    for (_, token) in input.word_bound_indices() {
        out.push_str(token);

        let is_word = token.chars().next().map_or(false, |ch| ch.is_alphabetic());
        if is_word {
            if let Some(transcription) = resolver.resolve(token).transcription {
                out.push(' ');
                out.push_str(transcription.as_str());
            }
        }
    }

    println!("{}", out);

    Ok(())
}

fn tokenize(args: TokenizeArgs) -> anyhow::Result<()> {
    let input = read_inputs(args.inputs, " ");

    if args.is_words_only {
        for (index, token) in input.word_indices() {
            println!("{:>4}: \"{}\"", index, token);
        }
    } else {
        for (index, token) in input.word_bound_indices() {
            println!("{:>4}: \"{}\"", index, token);
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let args = Args::parse_args_default_or_exit();

    match args.command {
        None => Ok(()),
        Some(Command::Lookup(args)) => lookup(args),
        Some(Command::Annotate(args)) => annotate(args),
        Some(Command::Tokenize(args)) => tokenize(args),
    }
}
