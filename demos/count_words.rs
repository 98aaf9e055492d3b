use argh::FromArgs;
use radix_set::{visitor::TreeStatsCollector, RadixSet};
use std::{collections::HashSet, error::Error, fs, path::PathBuf};

/// Count the unique words in a file
#[derive(FromArgs)]
struct CountWords {
    /// which set implementation to use for counting, either 'std' or 'radix'
    #[argh(positional)]
    set_impl: String,

    /// input to read words from an external file
    #[argh(positional)]
    input_file: PathBuf,

    /// print statistics about the shape of the radix tree
    #[argh(switch)]
    stats: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: CountWords = argh::from_env();

    let contents = fs::read_to_string(&args.input_file)?;

    let stats = match args.set_impl.as_str() {
        "std" => count_words_std(&contents),
        "radix" => count_words_radix(&contents, args.stats),
        other => return Err(format!("unknown set impl '{other}'").into()),
    };

    println!("STATS: {stats:?}");

    Ok(())
}

#[derive(Debug)]
#[allow(dead_code)] // this struct is used for its debug repr
struct WordStats {
    num_words: u64,
    num_unique: u64,
}

fn count_words_radix(contents: &str, print_tree_stats: bool) -> WordStats {
    let mut set = RadixSet::<char>::new();
    let mut num_words = 0;

    for word in contents.split_whitespace() {
        num_words += 1;
        set.insert(word);
    }

    if print_tree_stats {
        println!("{}", TreeStatsCollector::collect(&set));
    }

    WordStats {
        num_words,
        num_unique: set.len() as u64,
    }
}

fn count_words_std(contents: &str) -> WordStats {
    let mut set = HashSet::<&str>::new();
    let mut num_words = 0;

    for word in contents.split_whitespace() {
        num_words += 1;
        set.insert(word);
    }

    WordStats {
        num_words,
        num_unique: set.len() as u64,
    }
}
