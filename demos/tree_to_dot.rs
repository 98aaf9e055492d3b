use argh::FromArgs;
use radix_set::{
    tests_common::{generate_key_fixed_length, generate_keys_skewed, generate_words},
    visitor::{DotPrinter, DotPrinterSettings},
    RadixSet,
};
use std::{
    error::Error,
    fmt::Display,
    fs::OpenOptions,
    io::{self, BufWriter, Write},
    str::FromStr,
};

#[derive(FromArgs)]
/// Generate a set of keys and print the resulting tree in DOT format.
struct TreeToDotArgs {
    /// what shape of tree to generate
    #[argh(positional)]
    shape: TreeShape,

    /// how large the tree should be
    #[argh(positional)]
    size: usize,

    /// where to output the tree diagram
    ///
    /// To output to stdout, use '_'.
    #[argh(positional)]
    output_location: String,

    /// label every node with its handle
    #[argh(switch)]
    node_ids: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: TreeToDotArgs = argh::from_env();

    let mut settings = DotPrinterSettings::default();
    settings.display_node_id = args.node_ids;

    let output: Box<dyn Write> = if args.output_location == "_" {
        Box::new(io::stdout().lock())
    } else {
        Box::new(
            OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(args.output_location)?,
        )
    };
    let mut buffer = BufWriter::new(output);

    match args.shape {
        TreeShape::LeftSkew => {
            settings.separate_symbols = true;
            let set: RadixSet<u8> = generate_keys_skewed(args.size).collect();
            write_tree(&mut buffer, &set, settings)?;
        },
        TreeShape::FixedLength => {
            settings.separate_symbols = true;
            let set: RadixSet<u8> = generate_key_fixed_length(args.size, 4).collect();
            write_tree(&mut buffer, &set, settings)?;
        },
        TreeShape::Words => {
            let set: RadixSet<char> = generate_words(args.size).collect();
            write_tree(&mut buffer, &set, settings)?;
        },
    }

    buffer.flush()?;

    Ok(())
}

fn write_tree<S: Display>(
    output: &mut dyn Write,
    set: &RadixSet<S>,
    settings: DotPrinterSettings,
) -> Result<(), Box<dyn Error>> {
    if set.is_empty() {
        return Err(Box::new(EmptyTreeError));
    }

    DotPrinter::print(output, set, settings)?;

    Ok(())
}

#[derive(Debug)]
enum TreeShape {
    LeftSkew,
    FixedLength,
    Words,
}

impl FromStr for TreeShape {
    type Err = ShapeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left_skew" => Ok(TreeShape::LeftSkew),
            "fixed_length" => Ok(TreeShape::FixedLength),
            "words" => Ok(TreeShape::Words),
            _ => Err(ShapeParseError(s.into())),
        }
    }
}

#[derive(Debug)]
struct ShapeParseError(String);

impl Display for ShapeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unable to parse tree shape from argument value [{}], expected one of left_skew, \
             fixed_length or words.",
            self.0
        )
    }
}

#[derive(Debug)]
struct EmptyTreeError;

impl Display for EmptyTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "There were no keys to insert into the tree!")
    }
}

impl Error for EmptyTreeError {}
