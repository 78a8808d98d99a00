use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use wit::areas::repository::Repository;
use wit::artifacts::objects::object_type::ObjectType;

#[derive(Parser)]
#[command(
    name = "wit",
    version = "0.1.0",
    about = "A Git-compatible object store",
    long_about = "This is an implementation of Git's object model and storage engine. \
    It reads and writes repositories in the same on-disk format as git.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
    },
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command prints the raw payload of an object. \
        Tags and commits are followed toward the requested type when possible."
    )]
    CatFile {
        #[arg(index = 1, help = "The expected object type (blob, tree, commit or tag)")]
        object_type: String,
        #[arg(index = 2, help = "The object to print")]
        object: String,
    },
    #[command(
        name = "hash-object",
        about = "Hash an object and optionally write it to the object database",
        long_about = "This command computes the ID of a file read as an object payload \
        and can write the object to the object database."
    )]
    HashObject {
        #[arg(short = 't', long = "type", default_value = "blob", help = "The object type")]
        object_type: String,
        #[arg(short, long, help = "Write the object to the object database")]
        write: bool,
        #[arg(index = 1)]
        file: PathBuf,
    },
    #[command(
        name = "ls-tree",
        about = "List the contents of a tree object",
        long_about = "This command lists the entries of a tree, or of the tree of a commit."
    )]
    LsTree {
        #[arg(short, long, help = "Recurse into subtrees")]
        recursive: bool,
        #[arg(index = 1, help = "A tree-ish object")]
        tree: String,
    },
    #[command(
        name = "checkout",
        about = "Write a commit's tree into an empty directory",
        long_about = "This command writes the files of a commit or tree into a directory, \
        which must be empty or not exist yet."
    )]
    Checkout {
        #[arg(index = 1, help = "The commit or tree to check out")]
        commit: String,
        #[arg(index = 2, help = "The empty directory to write to")]
        path: PathBuf,
    },
    #[command(name = "show-ref", about = "List references")]
    ShowRef,
    #[command(
        name = "log",
        about = "Display the history of a commit",
        long_about = "This command prints the ancestry of a commit as a Graphviz digraph."
    )]
    Log {
        #[arg(index = 1, default_value = "HEAD", help = "The commit to start at")]
        commit: String,
    },
    #[command(name = "rev-parse", about = "Resolve a name to an object ID")]
    RevParse {
        #[arg(long = "type", help = "Follow tags and commits to an object of this type")]
        object_type: Option<String>,
        #[arg(index = 1, help = "The name to resolve")]
        name: String,
    },
    #[command(
        name = "tag",
        about = "List or create tags",
        long_about = "Without a name, this command lists tags. Otherwise it creates a \
        lightweight tag, or an annotated tag object when -a is given."
    )]
    Tag {
        #[arg(short = 'a', requires = "message", help = "Create an annotated tag object")]
        annotate: bool,
        #[arg(short, long, requires = "annotate", help = "The annotated tag message")]
        message: Option<String>,
        #[arg(index = 1, help = "The new tag's name")]
        name: Option<String>,
        #[arg(index = 2, default_value = "HEAD", help = "The object the new tag will point to")]
        object: String,
    },
}

fn main() -> Result<()> {
    wit::telemetry::init();

    let cli = Cli::parse();
    let pwd = std::env::current_dir()?;

    match &cli.command {
        Commands::Init { path } => {
            let path = path.clone().unwrap_or_else(|| pwd.clone());
            Repository::new(&path, stdout())?.init()?
        }
        Commands::CatFile {
            object_type,
            object,
        } => {
            let object_type = ObjectType::try_from(object_type.as_str())?;
            Repository::discover(&pwd, stdout())?.cat_file(object_type, object)?
        }
        Commands::HashObject {
            object_type,
            write,
            file,
        } => {
            let object_type = ObjectType::try_from(object_type.as_str())?;
            // without -w no repository is needed
            let repository = if *write {
                Repository::discover(&pwd, stdout())?
            } else {
                Repository::new(&pwd, stdout())?
            };

            repository.hash_object(&pwd.join(file), object_type, *write)?
        }
        Commands::LsTree { recursive, tree } => {
            Repository::discover(&pwd, stdout())?.ls_tree(tree, *recursive)?
        }
        Commands::Checkout { commit, path } => {
            Repository::discover(&pwd, stdout())?.checkout(commit, &pwd.join(path))?
        }
        Commands::ShowRef => Repository::discover(&pwd, stdout())?.show_ref()?,
        Commands::Log { commit } => Repository::discover(&pwd, stdout())?.log(commit)?,
        Commands::RevParse { object_type, name } => {
            let object_type = object_type
                .as_deref()
                .map(ObjectType::try_from)
                .transpose()?;

            Repository::discover(&pwd, stdout())?.rev_parse(name, object_type)?
        }
        Commands::Tag {
            message,
            name,
            object,
            ..
        } => {
            let repository = Repository::discover(&pwd, stdout())?;

            match name {
                Some(name) => repository.create_tag(name, object, message.as_deref())?,
                None => repository.list_tags()?,
            }
        }
    }

    std::io::stdout().flush()?;

    Ok(())
}

fn stdout() -> Box<dyn Write> {
    Box::new(std::io::stdout())
}
