use clap::{Parser, Subcommand};
use gravatar_tag::identity::Identity;
use gravatar_tag::options::{CallOptions, resolve};
use gravatar_tag::view::{self, TagOptions};
use gravatar_tag::{config, output, store, url};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Per-call overrides shared by `url` and `tag`.
#[derive(clap::Args, Clone)]
struct GravatarArgs {
    /// Email address (surrounding whitespace and case are ignored)
    email: Option<String>,

    /// Image served when the email has no Gravatar (URL or provider keyword)
    #[arg(long)]
    default_image: Option<String>,

    /// Extension appended to the hash (jpg, png, gif)
    #[arg(long)]
    filetype: Option<String>,

    /// Highest content rating to serve (g, pg, r, x)
    #[arg(long)]
    rating: Option<String>,

    /// Avatar size in pixels
    #[arg(long, allow_negative_numbers = true)]
    size: Option<i64>,

    /// Use https://secure.gravatar.com
    #[arg(long, conflicts_with = "insecure")]
    secure: bool,

    /// Use http://gravatar.com even if the config says secure
    #[arg(long)]
    insecure: bool,
}

impl GravatarArgs {
    fn call_options(&self) -> CallOptions {
        CallOptions {
            default_image: self.default_image.clone(),
            filetype: self.filetype.clone(),
            rating: self.rating.clone(),
            size: self.size,
            secure: match (self.secure, self.insecure) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            },
        }
    }
}

fn version_string() -> &'static str {
    if env!("GRAVATAR_TAG_RELEASE") == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GRAVATAR_TAG_GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "gravatar-tag")]
#[command(about = "Gravatar image URLs and image-tag attributes from an email address")]
#[command(long_about = "\
Gravatar image URLs and image-tag attributes from an email address

Options are resolved per call: command-line flags override gravatar.toml,
which overrides the built-in defaults (everything unset, insecure host).

  gravatar-tag url mdeering@mdeering.com --size 50
  gravatar-tag tag mdeering@mdeering.com --secure --attr class=avatar

Run 'gravatar-tag gen-config' to generate a documented gravatar.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Directory containing gravatar.toml
    #[arg(long, default_value = ".", global = true)]
    config_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the avatar URL for an email
    Url {
        #[command(flatten)]
        gravatar: GravatarArgs,

        /// Also print the hash and each query parameter
        #[arg(long, short)]
        verbose: bool,
    },
    /// Print image-tag attributes as JSON
    Tag {
        #[command(flatten)]
        gravatar: GravatarArgs,

        /// Extra HTML attribute as name=value (repeatable)
        #[arg(long = "attr", value_parser = parse_attr)]
        attrs: Vec<(String, String)>,
    },
    /// Print a stock gravatar.toml with all options documented
    GenConfig,
}

fn parse_attr(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected name=value, got '{s}'"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Url { gravatar, verbose } => {
            store::set_configuration(config::load_config(&cli.config_dir)?);
            let identity = Identity::new(gravatar.email.as_deref());
            let resolved = resolve(&gravatar.call_options(), &store::configuration());
            let avatar_url = url::build_url(&identity.hash, &resolved);
            output::print_url_output(&identity, &resolved, &avatar_url, verbose);
        }
        Command::Tag { gravatar, attrs } => {
            store::set_configuration(config::load_config(&cli.config_dir)?);
            let options = TagOptions {
                gravatar: gravatar.call_options(),
                html: attrs,
            };
            let tag_attrs = view::gravatar_image_tag(gravatar.email.as_deref(), &options);
            output::print_tag_output(&tag_attrs)?;
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
