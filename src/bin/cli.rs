use clap::{Args, Parser, Subcommand};
use profile_directory::{
    cli::{
        db::{db_generate, db_list, db_migrate, db_revert},
        profile::{create_profile, list_profiles, parse_tags},
    },
    core::{db::init_pool, image_search::build_image_search, utils::datetime_to_string},
    service::profile::ProfileInput,
    settings::get_config,
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Database related command
    Db(DbArgs),
    /// Profile related command
    Profile(ProfileArgs),
}

#[derive(Debug, Args)]
struct ProfileArgs {
    #[command(subcommand)]
    command: ProfileCommands,
}

#[derive(Debug, Subcommand)]
enum ProfileCommands {
    /// Create new profile, looking up an image for its name
    Create {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        channel: String,
        /// Comma separated tags
        #[arg(short, long)]
        tags: Option<String>,
        #[arg(short, long)]
        job: Option<String>,
        #[arg(short, long)]
        age: Option<i32>,
    },
    /// List all profile, newest first
    List,
}

#[derive(Debug, Args)]
struct DbArgs {
    #[command(subcommand)]
    command: DbCommands,
}

#[derive(Debug, Subcommand)]
enum DbCommands {
    /// Generate new migration file
    Generate { migration_name: String },
    /// List all migration
    List,
    /// Run all pending migration
    Migrate,
    /// Revert latest migration
    Revert,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Db(db_args) => match &db_args.command {
            DbCommands::Generate { migration_name } => {
                println!("generate migration: {migration_name:?}");
                db_generate(migration_name).await?;
            }
            DbCommands::List => {
                println!("list migration");
                let config = get_config()?;
                db_list(&config).await?;
            }
            DbCommands::Migrate => {
                println!("run all pending migration");
                let config = get_config()?;
                db_migrate(&config).await?;
            }
            DbCommands::Revert => {
                println!("revert latest migration");
                let config = get_config()?;
                db_revert(&config).await?;
            }
        },
        Commands::Profile(profile_args) => {
            let config = get_config()?;
            let pool = init_pool(&config).await?;
            match &profile_args.command {
                ProfileCommands::Create {
                    name,
                    channel,
                    tags,
                    job,
                    age,
                } => {
                    println!("create profile: {name:?}");
                    let input = ProfileInput {
                        name: name.clone(),
                        channel: channel.clone(),
                        tags: tags.as_deref().map(parse_tags),
                        job: job.clone(),
                        age: *age,
                    };
                    let image_search = build_image_search(&config)?;
                    let profile = create_profile(&pool, image_search, input).await?;
                    println!("created {} (image: {:?})", profile.id, profile.image_url);
                }
                ProfileCommands::List => {
                    for profile in list_profiles(&pool).await? {
                        println!(
                            "{}\t{}\t{}\t{}",
                            profile.id,
                            profile.name,
                            profile.channel,
                            datetime_to_string(profile.created_date)
                        );
                    }
                }
            }
        }
    }
    Ok(())
}
