use clap::Parser;

use ghrel::{
    Result,
    cli::{Args, Command},
    command, connector,
};

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("ghrel")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

async fn run(args: &Args) -> Result<()> {
    let tag = match &args.command {
        Command::TagExists(t) | Command::Delete(t) | Command::Show(t) => &t.tag,
        Command::Manage(m) => &m.tag,
    };

    let repo = args.repo_ref(tag)?;
    let conn = args.get_connection()?;
    let forge = connector::connect(&conn, args.dry_run).await?;

    match &args.command {
        Command::TagExists(_) => command::tag_exists::execute(&forge, &repo).await,
        Command::Manage(manage) => {
            command::manage::execute(&forge, &repo, manage).await?;
            Ok(())
        }
        Command::Delete(_) => {
            command::delete::execute(&forge, &repo).await?;
            Ok(())
        }
        Command::Show(_) => {
            let json = command::show::execute(&forge, &repo).await?;
            println!("{json}");
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli_args = Args::parse();

    initialize_logger(cli_args.debug)?;

    run(&cli_args).await?;

    Ok(())
}
