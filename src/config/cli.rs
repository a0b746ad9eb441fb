use clap::Parser;

/// Tutoring Portal Server
#[derive(Parser, Debug, Default, Clone)]
#[command(name = "tutoring-portal")]
#[command(version, about = "Tutoring Portal Server", long_about = None)]
#[command(after_help = "The server runs locally on port 80 if PORT is not specified.")]
pub struct Cli {
    /// The port where the server will run
    #[arg(short, long)]
    pub port: Option<u16>,

    /// The database to be accessed
    #[arg(short, long)]
    pub database: Option<String>,

    /// The type of database engine to be used
    #[arg(short = 't', long = "type")]
    pub engine: Option<String>,

    /// Run the server in debug mode
    #[arg(long)]
    pub debug: bool,

    /// Reload templates and static files from disk on every request (also debug)
    #[arg(long)]
    pub reload: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from(["tutoring-portal", "-p", "8080", "-d", "portal.db", "--reload"]);
        assert_eq!(cli.port, Some(8080));
        assert_eq!(cli.database.as_deref(), Some("portal.db"));
        assert!(cli.reload);
        assert!(!cli.debug);
        assert!(cli.engine.is_none());
    }

    #[test]
    fn test_parse_engine_type() {
        let cli = Cli::parse_from(["tutoring-portal", "--type", "postgres"]);
        assert_eq!(cli.engine.as_deref(), Some("postgres"));
        assert!(cli.port.is_none());
    }
}
