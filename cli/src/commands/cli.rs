use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "taskorder", version, about = "Order dependent tasks and render them as a bash script")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Explicit config file. Defaults to ~/.taskorder/config.toml, then ./config.toml.
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct HttpServerArgs {
    /// Bind address; overrides `http_server.host` from config.
    #[arg(long)]
    pub host: Option<String>,

    /// Bind port; overrides `http_server.port` from config.
    #[arg(long)]
    pub port: Option<u16>,

    #[arg(long)]
    pub session_id: Option<String>,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ResolveArgs {
    /// Task file (`{"tasks": [...]}`). Reads stdin when omitted or `-`.
    #[arg(long, short = 'i')]
    pub input: Option<String>,

    /// Output format: json | bash
    #[arg(long, short = 'f', default_value = "json")]
    pub format: String,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ScriptArgs {
    /// Task file (`{"tasks": [...]}`). Reads stdin when omitted or `-`.
    #[arg(long, short = 'i')]
    pub input: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP service
    Serve(HttpServerArgs),
    /// Resolve a task file and print the ordered tasks
    Resolve(ResolveArgs),
    /// Resolve a task file and print the bash script
    Script(ScriptArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resolve_defaults() {
        let args = Args::parse_from(["taskorder", "resolve", "--input", "tasks.json"]);
        match args.command {
            Commands::Resolve(r) => {
                assert_eq!(r.input.as_deref(), Some("tasks.json"));
                assert_eq!(r.format, "json");
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(args.config.is_none());
    }

    #[test]
    fn test_parse_serve_with_global_config() {
        let args = Args::parse_from([
            "taskorder",
            "serve",
            "--port",
            "9090",
            "--config",
            "/etc/taskorder.toml",
        ]);
        assert_eq!(args.config.as_deref(), Some("/etc/taskorder.toml"));
        match args.command {
            Commands::Serve(s) => {
                assert_eq!(s.port, Some(9090));
                assert!(s.host.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
