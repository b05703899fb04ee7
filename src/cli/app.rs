use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "interview-cli")]
#[command(about = "A terminal wizard for AI-powered interview assessments")]
#[command(version)]
pub struct Cli {
    /// Override the scoring service endpoint
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Use the light theme variant
    #[arg(long)]
    pub light: bool,
}
