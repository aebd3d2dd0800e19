// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "box-picker")]
#[command(about = "Hover and click boxes out of a 3D grid", long_about = None)]
pub struct Cli {
    /// JSON config file; missing fields take their defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Impact strength above which the hit sound plays
    #[arg(long = "impact-threshold")]
    pub impact_threshold: Option<f32>,

    /// Grid size as XxYxZ, e.g. 10x10x10
    #[arg(long, value_parser = parse_grid)]
    pub grid: Option<GridCounts>,

    /// Print the effective config as JSON and exit
    #[arg(long = "print-config", default_value = "false")]
    pub print_config: bool,

    /// Disable the status overlay
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCounts(pub [usize; 3]);

fn parse_grid(value: &str) -> Result<GridCounts, String> {
    let parts: Vec<&str> = value.split(['x', 'X']).collect();
    let [x, y, z] = parts.as_slice() else {
        return Err(format!("expected XxYxZ, got {value:?}"));
    };
    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|e| format!("bad grid count {part:?}: {e}"))
    };
    Ok(GridCounts([parse(x)?, parse(y)?, parse(z)?]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_grid() {
        assert_eq!(parse_grid("10x10x10"), Ok(GridCounts([10, 10, 10])));
        assert_eq!(parse_grid("2X3x4"), Ok(GridCounts([2, 3, 4])));
        assert!(parse_grid("10x10").is_err());
        assert!(parse_grid("axbxc").is_err());
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from([
            "box-picker",
            "--impact-threshold",
            "2.5",
            "--grid",
            "3x3x3",
            "--no-ui",
        ]);
        assert_eq!(cli.impact_threshold, Some(2.5));
        assert_eq!(cli.grid, Some(GridCounts([3, 3, 3])));
        assert!(cli.no_ui);
        assert!(!cli.print_config);
        assert!(cli.config.is_none());
    }
}
