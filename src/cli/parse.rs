use wayfind_core::format::OutputFormat;
use wayfind_core::graph::Strategy;

/// Strategies requested on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyChoice {
    One(Strategy),
    Both,
}

impl StrategyChoice {
    pub fn strategies(&self) -> Vec<Strategy> {
        match self {
            StrategyChoice::One(strategy) => vec![*strategy],
            StrategyChoice::Both => Strategy::ALL.to_vec(),
        }
    }
}

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a strategy name, or `both`
pub fn parse_strategy_choice(s: &str) -> std::result::Result<StrategyChoice, String> {
    if s.trim().eq_ignore_ascii_case("both") {
        return Ok(StrategyChoice::Both);
    }
    s.parse::<Strategy>()
        .map(StrategyChoice::One)
        .map_err(|e| e.to_string())
}
