use crate::cli::WeatherArgs;
use crate::core::weather::WeatherReport;
use crate::utils::error::{FlowResult, handle_flow};

pub fn handle_weather_command(args: &WeatherArgs) {
    handle_flow(run_weather(args));
}

pub fn run_weather(args: &WeatherArgs) -> FlowResult {
    FlowResult::Info(WeatherReport::for_city(&args.city).to_string())
}
