use crate::cli::ConvertArgs;
use crate::core::conversion::convert;
use crate::utils::error::{FlowResult, handle_flow};

pub fn handle_convert_command(args: &ConvertArgs) {
    handle_flow(run_convert(args));
}

/// Unsupported types and units are reported, never raised.
pub fn run_convert(args: &ConvertArgs) -> FlowResult {
    match convert(&args.kind, args.value, &args.from_unit, &args.to_unit) {
        Ok(result) => FlowResult::Success(format!("Result: {} {}", result, args.to_unit)),
        Err(e) => {
            log::debug!("conversion rejected: {}", e);
            FlowResult::Unsupported(e.to_string())
        }
    }
}
