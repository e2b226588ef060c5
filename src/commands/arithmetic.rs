use crate::cli::ArithmeticArgs;
use crate::core::arithmetic::evaluate;
use crate::utils::error::{AppResult, FlowResult, handle_flow};
use anyhow::Result;

pub fn handle_arithmetic_command(args: &ArithmeticArgs) -> Result<()> {
    let flow = run_arithmetic(args)?;
    handle_flow(flow);
    Ok(())
}

pub fn run_arithmetic(args: &ArithmeticArgs) -> AppResult<FlowResult> {
    let result = evaluate(args.operation, args.a, args.b)?;
    log::debug!("{:?}({}, {}) = {}", args.operation, args.a, args.b, result);
    Ok(FlowResult::Success(format!("Result: {}", result)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::arithmetic::Operation;
    use crate::utils::error::AppError;

    fn args(operation: Operation, a: f64, b: f64) -> ArithmeticArgs {
        ArithmeticArgs { operation, a, b }
    }

    #[test]
    fn test_result_line() {
        let flow = run_arithmetic(&args(Operation::Multiply, 2.5, 4.0)).unwrap();
        assert_eq!(flow, FlowResult::Success("Result: 10".to_string()));

        let flow = run_arithmetic(&args(Operation::Divide, 1.0, 4.0)).unwrap();
        assert_eq!(flow, FlowResult::Success("Result: 0.25".to_string()));
    }

    #[test]
    fn test_divide_by_zero_is_fatal() {
        let err = run_arithmetic(&args(Operation::Divide, 1.0, 0.0)).unwrap_err();
        assert_eq!(err, AppError::DivisionByZero);
    }
}
