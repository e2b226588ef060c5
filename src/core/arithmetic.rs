use crate::utils::error::{AppError, AppResult};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Apply `op` to `a` and `b`. Dividing by zero (either sign) is an error.
pub fn evaluate(op: Operation, a: f64, b: f64) -> AppResult<f64> {
    let result = match op {
        Operation::Add => a + b,
        Operation::Subtract => a - b,
        Operation::Multiply => a * b,
        Operation::Divide => {
            if b == 0.0 {
                return Err(AppError::DivisionByZero);
            }
            a / b
        }
    };
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(evaluate(Operation::Add, 2.5, 4.0).unwrap(), 6.5);
        assert_eq!(evaluate(Operation::Subtract, 2.0, 5.0).unwrap(), -3.0);
        assert_eq!(evaluate(Operation::Multiply, -3.0, 1.5).unwrap(), -4.5);
        assert_eq!(evaluate(Operation::Divide, 7.0, 2.0).unwrap(), 3.5);
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            evaluate(Operation::Divide, 1.0, 0.0),
            Err(AppError::DivisionByZero)
        );
        assert_eq!(
            evaluate(Operation::Divide, 1.0, -0.0),
            Err(AppError::DivisionByZero)
        );
    }

    #[test]
    fn test_zero_numerator_is_fine() {
        assert_eq!(evaluate(Operation::Divide, 0.0, 3.0).unwrap(), 0.0);
    }
}
