use std::fmt;

/// One found equation: both rendered sides and their shared value
#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    pub left: String,
    pub right: String,
    pub value: f64,
}

fn is_integer(value: f64) -> bool {
    (value - value.round()).abs() < f64::EPSILON
}

impl Equation {
    /// The shared value, rendered without a decimal point when integral
    pub fn display_value(&self) -> String {
        if is_integer(self.value) {
            (self.value.round() as i64).to_string()
        } else {
            self.value.to_string()
        }
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.left, self.right)
    }
}

#[cfg(test)]
mod tests_inner_helpers {
    use super::{Equation, is_integer};

    #[test]
    fn test_is_integer() {
        assert!(is_integer(3.0));
        assert!(is_integer(-2.0));
        assert!(is_integer(0.0));
        assert!(!is_integer(0.5));
        assert!(!is_integer(2.000001));
    }

    #[test]
    fn test_display_value_prefers_integers() {
        let equation = Equation {
            left: "1 + 2".into(),
            right: "3".into(),
            value: 3.0,
        };
        assert_eq!(equation.display_value(), "3");
        assert_eq!(equation.to_string(), "1 + 2 = 3");

        let equation = Equation {
            left: "1 / 2".into(),
            right: "2 / 4".into(),
            value: 0.5,
        };
        assert_eq!(equation.display_value(), "0.5");
    }
}
