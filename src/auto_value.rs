//! Synthetic values for entries that omit one.
//!
//! The raw input is scanned once for explicit numeric values; after that the
//! running maximum only grows as nodes are built, so every synthetic value is
//! greater than any number declared anywhere in the input.
use crate::input::EnumInput;
use serde_json::{Number, Value};

/// Largest numeric value seen. Integers stay exact so that values near the
/// edges of `i64` and `u64` still step by one.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Peak {
    Int(i128),
    Float(f64),
}

impl Peak {
    fn of(number: &Number) -> Option<Self> {
        if let Some(int) = number.as_i64() {
            return Some(Peak::Int(int.into()));
        }
        if let Some(int) = number.as_u64() {
            return Some(Peak::Int(int.into()));
        }
        number.as_f64().map(Peak::Float)
    }

    fn as_f64(self) -> f64 {
        match self {
            Peak::Int(int) => int as f64,
            Peak::Float(float) => float,
        }
    }

    fn exceeds(self, other: Peak) -> bool {
        match (self, other) {
            (Peak::Int(left), Peak::Int(right)) => left > right,
            (left, right) => left.as_f64() > right.as_f64(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct AutoValue {
    max: Option<Peak>,
}

impl AutoValue {
    /// Seed the running maximum from every explicit numeric value in `input`.
    pub(crate) fn scan(input: &EnumInput) -> Self {
        let mut auto = AutoValue::default();
        for number in input.entries().filter_map(|entry| entry.explicit_number()) {
            auto.observe_number(number);
        }
        auto
    }

    /// Account for the value of a node that was just built.
    pub(crate) fn observe(&mut self, value: &Value) {
        if let Value::Number(number) = value {
            self.observe_number(number);
        }
    }

    fn observe_number(&mut self, number: &Number) {
        let Some(candidate) = Peak::of(number) else {
            return;
        };
        match self.max {
            Some(current) if !candidate.exceeds(current) => {}
            _ => self.max = Some(candidate),
        }
    }

    /// One more than the largest value seen, or `1` when none was.
    pub(crate) fn next(&self) -> Value {
        match self.max {
            None => Value::from(1),
            Some(Peak::Int(int)) => int_value(int + 1),
            Some(Peak::Float(float)) => {
                let next = float + 1.0;
                if next.fract() == 0.0 && next >= i64::MIN as f64 && next < i64::MAX as f64 {
                    return Value::from(next as i64);
                }
                float_value(next)
            }
        }
    }
}

/// Narrowest JSON number that holds `int` exactly, falling back to a float.
fn int_value(int: i128) -> Value {
    if let Ok(small) = i64::try_from(int) {
        return Value::from(small);
    }
    if let Ok(large) = u64::try_from(int) {
        return Value::from(large);
    }
    float_value(int as f64)
}

fn float_value(float: f64) -> Value {
    Number::from_f64(float).map_or(Value::Null, Value::Number)
}

#[cfg(test)]
mod tests {
    use super::AutoValue;
    use crate::input::{EnumInput, Entry, Record};
    use serde_json::json;

    #[test]
    fn empty_input_starts_at_one() {
        let auto = AutoValue::scan(&EnumInput::Sequence(Vec::new()));
        assert_eq!(auto.next(), json!(1));
    }

    #[test]
    fn later_explicit_values_are_seen_up_front() {
        let input = EnumInput::records([
            Record::new().label("first"),
            Record::new().label("second").value(40),
        ]);
        assert_eq!(AutoValue::scan(&input).next(), json!(41));
    }

    #[test]
    fn bare_numbers_count_as_explicit() {
        let input = EnumInput::Sequence(vec![Entry::from(json!(12)), Entry::from("x")]);
        assert_eq!(AutoValue::scan(&input).next(), json!(13));
    }

    #[test]
    fn observed_values_keep_the_maximum_growing() {
        let mut auto = AutoValue::default();
        auto.observe(&json!(5));
        auto.observe(&json!(2));
        auto.observe(&json!("ten"));
        assert_eq!(auto.next(), json!(6));
    }

    #[test]
    fn fractional_maximum_stays_fractional() {
        let mut auto = AutoValue::default();
        auto.observe(&json!(2.5));
        assert_eq!(auto.next(), json!(3.5));
    }

    #[test]
    fn whole_float_maximum_steps_to_an_integer() {
        let mut auto = AutoValue::default();
        auto.observe(&json!(4.0));
        assert_eq!(auto.next(), json!(5));
    }

    #[test]
    fn largest_signed_value_steps_into_unsigned_range() {
        let mut auto = AutoValue::default();
        auto.observe(&json!(i64::MAX));
        let next = auto.next();
        assert_eq!(next, json!(9_223_372_036_854_775_808_u64));
        assert!(next.as_u64() > Some(i64::MAX as u64));

        auto.observe(&next);
        assert_eq!(auto.next(), json!(9_223_372_036_854_775_809_u64));
    }

    #[test]
    fn largest_unsigned_value_steps_into_floats() {
        let mut auto = AutoValue::default();
        auto.observe(&json!(u64::MAX));
        assert!(auto.next().is_f64());
    }

    #[test]
    fn integers_win_over_smaller_floats() {
        let mut auto = AutoValue::default();
        auto.observe(&json!(7));
        auto.observe(&json!(6.5));
        assert_eq!(auto.next(), json!(8));
        auto.observe(&json!(7.5));
        assert_eq!(auto.next(), json!(8.5));
    }
}
