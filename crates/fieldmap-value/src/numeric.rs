use crate::Error;

pub(crate) fn integer_to_decimal(value: i64) -> crate::Result<f64> {
    value
        .to_string()
        .parse::<f64>()
        .map_err(|error| Error::Coercion(format!("Cannot widen integer to decimal: {error}")))
}
