// web_app/form.rs - Product form state and validation
//
// Holds the raw text of the four editable fields together with the set of
// touched fields. Errors are recomputed from the values on demand and only
// shown for fields the user has left (or after a submit attempt).

use std::collections::{BTreeMap, BTreeSet};
use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::web_app::model::{Product, ProductInput};

/// One of the editable product fields
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Field {
    Nama,
    Deskripsi,
    Harga,
    Stock,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Nama, Field::Deskripsi, Field::Harga, Field::Stock];

    /// JSON key and input id
    pub fn key(&self) -> &'static str {
        match self {
            Field::Nama => "nama",
            Field::Deskripsi => "deskripsi",
            Field::Harga => "harga",
            Field::Stock => "stock",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Nama => "Name",
            Field::Deskripsi => "Description",
            Field::Harga => "Price",
            Field::Stock => "Stock",
        }
    }

    /// HTML input type
    pub fn input_type(&self) -> &'static str {
        if self.is_numeric() {
            "number"
        } else {
            "text"
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Field::Harga | Field::Stock)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Validation failure for a single field
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("{} is required", .0.label())]
    Required(Field),

    #[error("{0} must be a number")]
    NotANumber(Field),

    #[error("{0} must be a positive number")]
    NotPositive(Field),

    #[error("{0} must be an integer")]
    NotInteger(Field),

    #[error("{0} is too large")]
    TooLarge(Field),
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::Required(field)
            | FieldError::NotANumber(field)
            | FieldError::NotPositive(field)
            | FieldError::NotInteger(field)
            | FieldError::TooLarge(field) => *field,
        }
    }
}

/// All failing fields of a form, keyed by field
pub type FormErrors = BTreeMap<Field, FieldError>;

/// Raw text of each editable field
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub nama: String,
    pub deskripsi: String,
    pub harga: String,
    pub stock: String,
}

impl FormValues {
    pub fn from_product(product: &Product) -> Self {
        Self {
            nama: product.nama.clone(),
            deskripsi: product.deskripsi.clone(),
            harga: product.harga.to_string(),
            stock: product.stock.to_string(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Nama => &self.nama,
            Field::Deskripsi => &self.deskripsi,
            Field::Harga => &self.harga,
            Field::Stock => &self.stock,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Nama => self.nama = value,
            Field::Deskripsi => self.deskripsi = value,
            Field::Harga => self.harga = value,
            Field::Stock => self.stock = value,
        }
    }
}

/// Check a text field: any non-empty string passes
pub fn validate_text(field: Field, value: &str) -> Result<String, FieldError> {
    if value.is_empty() {
        return Err(FieldError::Required(field));
    }
    Ok(value.to_string())
}

/// Check a numeric field: must parse to a positive whole number
///
/// Checks run in order: required, number, positive, integer, range.
pub fn validate_positive_integer(field: Field, value: &str) -> Result<i64, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required(field));
    }

    match trimmed.parse::<i64>() {
        Ok(whole) if whole > 0 => return Ok(whole),
        Ok(_) => return Err(FieldError::NotPositive(field)),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => return Err(FieldError::TooLarge(field)),
            IntErrorKind::NegOverflow => return Err(FieldError::NotPositive(field)),
            _ => {}
        },
    }

    let number: f64 = trimmed
        .parse()
        .map_err(|_| FieldError::NotANumber(field))?;
    if !number.is_finite() {
        return Err(FieldError::NotANumber(field));
    }
    if number <= 0.0 {
        return Err(FieldError::NotPositive(field));
    }
    if number.fract() != 0.0 {
        return Err(FieldError::NotInteger(field));
    }
    // i64::MAX rounds up to 2^63 as f64, so equality is already out of range
    if number >= i64::MAX as f64 {
        return Err(FieldError::TooLarge(field));
    }
    Ok(number as i64)
}

/// Validate one field's raw value
pub fn validate_field(field: Field, value: &str) -> Result<(), FieldError> {
    if field.is_numeric() {
        validate_positive_integer(field, value).map(|_| ())
    } else {
        validate_text(field, value).map(|_| ())
    }
}

/// Product form: values plus touched flags
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductForm {
    values: FormValues,
    touched: BTreeSet<Field>,
}

impl ProductForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    /// Update a field from an input event
    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value.into());
    }

    /// Replace every value at once, keeping touched flags
    pub fn set_values(&mut self, values: FormValues) {
        self.values = values;
    }

    /// Mark a field as visited (blur)
    pub fn touch(&mut self, field: Field) {
        self.touched.insert(field);
    }

    pub fn touch_all(&mut self) {
        self.touched.extend(Field::ALL);
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    /// Back to empty values with nothing touched
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        validate_field(field, self.value(field)).err()
    }

    /// Error to render inline: only for touched fields
    pub fn visible_error(&self, field: Field) -> Option<FieldError> {
        if self.is_touched(field) {
            self.error(field)
        } else {
            None
        }
    }

    pub fn errors(&self) -> FormErrors {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.error(field).map(|e| (field, e)))
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.errors().is_empty()
    }

    /// Convert the values into a request body, or report every failing field
    pub fn validate(&self) -> Result<ProductInput, FormErrors> {
        let nama = validate_text(Field::Nama, &self.values.nama);
        let deskripsi = validate_text(Field::Deskripsi, &self.values.deskripsi);
        let harga = validate_positive_integer(Field::Harga, &self.values.harga);
        let stock = validate_positive_integer(Field::Stock, &self.values.stock);

        match (nama, deskripsi, harga, stock) {
            (Ok(nama), Ok(deskripsi), Ok(harga), Ok(stock)) => Ok(ProductInput {
                nama,
                deskripsi,
                harga,
                stock,
            }),
            (nama, deskripsi, harga, stock) => {
                let mut errors = FormErrors::new();
                for err in [nama.err(), deskripsi.err(), harga.err(), stock.err()]
                    .into_iter()
                    .flatten()
                {
                    errors.insert(err.field(), err);
                }
                Err(errors)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web_app::model::ProductId;

    fn filled() -> ProductForm {
        let mut form = ProductForm::new();
        form.set_value(Field::Nama, "Widget");
        form.set_value(Field::Deskripsi, "A small widget");
        form.set_value(Field::Harga, "1500");
        form.set_value(Field::Stock, "12");
        form
    }

    #[test]
    fn test_required_messages() {
        let form = ProductForm::new();
        let errors = form.errors();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors[&Field::Nama].to_string(), "Name is required");
        assert_eq!(errors[&Field::Deskripsi].to_string(), "Description is required");
        assert_eq!(errors[&Field::Harga].to_string(), "Price is required");
        assert_eq!(errors[&Field::Stock].to_string(), "Stock is required");
    }

    #[test]
    fn test_numeric_rules() {
        let cases = [
            ("-5", Some(FieldError::NotPositive(Field::Harga))),
            ("0", Some(FieldError::NotPositive(Field::Harga))),
            ("-0.5", Some(FieldError::NotPositive(Field::Harga))),
            ("2.5", Some(FieldError::NotInteger(Field::Harga))),
            ("abc", Some(FieldError::NotANumber(Field::Harga))),
            ("   ", Some(FieldError::Required(Field::Harga))),
            ("10", None),
            ("10.0", None),
            (" 7 ", None),
        ];

        for (input, expected) in cases {
            let result = validate_field(Field::Harga, input).err();
            assert_eq!(result, expected, "input {:?}", input);
        }
    }

    #[test]
    fn test_values_beyond_i64_are_too_large() {
        assert_eq!(
            validate_positive_integer(Field::Stock, "9223372036854775807"),
            Ok(i64::MAX)
        );
        for input in ["9223372036854775808", "99999999999999999999", "1e19", "9.3e18"] {
            assert_eq!(
                validate_positive_integer(Field::Stock, input),
                Err(FieldError::TooLarge(Field::Stock)),
                "input {:?}",
                input
            );
        }
        assert_eq!(
            validate_positive_integer(Field::Stock, "-99999999999999999999"),
            Err(FieldError::NotPositive(Field::Stock))
        );
        assert_eq!(FieldError::TooLarge(Field::Harga).to_string(), "harga is too large");
    }

    #[test]
    fn test_numeric_messages_use_field_key() {
        assert_eq!(
            FieldError::NotPositive(Field::Harga).to_string(),
            "harga must be a positive number"
        );
        assert_eq!(FieldError::NotInteger(Field::Stock).to_string(), "stock must be an integer");
        assert_eq!(FieldError::NotANumber(Field::Stock).to_string(), "stock must be a number");
    }

    #[test]
    fn test_errors_hidden_until_touched() {
        let mut form = ProductForm::new();
        assert!(form.visible_error(Field::Nama).is_none());

        form.touch(Field::Nama);
        assert_eq!(form.visible_error(Field::Nama), Some(FieldError::Required(Field::Nama)));
        assert!(form.visible_error(Field::Harga).is_none());

        form.touch_all();
        assert!(Field::ALL.iter().all(|f| form.visible_error(*f).is_some()));
    }

    #[test]
    fn test_validate_produces_input() {
        let input = filled().validate().unwrap();
        assert_eq!(input.nama, "Widget");
        assert_eq!(input.harga, 1500);
        assert_eq!(input.stock, 12);
    }

    #[test]
    fn test_validate_collects_every_failure() {
        let mut form = filled();
        form.set_value(Field::Nama, "");
        form.set_value(Field::Stock, "1.5");

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[&Field::Nama], FieldError::Required(Field::Nama));
        assert_eq!(errors[&Field::Stock], FieldError::NotInteger(Field::Stock));
    }

    #[test]
    fn test_values_from_product_and_reset() {
        let product = Product {
            id: ProductId::Int(7),
            nama: "Widget".to_string(),
            deskripsi: "Blue".to_string(),
            harga: 99,
            stock: 4,
        };

        let mut form = ProductForm::new();
        form.touch(Field::Harga);
        form.set_values(FormValues::from_product(&product));
        assert_eq!(form.value(Field::Harga), "99");
        assert_eq!(form.value(Field::Stock), "4");
        assert!(form.is_touched(Field::Harga));
        assert!(form.is_valid());

        form.reset();
        assert_eq!(form, ProductForm::default());
    }

    #[test]
    fn test_field_metadata() {
        assert_eq!(Field::Nama.input_type(), "text");
        assert_eq!(Field::Harga.input_type(), "number");
        assert_eq!(Field::Deskripsi.key(), "deskripsi");
        assert_eq!(Field::Stock.label(), "Stock");
    }
}
