//! Applicant form state and request construction.

use crate::predict::api::PredictRequest;

/// Inputs of the applicant form, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Age,
    MonthlyIncome,
    VehiclePrice,
    DownPayment,
    EmploymentYears,
}

impl FormField {
    /// Every field in the order the form renders them.
    pub const ALL: [FormField; 5] = [
        FormField::Age,
        FormField::MonthlyIncome,
        FormField::VehiclePrice,
        FormField::DownPayment,
        FormField::EmploymentYears,
    ];

    /// Label shown above the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::Age => "Edad",
            Self::MonthlyIncome => "Ingreso mensual",
            Self::VehiclePrice => "Precio del vehículo",
            Self::DownPayment => "Entrega inicial",
            Self::EmploymentYears => "Años de antigüedad laboral",
        }
    }
}

/// Raw text the user typed into each input.
///
/// Values stay as strings until submission so partial edits like `"12."` or
/// an emptied field never fight the text widgets.
#[derive(Clone, Debug, PartialEq)]
pub struct ApplicantForm {
    pub age: String,
    pub monthly_income: String,
    pub vehicle_price: String,
    pub down_payment: String,
    pub employment_years: String,
}

impl Default for ApplicantForm {
    fn default() -> Self {
        Self {
            age: "35".to_string(),
            monthly_income: "800000".to_string(),
            vehicle_price: "12000000".to_string(),
            down_payment: "6000000".to_string(),
            employment_years: "6".to_string(),
        }
    }
}

impl ApplicantForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Age => &self.age,
            FormField::MonthlyIncome => &self.monthly_income,
            FormField::VehiclePrice => &self.vehicle_price,
            FormField::DownPayment => &self.down_payment,
            FormField::EmploymentYears => &self.employment_years,
        }
    }

    pub fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Age => &mut self.age,
            FormField::MonthlyIncome => &mut self.monthly_income,
            FormField::VehiclePrice => &mut self.vehicle_price,
            FormField::DownPayment => &mut self.down_payment,
            FormField::EmploymentYears => &mut self.employment_years,
        }
    }

    /// Build the submission payload from the current text.
    pub fn to_request(&self) -> PredictRequest {
        PredictRequest {
            age: coerce_number(&self.age),
            monthly_income: coerce_number(&self.monthly_income),
            vehicle_price: coerce_number(&self.vehicle_price),
            down_payment: coerce_number(&self.down_payment),
            employment_years: coerce_number(&self.employment_years),
        }
    }
}

/// Parse a numeric input, coercing anything unparseable or non-finite to zero.
pub(crate) fn coerce_number(text: &str) -> f64 {
    let Ok(value) = text.trim().parse::<f64>() else {
        return 0.0;
    };
    if value.is_finite() { value } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerces_plain_and_padded_numbers() {
        assert_eq!(coerce_number("42"), 42.0);
        assert_eq!(coerce_number("  3.5 "), 3.5);
        assert_eq!(coerce_number("-10"), -10.0);
        assert_eq!(coerce_number("1e3"), 1000.0);
    }

    #[test]
    fn coerces_garbage_to_zero() {
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("abc"), 0.0);
        assert_eq!(coerce_number("12abc"), 0.0);
    }

    #[test]
    fn coerces_non_finite_to_zero() {
        assert_eq!(coerce_number("inf"), 0.0);
        assert_eq!(coerce_number("NaN"), 0.0);
    }

    #[test]
    fn default_form_matches_seeded_values() {
        let form = ApplicantForm::default();
        assert_eq!(form.age, "35");
        assert_eq!(form.monthly_income, "800000");
        assert_eq!(form.vehicle_price, "12000000");
        assert_eq!(form.down_payment, "6000000");
        assert_eq!(form.employment_years, "6");
    }

    #[test]
    fn request_reflects_edited_fields() {
        let mut form = ApplicantForm::default();
        *form.value_mut(FormField::Age) = "not a number".to_string();
        *form.value_mut(FormField::DownPayment) = " 2500000 ".to_string();
        let request = form.to_request();
        assert_eq!(request.age, 0.0);
        assert_eq!(request.monthly_income, 800_000.0);
        assert_eq!(request.down_payment, 2_500_000.0);
    }

    #[test]
    fn building_twice_yields_equal_requests() {
        let form = ApplicantForm::default();
        assert_eq!(form.to_request(), form.to_request());

        let mut edited = ApplicantForm::default();
        *edited.value_mut(FormField::MonthlyIncome) = "950000".to_string();
        assert_eq!(edited.to_request(), edited.to_request());
    }

    #[test]
    fn field_accessors_cover_every_field() {
        let mut form = ApplicantForm::default();
        for field in FormField::ALL {
            let text = form.value(field).to_string();
            assert_eq!(*form.value_mut(field), text);
        }
    }
}
