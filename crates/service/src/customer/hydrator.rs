//! Bidirectional mapping between a flat [`FieldMap`] and a [`Customer`].
//!
//! Extraction and hydration are inverse operations:
//! `hydrate(&extract(&c)) == c` for every customer.

use common::types::FieldMap;

use super::domain::Customer;

/// Map each attribute to its field name verbatim, including `id`
/// (rendered as a decimal string).
pub fn extract(customer: &Customer) -> FieldMap {
    let mut fields = FieldMap::new();
    fields.insert("id".to_string(), customer.id.to_string());
    fields.insert("firstname".to_string(), customer.firstname.clone());
    fields.insert("lastname".to_string(), customer.lastname.clone());
    fields.insert("street".to_string(), customer.street.clone());
    fields.insert("postcode".to_string(), customer.postcode.clone());
    fields.insert("city".to_string(), customer.city.clone());
    fields.insert("country".to_string(), customer.country.clone());
    fields
}

/// Build a customer from a field map. Missing keys leave the attribute at
/// its default (empty string / zero id), unknown keys are ignored and `id`
/// is coerced to an integer.
pub fn hydrate(fields: &FieldMap) -> Customer {
    hydrate_into(fields, Customer::default())
}

/// Populate an existing customer: keys present in the map override, absent
/// keys keep the base values.
pub fn hydrate_into(fields: &FieldMap, base: Customer) -> Customer {
    let mut customer = base;
    if let Some(id) = fields.get("id") {
        customer.id = id.trim().parse().unwrap_or_default();
    }
    if let Some(v) = fields.get("firstname") {
        customer.firstname = v.clone();
    }
    if let Some(v) = fields.get("lastname") {
        customer.lastname = v.clone();
    }
    if let Some(v) = fields.get("street") {
        customer.street = v.clone();
    }
    if let Some(v) = fields.get("postcode") {
        customer.postcode = v.clone();
    }
    if let Some(v) = fields.get("city") {
        customer.city = v.clone();
    }
    if let Some(v) = fields.get("country") {
        customer.country = v.clone();
    }
    customer
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> Customer {
        Customer {
            id: 42,
            firstname: "Horst".to_string(),
            lastname: "Hrubesch".to_string(),
            street: "Am Köpfen 124".to_string(),
            postcode: "21451".to_string(),
            city: "Hamburg".to_string(),
            country: "de".to_string(),
        }
    }

    #[test]
    fn extract_then_hydrate_round_trips() {
        let customer = populated();
        assert_eq!(hydrate(&extract(&customer)), customer);
    }

    #[test]
    fn hydrate_defaults_missing_fields() {
        let mut fields = FieldMap::new();
        fields.insert("lastname".to_string(), "Hrubesch".to_string());

        let customer = hydrate(&fields);
        assert_eq!(customer.id, 0);
        assert_eq!(customer.lastname, "Hrubesch");
        assert_eq!(customer.firstname, "");
        assert!(!customer.is_persisted());
    }

    #[test]
    fn hydrate_ignores_unknown_keys() {
        let mut fields = extract(&populated());
        fields.insert("submit".to_string(), "Save".to_string());
        assert_eq!(hydrate(&fields), populated());
    }

    #[test]
    fn hydrate_coerces_id() {
        let mut fields = FieldMap::new();
        fields.insert("id".to_string(), " 42 ".to_string());
        assert_eq!(hydrate(&fields).id, 42);

        fields.insert("id".to_string(), "not-a-number".to_string());
        assert_eq!(hydrate(&fields).id, 0);
    }

    #[test]
    fn hydrate_into_keeps_absent_fields_of_the_target() {
        let mut fields = FieldMap::new();
        fields.insert("firstname".to_string(), "Monika".to_string());

        let customer = hydrate_into(&fields, populated());
        assert_eq!(customer.firstname, "Monika");
        assert_eq!(customer.lastname, "Hrubesch");
        assert_eq!(customer.id, 42);
    }
}
